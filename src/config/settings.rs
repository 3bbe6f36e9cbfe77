//! Overlay engine settings

use serde::{Deserialize, Serialize};

/// Maximum fade duration offered by the settings surface, in milliseconds.
pub const MAX_FADE_OUT_DURATION_MS: u64 = 2000;
/// Maximum fail-safe timeout offered by the settings surface, in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 10_000;

/// User-facing engine settings.
///
/// Absent fields deserialize to the documented defaults, so a partial or
/// missing config file always yields a working engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether the overlay engine runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// How long the overlay takes to fade out once the page is ready
    #[serde(default = "default_fade_out_duration_ms")]
    pub fade_out_duration_ms: u64,

    /// Fail-safe: maximum time the overlay stays up without a load signal
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_fade_out_duration_ms() -> u64 {
    300
}

fn default_timeout_ms() -> u64 {
    3000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            fade_out_duration_ms: default_fade_out_duration_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Settings {
    /// Clamp durations to the ranges the settings surface offers.
    pub fn normalized(self) -> Self {
        Self {
            enabled: self.enabled,
            fade_out_duration_ms: self.fade_out_duration_ms.min(MAX_FADE_OUT_DURATION_MS),
            timeout_ms: self.timeout_ms.min(MAX_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.enabled);
        assert_eq!(s.fade_out_duration_ms, 300);
        assert_eq!(s.timeout_ms, 3000);
    }

    #[test]
    fn test_absent_fields_use_defaults() {
        let s: Settings = toml::from_str("enabled = false").unwrap();
        assert!(!s.enabled);
        assert_eq!(s.fade_out_duration_ms, 300);
        assert_eq!(s.timeout_ms, 3000);
    }

    #[test]
    fn test_normalized_clamps() {
        let s = Settings {
            enabled: true,
            fade_out_duration_ms: 9999,
            timeout_ms: 99_999,
        }
        .normalized();
        assert_eq!(s.fade_out_duration_ms, MAX_FADE_OUT_DURATION_MS);
        assert_eq!(s.timeout_ms, MAX_TIMEOUT_MS);
    }
}
