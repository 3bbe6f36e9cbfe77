//! Scripted navigation scenarios for exercising the engine end to end

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::Color;
use crate::config::Settings;
use crate::extractor::SnapshotDocument;
use crate::overlay::{RecordingSurface, TimelineEntry, begin_navigation};
use crate::session::{ContextKey, MemoryEphemeralSlot};
use crate::store::ColorStore;

/// A scripted sequence of navigations within one simulated tab.
///
/// Each `[[page]]` is one navigation; consecutive pages share the same
/// context key, so the color extracted from one page pre-paints the next.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Engine settings for the run; defaults apply when absent
    #[serde(default)]
    pub settings: Option<Settings>,

    /// Context key prefix, mostly useful to keep scenario runs apart in a
    /// shared store file
    #[serde(default)]
    pub context_prefix: Option<String>,

    #[serde(default)]
    pub page: Vec<ScenarioPage>,
}

/// One navigation: the destination document plus when its load event fires.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioPage {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub document: SnapshotDocument,

    /// Milliseconds until the load event; absent means the load signal never
    /// arrives and the fail-safe timeout has to fire
    #[serde(default)]
    pub loads_after_ms: Option<u64>,
}

/// What one simulated navigation did.
#[derive(Debug, Clone)]
pub struct NavigationReport {
    pub page: String,
    pub timeline: Vec<TimelineEntry>,
    /// Color memoized for the next navigation, if persistence succeeded
    pub memoized: Option<Color>,
    /// Whether the overlay was created at all (false when disabled)
    pub overlaid: bool,
}

impl Scenario {
    /// Load a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;
        let scenario: Scenario = toml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;
        Ok(scenario)
    }
}

/// Run every page of a scenario through the engine against a shared store.
///
/// This is the in-repo stand-in for the browser wiring: it acquires the
/// lineage key once, delivers load events at their scripted times, and lets
/// the fail-safe handle pages that never load.
pub async fn run_scenario(
    scenario: &Scenario,
    store: Arc<dyn ColorStore>,
) -> Vec<NavigationReport> {
    let settings = scenario.settings.unwrap_or_default().normalized();
    let prefix = scenario
        .context_prefix
        .as_deref()
        .unwrap_or(ContextKey::DEFAULT_PREFIX);

    let slot = MemoryEphemeralSlot::new();
    let key = ContextKey::acquire(&slot, prefix);

    let mut reports = Vec::with_capacity(scenario.page.len());
    for (index, page) in scenario.page.iter().enumerate() {
        let name = page
            .name
            .clone()
            .unwrap_or_else(|| format!("page-{}", index + 1));
        info!(page = %name, key = %key, "navigating");

        let (surface, log) = RecordingSurface::new();
        let controller = begin_navigation(
            settings,
            key.clone(),
            Arc::new(page.document.clone()),
            store.clone(),
            Box::new(surface),
        )
        .await;

        let Some(controller) = controller else {
            reports.push(NavigationReport {
                page: name,
                timeline: Vec::new(),
                memoized: None,
                overlaid: false,
            });
            continue;
        };

        if let Some(ms) = page.loads_after_ms {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            controller.notify_load_complete();
        }

        // Wait out the lifecycle: fail-safe plus fade plus extraction slack.
        let budget = Duration::from_millis(settings.timeout_ms + settings.fade_out_duration_ms + 200);
        let waited = tokio::time::timeout(budget, async {
            while !controller.is_removed() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        debug_assert!(waited.is_ok(), "overlay exceeded its lifecycle budget");

        // Give the decoupled extraction effect time to land in the store.
        tokio::time::sleep(Duration::from_millis(10)).await;

        reports.push(NavigationReport {
            page: name,
            timeline: log.entries(),
            memoized: store.get(&key).await.ok().flatten(),
            overlaid: true,
        });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScheme;
    use crate::overlay::SurfaceEvent;
    use crate::store::MemoryColorStore;

    fn page(body: &str, loads_after_ms: Option<u64>) -> ScenarioPage {
        ScenarioPage {
            name: None,
            document: SnapshotDocument {
                body_background: Some(body.to_string()),
                ..SnapshotDocument::default()
            },
            loads_after_ms,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_navigation_prepaints_first_pages_color() {
        let scenario = Scenario {
            settings: None,
            context_prefix: None,
            page: vec![
                page("rgb(10, 20, 30)", Some(50)),
                page("rgb(200, 200, 200)", Some(50)),
            ],
        };
        let reports = run_scenario(&scenario, Arc::new(MemoryColorStore::new())).await;
        assert_eq!(reports.len(), 2);

        // First page starts on the scheme default, memoizes its own color
        assert_eq!(reports[0].memoized, Some(Color::new(10, 20, 30)));

        // Second page pre-paints with page one's extracted color
        let paints: Vec<_> = reports[1]
            .timeline
            .iter()
            .filter_map(|e| match e.event {
                SurfaceEvent::Painted(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(
            paints,
            vec![
                ColorScheme::Light.default_color(),
                Color::new(10, 20, 30),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_loading_page_hits_failsafe() {
        let scenario = Scenario {
            page: vec![page("rgb(1, 1, 1)", None)],
            ..Scenario::default()
        };
        let reports = run_scenario(&scenario, Arc::new(MemoryColorStore::new())).await;
        assert!(reports[0].overlaid);
        let fade = reports[0]
            .timeline
            .iter()
            .find(|e| matches!(e.event, SurfaceEvent::FadeStarted(_)))
            .expect("fail-safe should start the fade");
        assert!(fade.at >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_scenario_reports_no_overlay() {
        let scenario = Scenario {
            settings: Some(Settings {
                enabled: false,
                ..Settings::default()
            }),
            page: vec![page("rgb(1, 1, 1)", Some(10))],
            ..Scenario::default()
        };
        let reports = run_scenario(&scenario, Arc::new(MemoryColorStore::new())).await;
        assert!(!reports[0].overlaid);
        assert!(reports[0].timeline.is_empty());
    }

    #[test]
    fn test_scenario_parses_from_toml() {
        let toml = r##"
            [settings]
            fade_out_duration_ms = 150

            [[page]]
            name = "home"
            theme_color = "#112233"
            loads_after_ms = 80

            [[page]]
            body_background = "rgb(10, 10, 10)"
        "##;
        let scenario: Scenario = toml::from_str(toml).unwrap();
        assert_eq!(scenario.page.len(), 2);
        assert_eq!(scenario.page[0].name.as_deref(), Some("home"));
        assert_eq!(scenario.page[0].loads_after_ms, Some(80));
        assert!(scenario.page[1].loads_after_ms.is_none());
        assert_eq!(
            scenario.settings.unwrap().fade_out_duration_ms,
            150
        );
    }
}
