//! Shared test utilities for navigation-flow tests

use flickerless::extractor::SnapshotDocument;
use flickerless::simulate::{Scenario, ScenarioPage};

/// A page whose only color source is its body background.
pub fn body_page(body: &str, loads_after_ms: Option<u64>) -> ScenarioPage {
    ScenarioPage {
        name: None,
        document: SnapshotDocument {
            body_background: Some(body.to_string()),
            ..SnapshotDocument::default()
        },
        loads_after_ms,
    }
}

/// A page that advertises a `theme-color` meta tag.
pub fn themed_page(theme_color: &str, loads_after_ms: Option<u64>) -> ScenarioPage {
    ScenarioPage {
        name: None,
        document: SnapshotDocument {
            theme_color: Some(theme_color.to_string()),
            ..SnapshotDocument::default()
        },
        loads_after_ms,
    }
}

pub fn scenario(pages: Vec<ScenarioPage>) -> Scenario {
    Scenario {
        settings: None,
        context_prefix: None,
        page: pages,
    }
}
