//! Overlay lifecycle: mount, color refresh, fade-out, removal

mod controller;
mod surface;

pub use controller::{OverlayController, OverlayPhase};
pub use surface::{OverlaySurface, RecordingSurface, SurfaceEvent, SurfaceLog, TimelineEntry};

use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::extractor::DocumentProbe;
use crate::session::ContextKey;
use crate::store::ColorStore;

/// Navigation-start entry point.
///
/// Mounts the overlay synchronously with the scheme-default fallback color,
/// then refreshes it from the memoized color for this context, arms the
/// fail-safe timer, and honors a document that already finished loading.
/// Returns `None` without touching the surface when the engine is disabled.
///
/// The caller wires the document's load signal to
/// [`OverlayController::notify_load_complete`].
pub async fn begin_navigation(
    settings: Settings,
    key: ContextKey,
    probe: Arc<dyn DocumentProbe + Send + Sync>,
    store: Arc<dyn ColorStore>,
    surface: Box<dyn OverlaySurface + Send>,
) -> Option<OverlayController> {
    if !settings.enabled {
        debug!(key = %key, "overlay disabled by settings");
        return None;
    }
    let settings = settings.normalized();

    let fallback = probe.preferred_color_scheme().default_color();
    let controller =
        OverlayController::mount(surface, fallback, settings, key, probe.clone(), store);

    controller.refresh_color().await;
    controller.arm_failsafe();

    if probe.is_load_complete() {
        controller.notify_load_complete();
    }

    Some(controller)
}

/// Context-teardown hook: drop the memoized color for a closing lineage so
/// store growth stays bounded by live contexts.
pub async fn teardown_context(store: &dyn ColorStore, key: &ContextKey) {
    if let Err(e) = store.remove(key).await {
        debug!(key = %key, "context teardown cleanup dropped: {e}");
    }
}
