//! Overlay lifecycle state machine

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::{debug, trace};

use super::surface::OverlaySurface;
use crate::color::Color;
use crate::config::Settings;
use crate::extractor::{self, DocumentProbe};
use crate::session::ContextKey;
use crate::store::ColorStore;

/// Delay between the fade-out transition and re-extraction of the page color,
/// so the new page has begun rendering its real content. Capped at the fade
/// duration when the fade is shorter.
const EXTRACT_DELAY: Duration = Duration::from_millis(100);

/// Lifecycle phase of the overlay. `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Created,
    AwaitingColorRefresh,
    Stable,
    FadingOut,
    Removed,
}

/// What triggered the fade-out transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeTrigger {
    LoadComplete,
    Timeout,
}

struct OverlayState {
    phase: OverlayPhase,
    color: Color,
    visible: bool,
    /// Monotonic: once true, never false again.
    removed: bool,
    surface: Box<dyn OverlaySurface + Send>,
    failsafe: Option<AbortHandle>,
    pending: Vec<AbortHandle>,
}

/// Owns one navigation's overlay: creation, color refresh, fade-out, removal.
///
/// Exactly one controller exists per navigation. Clones share the same state;
/// the timer tasks the controller spawns hold such clones. Every public method
/// on a removed controller is a no-op, and the fade transition is guarded by a
/// check-and-set under the state lock so the load event and the fail-safe
/// timeout cannot both run it.
#[derive(Clone)]
pub struct OverlayController {
    state: Arc<Mutex<OverlayState>>,
    settings: Settings,
    key: ContextKey,
    probe: Arc<dyn DocumentProbe + Send + Sync>,
    store: Arc<dyn ColorStore>,
}

impl OverlayController {
    /// Insert and paint the overlay with the fallback color.
    ///
    /// Fully synchronous: no suspension happens between navigation start and
    /// the first paint, so no frame renders un-overlaid.
    pub fn mount(
        mut surface: Box<dyn OverlaySurface + Send>,
        fallback: Color,
        settings: Settings,
        key: ContextKey,
        probe: Arc<dyn DocumentProbe + Send + Sync>,
        store: Arc<dyn ColorStore>,
    ) -> Self {
        surface.paint(fallback);
        trace!(%fallback, key = %key, "overlay mounted");
        Self {
            state: Arc::new(Mutex::new(OverlayState {
                phase: OverlayPhase::Created,
                color: fallback,
                visible: true,
                removed: false,
                surface,
                failsafe: None,
                pending: Vec::new(),
            })),
            settings,
            key,
            probe,
            store,
        }
    }

    /// Look up the memoized color for this context and repaint if it differs
    /// from the current fallback. Transitions to `Stable` once the lookup
    /// resolves, found or not; lookup failure reads as absent.
    pub async fn refresh_color(&self) {
        {
            let mut state = self.lock();
            if state.removed || state.phase != OverlayPhase::Created {
                return;
            }
            state.phase = OverlayPhase::AwaitingColorRefresh;
        }

        let memoized = match self.store.get(&self.key).await {
            Ok(found) => found,
            Err(e) => {
                debug!(key = %self.key, "color lookup failed, keeping fallback: {e}");
                None
            }
        };

        let mut state = self.lock();
        // The fade may have started while the lookup was in flight.
        if state.removed || state.phase != OverlayPhase::AwaitingColorRefresh {
            return;
        }
        if let Some(color) = memoized {
            if color != state.color {
                state.color = color;
                state.surface.paint(color);
                trace!(%color, "overlay repainted with memoized color");
            }
        }
        state.phase = OverlayPhase::Stable;
    }

    /// Arm the fail-safe timer that fades the overlay out after `timeout_ms`
    /// even if the load signal never arrives.
    pub fn arm_failsafe(&self) {
        let timeout = Duration::from_millis(self.settings.timeout_ms);
        let mut state = self.lock();
        if state.removed || state.phase == OverlayPhase::FadingOut {
            return;
        }
        let controller = self.clone();
        let sleep = tokio::time::sleep(timeout);
        let handle = tokio::spawn(async move {
            sleep.await;
            controller.fade_out(FadeTrigger::Timeout);
        });
        state.failsafe = Some(handle.abort_handle());
    }

    /// The document finished loading: cancel the fail-safe and fade out.
    pub fn notify_load_complete(&self) {
        let failsafe = self.lock().failsafe.take();
        if let Some(handle) = failsafe {
            handle.abort();
        }
        self.fade_out(FadeTrigger::LoadComplete);
    }

    /// Run the `FadingOut` transition. Idempotent: whichever of the load event
    /// and the timeout gets here first wins, the other is a no-op.
    fn fade_out(&self, trigger: FadeTrigger) {
        let fade = Duration::from_millis(self.settings.fade_out_duration_ms);
        {
            let mut state = self.lock();
            if state.removed || state.phase == OverlayPhase::FadingOut {
                trace!(?trigger, "fade already handled, ignoring");
                return;
            }
            state.phase = OverlayPhase::FadingOut;
            state.surface.begin_fade(fade);
            debug!(?trigger, ?fade, key = %self.key, "overlay fading out");
        }

        // Effect 1: detach once the fade animation has run its course.
        let controller = self.clone();
        let sleep = tokio::time::sleep(fade);
        let detach = tokio::spawn(async move {
            sleep.await;
            controller.remove();
        });
        self.lock().pending.push(detach.abort_handle());

        // Effect 2: extract the now-rendered page's color and memoize it for
        // the next navigation in this context. Deliberately decoupled from
        // the detach timer; a store failure only drops the write.
        let controller = self.clone();
        let delay = EXTRACT_DELAY.min(fade);
        let sleep = tokio::time::sleep(delay);
        tokio::spawn(async move {
            sleep.await;
            let color = extractor::extract(controller.probe.as_ref());
            if let Err(e) = controller.store.set(&controller.key, color).await {
                debug!(key = %controller.key, "color persist dropped: {e}");
            } else {
                trace!(%color, key = %controller.key, "page color memoized");
            }
        });
    }

    /// Detach the overlay and enter the terminal state. Exactly once.
    fn remove(&self) {
        let mut state = self.lock();
        if state.removed {
            return;
        }
        state.removed = true;
        state.visible = false;
        state.phase = OverlayPhase::Removed;
        state.surface.detach();
        if let Some(handle) = state.failsafe.take() {
            handle.abort();
        }
        state.pending.clear();
        trace!(key = %self.key, "overlay removed");
    }

    pub fn phase(&self) -> OverlayPhase {
        self.lock().phase
    }

    pub fn current_color(&self) -> Color {
        self.lock().color
    }

    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    pub fn is_removed(&self) -> bool {
        self.lock().removed
    }

    pub fn context_key(&self) -> &ContextKey {
        &self.key
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, OverlayState> {
        self.state.lock().expect("overlay state lock poisoned")
    }
}
