//! Painted overlay surface abstraction

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::color::Color;

/// The painted layer a controller drives.
///
/// A real host backs this with a full-viewport, non-interactive, topmost
/// element plus a document-level background override; `paint` must apply both.
/// All methods are synchronous so the controller can guarantee the first paint
/// happens before any suspension point.
pub trait OverlaySurface {
    /// Paint the overlay and the document background override with `color`.
    fn paint(&mut self, color: Color);

    /// Start animating opacity to zero over `duration`.
    fn begin_fade(&mut self, duration: Duration);

    /// Detach the overlay and clear the document background override.
    fn detach(&mut self);
}

/// A single observed surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Painted(Color),
    FadeStarted(Duration),
    Detached,
}

/// Timestamped surface event, relative to surface creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub event: SurfaceEvent,
}

/// Surface that records its operations with timestamps.
///
/// Used by the simulation driver and the tests; the paired [`SurfaceLog`]
/// stays readable after the surface has been handed to a controller.
pub struct RecordingSurface {
    log: SurfaceLog,
    started: tokio::time::Instant,
}

/// Shared read handle onto a [`RecordingSurface`] timeline.
#[derive(Clone, Default)]
pub struct SurfaceLog {
    entries: Arc<Mutex<Vec<TimelineEntry>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, SurfaceLog) {
        let log = SurfaceLog::default();
        let surface = Self {
            log: log.clone(),
            started: tokio::time::Instant::now(),
        };
        (surface, log)
    }

    fn record(&self, event: SurfaceEvent) {
        self.log
            .entries
            .lock()
            .expect("timeline lock poisoned")
            .push(TimelineEntry {
                at: self.started.elapsed(),
                event,
            });
    }
}

impl OverlaySurface for RecordingSurface {
    fn paint(&mut self, color: Color) {
        self.record(SurfaceEvent::Painted(color));
    }

    fn begin_fade(&mut self, duration: Duration) {
        self.record(SurfaceEvent::FadeStarted(duration));
    }

    fn detach(&mut self) {
        self.record(SurfaceEvent::Detached);
    }
}

impl SurfaceLog {
    /// Snapshot of the timeline so far.
    pub fn entries(&self) -> Vec<TimelineEntry> {
        self.entries.lock().expect("timeline lock poisoned").clone()
    }

    /// Just the events, without timestamps.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.entries().into_iter().map(|e| e.event).collect()
    }

    pub fn count(&self, predicate: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.entries()
            .iter()
            .filter(|e| predicate(&e.event))
            .count()
    }
}
