//! Flickerless - navigation flash masking engine
//!
//! Browsers flash when navigating between pages with different background
//! colors. Flickerless masks that flash: it paints a full-viewport overlay the
//! instant a navigation starts, repaints it with the color memoized from the
//! previous page in the same tab lineage, and fades it out once the new page's
//! real background color is known. The freshly extracted color is memoized for
//! the next navigation in that lineage.
//!
//! The engine is host-agnostic: documents are read through
//! [`extractor::DocumentProbe`] and the painted layer is driven through
//! [`overlay::OverlaySurface`]. The crate ships snapshot and recording
//! implementations of both, plus a scenario driver that plays scripted
//! navigation sequences through the full lifecycle.

pub mod color;
pub mod config;
pub mod extractor;
pub mod overlay;
pub mod session;
pub mod simulate;
pub mod store;

pub use color::{Color, ColorScheme};
pub use config::{Config, Settings};
pub use overlay::{OverlayController, OverlayPhase, begin_navigation, teardown_context};
pub use session::ContextKey;
