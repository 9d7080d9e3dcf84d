//! Scroll-triggered one-shot reveal system.
//!
//! A [`RevealFlag`] is a two-state latch driven by one intersection sample
//! per frame from a [`ViewportProbe`]; the [`Reveal`] wrapper ties a flag to
//! a block of UI and animates the hidden → shown edge. Each wrapper owns its
//! flag exclusively — nothing is shared across instances.

mod latch;
mod probe;
mod widget;

pub use latch::RevealFlag;
pub use probe::{ClipRectProbe, ViewportProbe};
pub use widget::Reveal;
