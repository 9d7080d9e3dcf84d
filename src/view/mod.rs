//! View-layer utilities: deterministic easing for the reveal transition.

pub mod transition;

pub use transition::{ease_in_out_cubic, ease_out_cubic, lerp_f32, linear, RevealAnimation};
