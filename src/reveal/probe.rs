//! Viewport intersection capability.

use egui::Rect;

/// Reports how much of a region is currently visible.
///
/// The shell implements this over real geometry; tests substitute a
/// deterministic fake. `None` means the capability is unavailable on this
/// target — callers must not treat that as "not visible".
pub trait ViewportProbe {
    /// Fraction of `rect`'s area inside the viewport, in `0.0..=1.0`.
    fn intersection_ratio(&self, rect: Rect) -> Option<f32>;
}

/// Production probe: the clip rect of the enclosing scroll region is the
/// visible viewport.
#[derive(Debug, Clone, Copy)]
pub struct ClipRectProbe {
    viewport: Rect,
}

impl ClipRectProbe {
    pub fn new(viewport: Rect) -> Self {
        Self { viewport }
    }
}

impl ViewportProbe for ClipRectProbe {
    fn intersection_ratio(&self, rect: Rect) -> Option<f32> {
        let area = rect.area();
        if !area.is_finite() || area <= 0.0 {
            // A zero-sized region counts as visible once its anchor is
            // inside the viewport.
            let ratio = if self.viewport.contains(rect.min) { 1.0 } else { 0.0 };
            return Some(ratio);
        }
        let overlap = self.viewport.intersect(rect);
        if overlap.is_negative() {
            return Some(0.0);
        }
        Some((overlap.area() / area).clamp(0.0, 1.0))
    }
}

/// Fixed-answer probe for tests: fires, or never, under test control.
#[cfg(test)]
pub(crate) struct FixedProbe(pub Option<f32>);

#[cfg(test)]
impl ViewportProbe for FixedProbe {
    fn intersection_ratio(&self, _rect: Rect) -> Option<f32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_min_max(pos2(x0, y0), pos2(x1, y1))
    }

    #[test]
    fn test_fully_inside_is_one() {
        let probe = ClipRectProbe::new(rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(probe.intersection_ratio(rect(10.0, 10.0, 20.0, 20.0)), Some(1.0));
    }

    #[test]
    fn test_disjoint_is_zero() {
        let probe = ClipRectProbe::new(rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(probe.intersection_ratio(rect(0.0, 200.0, 50.0, 300.0)), Some(0.0));
    }

    #[test]
    fn test_half_overlap() {
        let probe = ClipRectProbe::new(rect(0.0, 0.0, 100.0, 100.0));
        // Bottom half of the region hangs below the viewport.
        let ratio = probe.intersection_ratio(rect(0.0, 50.0, 100.0, 150.0)).unwrap();
        assert!((ratio - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_zero_area_region() {
        let probe = ClipRectProbe::new(rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(probe.intersection_ratio(rect(50.0, 50.0, 50.0, 50.0)), Some(1.0));
        assert_eq!(probe.intersection_ratio(rect(50.0, 500.0, 50.0, 500.0)), Some(0.0));
    }
}
