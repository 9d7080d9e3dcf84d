//! Reveal wrapper widget.

use egui::{Id, InnerResponse, Ui};

use super::latch::RevealFlag;
use super::probe::{ClipRectProbe, ViewportProbe};
use crate::view::transition::RevealAnimation;

/// Fraction of a block that must be on screen before it reveals.
const REVEAL_THRESHOLD: f32 = 0.1;
/// Transition length in seconds.
const REVEAL_DURATION: f32 = 1.0;
/// How far hidden content sits below its resting position, in points.
const REVEAL_RISE: f32 = 64.0;

/// Wraps a block of UI in a one-shot scroll-triggered reveal.
///
/// The block renders transparent and offset downward until it first
/// intersects the viewport by [`REVEAL_THRESHOLD`], then eases to its
/// resting state over about a second. Once revealed it never re-hides; a
/// fresh id salt is a fresh latch.
#[must_use = "call show() to render the wrapped content"]
pub struct Reveal {
    id_salt: Id,
    delay: f32,
    rise: f32,
}

impl Reveal {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            delay: 0.0,
            rise: REVEAL_RISE,
        }
    }

    /// Delays the start of the transition after the latch fires.
    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay = delay_ms as f32 / 1000.0;
        self
    }

    /// Overrides the slide distance. Zero gives a pure fade, which reads
    /// better for small inline items like chips.
    pub fn rise(mut self, rise: f32) -> Self {
        self.rise = rise;
        self
    }

    /// Renders with the enclosing clip rect as the viewport.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let probe = ClipRectProbe::new(ui.clip_rect());
        self.show_with_probe(ui, &probe, add_contents)
    }

    /// Renders against an explicit viewport capability. Tests inject a
    /// deterministic probe here instead of depending on real geometry.
    pub fn show_with_probe<R>(
        self,
        ui: &mut Ui,
        probe: &dyn ViewportProbe,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let id = ui.id().with(self.id_salt);
        let mut flag: RevealFlag = ui.data(|d| d.get_temp(id)).unwrap_or_default();

        let now = ui.input(|i| i.time);
        let anim = RevealAnimation::new(REVEAL_DURATION, self.delay, self.rise);
        let t = anim.progress(flag.revealed_at(), now);

        ui.add_space(anim.offset(t));
        let inner = ui.scope(|ui| {
            ui.set_opacity(t);
            add_contents(ui)
        });

        // The content is laid out (transparently) even while hidden, so its
        // rect is real geometry to sample against.
        if !flag.is_revealed() {
            let ratio = probe.intersection_ratio(inner.response.rect);
            flag.observe(ratio, REVEAL_THRESHOLD, now);
        }
        if flag.is_revealed() && !anim.is_complete(flag.revealed_at(), now) {
            ui.ctx().request_repaint();
        }

        ui.data_mut(|d| d.insert_temp(id, flag));
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::probe::FixedProbe;
    use egui::{CentralPanel, Context, RawInput};

    fn frame(ctx: &Context, time: f64, probe: &FixedProbe, salt: &str) -> RevealFlag {
        let mut out = RevealFlag::new();
        let input = RawInput {
            time: Some(time),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                Reveal::new(salt).show_with_probe(ui, probe, |ui| {
                    ui.label("block");
                });
                let id = ui.id().with(Id::new(salt));
                out = ui.data(|d| d.get_temp(id)).unwrap_or_default();
            });
        });
        out
    }

    #[test]
    fn test_latches_when_probe_fires() {
        let ctx = Context::default();
        let flag = frame(&ctx, 1.0, &FixedProbe(Some(1.0)), "a");
        assert!(flag.is_revealed());
        assert_eq!(flag.revealed_at(), Some(1.0));
    }

    #[test]
    fn test_stays_hidden_while_probe_never_fires() {
        let ctx = Context::default();
        for t in 0..5 {
            let flag = frame(&ctx, t as f64, &FixedProbe(Some(0.0)), "b");
            assert!(!flag.is_revealed());
        }
    }

    #[test]
    fn test_latch_survives_leaving_viewport() {
        let ctx = Context::default();
        let flag = frame(&ctx, 1.0, &FixedProbe(Some(1.0)), "c");
        assert!(flag.is_revealed());

        // Scrolled away again: the flag keeps its original latch time.
        let flag = frame(&ctx, 2.0, &FixedProbe(Some(0.0)), "c");
        assert!(flag.is_revealed());
        assert_eq!(flag.revealed_at(), Some(1.0));
    }

    #[test]
    fn test_missing_capability_shows_content() {
        let ctx = Context::default();
        let flag = frame(&ctx, 1.0, &FixedProbe(None), "d");
        assert!(flag.is_revealed());
        assert_eq!(flag.revealed_at(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_fresh_id_is_a_fresh_latch() {
        let ctx = Context::default();
        let flag = frame(&ctx, 1.0, &FixedProbe(Some(1.0)), "e");
        assert!(flag.is_revealed());
        // A different salt models a remounted instance.
        let flag = frame(&ctx, 2.0, &FixedProbe(Some(0.0)), "e2");
        assert!(!flag.is_revealed());
    }
}
