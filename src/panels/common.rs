//! Shared layout helpers for the page panels.

use egui::{Color32, RichText, Ui};

use crate::reveal::Reveal;
use crate::theme;

/// Full-width colored section with the standard padding.
pub(crate) fn section(ui: &mut Ui, fill: Color32, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(theme::SECTION_MARGIN, 48.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Small uppercase lead-in line above a heading.
pub(crate) fn kicker(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text).small().strong().color(color));
}

/// Reveal-wrapped centered page title with its tagline.
pub(crate) fn page_title(ui: &mut Ui, id: &str, title: &str, tagline: &str) {
    Reveal::new(id).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).size(32.0).strong().color(theme::WHITE));
            ui.add_space(4.0);
            ui.label(RichText::new(tagline).strong().color(theme::LIGHT_BLUE));
        });
    });
    ui.add_space(32.0);
}
