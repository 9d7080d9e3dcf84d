//! Site footer: company blurb, contacts, branches, and — on the home and
//! about pages only — the reveal-wrapped map block.

use chrono::Datelike;
use egui::{RichText, Ui};

use crate::content;
use crate::reveal::Reveal;
use crate::state::PageId;
use crate::theme;

/// The map block renders only on these pages. This is the single place
/// where router state conditions content outside the page dispatch itself.
pub fn shows_map(page: PageId) -> bool {
    matches!(page, PageId::Home | PageId::About)
}

pub fn footer(ui: &mut Ui, page: PageId) {
    egui::Frame::none()
        .fill(theme::NAVY)
        .inner_margin(egui::Margin::symmetric(theme::SECTION_MARGIN, 32.0))
        .show(ui, |ui| {
            ui.columns(3, |cols| {
                company_block(&mut cols[0]);
                contact_block(&mut cols[1]);
                branches_block(&mut cols[2]);
            });

            if shows_map(page) {
                ui.add_space(24.0);
                Reveal::new("footer_map").show(ui, map_block);
            }
        });

    bottom_strip(ui);
}

fn company_block(ui: &mut Ui) {
    ui.label(
        RichText::new(content::COMPANY_NAME)
            .size(20.0)
            .strong()
            .color(theme::WHITE),
    );
    ui.add_space(4.0);
    ui.label(content::FOOTER_BLURB);
    ui.add_space(12.0);
    ui.label(RichText::new("Head Office").strong().color(theme::WHITE));
    ui.label(content::HEAD_OFFICE_ADDRESS);
}

fn contact_block(ui: &mut Ui) {
    ui.label(RichText::new("Contact Info").strong().color(theme::WHITE));
    ui.add_space(4.0);
    ui.hyperlink_to(content::PHONE_DISPLAY, content::PHONE_URL);
    ui.hyperlink_to(content::EMAIL_DISPLAY, content::EMAIL_URL);
}

fn branches_block(ui: &mut Ui) {
    ui.label(RichText::new("Our Branches").strong().color(theme::WHITE));
    ui.add_space(4.0);
    for branch in content::BRANCHES {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("{}:", branch.town)).strong());
            ui.label(branch.address);
        });
    }
}

/// The embed target is opaque content; it is linked out to rather than
/// parsed or validated.
fn map_block(ui: &mut Ui) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(2.0, theme::LIGHT_BLUE_FAINT))
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Find Us").strong().color(theme::WHITE));
                ui.hyperlink_to(content::HEAD_OFFICE_ADDRESS, content::MAP_EMBED_URL);
            });
        });
}

fn bottom_strip(ui: &mut Ui) {
    egui::Frame::none()
        .fill(theme::GRAY_900)
        .inner_margin(egui::Margin::symmetric(theme::SECTION_MARGIN, 16.0))
        .show(ui, |ui| {
            tricolor_bar(ui);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "© {} {}. All Rights Reserved.",
                        chrono::Utc::now().year(),
                        content::COMPANY_LEGAL_NAME
                    ))
                    .small()
                    .color(theme::GRAY_500),
                );
            });
        });
}

fn tricolor_bar(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 6.0),
        egui::Sense::hover(),
    );
    let third = rect.width() / 3.0;
    let painter = ui.painter();
    for (i, color) in [theme::NAVY, theme::ORANGE, theme::GRAY_600].iter().enumerate() {
        let x0 = rect.left() + third * i as f32;
        let seg = egui::Rect::from_min_size(
            egui::pos2(x0, rect.top()),
            egui::vec2(third, rect.height()),
        );
        painter.rect_filled(seg, 0.0, *color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_only_on_home_and_about() {
        assert!(shows_map(PageId::Home));
        assert!(shows_map(PageId::About));
        assert!(!shows_map(PageId::Services));
        assert!(!shows_map(PageId::Team));
        assert!(!shows_map(PageId::Structure));
    }
}
