//! Structure page: recursive org-chart rendering.
//!
//! Depth-first pre-order: each card renders above and centered over its
//! children, joined by painted connector lines. Supports arbitrary depth
//! and branching; the chart data is just an [`OrgNode`] tree.

use egui::{RichText, Ui};

use super::common::{page_title, section};
use crate::content::{self, OrgNode};
use crate::reveal::Reveal;
use crate::theme;

const TAGLINE: &str = "A clear and effective organizational structure that drives our \
operations.";

pub fn structure_page(ui: &mut Ui) {
    section(ui, theme::GRAY_800, |ui| {
        page_title(ui, "structure_title", "Company Structure", TAGLINE);

        Reveal::new("structure_chart").show(ui, |ui| {
            ui.vertical_centered(|ui| {
                org_subtree(ui, &content::ORG_CHART);
            });
        });
    });
}

/// Renders `node` and then, recursively, its children in a row below it.
fn org_subtree(ui: &mut Ui, node: &OrgNode) {
    org_card(ui, node);
    if node.children.is_empty() {
        return;
    }
    connector(ui);
    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = 24.0;
        for child in node.children {
            ui.vertical_centered(|ui| {
                org_subtree(ui, child);
            });
        }
    });
}

fn org_card(ui: &mut Ui, node: &OrgNode) {
    let border = if node.level == 1 {
        theme::ORANGE
    } else {
        theme::LIGHT_BLUE_FAINT
    };
    egui::Frame::none()
        .fill(theme::NAVY)
        .stroke(egui::Stroke::new(2.0, border))
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::symmetric(18.0, 12.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(node.title).strong().color(theme::WHITE));
                if let Some(name) = node.name {
                    ui.label(RichText::new(name).small().color(theme::GRAY_400));
                }
            });
        });
}

fn connector(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(1.0, 24.0), egui::Sense::hover());
    ui.painter().line_segment(
        [rect.center_top(), rect.center_bottom()],
        egui::Stroke::new(1.0, theme::GRAY_600),
    );
}
