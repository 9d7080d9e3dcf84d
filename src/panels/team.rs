//! Team page: director profile and the human resource plan.

use egui::{RichText, Ui};

use super::common::{page_title, section};
use crate::content;
use crate::reveal::Reveal;
use crate::theme;

const TAGLINE: &str = "The experienced and qualified individuals driving our success.";

pub fn team_page(ui: &mut Ui) {
    section(ui, theme::GRAY_800, |ui| {
        page_title(ui, "team_title", "Our Professional Team", TAGLINE);

        Reveal::new("team_director").show(ui, director_card);
        ui.add_space(40.0);
        Reveal::new("team_hr_plan").show(ui, hr_plan);
    });
}

fn director_card(ui: &mut Ui) {
    let member = &content::DIRECTOR;
    egui::Frame::none()
        .fill(theme::NAVY)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(28.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                avatar(ui);
                ui.add_space(20.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(member.name)
                            .size(26.0)
                            .strong()
                            .color(theme::WHITE),
                    );
                    ui.label(RichText::new(member.role).strong().color(theme::ORANGE));
                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("Qualifications:")
                            .strong()
                            .color(theme::LIGHT_BLUE),
                    );
                    for qualification in member.qualifications {
                        ui.label(format!("- {qualification}"));
                    }
                });
            });
        });
}

fn avatar(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(120.0, 120.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 58.0, theme::GRAY_700);
    painter.circle_stroke(rect.center(), 58.0, egui::Stroke::new(3.0, theme::ORANGE));
    // Placeholder silhouette: head and shoulders.
    painter.circle_filled(rect.center() - egui::vec2(0.0, 14.0), 18.0, theme::GRAY_400);
    painter.circle_filled(rect.center() + egui::vec2(0.0, 30.0), 28.0, theme::GRAY_400);
}

fn hr_plan(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Human Resource Plan")
                .size(24.0)
                .strong()
                .color(theme::WHITE),
        );
    });
    ui.add_space(12.0);

    egui::Frame::none()
        .fill(theme::NAVY)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::Grid::new("hr_plan_grid")
                .num_columns(4)
                .spacing(egui::vec2(32.0, 10.0))
                .striped(true)
                .show(ui, |ui| {
                    for heading in ["Role", "Males", "Females", "Age Group"] {
                        ui.label(RichText::new(heading).strong().color(theme::WHITE));
                    }
                    ui.end_row();
                    for row in content::HR_PLAN {
                        ui.label(row.role);
                        ui.label(row.males);
                        ui.label(row.females);
                        ui.label(row.age_group);
                        ui.end_row();
                    }
                });
        });
}
