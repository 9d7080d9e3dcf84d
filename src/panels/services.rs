//! Services page: the two service lists and the industries served.

use egui::{RichText, Ui};

use super::common::{page_title, section};
use crate::content;
use crate::reveal::Reveal;
use crate::theme;

const TAGLINE: &str = "Delivering a comprehensive range of expert electrical and \
mechanical services tailored to your needs.";

pub fn services_page(ui: &mut Ui) {
    section(ui, theme::GRAY_800, |ui| {
        page_title(ui, "services_title", "Products & Services", TAGLINE);

        ui.columns(2, |cols| {
            Reveal::new("services_electrical").show(&mut cols[0], |ui| {
                service_list(ui, "Electrical & Instrumentation", &content::ELECTRICAL_SERVICES);
            });
            Reveal::new("services_mechanical")
                .delay_ms(200)
                .show(&mut cols[1], |ui| {
                    service_list(ui, "Mechanical Services", &content::MECHANICAL_SERVICES);
                    ui.add_space(32.0);
                    industries(ui);
                });
        });
    });
}

fn service_list(ui: &mut Ui, heading: &str, items: &[&str]) {
    ui.label(RichText::new(heading).size(24.0).strong().color(theme::ORANGE));
    ui.add_space(8.0);
    egui::Frame::none()
        .fill(theme::NAVY)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    bullet(ui);
                    ui.label(*item);
                });
                ui.add_space(4.0);
            }
        });
}

fn industries(ui: &mut Ui) {
    ui.label(
        RichText::new("Industries We Serve")
            .size(20.0)
            .strong()
            .color(theme::WHITE),
    );
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
        for industry in content::INDUSTRIES {
            egui::Frame::none()
                .fill(theme::NAVY)
                .rounding(6.0)
                .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(industry).strong().color(theme::WHITE));
                });
        }
    });
}

fn bullet(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 14.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 3.0, theme::ORANGE);
}
