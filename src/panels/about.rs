//! About page: introduction, mission and vision, core values.

use egui::{RichText, Ui};

use super::common::{page_title, section};
use crate::content;
use crate::reveal::Reveal;
use crate::theme;

const TAGLINE: &str = "Our commitment to quality, safety, and customer satisfaction is \
the foundation of our success.";

const INTRO_PARAGRAPHS: [&str; 2] = [
    "Stanhole Trading and Projects (Pty) Ltd is a 100% black-owned South African company \
with a sharp focus on providing products and services for low, medium, and high voltage \
systems. We specialize in the installation of electrical cabling, stringing, earthing, \
and advanced electrical equipment.",
    "Our company employs experienced staff qualified to work with electricity and operates \
a quality system based on ISO 9000, ensuring excellence and reliability in every project \
we undertake.",
];

const MISSION: &str = "To be one of the most popular energy generation and maintenance \
service providers, offering services to every sector. We leverage the experience of our \
highly professional staff to meet the holistic electrical requirements of both industrial \
and corporate clients.";

const VISION: &str = "To provide the best possible customer satisfaction and exceed \
expectations through our occupational experience. We are committed to providing the \
highest level of service and sustaining long-term relationships with our job suppliers.";

pub fn about_page(ui: &mut Ui) {
    section(ui, theme::GRAY_800, |ui| {
        page_title(ui, "about_title", "About Stanhole Trading & Projects", TAGLINE);

        introduction(ui);
        ui.add_space(32.0);
        mission_and_vision(ui);
        ui.add_space(40.0);
        core_values(ui);
    });
}

fn introduction(ui: &mut Ui) {
    ui.columns(2, |cols| {
        Reveal::new("about_image").show(&mut cols[0], |ui| {
            ui.add(
                egui::Image::from_uri(content::SUBSTATION_IMAGE_URL)
                    .max_height(300.0)
                    .rounding(theme::CARD_ROUNDING),
            );
        });
        Reveal::new("about_intro").delay_ms(200).show(&mut cols[1], |ui| {
            ui.label(
                RichText::new("Our Introduction")
                    .size(24.0)
                    .strong()
                    .color(theme::ORANGE),
            );
            ui.add_space(6.0);
            for text in INTRO_PARAGRAPHS {
                ui.label(text);
                ui.add_space(4.0);
            }
        });
    });
}

fn mission_and_vision(ui: &mut Ui) {
    ui.columns(2, |cols| {
        Reveal::new("about_mission").show(&mut cols[0], |ui| {
            statement_card(ui, "Our Mission", MISSION);
        });
        Reveal::new("about_vision").delay_ms(200).show(&mut cols[1], |ui| {
            statement_card(ui, "Our Vision", VISION);
        });
    });
}

fn statement_card(ui: &mut Ui, title: &str, body: &str) {
    egui::Frame::none()
        .fill(theme::NAVY)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(20.0).strong().color(theme::ORANGE));
            ui.add_space(6.0);
            ui.label(body);
        });
}

fn core_values(ui: &mut Ui) {
    Reveal::new("about_values_heading").show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Our Core Values")
                    .size(24.0)
                    .strong()
                    .color(theme::WHITE),
            );
        });
    });
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for (i, value) in content::CORE_VALUES.iter().enumerate() {
            // Staggered pure fade: a slide offset would reflow the row.
            Reveal::new(("about_value", i))
                .delay_ms(i as u32 * 100)
                .rise(0.0)
                .show(ui, |ui| {
                    value_chip(ui, value);
                });
        }
    });
}

fn value_chip(ui: &mut Ui, value: &str) {
    egui::Frame::none()
        .fill(theme::GRAY_700)
        .rounding(16.0)
        .inner_margin(egui::Margin::symmetric(16.0, 8.0))
        .show(ui, |ui| {
            ui.label(RichText::new(value).strong().color(theme::WHITE));
        });
}
