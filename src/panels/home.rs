//! Home page: hero, who-we-are introduction, core-expertise preview.

use egui::{RichText, Ui};

use super::common::{kicker, section};
use super::PageAction;
use crate::content;
use crate::reveal::Reveal;
use crate::state::PageId;
use crate::theme;

const HERO_TITLE: &str = "Powering Progress, Engineering the Future.";
const HERO_SUBTITLE: &str = "Specializing in low, medium, and high voltage systems for \
industrial, commercial, and residential sectors across South Africa.";

const INTRO_PARAGRAPHS: [&str; 2] = [
    "Stanhole Trading and Projects (Pty) Ltd is a South African based company which \
specializes almost exclusively in the installations of electrical cabling, stringing, \
earthing and electrical equipment.",
    "The involvement of the principals in each project from inception to completion \
ensures that their experience and expertise is channeled to achieve the client's \
objective in the most expedient and cost effective manner.",
];

const ELECTRICAL_CARD_BODY: &str = "Comprehensive solutions including PLC Programming, \
Transformer Maintenance, Substation Construction, and Electrification projects.";
const MECHANICAL_CARD_BODY: &str = "Expert supply, maintenance, and installation for \
HVAC, Pumps, Motors, Crushers, and Ventilation Systems.";

pub fn home_page(ui: &mut Ui) -> PageAction {
    let mut action = PageAction::default();

    hero(ui, &mut action);
    introduction(ui);
    expertise_preview(ui, &mut action);

    action
}

fn hero(ui: &mut Ui, action: &mut PageAction) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 340.0), egui::Sense::hover());

    egui::Image::from_uri(content::HERO_IMAGE_URL)
        .fit_to_exact_size(rect.size())
        .paint_at(ui, rect);
    // Navy wash so the copy stays readable over the photo.
    ui.painter().rect_filled(
        rect,
        0.0,
        egui::Color32::from_rgba_unmultiplied(0x00, 0x1f, 0x3f, 210),
    );

    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect.shrink(24.0)), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                RichText::new(HERO_TITLE)
                    .size(34.0)
                    .strong()
                    .color(theme::WHITE),
            );
            ui.label(RichText::new(HERO_SUBTITLE).size(16.0).color(theme::GRAY_300));
            ui.add_space(16.0);
            let button = egui::Button::new(
                RichText::new("Explore Our Services").strong().color(theme::WHITE),
            )
            .fill(theme::ORANGE)
            .rounding(20.0);
            if ui.add(button).clicked() {
                action.navigate = Some(PageId::Services);
            }
        });
    });
}

fn introduction(ui: &mut Ui) {
    section(ui, theme::GRAY_800, |ui| {
        Reveal::new("home_intro").show(ui, |ui| {
            ui.columns(2, |cols| {
                cols[0].vertical(|ui| {
                    kicker(ui, "WHO WE ARE", theme::LIGHT_BLUE);
                    ui.label(
                        RichText::new("A 100% Black-Owned Company Delivering Excellence")
                            .size(26.0)
                            .strong()
                            .color(theme::WHITE),
                    );
                    ui.add_space(8.0);
                    for text in INTRO_PARAGRAPHS {
                        ui.label(RichText::new(text).color(theme::GRAY_400));
                        ui.add_space(4.0);
                    }
                });
                cols[1].add(
                    egui::Image::from_uri(content::TEAM_IMAGE_URL)
                        .max_height(280.0)
                        .rounding(theme::CARD_ROUNDING),
                );
            });
        });
    });
}

fn expertise_preview(ui: &mut Ui, action: &mut PageAction) {
    section(ui, theme::NAVY, |ui| {
        Reveal::new("home_expertise_heading").show(ui, |ui| {
            ui.vertical_centered(|ui| {
                kicker(ui, "WHAT WE DO", theme::ORANGE);
                ui.label(
                    RichText::new("Our Core Expertise")
                        .size(26.0)
                        .strong()
                        .color(theme::WHITE),
                );
            });
        });
        ui.add_space(16.0);

        ui.columns(2, |cols| {
            Reveal::new("home_card_electrical").show(&mut cols[0], |ui| {
                expertise_card(ui, "Electrical & Instrumentation", ELECTRICAL_CARD_BODY, action);
            });
            Reveal::new("home_card_mechanical")
                .delay_ms(200)
                .show(&mut cols[1], |ui| {
                    expertise_card(ui, "Mechanical Services", MECHANICAL_CARD_BODY, action);
                });
        });
    });
}

fn expertise_card(ui: &mut Ui, title: &str, body: &str, action: &mut PageAction) {
    egui::Frame::none()
        .fill(theme::GRAY_800)
        .rounding(theme::CARD_ROUNDING)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(20.0).strong().color(theme::WHITE));
            ui.add_space(6.0);
            ui.label(RichText::new(body).color(theme::GRAY_400));
            ui.add_space(10.0);
            let link = egui::Button::new(
                RichText::new("Learn More").strong().color(theme::ORANGE),
            )
            .frame(false);
            if ui.add(link).clicked() {
                action.navigate = Some(PageId::Services);
            }
        });
}
