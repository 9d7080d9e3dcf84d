//! Application shell.
//!
//! Layout:
//! - sticky header (top panel) with the five nav links
//! - central panel: one vertical scroll area holding the routed page
//!   followed by the footer
//!
//! Navigation actions bubble up from the header and from page buttons;
//! the shell applies them to `AppState` and resets the scroll position.

use eframe::egui;
use egui::ScrollArea;

use crate::panels::{self, HeaderState, PageAction};
use crate::state::{AppState, PageId};
use crate::theme;

pub struct SiteApp {
    state: AppState,
    header: HeaderState,
}

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply(&cc.egui_ctx);
        Self {
            state: AppState::new(),
            header: HeaderState::default(),
        }
    }

    /// Renders the page for `page`. The match is exhaustive over the
    /// closed identifier set; out-of-set values cannot reach here (they
    /// fall back to `Home` at the slug boundary).
    fn page_contents(ui: &mut egui::Ui, page: PageId) -> PageAction {
        match page {
            PageId::Home => panels::home_page(ui),
            PageId::About => {
                panels::about_page(ui);
                PageAction::default()
            }
            PageId::Services => {
                panels::services_page(ui);
                PageAction::default()
            }
            PageId::Team => {
                panels::team_page(ui);
                PageAction::default()
            }
            PageId::Structure => {
                panels::structure_page(ui);
                PageAction::default()
            }
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let header_action = egui::TopBottomPanel::top("site_header")
            .frame(
                egui::Frame::none()
                    .fill(theme::NAVY)
                    .inner_margin(egui::Margin::symmetric(theme::SECTION_MARGIN, 10.0)),
            )
            .show(ctx, |ui| panels::header(ui, &mut self.header, self.state.page()))
            .inner;
        if let Some(target) = header_action.navigate {
            self.state.navigate(target);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::GRAY_900))
            .show(ctx, |ui| {
                let mut scroll = ScrollArea::vertical().id_salt("site_scroll");
                if self.state.take_scroll_reset() {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }
                let page_action = scroll
                    .show(ui, |ui| {
                        let action = Self::page_contents(ui, self.state.page());
                        panels::footer(ui, self.state.page());
                        action
                    })
                    .inner;
                if let Some(target) = page_action.navigate {
                    self.state.navigate(target);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, RawInput};

    fn render_page(page: PageId) -> PageAction {
        let ctx = Context::default();
        theme::apply(&ctx);
        let mut action = PageAction::default();
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                action = SiteApp::page_contents(ui, page);
            });
        });
        action
    }

    #[test]
    fn test_every_page_renders() {
        for page in PageId::ALL {
            let action = render_page(page);
            // No page emits an action without user input.
            assert_eq!(action, PageAction::default());
        }
    }

    #[test]
    fn test_footer_renders_for_every_page() {
        let ctx = Context::default();
        theme::apply(&ctx);
        for page in PageId::ALL {
            let _ = ctx.run(RawInput::default(), |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    panels::footer(ui, page);
                });
            });
        }
    }

    #[test]
    fn test_header_renders_in_wide_and_narrow_layouts() {
        let ctx = Context::default();
        theme::apply(&ctx);
        for width in [1280.0_f32, 400.0] {
            let input = RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(width, 800.0),
                )),
                ..Default::default()
            };
            let mut header = HeaderState::default();
            let _ = ctx.run(input, |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    let action = panels::header(ui, &mut header, PageId::Home);
                    assert!(action.navigate.is_none());
                });
            });
        }
    }
}
