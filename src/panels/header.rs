//! Site header: brand mark and the five navigation links.
//!
//! Below [`NARROW_LAYOUT_MAX_WIDTH`] the links collapse behind a menu
//! button with its own open/closed state, unrelated to routing.

use egui::{RichText, Ui};

use crate::state::PageId;
use crate::theme;

/// Width below which nav links collapse behind the menu button.
const NARROW_LAYOUT_MAX_WIDTH: f32 = 760.0;

/// Header-local state.
#[derive(Debug, Default)]
pub struct HeaderState {
    menu_open: bool,
}

impl HeaderState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Menu button press.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A nav link was activated; the menu always closes, whatever its
    /// prior state.
    pub fn nav_activated(&mut self) {
        self.menu_open = false;
    }
}

/// What the user did in the header this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderAction {
    pub navigate: Option<PageId>,
}

pub fn header(ui: &mut Ui, state: &mut HeaderState, current: PageId) -> HeaderAction {
    let mut action = HeaderAction::default();
    let narrow = ui.available_width() < NARROW_LAYOUT_MAX_WIDTH;

    ui.horizontal(|ui| {
        ui.set_height(44.0);

        brand_mark(ui);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if narrow {
                if ui
                    .add(egui::Button::new(RichText::new("Menu").color(theme::WHITE)))
                    .clicked()
                {
                    state.toggle_menu();
                }
            } else {
                // Right-to-left layout reverses order; iterate reversed so
                // Home ends up leftmost.
                for page in PageId::ALL.iter().rev() {
                    if nav_link(ui, *page, current).clicked() {
                        action.navigate = Some(*page);
                        state.nav_activated();
                    }
                }
            }
        });
    });

    if narrow && state.menu_open() {
        ui.separator();
        ui.vertical(|ui| {
            for page in PageId::ALL {
                if nav_link(ui, page, current).clicked() {
                    action.navigate = Some(page);
                    state.nav_activated();
                }
            }
        });
    }

    action
}

fn brand_mark(ui: &mut Ui) {
    egui::Frame::none()
        .fill(theme::GRAY_700)
        .rounding(6.0)
        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new("LOGO")
                    .small()
                    .strong()
                    .color(theme::LIGHT_BLUE),
            );
        });
    ui.label(
        RichText::new("STANHOLE")
            .size(20.0)
            .strong()
            .color(theme::WHITE),
    );
}

fn nav_link(ui: &mut Ui, page: PageId, current: PageId) -> egui::Response {
    let color = if page == current {
        theme::ORANGE
    } else {
        theme::GRAY_300
    };
    ui.add(egui::Button::new(RichText::new(page.label()).color(color)).frame(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggles_on_each_press() {
        let mut state = HeaderState::default();
        assert!(!state.menu_open());
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn test_nav_forces_menu_closed() {
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.nav_activated();
        assert!(!state.menu_open());

        // Already closed: stays closed.
        state.nav_activated();
        assert!(!state.menu_open());
    }
}
