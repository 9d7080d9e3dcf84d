//! Design tokens: the site palette and context-level style.
//!
//! Color values are the Stanhole brand variables.

use egui::{Color32, Context};

pub const NAVY: Color32 = Color32::from_rgb(0x00, 0x1f, 0x3f);
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(0x00, 0xa9, 0xe0);
pub const ORANGE: Color32 = Color32::from_rgb(0xff, 0x85, 0x1b);
pub const ORANGE_HOVER: Color32 = Color32::from_rgb(0xe6, 0x78, 0x17);

pub const WHITE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const GRAY_300: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
pub const GRAY_400: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const GRAY_500: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const GRAY_600: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
pub const GRAY_700: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub const GRAY_800: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub const GRAY_900: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Translucent light blue used for card borders.
pub const LIGHT_BLUE_FAINT: Color32 = Color32::from_rgba_premultiplied(0x00, 0x2a, 0x38, 0x50);

/// Section paddings.
pub const SECTION_MARGIN: f32 = 24.0;
pub const CARD_ROUNDING: f32 = 8.0;

/// Applies the dark site style to the whole context.
pub fn apply(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = GRAY_900;
    style.visuals.override_text_color = Some(GRAY_300);
    style.visuals.widgets.noninteractive.bg_fill = GRAY_800;
    style.visuals.hyperlink_color = ORANGE;
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_dark_panel_fill() {
        let ctx = Context::default();
        apply(&ctx);
        assert_eq!(ctx.style().visuals.panel_fill, GRAY_900);
        assert_eq!(ctx.style().visuals.hyperlink_color, ORANGE);
    }
}
