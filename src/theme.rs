//! Centralized theme constants for POS Storefront
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xee, 0xef, 0xf1); // window behind the form
pub const BG_CONTAINER: Color32 = Color32::from_rgb(0xf9, 0xf9, 0xf9); // form card
pub const BG_PANEL: Color32 = Color32::WHITE; // product panel
pub const BG_INPUT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x25, 0x29);
pub const TEXT_ON_BUTTON: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_PRIMARY: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff); // search
pub const BTN_SUCCESS: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45); // add to cart
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45); // purchase
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 26.0;
pub const FONT_HEADING: f32 = 19.0;
pub const FONT_TOTAL: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const CONTAINER_WIDTH: f32 = 400.0;
pub const WINDOW_SIZE: [f32; 2] = [480.0, 680.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [460.0, 480.0];
pub const MODAL_WIDTH: f32 = 320.0;

// =============================================================================
// DIMENSIONS - Border Radius
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// DIMENSIONS - Spacing
// =============================================================================
pub const SPACING_SM: f32 = 5.0;
pub const SPACING_MD: f32 = 10.0;
pub const SPACING_XL: f32 = 20.0;

pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_INPUT;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.window_corner_radius = egui::CornerRadius::same(RADIUS_LARGE as u8);
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    visuals.widgets.inactive.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.hovered.corner_radius = RADIUS_DEFAULT.into();
    visuals.widgets.active.corner_radius = RADIUS_DEFAULT.into();
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
        style.text_styles.insert(egui::TextStyle::Button, egui::FontId::proportional(FONT_BODY));
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Outer card holding the whole form
pub fn container_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CONTAINER)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Product info panel
pub fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_MD as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

fn filled_button(text: impl Into<String>, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_BUTTON))
        .fill(fill)
        .stroke(egui::Stroke::NONE)
        .corner_radius(RADIUS_DEFAULT)
}

/// Blue button (search, OK)
pub fn button_primary(text: impl Into<String>) -> egui::Button<'static> {
    filled_button(text, BTN_PRIMARY)
}

/// Green button (add to cart)
pub fn button_success(text: impl Into<String>) -> egui::Button<'static> {
    filled_button(text, BTN_SUCCESS)
}

/// Red purchase button, greyed out when there is nothing to buy
pub fn button_purchase(text: impl Into<String>, enabled: bool) -> egui::Button<'static> {
    filled_button(text, if enabled { BTN_DANGER } else { BTN_DISABLED })
}
