//! Reusable UI components
//!
//! Text formatting for the storefront lines plus small widgets shared by the
//! views and modals.

use crate::theme;
use crate::types::{CartItem, Product};
use eframe::egui;

/// `{name} - {price}円`, price omitted when absent or zero
pub fn product_line(product: &Product) -> String {
    match product.display_price() {
        Some(price) => format!("{} - {}円", product.name, price),
        None => product.name.clone(),
    }
}

/// `{name} - {price}円 x {quantity}`
pub fn cart_line(item: &CartItem) -> String {
    format!("{} - {}円 x {}", item.name, item.price, item.quantity)
}

pub fn total_line(total: i64) -> String {
    format!("合計金額: {}円", total)
}

/// Section heading centered in the form
pub fn heading(ui: &mut egui::Ui, text: &str, size: f32) {
    ui.vertical_centered(|ui| {
        ui.add(egui::Label::new(egui::RichText::new(text).size(size).strong()).selectable(false));
    });
}

/// One cart row with a bottom rule
pub fn cart_row(ui: &mut egui::Ui, item: &CartItem) {
    ui.add_space(theme::SPACING_SM);
    ui.vertical_centered(|ui| {
        ui.label(cart_line(item));
    });
    ui.add_space(theme::SPACING_SM);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
    ui.painter().hline(
        rect.x_range(),
        rect.center().y,
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
    );
}
