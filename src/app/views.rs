//! View rendering (search row, product panel, cart, totals)

use super::App;
use crate::constants::*;
use crate::theme;
use crate::ui::components::{cart_row, heading, product_line, total_line};
use eframe::egui;

impl App {
    pub(crate) fn render_storefront(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(theme::CONTAINER_WIDTH);
            theme::container_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());

                heading(ui, TITLE, theme::FONT_TITLE);
                ui.add_space(theme::SPACING_XL);

                self.render_search_row(ctx, ui);
                self.render_product_panel(ctx, ui);

                ui.add_space(theme::SPACING_MD);
                heading(ui, CART_HEADING, theme::FONT_HEADING);
                for item in &self.storefront.cart {
                    cart_row(ui, item);
                }

                ui.add_space(theme::SPACING_MD);
                heading(ui, &total_line(self.storefront.total), theme::FONT_TOTAL);
                ui.add_space(theme::SPACING_MD);

                self.render_purchase_button(ctx, ui);
            });
        });
    }

    fn render_search_row(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let mut search = false;
        ui.horizontal(|ui| {
            let input = ui.add(
                egui::TextEdit::singleline(&mut self.storefront.barcode)
                    .hint_text(BARCODE_HINT)
                    .desired_width(ui.available_width() * 0.7)
                    .margin(egui::vec2(8.0, 8.0)),
            );
            if self.focus_barcode && self.alerts.is_empty() {
                self.focus_barcode = false;
                input.request_focus();
            }
            // Scanners finish with Enter
            search |= input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let label = format!("{}  {}", egui_phosphor::regular::MAGNIFYING_GLASS, SEARCH_LABEL);
            search |= ui.add(theme::button_primary(label)).clicked();
        });
        ui.add_space(theme::SPACING_XL);

        if search {
            self.lookup_product(ctx);
        }
    }

    fn render_product_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let Some(product) = &self.storefront.product else {
            return;
        };

        let mut add = false;
        theme::panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            heading(ui, PRODUCT_HEADING, theme::FONT_HEADING);
            ui.vertical_centered(|ui| {
                ui.label(product_line(product));
                if product.is_registered() {
                    let label = format!("{}  {}", egui_phosphor::regular::SHOPPING_CART_SIMPLE, ADD_TO_CART_LABEL);
                    add = ui.add(theme::button_success(label)).clicked();
                }
            });
        });
        ui.add_space(theme::SPACING_XL);

        if add {
            self.add_to_cart(ctx);
        }
    }

    fn render_purchase_button(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let enabled = self.storefront.can_purchase();
        let clicked = ui
            .vertical_centered(|ui| {
                let button = theme::button_purchase(PURCHASE_LABEL, enabled)
                    .min_size(egui::vec2(120.0, 36.0));
                let response = ui.add_enabled(enabled, button);
                if !enabled {
                    response.on_hover_cursor(egui::CursorIcon::NotAllowed).clicked()
                } else {
                    response.clicked()
                }
            })
            .inner;

        if clicked {
            self.purchase(ctx);
        }
    }
}
