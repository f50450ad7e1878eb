//! Modal dialogs (blocking alerts)

use super::App;
use crate::constants::OK_LABEL;
use crate::theme;
use eframe::egui;

impl App {
    /// Show the oldest pending alert over the form until it is dismissed.
    pub(crate) fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alerts.front() else {
            return;
        };
        let message = alert.message.clone();
        let detail = alert.detail.clone();

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("alert_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.horizontal(|ui| {
                ui.colored_label(theme::BTN_PRIMARY, egui_phosphor::regular::INFO);
                ui.add(egui::Label::new(egui::RichText::new(&message).strong()).wrap());
            });

            if let Some(detail) = &detail {
                ui.add_space(theme::SPACING_MD);
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    ui.add(egui::Label::new(egui::RichText::new(detail).size(theme::FONT_BODY)).wrap());
                });
            }

            ui.add_space(theme::SPACING_XL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(theme::button_primary(OK_LABEL)).clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal_response.should_close() {
            self.alerts.pop_front();
            self.focus_barcode = true;
        }
    }
}
