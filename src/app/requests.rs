//! Backend requests: spawn on the runtime, hand results back to the UI thread

use super::App;
use crate::types::*;
use eframe::egui;
use std::future::Future;
use tracing::{debug, info, warn};

impl App {
    /// Spawn `request`; its outcome is queued for the next frame.
    fn spawn_request<F>(&self, ctx: &egui::Context, request: F)
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = request.await;
            // Receiver only goes away when the app does
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    pub fn lookup_product(&mut self, ctx: &egui::Context) {
        let barcode = self.storefront.barcode.clone();
        info!(barcode = %barcode, "Searching product");
        let client = self.client.clone();
        self.spawn_request(ctx, async move {
            let result = client.lookup_product(&barcode).await;
            Outcome::Lookup { barcode, result }
        });
    }

    pub fn add_to_cart(&mut self, ctx: &egui::Context) {
        let Some(item) = self.storefront.add_request() else {
            debug!("Add to cart ignored, no product selected");
            return;
        };
        info!(code = %item.code, name = %item.name, "Adding to cart");
        let client = self.client.clone();
        self.spawn_request(ctx, async move { Outcome::CartAdded(client.add_to_cart(&item).await) });
    }

    pub fn purchase(&mut self, ctx: &egui::Context) {
        let request = match self.storefront.purchase_request(&self.operator) {
            Ok(request) => request,
            Err(alert) => {
                warn!("Purchase refused, cart is empty");
                self.alerts.push_back(alert);
                return;
            }
        };
        match serde_json::to_string_pretty(&request) {
            Ok(json) => debug!(payload = %json, "Purchase payload"),
            Err(e) => warn!(error = %e, "Failed to serialize purchase payload for logging"),
        }
        let total = self.storefront.total;
        info!(lines = request.cart.len(), total, "Submitting purchase");
        let client = self.client.clone();
        self.spawn_request(ctx, async move {
            Outcome::Purchased { total, result: client.purchase(&request).await }
        });
    }

    /// Apply every finished request, oldest first.
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    pub(crate) fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Lookup { barcode, result } => self.storefront.apply_lookup(&barcode, result),
            Outcome::CartAdded(result) => {
                let added = result.is_ok();
                self.storefront.apply_cart_add(result);
                // Ready for the next scan
                self.focus_barcode |= added;
            }
            Outcome::Purchased { total, result } => {
                let alert = self.storefront.apply_purchase(total, result);
                self.alerts.push_back(alert);
            }
        }
    }
}
