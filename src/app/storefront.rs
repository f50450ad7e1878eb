//! Storefront view state and its transitions
//!
//! Everything the form shows lives here. Transitions are plain methods so the
//! app shell only decides *when* to call them; none of them touch the network.

use crate::constants::*;
use crate::error::ApiError;
use crate::types::*;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storefront {
    pub barcode: String,
    pub product: Option<Product>,
    pub cart: Vec<CartItem>,
    pub total: i64,
}

/// Sum of price x quantity over the cart
pub fn cart_total(cart: &[CartItem]) -> i64 {
    cart.iter().map(CartItem::subtotal).fold(0, i64::saturating_add)
}

/// Total including 10% tax, rounded half up to whole yen
pub fn total_with_tax(total: i64) -> i64 {
    total.saturating_mul(11).saturating_add(5).div_euclid(10)
}

impl Storefront {
    /// Store the result of looking up `barcode`. Misses and faults both
    /// become the sentinel.
    pub fn apply_lookup(&mut self, barcode: &str, result: Result<Option<Product>, ApiError>) {
        self.product = Some(match result {
            Ok(Some(product)) => {
                info!(code = %product.code, name = %product.name, "Product found");
                product
            }
            Ok(None) => {
                info!(barcode, "Product not registered");
                Product::not_registered()
            }
            Err(e) => {
                warn!(error = %e, barcode, "Product lookup failed");
                Product::not_registered()
            }
        });
    }

    /// Request body for adding the current product, or `None` when nothing
    /// has been looked up.
    pub fn add_request(&self) -> Option<CartAddRequest> {
        self.product.as_ref().map(CartAddRequest::from)
    }

    /// Mirror the server's cart after an add; failures leave everything as is.
    pub fn apply_cart_add(&mut self, result: Result<Vec<CartItem>, ApiError>) {
        match result {
            Ok(cart) => {
                self.total = cart_total(&cart);
                info!(lines = cart.len(), total = self.total, "Cart updated");
                self.cart = cart;
                self.barcode.clear();
                self.product = None;
            }
            Err(e) => {
                error!(error = %e, "Cart update failed");
            }
        }
    }

    pub fn can_purchase(&self) -> bool {
        !self.cart.is_empty()
    }

    /// Purchase body for the current cart, or the alert to show instead.
    pub fn purchase_request(&self, operator: &Operator) -> Result<PurchaseRequest, Alert> {
        if !self.can_purchase() {
            return Err(Alert::new(CART_EMPTY_MSG));
        }
        Ok(PurchaseRequest {
            emp_cd: operator.emp_cd.clone(),
            store_cd: operator.store_cd.clone(),
            pos_no: operator.pos_no.clone(),
            cart: self.cart.clone(),
        })
    }

    /// Settle a submitted purchase. `total` is the total at submission time.
    /// Success resets the form; failure keeps the cart so it can be resubmitted.
    pub fn apply_purchase(&mut self, total: i64, result: Result<serde_json::Value, ApiError>) -> Alert {
        match result {
            Ok(body) => {
                info!(response = %body, total, "Purchase complete");
                *self = Self::default();
                Alert::new(PURCHASE_DONE_MSG)
                    .with_detail(format!("合計金額（税込）: {}円", total_with_tax(total)))
            }
            Err(e) => {
                error!(error = %e, "Purchase failed");
                let alert = Alert::new(PURCHASE_FAILED_MSG);
                match e.response_body() {
                    Some(body) => {
                        error!(response = %body, "Server response");
                        let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
                        alert.with_detail(format!("{}: {}", ERROR_DETAIL_LABEL, pretty))
                    }
                    None => alert,
                }
            }
        }
    }
}
