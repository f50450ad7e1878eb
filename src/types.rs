//! Common types and data structures

use crate::constants::NOT_REGISTERED_NAME;
use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize};

/// Product as returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, alias = "prd_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "optional_amount")]
    pub price: Option<i64>,
}

impl Product {
    /// Stand-in for a lookup that found nothing (or failed)
    pub fn not_registered() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: NOT_REGISTERED_NAME.to_string(),
            price: None,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.name != NOT_REGISTERED_NAME
    }

    /// Price worth showing: present and non-zero
    pub fn display_price(&self) -> Option<i64> {
        self.price.filter(|p| *p != 0)
    }
}

/// Line in the server-held cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, alias = "prd_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub price: i64,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub quantity: i64,
}

impl CartItem {
    pub fn subtotal(&self) -> i64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// Whole-yen amount from any JSON number. `150` and `150.0` both read as 150;
/// fractions round to the nearest yen.
fn amount_from_number<E: serde::de::Error>(n: serde_json::Number) -> Result<i64, E> {
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    match n.as_f64().map(f64::round) {
        Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(E::custom(format!("amount out of range: {}", n))),
    }
}

fn optional_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Option::<serde_json::Number>::deserialize(d)?
        .map(amount_from_number)
        .transpose()
}

fn amount_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    optional_amount(d).map(Option::unwrap_or_default)
}

/// Body of `GET /product/{barcode}`
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub product: Option<Product>,
}

/// Body of `POST /cart/add` responses.
///
/// Older backends key each line by an arbitrary id; the keys carry no meaning
/// and are dropped, keeping document order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CartPayload {
    List(Vec<CartItem>),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

impl CartPayload {
    pub fn into_items(self) -> Result<Vec<CartItem>, serde_json::Error> {
        match self {
            Self::List(items) => Ok(items),
            Self::Keyed(map) => map.into_iter().map(|(_, v)| serde_json::from_value(v)).collect(),
        }
    }
}

/// Body sent to `POST /cart/add`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartAddRequest {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub price: Option<i64>,
    pub quantity: i64,
}

impl From<&Product> for CartAddRequest {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            code: p.code.clone(),
            name: p.name.clone(),
            price: p.price,
            quantity: 1,
        }
    }
}

/// Who is ringing the sale up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,
}

/// Body sent to `POST /purchase`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseRequest {
    pub emp_cd: String,
    pub store_cd: String,
    pub pos_no: String,
    pub cart: Vec<CartItem>,
}

/// Blocking message shown over the form until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub detail: Option<String>,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Result of a finished background request, handed back to the UI thread
#[derive(Debug)]
pub enum Outcome {
    Lookup {
        barcode: String,
        result: Result<Option<Product>, ApiError>,
    },
    CartAdded(Result<Vec<CartItem>, ApiError>),
    Purchased {
        total: i64,
        result: Result<serde_json::Value, ApiError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_payload_accepts_list() {
        let json = r#"[{"id":1,"code":"a","name":"Tea","price":150,"quantity":1}]"#;
        let items = serde_json::from_str::<CartPayload>(json).unwrap().into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tea");
    }

    #[test]
    fn cart_payload_drops_keys_and_keeps_order() {
        let json = r#"{
            "b": {"prd_id":2,"code":"y","name":"Coffee","price":200,"quantity":2},
            "a": {"prd_id":1,"code":"x","name":"Tea","price":150,"quantity":1}
        }"#;
        let items = serde_json::from_str::<CartPayload>(json).unwrap().into_items().unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Coffee", "Tea"]);
        assert_eq!(items[0].id, Some(2));
    }

    #[test]
    fn null_price_counts_as_zero() {
        let json = r#"{"name":"Free sample","price":null,"quantity":3}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, 0);
        assert_eq!(item.subtotal(), 0);
    }

    #[test]
    fn float_prices_read_as_whole_yen() {
        let json = r#"{"product":{"id":1,"code":"4901234567894","name":"Tea","price":150.0}}"#;
        let product = serde_json::from_str::<LookupResponse>(json).unwrap().product.unwrap();
        assert_eq!(product.price, Some(150));
        assert!(product.is_registered());

        let keyed = r#"{"0":{"id":1,"code":"4901234567894","name":"Tea","price":150.0,"quantity":2.0}}"#;
        let items = serde_json::from_str::<CartPayload>(keyed).unwrap().into_items().unwrap();
        assert_eq!((items[0].price, items[0].quantity), (150, 2));
    }

    #[test]
    fn fractional_price_rounds_to_whole_yen() {
        let json = r#"{"product":{"name":"Tea","price":150.5}}"#;
        let product = serde_json::from_str::<LookupResponse>(json).unwrap().product.unwrap();
        assert_eq!(product.price, Some(151));
    }

    #[test]
    fn out_of_range_amount_is_rejected() {
        let json = r#"{"name":"Tea","price":1e30,"quantity":1}"#;
        assert!(serde_json::from_str::<CartItem>(json).is_err());
    }

    #[test]
    fn subtotal_saturates_instead_of_overflowing() {
        let item = CartItem { id: None, code: String::new(), name: "Gold".into(), price: i64::MAX / 2, quantity: 3 };
        assert_eq!(item.subtotal(), i64::MAX);
    }

    #[test]
    fn zero_price_is_not_displayed() {
        let mut p = Product { id: Some(1), code: "c".into(), name: "Bag".into(), price: Some(0) };
        assert_eq!(p.display_price(), None);
        p.price = Some(5);
        assert_eq!(p.display_price(), Some(5));
        assert_eq!(Product::not_registered().display_price(), None);
    }

    #[test]
    fn add_request_always_has_quantity_one() {
        let p = Product { id: Some(7), code: "49".into(), name: "Tea".into(), price: Some(150) };
        let req = CartAddRequest::from(&p);
        assert_eq!(req.quantity, 1);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["price"], 150);
    }
}
