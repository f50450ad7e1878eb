//! HTTP client for the POS backend

use crate::error::ApiError;
use crate::types::{CartAddRequest, CartItem, CartPayload, LookupResponse, Product, PurchaseRequest};
use tracing::debug;

#[derive(Clone)]
pub struct PosClient {
    http: reqwest::Client,
    base_url: String,
}

impl PosClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /product/{barcode}`; `Ok(None)` when the backend has no such product.
    /// The barcode goes into the path untouched.
    pub async fn lookup_product(&self, barcode: &str) -> Result<Option<Product>, ApiError> {
        let url = self.url(&format!("/product/{}", barcode));
        debug!(url = %url, "Looking up product");
        let body = Self::read_body(self.http.get(&url).send().await?).await?;
        let parsed: LookupResponse = serde_json::from_value(body)?;
        Ok(parsed.product)
    }

    /// `POST /cart/add`; returns the whole cart as the server now holds it.
    pub async fn add_to_cart(&self, item: &CartAddRequest) -> Result<Vec<CartItem>, ApiError> {
        let url = self.url("/cart/add");
        debug!(url = %url, code = %item.code, "Adding to cart");
        let body = Self::read_body(self.http.post(&url).json(item).send().await?).await?;
        let payload: CartPayload = serde_json::from_value(body)?;
        Ok(payload.into_items()?)
    }

    /// `POST /purchase`; the response body is opaque.
    pub async fn purchase(&self, request: &PurchaseRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.url("/purchase");
        debug!(url = %url, lines = request.cart.len(), "Submitting purchase");
        Self::read_body(self.http.post(&url).json(request).send().await?).await
    }

    /// Read a response body as JSON (or a JSON string when it isn't JSON),
    /// failing with the body attached on any non-2xx status.
    async fn read_body(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response, returning the base URL and a
    /// handle that resolves to the raw request the client sent.
    async fn serve_once(status: u16, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.expect("read request");
                buf.extend_from_slice(&chunk[..n]);
                if n == 0 || request_complete(&buf) {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).await.expect("write response");
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&buf).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let len = head
            .lines()
            .find_map(|l| {
                let (k, v) = l.split_once(':')?;
                k.eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        body.len() >= len
    }

    fn request_body(raw: &str) -> serde_json::Value {
        let (_, body) = raw.split_once("\r\n\r\n").expect("request separator");
        serde_json::from_str(body).expect("json request body")
    }

    #[tokio::test]
    async fn lookup_returns_product() {
        let (base, req) = serve_once(
            200,
            r#"{"product":{"id":1,"code":"4901234567894","name":"Tea","price":150}}"#,
        )
        .await;
        let client = PosClient::new(&format!("{base}/"));
        let product = client.lookup_product("4901234567894").await.unwrap().unwrap();
        assert_eq!(product.name, "Tea");
        assert_eq!(product.price, Some(150));
        let raw = req.await.unwrap();
        assert!(raw.starts_with("GET /product/4901234567894 HTTP/1.1"), "{raw}");
    }

    #[tokio::test]
    async fn lookup_without_product_is_none() {
        let (base, _req) = serve_once(200, r#"{"product":null}"#).await;
        let client = PosClient::new(&base);
        assert_eq!(client.lookup_product("000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lookup_non_2xx_is_status_error() {
        let (base, _req) = serve_once(404, r#"{"detail":"not found"}"#).await;
        let client = PosClient::new(&base);
        let err = client.lookup_product("000").await.unwrap_err();
        assert_eq!(err.response_body().unwrap()["detail"], "not found");
    }

    #[tokio::test]
    async fn lookup_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = PosClient::new(&format!("http://{addr}"));
        let err = client.lookup_product("000").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(err.response_body().is_none());
    }

    #[tokio::test]
    async fn add_to_cart_posts_item_and_reads_keyed_cart() {
        let (base, req) = serve_once(
            200,
            r#"{"0":{"id":1,"code":"4901234567894","name":"Tea","price":150,"quantity":1}}"#,
        )
        .await;
        let client = PosClient::new(&base);
        let product = Product { id: Some(1), code: "4901234567894".into(), name: "Tea".into(), price: Some(150) };
        let cart = client.add_to_cart(&CartAddRequest::from(&product)).await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);

        let raw = req.await.unwrap();
        assert!(raw.starts_with("POST /cart/add HTTP/1.1"), "{raw}");
        let sent = request_body(&raw);
        assert_eq!(sent["quantity"], 1);
        assert_eq!(sent["code"], "4901234567894");
    }

    #[tokio::test]
    async fn float_prices_from_backend_are_whole_yen() {
        let (base, _req) =
            serve_once(200, r#"{"product":{"id":1,"code":"4901234567894","name":"Tea","price":150.0}}"#).await;
        let product = PosClient::new(&base).lookup_product("4901234567894").await.unwrap().unwrap();
        assert_eq!(product.price, Some(150));
        assert!(product.is_registered());

        let (base, _req) = serve_once(
            200,
            r#"{"1":{"id":1,"code":"4901234567894","name":"Tea","price":150.0,"quantity":1}}"#,
        )
        .await;
        let item = CartAddRequest::from(&product);
        let cart = PosClient::new(&base).add_to_cart(&item).await.unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].subtotal(), 150);
    }

    #[tokio::test]
    async fn purchase_sends_operator_and_cart() {
        let (base, req) = serve_once(200, r#"{"success":true}"#).await;
        let client = PosClient::new(&base);
        let op = Operator { emp_cd: "9999999999".into(), store_cd: "30".into(), pos_no: "90".into() };
        let request = PurchaseRequest {
            emp_cd: op.emp_cd,
            store_cd: op.store_cd,
            pos_no: op.pos_no,
            cart: vec![CartItem { id: Some(1), code: "x".into(), name: "Tea".into(), price: 150, quantity: 1 }],
        };
        let body = client.purchase(&request).await.unwrap();
        assert_eq!(body["success"], true);

        let sent = request_body(&req.await.unwrap());
        assert_eq!(sent["emp_cd"], "9999999999");
        assert_eq!(sent["store_cd"], "30");
        assert_eq!(sent["pos_no"], "90");
        assert_eq!(sent["cart"][0]["name"], "Tea");
    }

    #[tokio::test]
    async fn purchase_error_keeps_plain_text_body() {
        let (base, _req) = serve_once(500, "Internal Server Error").await;
        let client = PosClient::new(&base);
        let request = PurchaseRequest {
            emp_cd: String::new(),
            store_cd: String::new(),
            pos_no: String::new(),
            cart: Vec::new(),
        };
        let err = client.purchase(&request).await.unwrap_err();
        assert_eq!(
            err.response_body(),
            Some(&serde_json::Value::String("Internal Server Error".into()))
        );
    }
}
