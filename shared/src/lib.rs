use serde::{Deserialize, Serialize};

pub mod id;
pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds the `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// A product offered by the store, as listed by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Server-side order state as returned by `GET /api/orders/{id}`.
///
/// Status fields are shown verbatim; the client never interprets them.
/// Payment and delivery states stay `null` until the matching backend
/// events arrive, so everything past `quantity` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "id::deserialize")]
    pub product_id: String,
    pub quantity: u32,
    pub total_amount: Option<f64>,
    pub order_status: Option<String>,
    pub payment_status: Option<String>,
    pub delivery_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub username: String,
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /api/users/{username}/link-bank-account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountLink {
    pub bank_customer_id: String,
    pub bank_account_id: String,
}

/// Human-readable text answered by the message endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerMessage(pub String);

impl ServerMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn place_order_uses_camel_case_fields() {
        let req = PlaceOrderRequest {
            username: "alice".to_string(),
            product_id: "p1".to_string(),
            quantity: 3,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "username": "alice", "productId": "p1", "quantity": 3 })
        );
    }

    #[test]
    fn order_accepts_numeric_ids() {
        let order: Order = serde_json::from_value(json!({
            "id": 42,
            "productId": 7,
            "quantity": 2,
            "totalAmount": 19.5,
            "orderStatus": "PENDING",
            "paymentStatus": "UNPAID",
            "deliveryStatus": "NOT_SHIPPED"
        }))
        .unwrap();

        assert_eq!(order.id, "42");
        assert_eq!(order.product_id, "7");
        assert_eq!(order.total_amount, Some(19.5));
        assert_eq!(order.order_status.as_deref(), Some("PENDING"));
    }

    #[test]
    fn fresh_order_with_pending_statuses_still_decodes() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "productId": 2,
            "quantity": 3,
            "totalAmount": 30.0,
            "orderStatus": "PENDING",
            "paymentStatus": null,
            "deliveryStatus": null
        }))
        .unwrap();

        assert_eq!(order.order_status.as_deref(), Some("PENDING"));
        assert_eq!(order.payment_status, None);
        assert_eq!(order.delivery_status, None);

        // 字段缺失与 null 等价
        let sparse: Order = serde_json::from_value(json!({
            "id": 1,
            "productId": 2,
            "quantity": 3
        }))
        .unwrap();
        assert_eq!(sparse.total_amount, None);
        assert_eq!(sparse.order_status, None);
    }

    #[test]
    fn product_accepts_string_ids() {
        let products: Vec<Product> = serde_json::from_value(json!([
            { "id": "p1", "name": "Widget", "price": 10 },
            { "id": 2, "name": "Gadget", "price": 2.5 }
        ]))
        .unwrap();

        assert_eq!(products[0].id, "p1");
        assert_eq!(products[0].price, 10.0);
        assert_eq!(products[1].id, "2");
    }

    #[test]
    fn bank_account_link_field_names() {
        let link = BankAccountLink {
            bank_customer_id: "c-1".to_string(),
            bank_account_id: "a-9".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({ "bankCustomerId": "c-1", "bankAccountId": "a-9" })
        );
    }

    #[test]
    fn server_message_is_a_bare_string() {
        let msg: ServerMessage = serde_json::from_str("\"Order placed\"").unwrap();
        assert_eq!(msg.as_str(), "Order placed");
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
