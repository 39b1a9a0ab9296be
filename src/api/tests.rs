use super::*;
use crate::web::{HttpError, MockHttpClient};
use serde_json::{Value, json};

const BASE: &str = "http://store.test";

fn api(mock: &MockHttpClient) -> StoreApi<MockHttpClient> {
    StoreApi::new(format!("{}/", BASE), mock.clone())
}

fn body_json(req: &HttpRequest) -> Value {
    serde_json::from_str(req.body.as_deref().expect("request body")).unwrap()
}

#[tokio::test]
async fn place_order_posts_exact_body() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        &format!("{}/api/orders", BASE),
        200,
        "Order created successfully",
    );

    let order = PlaceOrderRequest {
        username: "alice".to_string(),
        product_id: "p1".to_string(),
        quantity: 3,
    };
    let message = api(&mock).place_order(&order).await.unwrap();
    assert_eq!(message.as_str(), "Order created successfully");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "http://store.test/api/orders");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(
        body_json(req),
        json!({ "username": "alice", "productId": "p1", "quantity": 3 })
    );
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let mock = MockHttpClient::new();
    let url = format!("{}/api/users/alice/link-bank-account", BASE);
    mock.mock_response(&url, 200, "Linked");

    let link = BankAccountLink {
        bank_customer_id: "cust-7".to_string(),
        bank_account_id: "acct-9".to_string(),
    };
    api(&mock)
        .with_token(Some("tok-123".to_string()))
        .link_bank_account("alice".to_string(), link)
        .await
        .unwrap();

    let req = &mock.requests()[0];
    assert_eq!(req.url, url);
    assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(
        body_json(req),
        json!({ "bankCustomerId": "cust-7", "bankAccountId": "acct-9" })
    );
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let mock = MockHttpClient::new();
    mock.mock_json(&format!("{}/api/products", BASE), 200, json!([]));

    api(&mock)
        .with_token(Some(String::new()))
        .list_products()
        .await
        .unwrap();

    assert_eq!(mock.requests()[0].header("Authorization"), None);
}

#[tokio::test]
async fn list_products_decodes_json() {
    let mock = MockHttpClient::new();
    mock.mock_json(
        &format!("{}/api/products", BASE),
        200,
        json!([
            { "id": 1, "name": "Keyboard", "price": 49.99 },
            { "id": "p2", "name": "Mouse", "price": 20 }
        ]),
    );

    let products = api(&mock).list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "1");
    assert_eq!(products[1].name, "Mouse");

    let req = &mock.requests()[0];
    assert_eq!(req.method, HttpMethod::Get);
    assert!(req.body.is_none());
    assert_eq!(req.header("Content-Type"), None);
}

#[tokio::test]
async fn get_order_returns_record() {
    let mock = MockHttpClient::new();
    mock.mock_json(
        &format!("{}/api/orders/12", BASE),
        200,
        json!({
            "id": 12,
            "productId": 3,
            "quantity": 2,
            "totalAmount": 40.0,
            "orderStatus": "PROCESSING",
            "paymentStatus": "PAID",
            "deliveryStatus": "PENDING"
        }),
    );

    let order = api(&mock).get_order("12".to_string()).await.unwrap();
    assert_eq!(order.id, "12");
    assert_eq!(order.order_status.as_deref(), Some("PROCESSING"));
    assert_eq!(order.delivery_status.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn get_order_tolerates_unset_statuses() {
    let mock = MockHttpClient::new();
    mock.mock_json(
        &format!("{}/api/orders/13", BASE),
        200,
        json!({
            "id": 13,
            "productId": 2,
            "quantity": 3,
            "totalAmount": 30.0,
            "orderStatus": "PENDING",
            "paymentStatus": null,
            "deliveryStatus": null
        }),
    );

    let order = api(&mock).get_order("13".to_string()).await.unwrap();
    assert_eq!(order.total_amount, Some(30.0));
    assert_eq!(order.order_status.as_deref(), Some("PENDING"));
    assert_eq!(order.payment_status, None);
    assert_eq!(order.delivery_status, None);
}

#[tokio::test]
async fn cancel_order_uses_put_without_body() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        &format!("{}/api/orders/5/cancel", BASE),
        200,
        "\"Order cancelled\"",
    );

    let message = api(&mock).cancel_order("5".to_string()).await.unwrap();
    assert_eq!(message.as_str(), "Order cancelled");

    let req = &mock.requests()[0];
    assert_eq!(req.method, HttpMethod::Put);
    assert!(req.body.is_none());
}

#[tokio::test]
async fn non_success_status_carries_payload() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        &format!("{}/api/orders/5/cancel", BASE),
        400,
        "Order already shipped",
    );

    let err = api(&mock).cancel_order("5".to_string()).await.unwrap_err();
    match &err {
        ApiError::Status { status, payload } => {
            assert_eq!(*status, 400);
            assert_eq!(payload, "Order already shipped");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.detail(), "Order already shipped");
}

#[tokio::test]
async fn login_failure_exposes_server_message() {
    let mock = MockHttpClient::new();
    mock.mock_json(
        &format!("{}/api/users/login", BASE),
        401,
        json!({ "message": "Invalid username or password" }),
    );

    let err = api(&mock)
        .login("alice".to_string(), "wrong".to_string())
        .await
        .unwrap_err();
    assert_eq!(
        err.server_message().as_deref(),
        Some("Invalid username or password")
    );
    assert_eq!(
        body_json(&mock.requests()[0]),
        json!({ "username": "alice", "password": "wrong" })
    );
}

#[tokio::test]
async fn register_posts_credentials_and_email() {
    let mock = MockHttpClient::new();
    mock.mock_response(
        &format!("{}/api/users/register", BASE),
        200,
        "User registered successfully",
    );

    let message = api(&mock)
        .register(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "secret".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(message.to_string(), "User registered successfully");
    assert_eq!(
        body_json(&mock.requests()[0]),
        json!({ "username": "bob", "password": "secret", "email": "bob@example.com" })
    );
}

#[tokio::test]
async fn network_failure_is_transport_error() {
    let mock = MockHttpClient::new();
    mock.mock_network_failure(&format!("{}/api/products", BASE), "connection refused");

    let err = api(&mock).list_products().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport(HttpError::NetworkError(_))
    ));
    assert_eq!(mock.requests().len(), 1, "calls are never retried");
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let mock = MockHttpClient::new();
    mock.mock_response(&format!("{}/api/products", BASE), 200, "<html>");

    let err = api(&mock).list_products().await.unwrap_err();
    match err {
        ApiError::Decode(message) => assert!(message.contains("expected value"), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn verbs_accept_plain_text_messages() {
    let mock = MockHttpClient::new();
    mock.mock_response(&format!("{}/api/notice", BASE), 200, "Maintenance at noon");

    let message: ServerMessage = api(&mock).get("/api/notice").await.unwrap();
    assert_eq!(message.as_str(), "Maintenance at noon");

    let err = api(&mock).get::<Vec<Product>>("/api/notice").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn generic_verbs_hit_the_given_path() {
    let mock = MockHttpClient::new();
    mock.mock_json(&format!("{}/api/ping", BASE), 200, json!({ "ok": true }));

    let client = api(&mock);
    let got: Value = client.get("api/ping").await.unwrap();
    assert_eq!(got, json!({ "ok": true }));

    let _: Value = client
        .post("/api/ping", Some(&json!({ "a": 1 })))
        .await
        .unwrap();
    let _: Value = client.put::<Value, Value>("/api/ping", None).await.unwrap();

    let methods: Vec<HttpMethod> = mock.requests().iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Put]
    );
    assert!(mock.requests().iter().all(|r| r.url == "http://store.test/api/ping"));
}
