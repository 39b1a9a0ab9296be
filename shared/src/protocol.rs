use crate::{
    BankAccountLink, LoginRequest, LoginResponse, Order, PlaceOrderRequest, Product,
    RegisterRequest, ServerMessage,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// JSON body sent with the request.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, path parameters already encoded.
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body>;
}

fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/users/login".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

impl ApiRequest for RegisterRequest {
    type Body = Self;
    type Response = ServerMessage;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/users/register".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// List all products
#[derive(Debug, Clone, Copy)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Body = ();
    type Response = Vec<Product>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/products".to_string()
    }

    fn body(&self) -> Option<&()> {
        None
    }
}

impl ApiRequest for PlaceOrderRequest {
    type Body = Self;
    type Response = ServerMessage;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/orders".to_string()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

/// Fetch one order by id
#[derive(Debug, Clone)]
pub struct GetOrderRequest {
    pub order_id: String,
}

impl ApiRequest for GetOrderRequest {
    type Body = ();
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/orders/{}", segment(&self.order_id))
    }

    fn body(&self) -> Option<&()> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct CancelOrderRequest {
    pub order_id: String,
}

impl ApiRequest for CancelOrderRequest {
    type Body = ();
    type Response = ServerMessage;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/orders/{}/cancel", segment(&self.order_id))
    }

    fn body(&self) -> Option<&()> {
        None
    }
}

/// Link a bank account to a user. Requires the bearer token.
#[derive(Debug, Clone)]
pub struct LinkBankAccountRequest {
    pub username: String,
    pub link: BankAccountLink,
}

impl ApiRequest for LinkBankAccountRequest {
    type Body = BankAccountLink;
    type Response = ServerMessage;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        format!("/api/users/{}/link-bank-account", segment(&self.username))
    }

    fn body(&self) -> Option<&BankAccountLink> {
        Some(&self.link)
    }
}
