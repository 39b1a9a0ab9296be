use serde::{Serialize, de::DeserializeOwned};
use storefront_shared::protocol::{
    ApiRequest, CancelOrderRequest, GetOrderRequest, HttpMethod,
    LinkBankAccountRequest, ListProductsRequest,
};
use storefront_shared::{
    BankAccountLink, CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, LoginRequest,
    LoginResponse, Order, PlaceOrderRequest, Product, RegisterRequest, ServerMessage, bearer,
};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::web::{FetchClient, HttpClient, HttpRequest};

/// 商店后端 API 客户端
///
/// 每个方法只发出一次请求；会话持有 token 时自动附带 Bearer 认证头。
#[derive(Clone, Debug)]
pub struct StoreApi<C = FetchClient> {
    base_url: String,
    token: Option<String>,
    client: C,
}

impl StoreApi<FetchClient> {
    /// 浏览器环境下的客户端
    pub fn browser(config: &ClientConfig, token: Option<String>) -> Self {
        Self::new(config.api_base_url.clone(), FetchClient).with_token(token)
    }
}

impl<C: HttpClient> StoreApi<C> {
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
            client,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<String, ApiError> {
        let method = request.method;
        let url = request.url.clone();

        let response = self.client.send(request).await.map_err(|e| {
            log_error!("[Api] {} {} failed: {}", method.as_str(), url, e);
            ApiError::from(e)
        })?;

        if !response.ok() {
            log_warn!(
                "[Api] {} {} responded {}",
                method.as_str(),
                url,
                response.status
            );
            return Err(ApiError::Status {
                status: response.status,
                payload: response.body,
            });
        }

        Ok(response.body)
    }

    async fn call<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = HttpRequest::new(self.url(path), method);

        if let Some(token) = &self.token {
            request = request.with_header(HEADER_AUTHORIZATION, &bearer(token));
        }

        if let Some(body) = body {
            request = request
                .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
                .with_body(encode(body)?);
        }

        let text = self.execute(request).await?;
        decode(&text)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.call::<(), T>(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(HttpMethod::Post, path, body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(HttpMethod::Put, path, body).await
    }

    /// 发送一个类型化的端点请求
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let path = request.path();
        match R::METHOD {
            HttpMethod::Get => self.get(&path).await,
            HttpMethod::Post => self.post(&path, request.body()).await,
            HttpMethod::Put => self.put(&path, request.body()).await,
        }
    }

    pub async fn login(&self, username: String, password: String) -> Result<LoginResponse, ApiError> {
        self.send(&LoginRequest { username, password }).await
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<ServerMessage, ApiError> {
        self.send(&RegisterRequest {
            username,
            password,
            email,
        })
        .await
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.send(&ListProductsRequest).await
    }

    pub async fn place_order(&self, order: &PlaceOrderRequest) -> Result<ServerMessage, ApiError> {
        self.send(order).await
    }

    pub async fn get_order(&self, order_id: String) -> Result<Order, ApiError> {
        self.send(&GetOrderRequest { order_id }).await
    }

    pub async fn cancel_order(&self, order_id: String) -> Result<ServerMessage, ApiError> {
        self.send(&CancelOrderRequest { order_id }).await
    }

    pub async fn link_bank_account(
        &self,
        username: String,
        link: BankAccountLink,
    ) -> Result<ServerMessage, ApiError> {
        self.send(&LinkBankAccountRequest { username, link }).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// 消息类端点可能返回纯文本，也可能返回 JSON 字符串。
/// 非 JSON 的响应体只在目标类型可由字符串构造时才被接受。
fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).or_else(|json_err| {
        serde_json::from_value(serde_json::Value::String(text.to_string()))
            .map_err(|_| ApiError::Decode(json_err.to_string()))
    })
}

#[cfg(test)]
mod tests;
