//! API 错误类型
//!
//! 内部区分传输、编码、解码与服务端状态错误，
//! 界面只通过 [`ApiError::detail`] 展示一段文本。

use serde::Deserialize;
use thiserror::Error;

use crate::web::HttpError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务端返回非 2xx，携带原始响应体
    #[error("server responded with {status}: {payload}")]
    Status { status: u16, payload: String },
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// `message` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { payload, .. } => serde_json::from_str::<ErrorBody>(payload)
                .ok()
                .map(|body| body.message),
            _ => None,
        }
    }

    /// Text shown to the user after a failed call.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { status, payload } => {
                if let Some(message) = self.server_message() {
                    message
                } else if payload.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    payload.clone()
                }
            }
            other => other.to_string(),
        }
    }
}
