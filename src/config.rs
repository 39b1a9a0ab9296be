//! 客户端运行时配置
//!
//! API 地址的来源优先级：
//! 1. 文档根元素的 `data-api-url` 属性（部署时注入）
//! 2. 构建时环境变量 `STOREFRONT_API_URL`
//! 3. 空字符串，即与页面同源

use leptos::prelude::*;
use std::time::Duration;

const API_URL_ATTRIBUTE: &str = "data-api-url";
const DEFAULT_LOGIN_REDIRECT_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// 不含末尾斜杠的 API 基础地址
    pub api_base_url: String,
    /// 登录成功后跳转前的等待时长
    pub login_redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_redirect_delay: Duration::from_millis(DEFAULT_LOGIN_REDIRECT_DELAY_MS),
        }
    }
}

impl ClientConfig {
    /// 从浏览器文档与构建环境加载配置
    pub fn load() -> Self {
        Self::from_sources(
            document_api_url(),
            option_env!("STOREFRONT_API_URL").map(str::to_string),
        )
    }

    pub fn from_sources(attribute: Option<String>, build_env: Option<String>) -> Self {
        let api_base_url = [attribute, build_env]
            .into_iter()
            .flatten()
            .map(|url| normalize(&url))
            .find(|url| !url.is_empty())
            .unwrap_or_default();

        Self {
            api_base_url,
            ..Self::default()
        }
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn document_api_url() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute(API_URL_ATTRIBUTE)
}

/// 从 Context 获取配置
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_wins_over_build_env() {
        let config = ClientConfig::from_sources(
            Some("https://shop.example.com/".to_string()),
            Some("http://localhost:8080".to_string()),
        );
        assert_eq!(config.api_base_url, "https://shop.example.com");
    }

    #[test]
    fn blank_attribute_falls_through() {
        let config = ClientConfig::from_sources(
            Some("  ".to_string()),
            Some("http://localhost:8080/".to_string()),
        );
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn defaults_to_same_origin() {
        let config = ClientConfig::from_sources(None, None);
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.login_redirect_delay, Duration::from_millis(100));
    }
}
