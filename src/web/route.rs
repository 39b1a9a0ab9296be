//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则及其重定向目标。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 根路径，按会话状态跳转
    #[default]
    Home,
    Login,
    Register,
    /// 以下四个页面需要认证
    Order,
    OrderStatus,
    CancelOrder,
    LinkBankAccount,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（忽略末尾斜杠）
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/order" => Self::Order,
            "/order-status" => Self::OrderStatus,
            "/cancel-order" => Self::CancelOrder,
            "/link-bank-account" => Self::LinkBankAccount,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Order => "/order",
            Self::OrderStatus => "/order-status",
            Self::CancelOrder => "/cancel-order",
            Self::LinkBankAccount => "/link-bank-account",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Order | Self::OrderStatus | Self::CancelOrder | Self::LinkBankAccount
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Order
    }

    /// 在给定认证状态下，请求此路由最终应落到哪个路由
    pub fn resolve(self, is_authenticated: bool) -> Self {
        match self {
            Self::Home if is_authenticated => Self::auth_success_redirect(),
            Self::Home => Self::auth_failure_redirect(),
            route if route.requires_auth() && !is_authenticated => Self::auth_failure_redirect(),
            route if route.should_redirect_when_authenticated() && is_authenticated => {
                Self::auth_success_redirect()
            }
            route => route,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
