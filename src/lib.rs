//! Storefront 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web::route`: 路由定义与守卫规则（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `api`: 商店后端 API 客户端
//! - `components`: 各页面组件

#[macro_use]
mod log;

mod api;
mod auth;
mod components {
    pub mod cancel_order;
    pub mod link_bank_account;
    pub mod login;
    pub mod nav;
    pub mod order;
    pub mod order_status;
    pub mod register;
}
mod config;
mod error;

use crate::auth::{AuthContext, init_auth};
use crate::components::cancel_order::CancelOrderPage;
use crate::components::link_bank_account::LinkBankAccountPage;
use crate::components::login::LoginPage;
use crate::components::nav::NavBar;
use crate::components::order::OrderPage;
use crate::components::order_status::OrderStatusPage;
use crate::components::register::RegisterPage;
use crate::config::ClientConfig;

use leptos::prelude::*;

// 浏览器原生 API 封装模块
pub(crate) mod web {
    mod dialog;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use dialog::alert;
    pub use http::{FetchClient, HttpClient, HttpError, HttpRequest};
    pub use storage::{KeyValueStore, LocalStorage};
    pub use timer::sleep;

    #[cfg(test)]
    pub use http::MockHttpClient;
    #[cfg(test)]
    pub use storage::MemoryStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        // 根路径总会被守卫重定向，不直接渲染
        AppRoute::Home => view! { <></> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Order => view! { <OrderPage /> }.into_any(),
        AppRoute::OrderStatus => view! { <OrderStatusPage /> }.into_any(),
        AppRoute::CancelOrder => view! { <CancelOrderPage /> }.into_any(),
        AppRoute::LinkBankAccount => view! { <LinkBankAccountPage /> }.into_any(),
        AppRoute::NotFound => view! { <h2>"Page not found"</h2> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 加载运行时配置
    let config = ClientConfig::load();
    log_info!("[App] API base URL: {:?}", config.api_base_url);
    provide_context(config);

    // 2. 创建认证上下文并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &web::LocalStorage);

    // 3. 获取认证状态信号，注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <NavBar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
