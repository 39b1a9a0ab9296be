//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫(resolve) -> 写入 History -> 更新路由信号"。

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// History 写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证状态以注入信号的形式提供，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务，并对初始 URL 执行一次守卫
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let requested = AppRoute::from_path(&path);
        let initial_route = requested.resolve(is_authenticated.get_untracked());
        if initial_route != requested {
            log_info!("[Router] {} redirected to {}", path, initial_route);
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 按 URL 导航
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), path, HistoryMode::Push);
    }

    /// 导航到指定路由；已处于该路由时不重复写入 History
    pub fn go(&self, route: AppRoute) {
        if self.current_route.get_untracked() == route {
            return;
        }
        self.navigate(route.to_path());
    }

    /// 守卫并加载目标路由
    ///
    /// 未命中守卫时保留请求的原始路径（未知路径也原样保留）。
    fn apply(&self, requested: AppRoute, requested_path: &str, mode: HistoryMode) {
        let target = requested.resolve(self.is_authenticated.get_untracked());
        let path = if target == requested {
            requested_path
        } else {
            log_info!("[Router] {} redirected to {}", requested_path, target);
            target.to_path()
        };

        match mode {
            HistoryMode::Push => push_history_state(path),
            HistoryMode::Replace => replace_history_state(path),
        }
        self.set_route.set(target);
    }

    /// 初始化浏览器后退/前进按钮监听，popstate 时同样执行守卫
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            router.apply(AppRoute::from_path(&path), &path, HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时对当前路由重新执行守卫
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if let Some(target) = auth_redirect(route, is_auth) {
                log_info!(
                    "[Router] Auth state changed (authenticated: {}), redirecting to {}.",
                    is_auth,
                    target
                );
                push_history_state(target.to_path());
                set_route.set(target);
            }
        });
    }
}

/// 认证状态变化后当前路由应跳转到的目标，无需跳转时返回 `None`
fn auth_redirect(route: AppRoute, is_authenticated: bool) -> Option<AppRoute> {
    let target = route.resolve(is_authenticated);
    (target != route).then_some(target)
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，交给路由服务导航而不刷新页面
#[component]
pub fn Link(to: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_leaves_protected_pages() {
        for route in [
            AppRoute::Order,
            AppRoute::OrderStatus,
            AppRoute::CancelOrder,
            AppRoute::LinkBankAccount,
        ] {
            assert_eq!(auth_redirect(route, false), Some(AppRoute::Login), "{route}");
            assert_eq!(auth_redirect(route, true), None, "{route}");
        }
    }

    #[test]
    fn login_moves_to_order() {
        assert_eq!(auth_redirect(AppRoute::Login, true), Some(AppRoute::Order));
        assert_eq!(auth_redirect(AppRoute::Login, false), None);
    }

    #[test]
    fn open_pages_stay_put() {
        for route in [AppRoute::Register, AppRoute::NotFound] {
            assert_eq!(auth_redirect(route, true), None);
            assert_eq!(auth_redirect(route, false), None);
        }
    }
}
