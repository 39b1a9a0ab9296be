//! 认证模块
//!
//! 管理会话状态（用户名 + Bearer token），并镜像到 LocalStorage。
//! 路由服务通过注入的认证信号来检查认证状态，与本模块解耦。
//!
//! token 只被信任，不做有效性校验；受保护的调用失败时才会暴露过期问题。

use leptos::prelude::*;

use crate::api::StoreApi;
use crate::error::ApiError;
use crate::web::{HttpClient, KeyValueStore};

pub const STORAGE_USERNAME_KEY: &str = "username";
pub const STORAGE_TOKEN_KEY: &str = "token";

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: Option<String>,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<Option<Session>>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(None);
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(Option::is_some))
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Option::is_some)
    }

    pub fn username_untracked(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().map(|s| s.username.clone()))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().and_then(|s| s.token.clone()))
    }

    pub fn set_session(&self, session: Option<Session>) {
        self.set_state.set(session);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 读取已持久化的会话；没有用户名即视为未登录
pub fn load_session(store: &impl KeyValueStore) -> Option<Session> {
    let username = store.get(STORAGE_USERNAME_KEY).filter(|u| !u.is_empty())?;
    let token = store.get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty());
    Some(Session { username, token })
}

pub fn save_session(store: &impl KeyValueStore, session: &Session) {
    if let Some(token) = &session.token {
        store.set(STORAGE_TOKEN_KEY, token);
    }
    store.set(STORAGE_USERNAME_KEY, &session.username);
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.delete(STORAGE_USERNAME_KEY);
    store.delete(STORAGE_TOKEN_KEY);
}

/// 初始化认证状态：应用启动时从存储中读取一次
pub fn init_auth(ctx: &AuthContext, store: &impl KeyValueStore) {
    let session = load_session(store);
    if let Some(session) = &session {
        log_info!("[Auth] Restored session for {}", session.username);
    }
    ctx.set_session(session);
}

/// 登录并持久化会话
///
/// 失败时不写入任何存储。
pub async fn sign_in<C: HttpClient>(
    api: &StoreApi<C>,
    store: &impl KeyValueStore,
    username: String,
    password: String,
) -> Result<Session, ApiError> {
    let response = api.login(username.clone(), password).await?;

    let session = Session {
        username,
        token: Some(response.token),
    };
    save_session(store, &session);
    log_info!("[Auth] Signed in as {}", session.username);
    Ok(session)
}

/// 注销：清除存储与内存状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn sign_out(ctx: &AuthContext, store: &impl KeyValueStore) {
    clear_session(store);
    ctx.set_session(None);
    log_info!("[Auth] Signed out");
}
