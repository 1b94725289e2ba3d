//! 会话管理模块
//!
//! 管理承载令牌的生命周期，与路由系统解耦：
//! 路由服务通过注入的会话视图信号执行守卫与重定向。
//!
//! 生命周期：登录时建立 -> 登出 / 闲置超时 / 401 / 403 时销毁。

use leptos::prelude::*;

use crate::models::Role;
use crate::token::TokenClaims;
use crate::web::route::SessionView;
use crate::web::storage;

/// LocalStorage 中令牌的键名
const STORAGE_TOKEN_KEY: &str = "token";

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前承载令牌（仅在认证成功后存在）
    pub token: Option<String>,
    /// 令牌解码出的声明
    pub claims: Option<TokenClaims>,
}

impl SessionState {
    fn authenticated(token: String, claims: TokenClaims) -> Self {
        Self {
            token: Some(token),
            claims: Some(claims),
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 从 LocalStorage 恢复令牌
    ///
    /// 解码失败记录日志并清除残留令牌，视为"无有效会话"。
    pub fn init_from_storage(&self) {
        let Some(token) = storage::get(STORAGE_TOKEN_KEY) else {
            return;
        };

        match TokenClaims::decode(&token) {
            Ok(claims) => {
                self.set_state.set(SessionState::authenticated(token, claims));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Session] Error decoding token: {e}").into());
                storage::remove(STORAGE_TOKEN_KEY);
            }
        }
    }

    /// 建立会话：持久化令牌并更新内存状态
    ///
    /// 令牌无法解码时不建立会话，错误交由调用方呈现。
    pub fn establish(&self, token: String) -> Result<(), crate::token::TokenError> {
        let claims = TokenClaims::decode(&token)?;
        storage::set(STORAGE_TOKEN_KEY, &token);
        self.set_state.set(SessionState::authenticated(token, claims));
        Ok(())
    }

    /// 销毁会话：清除持久化令牌与内存状态
    ///
    /// 注意：不需要手动导航，路由服务会监听会话变化并自动重定向。
    pub fn clear(&self) {
        storage::remove(STORAGE_TOKEN_KEY);
        self.set_state.set(SessionState::default());
    }

    /// 当前令牌（非响应式读取，用于构造请求头）
    pub fn token(&self) -> Option<String> {
        self.state.get_untracked().token
    }

    /// 当前角色（响应式读取）
    pub fn role(&self) -> Option<Role> {
        self.state.get().claims.map(|c| c.role)
    }

    /// 会话视图信号（用于路由服务注入）
    pub fn view_signal(&self) -> Signal<SessionView> {
        let state = self.state;
        Signal::derive(move || {
            let state = state.get();
            SessionView {
                authenticated: state.token.is_some(),
                role: state.claims.map(|c| c.role),
            }
        })
    }

    /// 是否已认证（响应式读取）
    pub fn is_authenticated(&self) -> bool {
        self.state.get().token.is_some()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
