//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、访问要求，以及守卫判定函数。

use std::borrow::Cow;
use std::fmt::Display;

use crate::models::Role;

/// 解码动态路由段
///
/// `+` 保持字面量（与 `decodeURIComponent` 语义一致）；解码产物不是
/// 合法 UTF-8 时按原文保留，避免中断路由解析。
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面
    Login,
    /// 首页：位置（房间）总览 (需要认证，默认路由)
    #[default]
    Home,
    /// 库存条目维护页 (需要认证)
    UpdateInventory,
    /// 存储位置维护页 (需要认证)
    UpdateLocations,
    /// 某个房间内的条目列表，携带解码后的房间名 (需要认证)
    RoomItems(String),
    /// 新增用户页 (需要 admin)
    Register,
    /// 用户管理页 (需要 admin)
    ManageUsers,
    /// 用户资料页，携带解码后的用户名 (需要 admin)
    UserProfile(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => return Self::Home,
            "/login" => return Self::Login,
            "/update-inventory" => return Self::UpdateInventory,
            "/update-locations" => return Self::UpdateLocations,
            "/register" => return Self::Register,
            "/manage-users" => return Self::ManageUsers,
            _ => {}
        }

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["items", room] if !room.is_empty() => Self::RoomItems(decode_segment(room)),
            ["profile", username] if !username.is_empty() => {
                Self::UserProfile(decode_segment(username))
            }
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path（动态段会被百分号编码）
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Home => "/".to_string(),
            Self::UpdateInventory => "/update-inventory".to_string(),
            Self::UpdateLocations => "/update-locations".to_string(),
            Self::RoomItems(room) => format!("/items/{}", urlencoding::encode(room)),
            Self::Register => "/register".to_string(),
            Self::ManageUsers => "/manage-users".to_string(),
            Self::UserProfile(username) => format!("/profile/{}", urlencoding::encode(username)),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::NotFound)
    }

    /// 该路由要求的角色（None 表示任意已认证用户）
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Register | Self::ManageUsers | Self::UserProfile(_) => Some(Role::Admin),
            _ => None,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 守卫判定
// =========================================================

/// 路由守卫看到的会话快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionView {
    pub authenticated: bool,
    pub role: Option<Role>,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 允许渲染
    Allow,
    /// 无有效会话，重定向到登录页
    RedirectLogin,
    /// 角色不满足要求，重定向到首页
    RedirectHome,
}

impl GuardOutcome {
    /// 重定向目标（Allow 时为 None）
    pub fn redirect_target(&self) -> Option<AppRoute> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::RedirectLogin => Some(AppRoute::Login),
            GuardOutcome::RedirectHome => Some(AppRoute::Home),
        }
    }
}

/// 对目标路由执行守卫判定
///
/// 无令牌 -> 登录页；角色不匹配 -> 首页；其余放行。
pub fn evaluate_guard(route: &AppRoute, session: &SessionView) -> GuardOutcome {
    if route.requires_auth() && !session.authenticated {
        return GuardOutcome::RedirectLogin;
    }

    if let Some(required) = route.required_role() {
        if session.role != Some(required) {
            return GuardOutcome::RedirectHome;
        }
    }

    GuardOutcome::Allow
}

#[cfg(test)]
mod tests;
