//! 领域模型模块
//!
//! 扁平记录结构，服务端为权威数据源；字段名与远端 API 的线上格式
//! （PascalCase）保持一致。本模块同时承载表单校验、列表过滤等纯逻辑。

use serde::{Deserialize, Serialize};

// =========================================================
// 枚举类型
// =========================================================

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn from_form_value(value: &str) -> Self {
        if value == "admin" { Role::Admin } else { Role::User }
    }
}

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    #[default]
    Light,
    Dark,
}

impl UiTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiTheme::Light => "light",
            UiTheme::Dark => "dark",
        }
    }

    pub fn from_form_value(value: &str) -> Self {
        if value == "dark" { UiTheme::Dark } else { UiTheme::Light }
    }
}

// =========================================================
// 实体记录
// =========================================================

/// 库存条目
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Bin", default)]
    pub bin: String,
    #[serde(rename = "Quantity", default)]
    pub quantity: u32,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Owner", default)]
    pub owner: String,
}

impl Item {
    /// 表单是否满足提交条件（必填字段校验）
    pub fn ready_to_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// 所有者匹配（大小写不敏感的包含关系）
    pub fn is_owned_by(&self, username: &str) -> bool {
        owner_matches(&self.owner, username)
    }
}

/// 存储位置（房间）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Building", default)]
    pub building: String,
    #[serde(rename = "Owner", default)]
    pub owner: String,
    #[serde(rename = "Image", default)]
    pub image: String,
}

impl Location {
    pub fn ready_to_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        owner_matches(&self.owner, username)
    }
}

/// 用户账户
///
/// `Password` 为只写字段：为空时不参与序列化，服务端响应中缺省。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "Role", default)]
    pub role: Role,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "DisplayName", default)]
    pub display_name: String,
    #[serde(rename = "AvatarURL", default)]
    pub avatar_url: String,
    #[serde(rename = "UITheme", default)]
    pub ui_theme: UiTheme,
    #[serde(rename = "Team", default)]
    pub team: String,
    #[serde(rename = "Bio", default)]
    pub bio: String,
    #[serde(rename = "SQL_USER", default)]
    pub sql_user: bool,
}

impl User {
    /// 注册表单的必填字段是否全部填写
    pub fn registration_ready(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.password.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.display_name.trim().is_empty()
            && !self.team.trim().is_empty()
    }
}

// =========================================================
// 认证相关的请求 / 响应
// =========================================================

/// 登录请求（字段名遵循远端 API 的既有格式）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "password")]
    pub password: String,
}

/// 登录响应
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// 通用消息响应（如用户更新结果）
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

pub const USER_UPDATED_MESSAGE: &str = "User updated successfully";

// =========================================================
// 提交动作判定
// =========================================================

/// 表单提交映射到的 CRUD 动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update,
}

/// 由 ID 是否存在决定是新增还是更新
pub fn submit_action(id: Option<&str>) -> SubmitAction {
    match id {
        Some(id) if !id.is_empty() => SubmitAction::Update,
        _ => SubmitAction::Create,
    }
}

// =========================================================
// 过滤与查询
// =========================================================

/// 位置列表的客户端过滤条件
///
/// 空字段视为通配；匹配规则为大小写不敏感的子串包含。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationFilter {
    pub name: String,
    pub building: String,
    pub owner: String,
}

impl LocationFilter {
    pub fn matches(&self, location: &Location) -> bool {
        contains_ci(&location.name, &self.name)
            && contains_ci(&location.building, &self.building)
            && contains_ci(&location.owner, &self.owner)
    }
}

/// 条目列表的服务端查询条件（作为 query string 传输）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemQuery {
    pub location: Option<String>,
    pub name: Option<String>,
}

impl ItemQuery {
    pub fn by_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// 由条目草稿构造搜索条件（空字段不参与过滤）
    pub fn from_draft(draft: &Item) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            location: non_empty(&draft.location),
            name: non_empty(&draft.name),
        }
    }

    /// 生成百分号编码后的 query string（含前导 `?`，无条件时为空串）
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(location) = &self.location {
            pairs.push(format!("Location={}", urlencoding::encode(location)));
        }
        if let Some(name) = &self.name {
            pairs.push(format!("Name={}", urlencoding::encode(name)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// 大小写不敏感的包含判断；needle 为空时恒为真
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn owner_matches(owner: &str, username: &str) -> bool {
    !owner.is_empty() && owner.to_lowercase().contains(&username.to_lowercase())
}

#[cfg(test)]
mod tests;
