//! 用户与认证服务

use super::{ApiClient, ApiError};
use crate::models::{LoginRequest, LoginResponse, MessageResponse, User};
use crate::web::HttpMethod;

impl ApiClient {
    /// 登录（匿名调用：401 是凭据错误，而非会话过期）
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json_anonymous("/auth/login", credentials).await
    }

    /// 注册新用户（需要 admin 会话）
    pub async fn register_user(&self, user: &User) -> Result<(), ApiError> {
        self.send_json_expect_empty(HttpMethod::Post, "/auth/register", user)
            .await
    }

    /// 获取全部用户
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    /// 按用户名获取用户详情
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{}", username)).await
    }

    /// 更新用户，返回服务端的结果消息
    pub async fn update_user(&self, id: &str, user: &User) -> Result<MessageResponse, ApiError> {
        self.send_json(HttpMethod::Put, &format!("/users/{}", id), user)
            .await
    }

    /// 删除用户
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete_expect_empty(&format!("/users/{}", id)).await
    }
}
