//! API 客户端模块
//!
//! 单一共享的请求层：统一基地址、JSON 内容类型与承载令牌附加，
//! 并集中处理"会话过期"（401/403 -> 清除会话 + 阻塞提示，重定向由
//! 路由服务的会话监听完成，不依赖组件作用域的导航 hook）。
//!
//! 领域服务（items / locations / users）以方法形式分散在子模块中，
//! 每个 CRUD 动作对应一次 HTTP 调用，错误在此层记录后原样上抛。

mod items;
mod locations;
mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth::SessionContext;
use crate::web::{HttpClient, HttpError, HttpMethod, dialog};

/// API 层错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 传输层失败（网络不可达、请求构建失败等）
    #[error(transparent)]
    Transport(#[from] HttpError),
    /// 服务端返回非 2xx 状态
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// 会话已过期（401/403，令牌已被清除）
    #[error("session expired")]
    SessionExpired,
    /// 请求体序列化或响应体解析失败
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 从 Context 获取共享 API 客户端
pub fn use_api() -> ApiClient {
    leptos::prelude::use_context::<ApiClient>().expect("ApiClient should be provided")
}

/// 共享 API 客户端
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionContext) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并返回响应体文本
    ///
    /// `with_session` 为 true 时附加承载令牌，并把 401/403 当作会话过期
    /// 处理；登录等匿名调用传 false，避免凭据错误被误判为会话过期。
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        with_session: bool,
    ) -> Result<String, ApiError> {
        let result = self.execute_inner(method, path, body, with_session).await;

        if let Err(e) = &result {
            web_sys::console::error_1(
                &format!("[Api] {} {} failed: {}", method.as_str(), path, e).into(),
            );
        }

        result
    }

    async fn execute_inner(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        with_session: bool,
    ) -> Result<String, ApiError> {
        let mut request = HttpClient::request(method, &self.url(path))
            .header("Content-Type", "application/json");

        if with_session {
            if let Some(token) = self.session.token() {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // 会话过期：清除令牌，阻塞提示，交由路由服务重定向
        if with_session && (status == 401 || status == 403) {
            self.session.clear();
            dialog::alert("Session expired. Please log in again.");
            return Err(ApiError::SessionExpired);
        }

        let ok = response.ok();
        let text = response.text().await?;

        if !ok {
            return Err(ApiError::Status {
                status,
                message: text,
            });
        }

        Ok(text)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(HttpMethod::Get, path, None, true).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        let text = self.execute(method, path, Some(body), true).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// 发送带请求体的调用并忽略响应体内容
    async fn send_json_expect_empty<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_string(body)?;
        self.execute(method, path, Some(body), true).await?;
        Ok(())
    }

    async fn delete_expect_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(HttpMethod::Delete, path, None, true).await?;
        Ok(())
    }

    /// 匿名 POST（不附加令牌，不做会话过期处理）
    async fn post_json_anonymous<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body)?;
        let text = self
            .execute(HttpMethod::Post, path, Some(body), false)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}
