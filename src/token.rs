//! 令牌解码模块
//!
//! 承载令牌（bearer token）是不透明凭据，但其 payload 段可解码出声明
//! （至少包含 `role`）。解码失败一律视为"无有效会话"，由调用方记录日志。
//!
//! 纯逻辑实现：拆分 `.` 分段 -> base64url 解码 -> JSON 解析。

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Role;

/// 令牌解码错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// 从令牌中解码出的声明
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Role,
}

impl TokenClaims {
    /// 解码令牌的 payload 段
    ///
    /// 兼容带填充与不带填充的 base64url 编码。
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests;
