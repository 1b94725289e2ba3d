use super::*;
use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

/// 构造一个形如 JWT 的测试令牌（header.payload.signature）
fn make_token(claims_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims_json);
    format!("{header}.{payload}.sig")
}

#[test]
fn decodes_admin_role() {
    let token = make_token(r#"{"role":"admin","exp":1700000000}"#);
    let claims = TokenClaims::decode(&token).unwrap();
    assert_eq!(claims.role, Role::Admin);
}

#[test]
fn missing_role_defaults_to_user() {
    let token = make_token(r#"{"sub":"alice"}"#);
    let claims = TokenClaims::decode(&token).unwrap();
    assert_eq!(claims.role, Role::User);
}

#[test]
fn accepts_padded_base64url_payload() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    // 16 字节的声明串，保证编码结果带 '=' 填充
    let payload = URL_SAFE.encode(r#"{"role":"admin"}"#);
    assert!(payload.ends_with('='));
    let token = format!("{header}.{payload}.sig");
    assert_eq!(TokenClaims::decode(&token).unwrap().role, Role::Admin);
}

#[test]
fn rejects_token_without_payload_segment() {
    assert!(matches!(
        TokenClaims::decode("opaque-token"),
        Err(TokenError::MissingPayload)
    ));
}

#[test]
fn rejects_garbage_payload() {
    assert!(matches!(
        TokenClaims::decode("x.%%%%.y"),
        Err(TokenError::Base64(_))
    ));
    let token = make_token("not json at all");
    assert!(matches!(
        TokenClaims::decode(&token),
        Err(TokenError::Claims(_))
    ));
}
