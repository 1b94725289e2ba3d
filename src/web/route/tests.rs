use super::*;

// =========================================================
// 路径解析
// =========================================================

#[test]
fn parses_static_paths() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(
        AppRoute::from_path("/update-inventory"),
        AppRoute::UpdateInventory
    );
    assert_eq!(
        AppRoute::from_path("/update-locations"),
        AppRoute::UpdateLocations
    );
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/manage-users"), AppRoute::ManageUsers);
}

#[test]
fn parses_dynamic_segments_with_decoding() {
    assert_eq!(
        AppRoute::from_path("/items/Server%20Room"),
        AppRoute::RoomItems("Server Room".to_string())
    );
    assert_eq!(
        AppRoute::from_path("/profile/alice"),
        AppRoute::UserProfile("alice".to_string())
    );
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::from_path("/nonsense"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/items/"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/items/a/b"), AppRoute::NotFound);
}

#[test]
fn to_path_encodes_dynamic_segments() {
    let route = AppRoute::RoomItems("Server Room".to_string());
    assert_eq!(route.to_path(), "/items/Server%20Room");
    // 解析与生成互逆
    assert_eq!(AppRoute::from_path(&route.to_path()), route);
}

#[test]
fn plus_in_dynamic_segment_stays_literal() {
    // 路径段遵循 decodeURIComponent 语义：'+' 不是空格
    assert_eq!(
        AppRoute::from_path("/items/A+B"),
        AppRoute::RoomItems("A+B".to_string())
    );

    let route = AppRoute::RoomItems("A+B".to_string());
    assert_eq!(route.to_path(), "/items/A%2BB");
    assert_eq!(AppRoute::from_path(&route.to_path()), route);
}

#[test]
fn invalid_escapes_are_kept_verbatim() {
    assert_eq!(
        AppRoute::from_path("/items/100%zz"),
        AppRoute::RoomItems("100%zz".to_string())
    );
}

// =========================================================
// 访问要求
// =========================================================

#[test]
fn only_login_and_not_found_are_public() {
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
    assert!(AppRoute::Home.requires_auth());
    assert!(AppRoute::UpdateInventory.requires_auth());
    assert!(AppRoute::RoomItems("x".to_string()).requires_auth());
}

#[test]
fn only_login_bounces_authenticated_users() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Home.should_redirect_when_authenticated());
    assert!(!AppRoute::Register.should_redirect_when_authenticated());
}

#[test]
fn admin_routes_require_admin_role() {
    assert_eq!(AppRoute::Register.required_role(), Some(Role::Admin));
    assert_eq!(AppRoute::ManageUsers.required_role(), Some(Role::Admin));
    assert_eq!(
        AppRoute::UserProfile("alice".to_string()).required_role(),
        Some(Role::Admin)
    );
    assert_eq!(AppRoute::Home.required_role(), None);
}

// =========================================================
// 守卫判定
// =========================================================

fn anonymous() -> SessionView {
    SessionView::default()
}

fn logged_in(role: Role) -> SessionView {
    SessionView {
        authenticated: true,
        role: Some(role),
    }
}

#[test]
fn guard_redirects_anonymous_to_login() {
    for route in [
        AppRoute::Home,
        AppRoute::UpdateInventory,
        AppRoute::ManageUsers,
        AppRoute::RoomItems("Lab".to_string()),
    ] {
        assert_eq!(
            evaluate_guard(&route, &anonymous()),
            GuardOutcome::RedirectLogin,
            "route {route} should redirect to login",
        );
    }
}

#[test]
fn guard_redirects_role_mismatch_to_home() {
    let session = logged_in(Role::User);
    assert_eq!(
        evaluate_guard(&AppRoute::ManageUsers, &session),
        GuardOutcome::RedirectHome
    );
    assert_eq!(
        evaluate_guard(&AppRoute::Register, &session),
        GuardOutcome::RedirectHome
    );
    assert_eq!(
        evaluate_guard(&AppRoute::UserProfile("alice".to_string()), &session),
        GuardOutcome::RedirectHome
    );
}

#[test]
fn guard_allows_matching_sessions() {
    assert_eq!(
        evaluate_guard(&AppRoute::Home, &logged_in(Role::User)),
        GuardOutcome::Allow
    );
    assert_eq!(
        evaluate_guard(&AppRoute::ManageUsers, &logged_in(Role::Admin)),
        GuardOutcome::Allow
    );
    assert_eq!(
        evaluate_guard(&AppRoute::Login, &anonymous()),
        GuardOutcome::Allow
    );
}

#[test]
fn redirect_targets() {
    assert_eq!(GuardOutcome::Allow.redirect_target(), None);
    assert_eq!(
        GuardOutcome::RedirectLogin.redirect_target(),
        Some(AppRoute::Login)
    );
    assert_eq!(
        GuardOutcome::RedirectHome.redirect_target(),
        Some(AppRoute::Home)
    );
}
