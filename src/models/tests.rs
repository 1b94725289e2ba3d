use super::*;
use serde_json::json;

// =========================================================
// 序列化格式
// =========================================================

#[test]
fn item_uses_wire_field_names() {
    let item: Item = serde_json::from_value(json!({
        "ID": "42",
        "Name": "Soldering iron",
        "Description": "60W adjustable",
        "Location": "Lab",
        "Bin": "B3",
        "Quantity": 4,
        "Image": "https://img.example/iron.png",
        "Owner": "alice"
    }))
    .unwrap();

    assert_eq!(item.id.as_deref(), Some("42"));
    assert_eq!(item.name, "Soldering iron");
    assert_eq!(item.quantity, 4);

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["Name"], "Soldering iron");
    assert_eq!(value["Bin"], "B3");
}

#[test]
fn item_without_id_omits_id_field() {
    let item = Item {
        name: "Multimeter".to_string(),
        ..Item::default()
    };
    let value = serde_json::to_value(&item).unwrap();
    assert!(value.get("ID").is_none());
}

#[test]
fn item_defaults_tolerate_missing_fields() {
    let item: Item = serde_json::from_value(json!({ "Name": "Cable" })).unwrap();
    assert_eq!(item.quantity, 0);
    assert!(item.id.is_none());
    assert!(item.image.is_empty());
}

#[test]
fn user_password_is_write_only() {
    // 服务端响应不含 Password 时反序列化为默认空串
    let user: User = serde_json::from_value(json!({
        "ID": "7",
        "Username": "bob",
        "Role": "admin",
        "UITheme": "dark",
        "SQL_USER": true
    }))
    .unwrap();
    assert!(user.password.is_empty());
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.ui_theme, UiTheme::Dark);
    assert!(user.sql_user);

    // 密码为空时不参与序列化
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("Password").is_none());

    // 填写密码后正常序列化
    let user = User {
        password: "hunter2".to_string(),
        ..user
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["Password"], "hunter2");
}

#[test]
fn login_request_wire_shape() {
    let req = LoginRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["Username"], "alice");
    assert_eq!(value["password"], "secret");
}

// =========================================================
// 提交动作与校验
// =========================================================

#[test]
fn submit_action_depends_on_id_presence() {
    assert_eq!(submit_action(None), SubmitAction::Create);
    assert_eq!(submit_action(Some("")), SubmitAction::Create);
    assert_eq!(submit_action(Some("17")), SubmitAction::Update);
}

#[test]
fn item_requires_name_to_submit() {
    let mut item = Item::default();
    assert!(!item.ready_to_submit());
    item.name = "   ".to_string();
    assert!(!item.ready_to_submit());
    item.name = "Rack bolt".to_string();
    assert!(item.ready_to_submit());
}

#[test]
fn registration_requires_all_mandatory_fields() {
    let mut user = User {
        username: "carol".to_string(),
        password: "pw".to_string(),
        email: "carol@example.com".to_string(),
        display_name: "Carol".to_string(),
        team: "Ops".to_string(),
        ..User::default()
    };
    assert!(user.registration_ready());

    user.email = String::new();
    assert!(!user.registration_ready());
}

// =========================================================
// 过滤与查询
// =========================================================

fn sample_location(name: &str, building: &str, owner: &str) -> Location {
    Location {
        name: name.to_string(),
        building: building.to_string(),
        owner: owner.to_string(),
        ..Location::default()
    }
}

#[test]
fn location_filter_is_case_insensitive_contains() {
    let loc = sample_location("Server Room", "HQ West", "Alice");

    let filter = LocationFilter {
        name: "server".to_string(),
        building: "west".to_string(),
        owner: String::new(),
    };
    assert!(filter.matches(&loc));

    let filter = LocationFilter {
        name: "closet".to_string(),
        ..LocationFilter::default()
    };
    assert!(!filter.matches(&loc));
}

#[test]
fn empty_filter_matches_everything() {
    let loc = sample_location("Anything", "Anywhere", "");
    assert!(LocationFilter::default().matches(&loc));
}

#[test]
fn ownership_check_ignores_case_and_requires_owner() {
    let item = Item {
        owner: "Alice, Bob".to_string(),
        ..Item::default()
    };
    assert!(item.is_owned_by("alice"));
    assert!(item.is_owned_by("BOB"));
    assert!(!item.is_owned_by("carol"));

    let unowned = Item::default();
    assert!(!unowned.is_owned_by("alice"));
}

#[test]
fn item_query_builds_encoded_query_string() {
    let query = ItemQuery::by_location("Server Room");
    assert_eq!(query.to_query_string(), "?Location=Server%20Room");

    let query = ItemQuery {
        location: Some("Lab".to_string()),
        name: Some("iron".to_string()),
    };
    assert_eq!(query.to_query_string(), "?Location=Lab&Name=iron");

    assert_eq!(ItemQuery::default().to_query_string(), "");
}

#[test]
fn item_query_from_draft_skips_blank_fields() {
    let draft = Item {
        name: "  ".to_string(),
        location: "Lab".to_string(),
        ..Item::default()
    };
    let query = ItemQuery::from_draft(&draft);
    assert_eq!(query.name, None);
    assert_eq!(query.location.as_deref(), Some("Lab"));
}
