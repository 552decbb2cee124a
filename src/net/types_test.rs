use super::*;

fn roles(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|r| (*r).to_owned()).collect()
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_parses_server_payload() {
    let raw = r#"{"token":"T","type":"Bearer","id":1,"username":"u","email":"e","roles":["ROLE_USER"]}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "T");
    assert_eq!(resp.token_type, "Bearer");
    assert_eq!(
        resp.user(),
        User { id: 1, username: "u".into(), email: "e".into(), roles: roles(&["ROLE_USER"]) }
    );
}

#[test]
fn login_response_defaults_missing_type_to_bearer() {
    let raw = r#"{"token":"T","id":1,"username":"u","email":"e","roles":[]}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token_type, "Bearer");
}

// =============================================================
// SignupRequest
// =============================================================

#[test]
fn signup_request_omits_role_when_not_requested() {
    let req = SignupRequest {
        username: "u".into(),
        email: "u@example.com".into(),
        password: "secret1".into(),
        role: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "username": "u", "email": "u@example.com", "password": "secret1" })
    );
}

#[test]
fn signup_request_includes_requested_role() {
    let req = SignupRequest {
        username: "u".into(),
        email: "u@example.com".into(),
        password: "secret1".into(),
        role: Some(vec!["admin".into()]),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["role"], serde_json::json!(["admin"]));
}

// =============================================================
// User roles
// =============================================================

#[test]
fn user_role_checks() {
    let user = User {
        id: 2,
        username: "a".into(),
        email: "a@example.com".into(),
        roles: roles(&[USER_ROLE, ADMIN_ROLE]),
    };
    assert!(user.is_admin());
    assert!(user.has_any_role(&["ROLE_MOD", ADMIN_ROLE]));
    assert!(!user.has_any_role(&["ROLE_MOD"]));
    assert!(!user.has_any_role::<&str>(&[]));
}

#[test]
fn user_without_roles_field_deserializes_empty() {
    let user: User = serde_json::from_str(r#"{"id":1,"username":"u","email":"e"}"#).unwrap();
    assert!(user.roles.is_empty());
}

// =============================================================
// AdminUser
// =============================================================

#[test]
fn admin_user_reads_camel_case_created_at() {
    let raw = r#"{"id":3,"username":"b","email":"b@x.io","roles":["ROLE_USER"],"createdAt":"2023-02-20","active":false}"#;
    let user: AdminUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.created_at, "2023-02-20");
    assert!(!user.active);
    assert!(!user.is_admin());
}

#[test]
fn admin_user_defaults_to_active() {
    let user: AdminUser = serde_json::from_str(r#"{"id":3,"username":"b","email":"b@x.io"}"#).unwrap();
    assert!(user.active);
    assert_eq!(user.created_at, "");
}
