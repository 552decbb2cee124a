use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::auth::AuthService;
use crate::net::mock::MockTransport;
use crate::net::transport::HttpMethod;
use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStore;

fn provider(transport: &MockTransport, storage: &MemoryStore) -> AuthProvider<MockTransport, MemoryStore> {
    AuthProvider::new(AuthService::new(ApiClient::new(
        ApiConfig::from_value(Some("http://api.test/api")),
        transport.clone(),
        SessionStore::new(storage.clone()),
    )))
}

fn signed_in_admin(transport: &MockTransport) -> (AuthProvider<MockTransport, MemoryStore>, MemoryStore) {
    let storage = MemoryStore::new();
    let admin = User {
        id: 1,
        username: "admin".into(),
        email: "admin@x.io".into(),
        roles: ["ROLE_ADMIN".to_owned(), "ROLE_USER".to_owned()].into_iter().collect(),
    };
    SessionStore::new(storage.clone()).save("T", &admin);
    (provider(transport, &storage), storage)
}

fn row(id: i64, username: &str, active: bool) -> serde_json::Value {
    json!({ "id": id, "username": username, "email": format!("{username}@x.io"), "roles": ["ROLE_USER"], "createdAt": "2023-01-01", "active": active })
}

fn table_with(rows: &[serde_json::Value]) -> RwSignal<AdminState> {
    let users = rows.iter().map(|r| serde_json::from_value(r.clone()).unwrap()).collect();
    let mut state = AdminState::default();
    state.loaded(users);
    RwSignal::new(state)
}

// =============================================================
// Text helpers
// =============================================================

#[test]
fn toggle_notice_describes_new_state() {
    assert_eq!(toggle_notice(true), "User deactivated successfully");
    assert_eq!(toggle_notice(false), "User activated successfully");
}

#[test]
fn status_and_dialog_labels() {
    assert_eq!(status_label(true), "Active");
    assert_eq!(status_label(false), "Inactive");
    assert_eq!(dialog_title(DialogMode::Add), "Add user");
    assert_eq!(dialog_title(DialogMode::Edit(3)), "Edit user");
}

// =============================================================
// load_users
// =============================================================

#[test]
fn load_users_fills_table_with_bearer_request() {
    let transport = MockTransport::new();
    transport.respond(200, json!([row(1, "admin", true), row(2, "user1", false)]));
    let (auth, _) = signed_in_admin(&transport);
    let table = RwSignal::new(AdminState::default());

    block_on(load_users(&auth, table));

    let state = table.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.users.len(), 2);
    assert_eq!(transport.sent()[0].header("Authorization"), Some("Bearer T"));
}

#[test]
fn load_failure_sets_error_banner() {
    let transport = MockTransport::new();
    transport.respond(500, json!({ "message": "boom" }));
    let (auth, _) = signed_in_admin(&transport);
    let table = RwSignal::new(AdminState::default());

    block_on(load_users(&auth, table));

    let state = table.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("User management error: boom"));
    assert!(auth.snapshot().is_authenticated());
}

#[test]
fn unauthorized_load_signs_out() {
    let transport = MockTransport::new();
    transport.respond(401, json!({ "message": "expired" }));
    let (auth, storage) = signed_in_admin(&transport);
    let table = RwSignal::new(AdminState::default());

    block_on(load_users(&auth, table));

    assert!(storage.is_empty());
    assert!(!auth.snapshot().is_authenticated());
    assert!(table.get_untracked().error.is_some());
}

// =============================================================
// save_user
// =============================================================

#[test]
fn invalid_form_sends_nothing() {
    let transport = MockTransport::new();
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[]);
    let form = UserForm { username: "  ".into(), email: "e@x.io".into(), is_admin: false };

    let closed = block_on(save_user(&auth, table, DialogMode::Add, &form));

    assert!(!closed);
    assert!(transport.sent().is_empty());
    assert_eq!(table.get_untracked().notice, Some(Notice::error("Username is required")));
}

#[test]
fn add_posts_draft_and_appends_row() {
    let transport = MockTransport::new();
    transport.respond(200, row(7, "carol", true));
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[row(1, "admin", true)]);
    let form = UserForm { username: " carol ".into(), email: "carol@x.io".into(), is_admin: true };

    let closed = block_on(save_user(&auth, table, DialogMode::Add, &form));

    assert!(closed);
    let sent = transport.sent_json(0);
    assert_eq!(sent["username"], json!("carol"));
    assert_eq!(sent["roles"], json!(["ROLE_ADMIN", "ROLE_USER"]));
    assert_eq!(sent["active"], json!(true));
    let state = table.get_untracked();
    assert_eq!(state.users.len(), 2);
    assert_eq!(state.notice, Some(Notice::success(USER_ADDED)));
}

#[test]
fn edit_puts_to_user_and_keeps_active_flag() {
    let transport = MockTransport::new();
    transport.respond(200, row(2, "renamed", false));
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[row(1, "admin", true), row(2, "user1", false)]);
    let form = UserForm { username: "renamed".into(), email: "user1@x.io".into(), is_admin: false };

    let closed = block_on(save_user(&auth, table, DialogMode::Edit(2), &form));

    assert!(closed);
    let sent = transport.sent();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert_eq!(sent[0].url, "http://api.test/api/users/2");
    assert_eq!(transport.sent_json(0)["active"], json!(false));
    let state = table.get_untracked();
    assert_eq!(state.users[1].username, "renamed");
    assert_eq!(state.notice, Some(Notice::success(USER_UPDATED)));
}

#[test]
fn failed_save_keeps_dialog_open_with_error_notice() {
    let transport = MockTransport::new();
    transport.fail("offline");
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[]);
    let form = UserForm { username: "carol".into(), email: "carol@x.io".into(), is_admin: false };

    let closed = block_on(save_user(&auth, table, DialogMode::Add, &form));

    assert!(!closed);
    let notice = table.get_untracked().notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(table.get_untracked().users.is_empty());
}

// =============================================================
// remove_user / toggle_user
// =============================================================

#[test]
fn remove_drops_row_on_success() {
    let transport = MockTransport::new();
    transport.respond_raw(204, "");
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[row(1, "admin", true), row(2, "user1", true)]);

    assert!(block_on(remove_user(&auth, table, 2)));

    let state = table.get_untracked();
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.notice, Some(Notice::success(USER_DELETED)));
}

#[test]
fn remove_failure_keeps_row() {
    let transport = MockTransport::new();
    transport.respond(500, json!({}));
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[row(2, "user1", true)]);

    assert!(!block_on(remove_user(&auth, table, 2)));

    let state = table.get_untracked();
    assert_eq!(state.users.len(), 1);
    assert_eq!(
        state.notice,
        Some(Notice::error("User management error: Please try again later."))
    );
}

#[test]
fn toggle_flips_active_and_reports() {
    let transport = MockTransport::new();
    transport.respond(200, row(2, "user1", false));
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[row(2, "user1", true)]);

    assert!(block_on(toggle_user(&auth, table, 2)));

    assert_eq!(transport.sent_json(0)["active"], json!(false));
    let state = table.get_untracked();
    assert!(!state.users[0].active);
    assert_eq!(state.notice, Some(Notice::success("User deactivated successfully")));
}

#[test]
fn toggle_unknown_user_sends_nothing() {
    let transport = MockTransport::new();
    let (auth, _) = signed_in_admin(&transport);
    let table = table_with(&[]);

    assert!(!block_on(toggle_user(&auth, table, 99)));
    assert!(transport.sent().is_empty());
}
