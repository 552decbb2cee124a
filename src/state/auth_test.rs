use super::*;

fn user(roles: &[&str]) -> User {
    User {
        id: 1,
        username: "u".into(),
        email: "e".into(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// restored
// =============================================================

#[test]
fn restored_with_token_and_user_is_authenticated() {
    let state = AuthState::restored(Some("T".into()), Some(user(&["ROLE_USER"])));
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("T"));
}

#[test]
fn restored_with_only_token_is_signed_out() {
    let state = AuthState::restored(Some("T".into()), None);
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

#[test]
fn restored_with_only_user_is_signed_out() {
    let state = AuthState::restored(None, Some(user(&[])));
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_adopts_session_and_clears_flags() {
    let mut state = AuthState { loading: true, error: Some("old".into()), ..AuthState::default() };
    state.login("T".into(), user(&["ROLE_USER"]));
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(user(&["ROLE_USER"])));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn login_replaces_previous_user_wholesale() {
    let mut state = AuthState::default();
    state.login("T1".into(), user(&["ROLE_ADMIN"]));
    state.login("T2".into(), user(&["ROLE_USER"]));
    assert_eq!(state.token.as_deref(), Some("T2"));
    assert!(!state.has_any_role(&["ROLE_ADMIN"]));
}

#[test]
fn logout_twice_stays_signed_out() {
    let mut state = AuthState::restored(Some("T".into()), Some(user(&[])));
    state.logout();
    assert_eq!(state, AuthState::default());
    state.logout();
    assert_eq!(state, AuthState::default());
}

#[test]
fn set_loading_touches_only_loading() {
    let mut state = AuthState::restored(Some("T".into()), Some(user(&[])));
    let before = state.clone();
    state.set_loading(true);
    assert!(state.loading);
    assert_eq!(AuthState { loading: false, ..state.clone() }, before);
}

#[test]
fn set_error_forces_loading_off() {
    let mut state = AuthState::default();
    state.set_loading(true);
    state.set_error(Some("boom".into()));
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(!state.loading);

    state.set_error(None);
    assert!(state.error.is_none());
}

#[test]
fn has_any_role_false_when_signed_out() {
    assert!(!AuthState::default().has_any_role(&["ROLE_USER"]));
}
