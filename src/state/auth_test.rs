use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn identity_tracks_the_current_user() {
    let state = AuthState {
        user: Some(User { id: "u1".to_owned(), ..User::default() }),
        loading: false,
    };
    assert_eq!(state.identity(), Identity::Known("u1".to_owned()));
    assert!(state.is_authenticated());
}

#[test]
fn signed_out_identity_is_anonymous() {
    let state = AuthState::default();
    assert!(state.identity().is_anonymous());
}

// =============================================================
// Session cache (no browser in native tests)
// =============================================================

#[test]
fn cache_accessors_degrade_off_browser() {
    // Outside a hydrated build these are inert; the contract is simply that
    // they never panic and read as "not signed in".
    assert!(cached_token().is_none());
    assert!(cached_user().is_none());
    clear_session();
}
