use super::*;

fn session(username: &str, is_verified: bool) -> Session {
    Session { username: username.to_owned(), is_verified }
}

// =============================================================
// AuthState / SessionView
// =============================================================

#[test]
fn auth_state_default_is_anonymous() {
    assert_eq!(SessionView::from(AuthState::default().session), SessionView::Anonymous);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_persisted_is_anonymous_outside_browser() {
    assert_eq!(AuthState::load_persisted(), AuthState::default());
}

#[test]
fn view_is_authenticated_when_session_present() {
    let state = AuthState { session: Some(session("marta", true)) };
    let view = SessionView::from(state.session);
    assert_eq!(view, SessionView::Authenticated(session("marta", true)));
    assert!(view.is_authenticated());
}

#[test]
fn none_maps_to_anonymous() {
    let view: SessionView = None.into();
    assert!(!view.is_authenticated());
}

// =============================================================
// Verification
// =============================================================

#[test]
fn verification_follows_flag() {
    assert_eq!(Verification::from(true), Verification::Verified);
    assert_eq!(Verification::from(false), Verification::Unverified);
}

#[test]
fn verification_labels() {
    assert_eq!(Verification::Verified.label(), "Verificado");
    assert_eq!(Verification::Unverified.label(), "No verificado");
}

#[test]
fn verification_tones_differ() {
    assert_ne!(Verification::Verified.tone_class(), Verification::Unverified.tone_class());
    assert_ne!(Verification::Verified.dot_class(), Verification::Unverified.dot_class());
}

// =============================================================
// avatar_initial
// =============================================================

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("pedro"), "P");
    assert_eq!(avatar_initial("Ana"), "A");
}

#[test]
fn avatar_initial_handles_non_ascii() {
    assert_eq!(avatar_initial("ñandú"), "Ñ");
    assert_eq!(avatar_initial("élise"), "É");
}

#[test]
fn avatar_initial_keeps_digits() {
    assert_eq!(avatar_initial("42admin"), "4");
}

#[test]
fn avatar_initial_placeholder_for_empty_username() {
    assert_eq!(avatar_initial(""), "?");
}

#[test]
fn avatar_initial_takes_the_literal_first_char() {
    assert_eq!(avatar_initial(" luis"), " ");
}

#[test]
fn rw_signal_source_reads_current_session() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState { session: Some(session("rosa", false)) });
        assert_eq!(auth.current_session(), Some(session("rosa", false)));
        auth.set(AuthState::default());
        assert_eq!(auth.current_session(), None);
    });
}
