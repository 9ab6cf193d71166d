use super::*;

use crate::storage::MemoryBackend;

fn u1() -> Identity {
    Identity::Known("u1".to_owned())
}

// =============================================================
// Flags persistence
// =============================================================

#[test]
fn default_flags_alert_on_new_sessions() {
    let flags = SecurityFlags::default();
    assert!(!flags.two_factor);
    assert!(!flags.biometric_unlock);
    assert!(flags.session_alerts);
}

#[test]
fn flags_round_trip() {
    let store = LocalStore::in_memory(MemoryBackend::new());
    let notifier = Notifier::new();

    let flags = SecurityFlags { two_factor: true, ..SecurityFlags::default() };
    save_security(&store, &notifier, &u1(), &flags);
    assert_eq!(load_security(&store, &u1()), flags);
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn validation_requires_current_password_first() {
    assert_eq!(
        validate_password_change("", "longenough", "longenough"),
        Err(PasswordError::MissingCurrent)
    );
}

#[test]
fn validation_rejects_short_passwords() {
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err(PasswordError::TooShort)
    );
}

#[test]
fn validation_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_password_change("old", "longenough", "different1"),
        Err(PasswordError::Mismatch)
    );
}

#[test]
fn validation_accepts_a_good_change() {
    assert_eq!(validate_password_change("old", "longenough", "longenough"), Ok(()));
}

// =============================================================
// Strength scoring
// =============================================================

#[test]
fn strength_scores_accumulate_per_class() {
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength("abcdefgh"), 25); // length only
    assert_eq!(password_strength("Abcdefgh"), 50); // + mixed case
    assert_eq!(password_strength("Abcdefg1"), 75); // + digit
    assert_eq!(password_strength("Abcdef1!"), 100); // + symbol
}

#[test]
fn short_but_complex_passwords_score_partial() {
    assert_eq!(password_strength("Ab1!"), 75);
}
