use super::*;
use crate::net::types::User;

fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_owned(),
        email: email.to_owned(),
        name: "Ada".to_owned(),
        role: "student".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Derivation: id, then email, then anonymous
// =============================================================

#[test]
fn identity_prefers_user_id() {
    let u = user("u1", "ada@example.com");
    assert_eq!(Identity::from_user(Some(&u)), Identity::Known("u1".to_owned()));
}

#[test]
fn identity_falls_back_to_email_when_id_blank() {
    let u = user("  ", "ada@example.com");
    assert_eq!(
        Identity::from_user(Some(&u)),
        Identity::Known("ada@example.com".to_owned())
    );
}

#[test]
fn identity_without_user_is_anonymous() {
    assert_eq!(Identity::from_user(None), Identity::Anonymous);
    assert!(Identity::from_user(None).is_anonymous());
}

#[test]
fn identity_with_blank_user_is_anonymous() {
    let u = user("", " ");
    assert_eq!(Identity::from_user(Some(&u)), Identity::Anonymous);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn anonymous_renders_as_literal() {
    assert_eq!(Identity::Anonymous.as_str(), "anonymous");
    assert_eq!(Identity::Anonymous.to_string(), "anonymous");
}

#[test]
fn from_str_treats_blank_as_anonymous() {
    assert_eq!(Identity::from(""), Identity::Anonymous);
    assert_eq!(Identity::from("u1"), Identity::Known("u1".to_owned()));
}
