use super::*;

#[test]
fn validate_passwords_accepts_matching_pair() {
    assert_eq!(validate_passwords("secret1", "secret1"), Ok(()));
}

#[test]
fn validate_passwords_rejects_short_password() {
    assert_eq!(validate_passwords("abc", "abc"), Err("Password must be at least 6 characters."));
}

#[test]
fn validate_passwords_rejects_mismatch() {
    assert_eq!(validate_passwords("secret1", "secret2"), Err("Passwords do not match."));
}
