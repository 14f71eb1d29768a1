use super::*;

#[test]
fn filter_users_blank_term_returns_everyone() {
    let users = sample::recent_users();
    assert_eq!(filter_users(&users, "  "), users);
}

#[test]
fn filter_users_matches_name_case_insensitively() {
    let found = filter_users(&sample::recent_users(), "jOHN");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "John Doe");
}

#[test]
fn filter_users_matches_email_domain() {
    let found = filter_users(&sample::recent_users(), "techcorp");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "jane@techcorp.com");
}

#[test]
fn filter_users_without_match_is_empty() {
    assert!(filter_users(&sample::recent_users(), "nobody").is_empty());
}
