use super::*;
use crate::net::types::User;
use crate::state::auth::Session;

fn signed_in(role: Role) -> AuthState {
    AuthState::signed_in(Session {
        user: User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
            profile_picture: None,
            created_at: "2025-01-01T00:00:00Z".to_owned(),
        },
        token: "tok".to_owned(),
    })
}

#[test]
fn loading_wins_over_everything() {
    let state = AuthState { loading: true, ..signed_in(Role::Admin) };
    assert_eq!(guard_outcome(&state, Some(&[Role::Admin])), GuardOutcome::Loading);
    assert_eq!(guard_outcome(&AuthState::default(), None), GuardOutcome::Loading);
}

#[test]
fn anonymous_goes_to_login() {
    assert_eq!(guard_outcome(&AuthState::signed_out(), None), GuardOutcome::Redirect(LOGIN_PATH));
    assert_eq!(
        guard_outcome(&AuthState::signed_out(), Some(&[Role::Recruiter])),
        GuardOutcome::Redirect(LOGIN_PATH)
    );
}

#[test]
fn recruiter_on_admin_route_goes_to_dashboard() {
    assert_eq!(
        guard_outcome(&signed_in(Role::Recruiter), Some(&[Role::Admin])),
        GuardOutcome::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(guard_outcome(&signed_in(Role::Admin), Some(&[Role::Admin])), GuardOutcome::Render);
    assert_eq!(
        guard_outcome(&signed_in(Role::Recruiter), Some(&[Role::Admin, Role::Recruiter])),
        GuardOutcome::Render
    );
}

#[test]
fn no_role_list_admits_any_signed_in_user() {
    for role in Role::ALL {
        assert_eq!(guard_outcome(&signed_in(role), None), GuardOutcome::Render);
    }
}

#[test]
fn empty_role_list_admits_nobody() {
    assert_eq!(guard_outcome(&signed_in(Role::Admin), Some(&[])), GuardOutcome::Redirect(DASHBOARD_PATH));
}

#[test]
fn redirects_replace_the_history_entry() {
    let options = redirect_options();
    assert!(options.replace);
    assert!(options.scroll);
}
