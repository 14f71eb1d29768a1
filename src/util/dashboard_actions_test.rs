use super::*;

#[test]
fn describe_names_action_and_target() {
    assert_eq!(DashboardAction::ApproveJob("7".to_owned()).describe(), "approve job 7");
    assert_eq!(DashboardAction::RejectApplication("3".to_owned()).describe(), "reject application 3");
}

#[test]
fn only_delete_user_needs_confirmation() {
    assert!(DashboardAction::DeleteUser("1".to_owned()).confirmation_prompt().is_some());
    for action in [
        DashboardAction::ApproveJob("1".to_owned()),
        DashboardAction::RejectJob("1".to_owned()),
        DashboardAction::AcceptApplication("1".to_owned()),
        DashboardAction::RejectApplication("1".to_owned()),
    ] {
        assert_eq!(action.confirmation_prompt(), None);
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dispatch_off_browser_always_proceeds() {
    assert!(dispatch_demo(&DashboardAction::DeleteUser("1".to_owned())));
    assert!(dispatch_demo(&DashboardAction::AcceptApplication("2".to_owned())));
}
