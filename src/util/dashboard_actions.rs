//! Moderation and review actions offered on the dashboards.
//!
//! There is no mutation API yet, so actions run in demo form only: they are
//! confirmed when destructive, logged to the console, and leave the sample
//! lists untouched.

#[cfg(test)]
#[path = "dashboard_actions_test.rs"]
mod dashboard_actions_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    ApproveJob(String),
    RejectJob(String),
    DeleteUser(String),
    AcceptApplication(String),
    RejectApplication(String),
}

impl DashboardAction {
    pub fn describe(&self) -> String {
        match self {
            Self::ApproveJob(id) => format!("approve job {id}"),
            Self::RejectJob(id) => format!("reject job {id}"),
            Self::DeleteUser(id) => format!("delete user {id}"),
            Self::AcceptApplication(id) => format!("accept application {id}"),
            Self::RejectApplication(id) => format!("reject application {id}"),
        }
    }

    /// Prompt to confirm before running, for destructive actions.
    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            Self::DeleteUser(_) => Some("Are you sure you want to delete this user?"),
            Self::ApproveJob(_) | Self::RejectJob(_) | Self::AcceptApplication(_) | Self::RejectApplication(_) => None,
        }
    }
}

/// Run `action` in demo form. Returns `false` if the user cancelled.
pub fn dispatch_demo(action: &DashboardAction) -> bool {
    if let Some(prompt) = action.confirmation_prompt() {
        if !confirm(prompt) {
            return false;
        }
    }
    #[cfg(feature = "hydrate")]
    log::info!("demo action (not persisted): {}", action.describe());
    true
}

fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        true
    }
}
