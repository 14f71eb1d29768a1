#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// A tab strip entry on one of the dashboards.
pub trait DashboardTab: Copy + PartialEq + Send + Sync + 'static {
    /// Tabs in display order. The first is the default.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Job seeker dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeekerTab {
    #[default]
    Overview,
    Applications,
    Saved,
    Profile,
}

impl DashboardTab for SeekerTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Applications, Self::Saved, Self::Profile];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Applications => "My Applications",
            Self::Saved => "Saved Jobs",
            Self::Profile => "Profile",
        }
    }
}

/// Recruiter dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecruiterTab {
    #[default]
    Overview,
    Jobs,
    Applications,
    Candidates,
}

impl DashboardTab for RecruiterTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Jobs, Self::Applications, Self::Candidates];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Jobs => "My Jobs",
            Self::Applications => "Applications",
            Self::Candidates => "Candidates",
        }
    }
}

/// Admin dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Jobs,
    Moderation,
}

impl DashboardTab for AdminTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Users, Self::Jobs, Self::Moderation];

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "User Management",
            Self::Jobs => "Job Management",
            Self::Moderation => "Content Moderation",
        }
    }
}

/// One-shot banner shown above page content after an action completes
/// somewhere else (a posted job, a sign-out).
///
/// The banner targets the route the action lands on. It stays up until that
/// route has been reached and the user then navigates away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flash {
    pub message: Option<String>,
    route: String,
    arrived: bool,
}

impl Flash {
    pub fn show(message: impl Into<String>, route: impl Into<String>) -> Self {
        Self { message: Some(message.into()), route: route.into(), arrived: false }
    }

    /// State after the router settles on `path`.
    #[must_use]
    pub fn visit(self, path: &str) -> Self {
        if self.message.is_none() {
            return self;
        }
        if path == self.route {
            Self { arrived: true, ..self }
        } else if self.arrived {
            Self::default()
        } else {
            self
        }
    }
}
