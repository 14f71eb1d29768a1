//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON and enum values use the
//! SCREAMING_SNAKE_CASE strings the API emits, so the same types serve the
//! REST calls, the persisted `user` storage record, and the sample data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Drives dashboard routing and route-guard checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    JobSeeker,
    Recruiter,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::JobSeeker, Self::Recruiter, Self::Admin];

    /// Wire value, e.g. `"JOB_SEEKER"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "JOB_SEEKER",
            Self::Recruiter => "RECRUITER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Recruiter => "Recruiter",
            Self::Admin => "Admin",
        }
    }

    /// Landing page linked from the header for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::JobSeeker => "/dashboard",
            Self::Recruiter => "/recruiter",
            Self::Admin => "/admin",
        }
    }

    /// Whether the role can be chosen on the public sign-up form.
    pub fn is_self_registrable(self) -> bool {
        match self {
            Self::JobSeeker | Self::Recruiter => true,
            Self::Admin => false,
        }
    }
}

/// An account as returned by the auth endpoints and persisted under `user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Avatar image URL, if uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Employment type of a posting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Contract, Self::Internship];

    /// Wire value, e.g. `"FULL_TIME"`. The listing filter compares against this.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::PartTime => "PART_TIME",
            Self::Contract => "CONTRACT",
            Self::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Lifecycle status of a posting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
            Self::Draft => "Draft",
        }
    }
}

/// A job posting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    /// Free-form salary range, e.g. `"$80,000 - $120,000"`.
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Free-form experience level, e.g. `"5+ years"`.
    pub experience: String,
    pub skills: Vec<String>,
    /// Recruiter id.
    pub posted_by: String,
    /// `YYYY-MM-DD`.
    pub posted_date: String,
    /// `YYYY-MM-DD`.
    pub deadline: String,
    pub status: JobStatus,
}

/// Review status of an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Applicant-facing wording.
    pub fn seeker_label(self) -> &'static str {
        match self {
            Self::Pending => "Under Review",
            Self::Reviewed => "Reviewed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Not Selected",
        }
    }

    /// Recruiter/admin-facing wording.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

/// A job seeker's application against a posting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub user_id: String,
    pub resume_url: String,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    /// `YYYY-MM-DD`.
    pub applied_date: String,
    /// Embedded posting for list rendering, when the API expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    /// Embedded applicant for recruiter views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of both auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `POST /api/jobs` body built from the post-job form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub experience: String,
    pub description: String,
    pub requirements: String,
    pub benefits: String,
    pub skills: Vec<String>,
    pub deadline: String,
    pub status: JobStatus,
}
