//! Display helpers shared by cards, tables, and badges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;

use super::job_form::parse_date;
use crate::net::types::{ApplicationStatus, JobStatus, JobType, Role};

/// Number of skill chips shown on a listing card before "+N more".
pub const CARD_SKILL_LIMIT: usize = 4;

pub fn job_type_badge(job_type: JobType) -> &'static str {
    match job_type {
        JobType::FullTime => "badge badge--green",
        JobType::PartTime => "badge badge--blue",
        JobType::Contract => "badge badge--purple",
        JobType::Internship => "badge badge--orange",
    }
}

pub fn job_status_badge(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Active => "badge badge--green",
        JobStatus::Closed => "badge badge--red",
        JobStatus::Draft => "badge badge--gray",
    }
}

pub fn application_status_badge(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "badge badge--yellow",
        ApplicationStatus::Reviewed => "badge badge--blue",
        ApplicationStatus::Accepted => "badge badge--green",
        ApplicationStatus::Rejected => "badge badge--red",
    }
}

pub fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge--purple",
        Role::Recruiter => "badge badge--blue",
        Role::JobSeeker => "badge badge--green",
    }
}

/// `2025-01-15` → `Jan 15, 2025`. Unparseable input is returned as-is.
pub fn display_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|d| d.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Leading skills for a card plus how many were left out.
pub fn skill_preview(skills: &[String], limit: usize) -> (&[String], usize) {
    let shown = &skills[..skills.len().min(limit)];
    (shown, skills.len() - shown.len())
}
