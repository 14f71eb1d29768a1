//! Post-job form model, validation, and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PostJobPage` binds inputs to a `JobDraft` and calls `submit_job` with a
//! create callback. Keeping the callback injectable lets the page choose
//! between the API and the demo path, and lets tests observe that invalid
//! drafts never reach it.

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

use std::collections::BTreeMap;
use std::future::Future;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::net::error::ApiError;
use crate::net::types::{Job, JobStatus, JobType, NewJob};

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub const EXPERIENCE_LEVELS: [&str; 5] = ["Entry Level", "1-2 years", "3-5 years", "5+ years", "10+ years"];

/// Inputs that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Company,
    Location,
    Salary,
    Experience,
    Description,
    Requirements,
    Deadline,
    Skills,
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Editable state of the post-job form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: JobType,
    /// One of `EXPERIENCE_LEVELS`, empty until chosen.
    pub experience: String,
    pub description: String,
    /// Newline-separated bullet list.
    pub requirements: String,
    /// Newline-separated bullet list, optional.
    pub benefits: String,
    pub skills: Vec<String>,
    /// `YYYY-MM-DD` from the date input.
    pub deadline: String,
}

impl JobDraft {
    /// Per-field problems blocking publication. Empty when publishable.
    pub fn validate(&self, today: Date) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let required = [
            (FormField::Title, &self.title, "Job title is required"),
            (FormField::Company, &self.company, "Company name is required"),
            (FormField::Location, &self.location, "Location is required"),
            (FormField::Salary, &self.salary, "Salary range is required"),
            (FormField::Description, &self.description, "Job description is required"),
            (FormField::Requirements, &self.requirements, "Requirements are required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }
        if self.experience.is_empty() {
            errors.insert(FormField::Experience, "Experience level is required");
        }
        if self.skills.is_empty() {
            errors.insert(FormField::Skills, "At least one skill is required");
        }
        if self.deadline.trim().is_empty() {
            errors.insert(FormField::Deadline, "Application deadline is required");
        } else {
            match parse_date(&self.deadline) {
                Some(deadline) if deadline > today => {}
                Some(_) => {
                    errors.insert(FormField::Deadline, "Deadline must be in the future");
                }
                None => {
                    errors.insert(FormField::Deadline, "Deadline must be a valid date");
                }
            }
        }
        errors
    }

    /// Text backing a single-value input, `None` for list fields.
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Title => &self.title,
            FormField::Company => &self.company,
            FormField::Location => &self.location,
            FormField::Salary => &self.salary,
            FormField::Experience => &self.experience,
            FormField::Description => &self.description,
            FormField::Requirements => &self.requirements,
            FormField::Deadline => &self.deadline,
            FormField::Skills => return None,
        };
        Some(value)
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        let value = match field {
            FormField::Title => &mut self.title,
            FormField::Company => &mut self.company,
            FormField::Location => &mut self.location,
            FormField::Salary => &mut self.salary,
            FormField::Experience => &mut self.experience,
            FormField::Description => &mut self.description,
            FormField::Requirements => &mut self.requirements,
            FormField::Deadline => &mut self.deadline,
            FormField::Skills => return None,
        };
        Some(value)
    }

    /// Add a trimmed skill tag. Returns `false` for blanks and duplicates.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_owned());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// API payload with the given lifecycle status.
    pub fn to_new_job(&self, status: JobStatus) -> NewJob {
        NewJob {
            title: self.title.trim().to_owned(),
            company: self.company.trim().to_owned(),
            location: self.location.trim().to_owned(),
            salary: self.salary.trim().to_owned(),
            job_type: self.job_type,
            experience: self.experience.clone(),
            description: self.description.trim().to_owned(),
            requirements: self.requirements.trim().to_owned(),
            benefits: self.benefits.trim().to_owned(),
            skills: self.skills.clone(),
            deadline: self.deadline.trim().to_owned(),
            status,
        }
    }
}

/// Publish validates fully; draft saves whatever is there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Publish,
    Draft,
}

impl SubmitMode {
    pub fn status(self) -> JobStatus {
        match self {
            Self::Publish => JobStatus::Active,
            Self::Draft => JobStatus::Draft,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Publish => "Job posted successfully!",
            Self::Draft => "Job saved as draft!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("please fix the highlighted fields")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validate (unless drafting) and hand the payload to `create`.
///
/// # Errors
///
/// `SubmitError::Invalid` without calling `create` when a published draft
/// fails validation; `SubmitError::Api` when `create` fails.
pub async fn submit_job<F, Fut>(draft: &JobDraft, mode: SubmitMode, today: Date, create: F) -> Result<Job, SubmitError>
where
    F: FnOnce(NewJob) -> Fut,
    Fut: Future<Output = Result<Job, ApiError>>,
{
    if mode == SubmitMode::Publish {
        let errors = draft.validate(today);
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
    }
    Ok(create(draft.to_new_job(mode.status())).await?)
}

/// Stand-in for the API's created record in demo mode.
pub fn simulate_created_job(job: NewJob, posted_by: &str, today: Date) -> Job {
    Job {
        id: uuid::Uuid::new_v4().to_string(),
        title: job.title,
        description: job.description,
        company: job.company,
        location: job.location,
        salary: job.salary,
        job_type: job.job_type,
        experience: job.experience,
        skills: job.skills,
        posted_by: posted_by.to_owned(),
        posted_date: format_date(today),
        deadline: job.deadline,
        status: job.status,
    }
}

pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Current UTC calendar date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Split a multi-line field into non-blank lines for preview rendering.
pub fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_owned).collect()
}
