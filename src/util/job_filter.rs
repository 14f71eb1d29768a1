//! Listing filter for the `/jobs` page.
//!
//! DESIGN
//! ======
//! Filters are plain strings so they round-trip through the URL query
//! unchanged; an empty field imposes no constraint. Matching is a stable
//! linear pass, so results keep catalogue order.
//!
//! `experience` and `salary` are carried in the query and bound to their
//! selects but do not narrow results. The salary text is free-form and has
//! no agreed bucket mapping yet.

#[cfg(test)]
#[path = "job_filter_test.rs"]
mod job_filter_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Job;

/// `(value, label)` pairs for the experience select.
pub const EXPERIENCE_OPTIONS: [(&str, &str); 5] = [
    ("", "All Levels"),
    ("Entry level", "Entry Level"),
    ("2+ years", "2+ Years"),
    ("3+ years", "3+ Years"),
    ("5+ years", "5+ Years"),
];

/// `(value, label)` pairs for the salary select.
pub const SALARY_OPTIONS: [(&str, &str); 5] = [
    ("", "Any Salary"),
    ("0-50k", "$0 - $50k"),
    ("50k-100k", "$50k - $100k"),
    ("100k-150k", "$100k - $150k"),
    ("150k+", "$150k+"),
];

/// Search criteria collected by the listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilters {
    /// Matched against title, company, and skills.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Exact `JobType` wire value, e.g. `FULL_TIME`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub job_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub experience: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub salary: String,
}

/// Addressable filter inputs, used by change handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    Type,
    Experience,
    Salary,
}

impl FilterField {
    /// Field addressed by a URL query key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "search" => Some(Self::Search),
            "location" => Some(Self::Location),
            "type" => Some(Self::Type),
            "experience" => Some(Self::Experience),
            "salary" => Some(Self::Salary),
            _ => None,
        }
    }
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.location.is_empty()
            && self.job_type.is_empty()
            && self.experience.is_empty()
            && self.salary.is_empty()
    }

    /// Whether `job` satisfies every applied, non-empty criterion.
    pub fn matches(&self, job: &Job) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = contains_ci(&job.title, &needle)
                || contains_ci(&job.company, &needle)
                || job.skills.iter().any(|s| contains_ci(s, &needle));
            if !hit {
                return false;
            }
        }
        if !self.location.is_empty() && !contains_ci(&job.location, &self.location.to_lowercase()) {
            return false;
        }
        if !self.job_type.is_empty() && job.job_type.as_str() != self.job_type {
            return false;
        }
        true
    }

    /// Copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: FilterField, value: String) -> Self {
        match field {
            FilterField::Search => self.search = value,
            FilterField::Location => self.location = value,
            FilterField::Type => self.job_type = value,
            FilterField::Experience => self.experience = value,
            FilterField::Salary => self.salary = value,
        }
        self
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Location => &self.location,
            FilterField::Type => &self.job_type,
            FilterField::Experience => &self.experience,
            FilterField::Salary => &self.salary,
        }
    }

    /// Parse a URL query (with or without the leading `?`). Unknown keys are
    /// ignored and a repeated key keeps its last value.
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query.trim_start_matches('?')).unwrap_or_default();
        pairs.into_iter().fold(Self::default(), |filters, (key, value)| match FilterField::from_key(&key) {
            Some(field) => filters.with(field, value),
            None => filters,
        })
    }

    /// Encode the non-empty fields as a URL query without the leading `?`.
    pub fn to_query(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_default()
    }

    /// Listing URL reflecting these filters.
    pub fn jobs_href(&self) -> String {
        let query = self.to_query();
        if query.is_empty() { "/jobs".to_owned() } else { format!("/jobs?{query}") }
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Jobs matching `filters`, in input order.
pub fn filter_jobs(jobs: &[Job], filters: &JobFilters) -> Vec<Job> {
    jobs.iter().filter(|j| filters.matches(j)).cloned().collect()
}
