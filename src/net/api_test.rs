use futures::executor::block_on;

use super::*;
use crate::net::types::{JobStatus, JobType, Role};

fn remote() -> PortalConfig {
    PortalConfig::from_values(Some("remote"), None, Some("0")).unwrap()
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn login_without_browser_is_unavailable() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(block_on(login(&remote(), &req)), Err(ApiError::Unavailable));
}

#[test]
fn register_without_browser_is_unavailable() {
    let req = RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::JobSeeker,
    };
    assert_eq!(block_on(register(&remote(), &req)), Err(ApiError::Unavailable));
}

#[test]
fn create_job_without_browser_is_unavailable() {
    let job = NewJob {
        title: "T".to_owned(),
        company: "C".to_owned(),
        location: "L".to_owned(),
        salary: "S".to_owned(),
        job_type: JobType::FullTime,
        experience: "Entry Level".to_owned(),
        description: "D".to_owned(),
        requirements: "R".to_owned(),
        benefits: String::new(),
        skills: vec!["Rust".to_owned()],
        deadline: "2099-01-01".to_owned(),
        status: JobStatus::Active,
    };
    assert_eq!(block_on(create_job(&remote(), "tok", &job)), Err(ApiError::Unavailable));
}

#[test]
fn fetch_jobs_with_empty_filters_returns_catalogue() {
    let jobs = block_on(fetch_jobs(&remote(), &JobFilters::default()));
    assert_eq!(jobs, sample::jobs());
}

#[test]
fn fetch_jobs_applies_type_filter() {
    let filters = JobFilters { job_type: "INTERNSHIP".to_owned(), ..JobFilters::default() };
    let jobs = block_on(fetch_jobs(&remote(), &filters));
    assert!(!jobs.is_empty());
    assert!(jobs.iter().all(|j| j.job_type == JobType::Internship));
}

#[test]
fn fetch_job_unknown_id_is_none() {
    assert_eq!(block_on(fetch_job(&remote(), "does-not-exist")), None);
}

#[test]
fn fetch_job_known_id() {
    let job = block_on(fetch_job(&remote(), "1")).unwrap();
    assert_eq!(job.title, "Senior Software Engineer");
}

#[test]
fn unauthorized_statuses() {
    assert!(ApiError::Status { status: 401 }.is_unauthorized());
    assert!(ApiError::Status { status: 403 }.is_unauthorized());
    assert!(!ApiError::Status { status: 500 }.is_unauthorized());
    assert!(!ApiError::Transport("offline".to_owned()).is_unauthorized());
}
