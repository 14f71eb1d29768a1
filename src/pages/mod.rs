//! Top-level route pages.

pub mod admin_dashboard;
pub mod dashboard;
pub mod home;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod post_job;
pub mod recruiter_dashboard;
pub mod register;
pub mod seeker_dashboard;
