use super::*;
use crate::net::sample;

#[test]
fn paragraphs_split_on_blank_lines() {
    let job = sample::job_by_id("1").unwrap();
    let parts = paragraphs(&job.description);
    assert_eq!(parts.len(), 4);
    assert!(parts[0].starts_with("We are looking for"));
}

#[test]
fn paragraphs_of_single_line_is_one() {
    assert_eq!(paragraphs("  Short blurb.  "), vec!["Short blurb.".to_owned()]);
    assert!(paragraphs("\n\n").is_empty());
}

#[test]
fn build_application_requires_resume() {
    let job = sample::job_by_id("2").unwrap();
    assert_eq!(build_application(&job, "1", "Hi", "   ", "2026-03-10"), Err("Please attach your resume."));
}

#[test]
fn build_application_starts_pending_and_embeds_job() {
    let job = sample::job_by_id("2").unwrap();
    let app = build_application(&job, "7", "  Hello  ", "resume.pdf", "2026-03-10").unwrap();
    assert_eq!(app.job_id, "2");
    assert_eq!(app.user_id, "7");
    assert_eq!(app.cover_letter, "Hello");
    assert_eq!(app.resume_url, "resume.pdf");
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.applied_date, "2026-03-10");
    assert_eq!(app.job, Some(job));
}
