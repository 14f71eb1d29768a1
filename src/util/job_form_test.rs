use std::cell::Cell;

use futures::executor::block_on;
use time::macros::date;

use super::*;

const TODAY: Date = date!(2026 - 03 - 10);

fn valid_draft() -> JobDraft {
    JobDraft {
        title: "Backend Engineer".to_owned(),
        company: "Acme".to_owned(),
        location: "Remote".to_owned(),
        salary: "$100k - $140k".to_owned(),
        job_type: JobType::Contract,
        experience: "3-5 years".to_owned(),
        description: "Build services.".to_owned(),
        requirements: "Rust\nPostgres".to_owned(),
        benefits: String::new(),
        skills: vec!["Rust".to_owned()],
        deadline: "2026-04-01".to_owned(),
    }
}

fn created(job: NewJob) -> Job {
    simulate_created_job(job, "recruiter1", TODAY)
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_draft_has_no_errors() {
    assert!(valid_draft().validate(TODAY).is_empty());
}

#[test]
fn blank_required_fields_are_reported() {
    let draft = JobDraft { title: "   ".to_owned(), company: String::new(), ..valid_draft() };
    let errors = draft.validate(TODAY);
    assert_eq!(errors.get(&FormField::Title), Some(&"Job title is required"));
    assert_eq!(errors.get(&FormField::Company), Some(&"Company name is required"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn empty_draft_reports_every_required_field() {
    let errors = JobDraft::default().validate(TODAY);
    for field in [
        FormField::Title,
        FormField::Company,
        FormField::Location,
        FormField::Salary,
        FormField::Experience,
        FormField::Description,
        FormField::Requirements,
        FormField::Deadline,
        FormField::Skills,
    ] {
        assert!(errors.contains_key(&field), "missing {field:?}");
    }
    assert_eq!(errors[&FormField::Deadline], "Application deadline is required");
}

#[test]
fn benefits_are_optional() {
    let draft = JobDraft { benefits: String::new(), ..valid_draft() };
    assert!(draft.validate(TODAY).is_empty());
}

#[test]
fn deadline_today_is_rejected() {
    let draft = JobDraft { deadline: "2026-03-10".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(TODAY).get(&FormField::Deadline), Some(&"Deadline must be in the future"));
}

#[test]
fn deadline_in_past_is_rejected() {
    let draft = JobDraft { deadline: "2025-12-31".to_owned(), ..valid_draft() };
    assert!(draft.validate(TODAY).contains_key(&FormField::Deadline));
}

#[test]
fn deadline_tomorrow_is_accepted() {
    let draft = JobDraft { deadline: "2026-03-11".to_owned(), ..valid_draft() };
    assert!(draft.validate(TODAY).is_empty());
}

#[test]
fn malformed_deadline_is_rejected() {
    let draft = JobDraft { deadline: "next week".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate(TODAY).get(&FormField::Deadline), Some(&"Deadline must be a valid date"));
}

#[test]
fn missing_skills_are_rejected() {
    let draft = JobDraft { skills: Vec::new(), ..valid_draft() };
    assert_eq!(draft.validate(TODAY).get(&FormField::Skills), Some(&"At least one skill is required"));
}

// =============================================================
// skills
// =============================================================

#[test]
fn add_skill_trims_and_ignores_blank_and_duplicates() {
    let mut draft = JobDraft::default();
    assert!(draft.add_skill("  Rust "));
    assert!(!draft.add_skill("Rust"));
    assert!(!draft.add_skill("   "));
    assert!(draft.add_skill("SQL"));
    assert_eq!(draft.skills, vec!["Rust".to_owned(), "SQL".to_owned()]);
}

#[test]
fn remove_skill_drops_exact_match() {
    let mut draft = JobDraft::default();
    draft.add_skill("Rust");
    draft.add_skill("Go");
    draft.remove_skill("Rust");
    draft.remove_skill("Python");
    assert_eq!(draft.skills, vec!["Go".to_owned()]);
}

#[test]
fn text_accessors_cover_single_value_fields() {
    let mut draft = valid_draft();
    assert_eq!(draft.text(FormField::Title), Some(draft.title.as_str()));
    assert_eq!(draft.text(FormField::Skills), None);
    if let Some(location) = draft.text_mut(FormField::Location) {
        *location = "Berlin".to_owned();
    }
    assert_eq!(draft.location, "Berlin");
    assert!(draft.text_mut(FormField::Skills).is_none());
}

// =============================================================
// submit_job
// =============================================================

#[test]
fn invalid_publish_never_calls_create() {
    let called = Cell::new(false);
    let draft = JobDraft { title: String::new(), ..valid_draft() };
    let result = block_on(submit_job(&draft, SubmitMode::Publish, TODAY, |job| {
        called.set(true);
        async move { Ok(created(job)) }
    }));
    assert!(matches!(result, Err(SubmitError::Invalid(ref e)) if e.contains_key(&FormField::Title)));
    assert!(!called.get());
}

#[test]
fn past_deadline_publish_never_calls_create() {
    let called = Cell::new(false);
    let draft = JobDraft { deadline: "2026-03-10".to_owned(), ..valid_draft() };
    let result = block_on(submit_job(&draft, SubmitMode::Publish, TODAY, |job| {
        called.set(true);
        async move { Ok(created(job)) }
    }));
    assert!(result.is_err());
    assert!(!called.get());
}

#[test]
fn valid_publish_sends_active_payload() {
    let job = block_on(submit_job(&valid_draft(), SubmitMode::Publish, TODAY, |job| async move {
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.job_type, JobType::Contract);
        Ok(created(job))
    }))
    .unwrap();
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.posted_date, "2026-03-10");
    assert_eq!(job.posted_by, "recruiter1");
}

#[test]
fn draft_skips_validation() {
    let called = Cell::new(false);
    let job = block_on(submit_job(&JobDraft::default(), SubmitMode::Draft, TODAY, |job| {
        called.set(true);
        async move { Ok(created(job)) }
    }))
    .unwrap();
    assert!(called.get());
    assert_eq!(job.status, JobStatus::Draft);
}

#[test]
fn api_failure_is_reported() {
    let result = block_on(submit_job(&valid_draft(), SubmitMode::Publish, TODAY, |_| async {
        Err(ApiError::Status { status: 500 })
    }));
    assert_eq!(result, Err(SubmitError::Api(ApiError::Status { status: 500 })));
}

// =============================================================
// helpers
// =============================================================

#[test]
fn to_new_job_trims_text_fields() {
    let draft = JobDraft { title: "  Lead  ".to_owned(), ..valid_draft() };
    assert_eq!(draft.to_new_job(JobStatus::Draft).title, "Lead");
}

#[test]
fn date_round_trip() {
    assert_eq!(parse_date("2026-03-10"), Some(TODAY));
    assert_eq!(format_date(TODAY), "2026-03-10");
    assert_eq!(parse_date("2026-13-01"), None);
}

#[test]
fn lines_skips_blank_rows() {
    assert_eq!(lines("a\n\n  b  \n"), vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn submit_mode_messages() {
    assert_eq!(SubmitMode::Publish.success_message(), "Job posted successfully!");
    assert_eq!(SubmitMode::Draft.status(), JobStatus::Draft);
}
