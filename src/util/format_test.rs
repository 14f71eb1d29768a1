use super::*;

#[test]
fn display_date_formats_iso_dates() {
    assert_eq!(display_date("2025-01-05"), "Jan 5, 2025");
    assert_eq!(display_date("2025-12-31"), "Dec 31, 2025");
}

#[test]
fn display_date_passes_through_garbage() {
    assert_eq!(display_date("soon"), "soon");
}

#[test]
fn skill_preview_truncates_and_counts_rest() {
    let skills: Vec<String> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| (*s).to_owned()).collect();
    let (shown, rest) = skill_preview(&skills, CARD_SKILL_LIMIT);
    assert_eq!(shown.len(), 4);
    assert_eq!(rest, 2);
}

#[test]
fn skill_preview_short_list_is_complete() {
    let skills = vec!["Rust".to_owned()];
    let (shown, rest) = skill_preview(&skills, CARD_SKILL_LIMIT);
    assert_eq!(shown, &skills[..]);
    assert_eq!(rest, 0);
}

#[test]
fn badges_differ_by_status() {
    assert_ne!(
        application_status_badge(ApplicationStatus::Accepted),
        application_status_badge(ApplicationStatus::Rejected)
    );
    assert_eq!(job_status_badge(JobStatus::Draft), "badge badge--gray");
    assert_eq!(job_type_badge(JobType::Internship), "badge badge--orange");
    assert_eq!(role_badge(Role::Admin), "badge badge--purple");
}
