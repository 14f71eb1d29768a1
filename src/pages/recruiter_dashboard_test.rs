use super::*;

#[test]
fn status_counts_cover_every_stage_in_order() {
    let counts = status_counts(&sample::recruiter_applications());
    assert_eq!(
        counts,
        [
            (ApplicationStatus::Pending, 1),
            (ApplicationStatus::Reviewed, 1),
            (ApplicationStatus::Accepted, 0),
            (ApplicationStatus::Rejected, 0),
        ]
    );
}

#[test]
fn status_counts_of_nothing_are_zero() {
    assert!(status_counts(&[]).iter().all(|(_, n)| *n == 0));
}

#[test]
fn applicant_count_matches_job_id() {
    let apps = sample::recruiter_applications();
    assert_eq!(applicant_count(&apps, "1"), 2);
    assert_eq!(applicant_count(&apps, "2"), 0);
}
