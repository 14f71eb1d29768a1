use super::*;

#[test]
fn toggle_saved_adds_then_removes() {
    let mut saved = HashSet::new();
    assert!(toggle_saved(&mut saved, "3".to_owned()));
    assert!(saved.contains("3"));
    assert!(!toggle_saved(&mut saved, "3".to_owned()));
    assert!(saved.is_empty());
}

#[test]
fn job_type_options_lead_with_all_types() {
    let options = job_type_options();
    assert_eq!(options[0], ("", "All Types"));
    assert_eq!(options.len(), JobType::ALL.len() + 1);
    assert!(options.contains(&("INTERNSHIP", "Internship")));
}

#[test]
fn results_label_pluralizes() {
    assert_eq!(results_label(0), "0 jobs found");
    assert_eq!(results_label(1), "1 job found");
    assert_eq!(results_label(6), "6 jobs found");
}
