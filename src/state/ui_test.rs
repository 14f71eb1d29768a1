use super::*;

fn assert_distinct<T: DashboardTab + std::fmt::Debug>() {
    let tabs = T::ALL;
    for (i, a) in tabs.iter().enumerate() {
        for (j, b) in tabs.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn every_dashboard_defaults_to_overview() {
    assert_eq!(SeekerTab::default(), SeekerTab::Overview);
    assert_eq!(RecruiterTab::default(), RecruiterTab::Overview);
    assert_eq!(AdminTab::default(), AdminTab::Overview);
}

#[test]
fn default_tab_is_listed_first() {
    assert_eq!(SeekerTab::ALL[0], SeekerTab::default());
    assert_eq!(RecruiterTab::ALL[0], RecruiterTab::default());
    assert_eq!(AdminTab::ALL[0], AdminTab::default());
}

// =============================================================
// Variants
// =============================================================

#[test]
fn seeker_tabs_are_distinct() {
    assert_eq!(SeekerTab::ALL.len(), 4);
    assert_distinct::<SeekerTab>();
}

#[test]
fn recruiter_tabs_are_distinct() {
    assert_eq!(RecruiterTab::ALL.len(), 4);
    assert_distinct::<RecruiterTab>();
}

#[test]
fn admin_tabs_are_distinct() {
    assert_eq!(AdminTab::ALL.len(), 4);
    assert_distinct::<AdminTab>();
    assert_eq!(AdminTab::Moderation.label(), "Content Moderation");
}

// =============================================================
// Flash
// =============================================================

#[test]
fn flash_starts_empty_and_show_sets_message() {
    assert_eq!(Flash::default().message, None);
    assert_eq!(Flash::show("Job posted successfully!", "/recruiter").message.as_deref(), Some("Job posted successfully!"));
}

#[test]
fn flash_survives_until_target_route_is_reached() {
    let flash = Flash::show("Job posted successfully!", "/recruiter").visit("/recruiter/post-job");
    assert!(flash.message.is_some());
    let flash = flash.visit("/recruiter");
    assert_eq!(flash.message.as_deref(), Some("Job posted successfully!"));
}

#[test]
fn flash_clears_on_first_route_change_after_shown() {
    let flash = Flash::show("You have been signed out.", "/").visit("/").visit("/");
    assert!(flash.message.is_some());
    let flash = flash.visit("/login");
    assert_eq!(flash, Flash::default());
    assert_eq!(flash.visit("/"), Flash::default());
}

#[test]
fn empty_flash_ignores_navigation() {
    assert_eq!(Flash::default().visit("/jobs"), Flash::default());
}
