//! Sample catalogue and dashboard fixtures.
//!
//! These stand in for listing endpoints the API does not expose yet. Every
//! view reads them through `api::fetch_*` or the dashboard pages so the
//! swap to real calls stays local.

use super::types::{Application, ApplicationStatus, Job, JobStatus, JobType, Role, User};

/// A labelled headline number on a dashboard or the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    job_type: JobType,
    experience: &str,
    skills: &[&str],
    posted_by: &str,
    posted_date: &str,
    deadline: &str,
    description: &str,
) -> Job {
    Job {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        salary: salary.to_owned(),
        job_type,
        experience: experience.to_owned(),
        skills: skills.iter().map(|s| (*s).to_owned()).collect(),
        posted_by: posted_by.to_owned(),
        posted_date: posted_date.to_owned(),
        deadline: deadline.to_owned(),
        status: JobStatus::Active,
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, created_at: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        profile_picture: None,
        created_at: created_at.to_owned(),
    }
}

const SENIOR_ENGINEER_DESCRIPTION: &str = "We are looking for a Senior Software Engineer to join our platform team and help build the next generation of our product.

You will design, build, and operate services used by millions of people, working closely with product managers and designers from idea to launch.

Responsibilities include designing scalable systems, mentoring junior engineers, reviewing code, and keeping the platform fast and available.

We offer a competitive salary and equity, full health coverage, flexible remote work, and a yearly learning budget.";

/// Full public catalogue in listing order.
pub fn jobs() -> Vec<Job> {
    vec![
        job(
            "1",
            "Senior Software Engineer",
            "TechCorp Inc.",
            "San Francisco, CA",
            "$120,000 - $180,000",
            JobType::FullTime,
            "5+ years",
            &["React", "Node.js", "TypeScript", "AWS", "Docker", "GraphQL", "PostgreSQL", "Redis"],
            "recruiter1",
            "2025-01-15",
            "2025-02-15",
            SENIOR_ENGINEER_DESCRIPTION,
        ),
        job(
            "2",
            "Product Manager",
            "Innovation Labs",
            "New York, NY",
            "$100,000 - $150,000",
            JobType::FullTime,
            "3+ years",
            &["Product Strategy", "Analytics", "Agile", "Leadership"],
            "recruiter2",
            "2025-01-14",
            "2025-02-14",
            "Join our product team to drive innovation and growth across our core offerings.",
        ),
        job(
            "3",
            "UX Designer",
            "Design Studio",
            "Remote",
            "$80,000 - $120,000",
            JobType::FullTime,
            "2+ years",
            &["Figma", "User Research", "Prototyping", "Design Systems"],
            "recruiter3",
            "2025-01-13",
            "2025-02-13",
            "Create delightful user experiences for our web and mobile products.",
        ),
        job(
            "4",
            "Data Scientist",
            "DataTech Solutions",
            "Boston, MA",
            "$110,000 - $160,000",
            JobType::FullTime,
            "4+ years",
            &["Python", "Machine Learning", "SQL", "Statistics"],
            "recruiter4",
            "2025-01-12",
            "2025-02-12",
            "Analyze complex data sets to turn raw signals into business insight.",
        ),
        job(
            "5",
            "Marketing Specialist",
            "Growth Marketing Co.",
            "Austin, TX",
            "$60,000 - $90,000",
            JobType::FullTime,
            "2+ years",
            &["Digital Marketing", "SEO", "Content Marketing", "Analytics"],
            "recruiter5",
            "2025-01-11",
            "2025-02-11",
            "Plan and run campaigns that grow brand awareness and pipeline.",
        ),
        job(
            "6",
            "Frontend Developer Intern",
            "StartupXYZ",
            "Seattle, WA",
            "$20 - $25/hour",
            JobType::Internship,
            "Entry level",
            &["HTML", "CSS", "JavaScript", "React"],
            "recruiter6",
            "2025-01-10",
            "2025-02-10",
            "Learn and grow alongside our development team while shipping real features.",
        ),
    ]
}

pub fn job_by_id(id: &str) -> Option<Job> {
    jobs().into_iter().find(|j| j.id == id)
}

/// Highlighted postings on the home page.
pub fn featured_jobs() -> Vec<Job> {
    jobs().into_iter().take(3).collect()
}

pub fn platform_stats() -> [Stat; 4] {
    [
        Stat { label: "Active Jobs", value: "10,000+" },
        Stat { label: "Job Seekers", value: "50,000+" },
        Stat { label: "Companies", value: "2,500+" },
        Stat { label: "Success Rate", value: "95%" },
    ]
}

// =============================================================================
// JOB SEEKER
// =============================================================================

pub fn seeker_stats() -> [Stat; 4] {
    [
        Stat { label: "Applied Jobs", value: "12" },
        Stat { label: "Saved Jobs", value: "8" },
        Stat { label: "Profile Views", value: "45" },
        Stat { label: "Interviews", value: "3" },
    ]
}

pub fn seeker_applications() -> Vec<Application> {
    let catalogue = jobs();
    vec![
        Application {
            id: "1".to_owned(),
            job_id: "1".to_owned(),
            user_id: "1".to_owned(),
            resume_url: "/resume.pdf".to_owned(),
            cover_letter: "I am very interested in this role...".to_owned(),
            status: ApplicationStatus::Pending,
            applied_date: "2025-01-15".to_owned(),
            job: catalogue.first().cloned(),
            user: None,
        },
        Application {
            id: "2".to_owned(),
            job_id: "2".to_owned(),
            user_id: "1".to_owned(),
            resume_url: "/resume.pdf".to_owned(),
            cover_letter: "A strong fit for my skills...".to_owned(),
            status: ApplicationStatus::Reviewed,
            applied_date: "2025-01-12".to_owned(),
            job: catalogue.get(1).cloned(),
            user: None,
        },
    ]
}

pub fn saved_jobs() -> Vec<Job> {
    job_by_id("3").into_iter().collect()
}

// =============================================================================
// RECRUITER
// =============================================================================

pub fn recruiter_stats() -> [Stat; 4] {
    [
        Stat { label: "Active Jobs", value: "8" },
        Stat { label: "Total Applications", value: "156" },
        Stat { label: "Interviews", value: "12" },
        Stat { label: "Hired", value: "5" },
    ]
}

/// Postings owned by the signed-in recruiter.
pub fn recruiter_jobs() -> Vec<Job> {
    let pm = job(
        "2",
        "Product Manager",
        "TechCorp Inc.",
        "New York, NY",
        "$100,000 - $150,000",
        JobType::FullTime,
        "3+ years",
        &["Product Strategy", "Analytics", "Agile"],
        "recruiter1",
        "2025-01-10",
        "2025-02-10",
        "Join our product team to drive innovation...",
    );
    jobs().into_iter().take(1).chain(std::iter::once(pm)).collect()
}

pub fn recruiter_applications() -> Vec<Application> {
    let posting = jobs().into_iter().next();
    vec![
        Application {
            id: "1".to_owned(),
            job_id: "1".to_owned(),
            user_id: "1".to_owned(),
            resume_url: "/resume.pdf".to_owned(),
            cover_letter: "I am very interested in this position...".to_owned(),
            status: ApplicationStatus::Pending,
            applied_date: "2025-01-16".to_owned(),
            job: posting.clone(),
            user: Some(user("1", "John Doe", "john@example.com", Role::JobSeeker, "2025-01-01")),
        },
        Application {
            id: "2".to_owned(),
            job_id: "1".to_owned(),
            user_id: "2".to_owned(),
            resume_url: "/resume2.pdf".to_owned(),
            cover_letter: "Perfect fit for my skills and experience...".to_owned(),
            status: ApplicationStatus::Reviewed,
            applied_date: "2025-01-15".to_owned(),
            job: posting,
            user: Some(user("2", "Jane Smith", "jane@example.com", Role::JobSeeker, "2025-01-01")),
        },
    ]
}

// =============================================================================
// ADMIN
// =============================================================================

pub fn admin_stats() -> [Stat; 4] {
    [
        Stat { label: "Total Users", value: "1,250" },
        Stat { label: "Total Jobs", value: "89" },
        Stat { label: "Companies", value: "45" },
        Stat { label: "Pending Approvals", value: "12" },
    ]
}

pub fn recent_users() -> Vec<User> {
    vec![
        user("1", "John Doe", "john@example.com", Role::JobSeeker, "2025-01-15"),
        user("2", "Jane Smith", "jane@techcorp.com", Role::Recruiter, "2025-01-14"),
    ]
}

/// Postings awaiting moderation.
pub fn pending_jobs() -> Vec<Job> {
    jobs().into_iter().take(1).collect()
}
