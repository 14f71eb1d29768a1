//! Reusable UI components shared across pages.

pub mod header;
pub mod job_card;
pub mod layout;
pub mod protected;
pub mod stat_card;
pub mod tab_bar;
