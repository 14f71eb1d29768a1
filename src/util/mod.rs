//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view logic
//! from page and component code to improve reuse and testability.

pub mod auth;
pub mod dashboard_actions;
pub mod format;
pub mod job_filter;
pub mod job_form;
pub mod storage;
