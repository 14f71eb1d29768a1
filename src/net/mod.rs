//! Networking modules for the REST API and its sample stand-ins.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` classifies their failures, `types`
//! defines the shared wire schema, and `sample` holds the catalogue and
//! dashboard fixtures served until listing endpoints exist.

pub mod api;
pub mod error;
pub mod sample;
pub mod types;
