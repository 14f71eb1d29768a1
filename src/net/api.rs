//! REST API helpers for the auth and job endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`. Nothing here substitutes
//! sample data for a failed call; demo behavior lives behind
//! `ApiMode::Demo` in the callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::sample;
use super::types::{AuthResponse, Job, LoginRequest, NewJob, RegisterRequest};
use crate::config::PortalConfig;
use crate::util::job_filter::{JobFilters, filter_jobs};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const JOBS_PATH: &str = "/api/jobs";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, bearer: Option<&str>, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let mut builder = gloo_net::http::Request::post(url);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", &bearer_header(token));
    }
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a
/// malformed body.
pub async fn login(config: &PortalConfig, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(LOGIN_PATH), None, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a
/// malformed body.
pub async fn register(config: &PortalConfig, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(REGISTER_PATH), None, req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(ApiError::Unavailable)
    }
}

/// Publish or save a posting via `POST /api/jobs` with a bearer token.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-OK status, or a
/// malformed body.
pub async fn create_job(config: &PortalConfig, token: &str, job: &NewJob) -> Result<Job, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(JOBS_PATH), Some(token), job).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token, job);
        Err(ApiError::Unavailable)
    }
}

/// Wait out the configured fake round-trip before resolving sample data.
pub async fn simulate_latency(config: &PortalConfig) {
    #[cfg(feature = "hydrate")]
    {
        if config.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(config.latency_ms).await;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Listing for `/jobs`: the sample catalogue narrowed by `filters`.
pub async fn fetch_jobs(config: &PortalConfig, filters: &JobFilters) -> Vec<Job> {
    simulate_latency(config).await;
    filter_jobs(&sample::jobs(), filters)
}

/// Detail for `/jobs/:id`. `None` renders the not-found view.
pub async fn fetch_job(config: &PortalConfig, id: &str) -> Option<Job> {
    simulate_latency(config).await;
    sample::job_by_id(id)
}
