//! Client runtime configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The WASM bundle has no process environment, so settings are baked in from
//! `JOBPORTAL_*` variables when the crate is compiled. Demo mode is an
//! explicit setting: it is the only path that fabricates users or fakes
//! successful submissions. Remote mode surfaces every API failure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Simulated round-trip delay for sample-data listings.
pub const DEFAULT_LATENCY_MS: u32 = 500;

/// Where auth and job-creation calls go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiMode {
    /// Call the REST API and propagate failures.
    Remote,
    /// Never touch the network; fabricate results locally.
    #[default]
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown JOBPORTAL_API_MODE: {0} (expected 'remote' or 'demo')")]
    UnknownApiMode(String),
    #[error("invalid JOBPORTAL_LATENCY_MS: {0}")]
    InvalidLatency(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_mode: ApiMode,
    /// Prefix joined onto `/api/...` paths. Empty means same origin.
    pub api_base: String,
    pub latency_ms: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_mode: ApiMode::default(), api_base: String::new(), latency_ms: DEFAULT_LATENCY_MS }
    }
}

impl PortalConfig {
    /// Build config from the `JOBPORTAL_*` variables captured at compile time.
    ///
    /// Optional:
    /// - `JOBPORTAL_API_MODE`: `demo` (default) or `remote`
    /// - `JOBPORTAL_API_BASE`: API origin prefix, default same origin
    /// - `JOBPORTAL_LATENCY_MS`: default 500
    ///
    /// Malformed values fall back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOBPORTAL_API_MODE"),
            option_env!("JOBPORTAL_API_BASE"),
            option_env!("JOBPORTAL_LATENCY_MS"),
        )
        .unwrap_or_else(|e| {
            #[cfg(feature = "hydrate")]
            log::warn!("{e}; using default portal config");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Self::default()
        })
    }

    /// Build config from raw string values.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized API mode or a non-numeric latency.
    pub fn from_values(mode: Option<&str>, base: Option<&str>, latency: Option<&str>) -> Result<Self, ConfigError> {
        let api_mode = parse_api_mode(mode)?;
        let api_base = base.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        let latency_ms = match latency.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidLatency(raw.to_owned()))?,
            None => DEFAULT_LATENCY_MS,
        };
        Ok(Self { api_mode, api_base, latency_ms })
    }

    pub fn is_demo(&self) -> bool {
        self.api_mode == ApiMode::Demo
    }

    /// Absolute or same-origin URL for an API path such as `/api/jobs`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_api_mode(raw: Option<&str>) -> Result<ApiMode, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("demo") {
        "demo" => Ok(ApiMode::Demo),
        "remote" => Ok(ApiMode::Remote),
        other => Err(ConfigError::UnknownApiMode(other.to_owned())),
    }
}
