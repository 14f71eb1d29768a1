//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build from the environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host.map(str::trim) {
            None => DEFAULT_HOST.to_owned(),
            Some("") => return Err(ConfigError::EmptyHost),
            Some(h) => h.to_owned(),
        };
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(p) if p > 0 => p,
                _ => return Err(ConfigError::InvalidPort(raw.to_owned())),
            },
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
