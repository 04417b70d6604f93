use serde::Deserialize;
use std::env;

/// Environment variable overriding the mentor service base address.
pub const API_BASE_ENV: &str = "TASKFLOW_API_BASE";

/// Base address used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    /// Read [`API_BASE_ENV`], loading a `.env` file first when the `dotenv`
    /// feature is on. Missing or blank values fall back to [`DEFAULT_API_BASE`].
    pub fn from_env() -> Self {
        #[cfg(feature = "dotenv")]
        dotenvy::dotenv().ok();

        Self::from_value(env::var(API_BASE_ENV).ok().as_deref())
    }

    /// Build from an optional override, e.g. a value baked in at compile time.
    pub fn from_value(api_base: Option<&str>) -> Self {
        match api_base.map(str::trim).filter(|v| !v.is_empty()) {
            Some(base) => Self::with_api_base(base),
            None => Self::default(),
        }
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
