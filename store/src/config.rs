use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Which document store backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Remote document store over HTTP
    Http,
    /// Process-local store, contents are lost on exit
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Backend::Http),
            "memory" => Ok(Backend::Memory),
            _ => Err(format!("Unknown backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    /// Base URL of the remote document store (required for `Backend::Http`)
    pub store_url: Option<String>,
    /// Bearer token presented to the remote document store
    pub store_token: String,
    /// Upper bound for a single store call
    pub request_timeout: Duration,
    /// Total attempts per call, including the first one
    pub retry_attempts: u32,
    /// Delay before the first retry; doubles on each further retry
    pub retry_base_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            store_url: None,
            store_token: String::new(),
            request_timeout: Duration::from_millis(5000),
            retry_attempts: 3,
            retry_base_delay: Duration::from_millis(100),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let backend = match env::var("LARDER_BACKEND") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "LARDER_BACKEND",
                value,
            })?,
            Err(_) => defaults.backend,
        };

        let store_url = env::var("LARDER_STORE_URL").ok();
        if backend == Backend::Http && store_url.is_none() {
            return Err(ConfigError::Missing("LARDER_STORE_URL"));
        }

        Ok(Self {
            backend,
            store_url,
            store_token: env::var("LARDER_STORE_TOKEN").unwrap_or_default(),
            request_timeout: read_millis("LARDER_TIMEOUT_MS")?
                .unwrap_or(defaults.request_timeout),
            retry_attempts: read_attempts("LARDER_RETRY_ATTEMPTS")?
                .unwrap_or(defaults.retry_attempts),
            retry_base_delay: read_millis("LARDER_RETRY_BASE_MS")?
                .unwrap_or(defaults.retry_base_delay),
        })
    }
}

fn read_number(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(None),
    }
}

fn read_attempts(name: &'static str) -> Result<Option<u32>, ConfigError> {
    read_number(name)?
        .map(|n| {
            u32::try_from(n)
                .map(|n| n.max(1))
                .map_err(|_| ConfigError::Invalid {
                    name,
                    value: n.to_string(),
                })
        })
        .transpose()
}

fn read_millis(name: &'static str) -> Result<Option<Duration>, ConfigError> {
    Ok(read_number(name)?.map(Duration::from_millis))
}
