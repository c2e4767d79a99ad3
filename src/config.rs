//! Client configuration.
//!
//! Defaults target the public FruityVice API. Two environment variables
//! override them:
//!
//! - `FRUITY_API_URL`: base URL of the fruit resource (must be http or https)
//! - `FRUITY_TIMEOUT_SECS`: per-request timeout in whole seconds

use crate::error::{FruityError, Result};
use reqwest::Url;
use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fruityvice.com/api/fruit/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const BASE_URL_ENV: &str = "FRUITY_API_URL";
const TIMEOUT_ENV: &str = "FRUITY_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Config {
    /// Configuration for a custom base URL with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults, overridden by `FRUITY_API_URL` / `FRUITY_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        let timeout = std::env::var(TIMEOUT_ENV).ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> Result<Self> {
        let mut config = Self::new(base_url.unwrap_or(DEFAULT_BASE_URL))?;

        if let Some(raw) = timeout_secs {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                FruityError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(FruityError::Config(format!("{TIMEOUT_ENV} must be greater than zero")));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Whether the API lives on this machine (local stubs, test servers).
    pub fn is_loopback(&self) -> bool {
        let Some(host) = self.base_url.host_str() else {
            return false;
        };
        if host.eq_ignore_ascii_case("localhost") {
            return true;
        }
        host.trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| FruityError::Config(format!("invalid API URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FruityError::Config(format!(
            "API URL must use http or https, got {}",
            url.scheme()
        )));
    }

    // Segments are appended to the base path, so it has to end in a slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
