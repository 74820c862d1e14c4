//! Process configuration, captured once at start-up.
//!
//! Everything is read through [`ReportConfig::from_lookup`], so callers (and tests)
//! can feed values from any source. [`ReportConfig::from_env`] is the process
//! environment flavour used by the binary after `.env` has been loaded.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

pub const DEFAULT_CHART_BASE_URL: &str = "https://quickchart.io/chart";
pub const DEFAULT_INPUT_PATH: &str = "data/sample_sales.csv";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },
    #[error("SMTP_PORT must be a port number, got '{value}'")]
    InvalidPort { value: String },
    #[error("{var} must be true or false, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
    #[error("CHART_BASE_URL is not a valid URL: '{value}'")]
    InvalidUrl { value: String },
}

#[derive(Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Upgrade the connection with STARTTLS. Off unless asked for.
    pub starttls: bool,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("starttls", &self.starttls)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub smtp: SmtpConfig,
    pub sender: String,
    pub chart_base_url: Url,
    pub input_path: PathBuf,
}

impl ReportConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| lookup(var).filter(|value| !value.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let host = require("SMTP_HOST")?;
        let port_raw = require("SMTP_PORT")?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: port_raw.clone() })?;
        let username = require("EMAIL_USER")?;
        let password = require("EMAIL_PASS")?;

        let starttls = match get("SMTP_STARTTLS") {
            None => false,
            Some(value) => parse_flag("SMTP_STARTTLS", &value)?,
        };

        let sender = get("EMAIL_FROM").unwrap_or_else(|| username.clone());

        let chart_raw = get("CHART_BASE_URL").unwrap_or_else(|| DEFAULT_CHART_BASE_URL.to_string());
        let chart_base_url =
            Url::parse(chart_raw.trim()).map_err(|_| ConfigError::InvalidUrl { value: chart_raw.clone() })?;

        let input_path = get("REPORT_INPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

        Ok(Self {
            smtp: SmtpConfig {
                host: host.trim().to_string(),
                port,
                username,
                password,
                starttls,
            },
            sender,
            chart_base_url,
            input_path,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
