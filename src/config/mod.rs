//! Configuration handling for the scraper and the asset matcher.
//!
//! Every recognised option lives on [`Config`]. Values are layered: built-in
//! defaults, then an optional JSON file (any subset of fields), then a few
//! environment overrides for settings that are commonly tweaked per run.
//! [`Config::load`] validates the result before handing it out.

use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::extractor::ExtractionPolicy;
use crate::model::LeagueDescriptor;
use crate::text::StopWords;
use crate::text::normalize::DEFAULT_STOP_WORDS;

/// Environment variable names.
pub const ENV_REQUEST_INTERVAL_MS: &str = "CLUBSCRAPE_REQUEST_INTERVAL_MS";
pub const ENV_USER_AGENT: &str = "CLUBSCRAPE_USER_AGENT";
pub const ENV_RETRY_ATTEMPTS: &str = "CLUBSCRAPE_RETRY_ATTEMPTS";

const DEFAULT_REQUEST_INTERVAL_MS: u64 = 350;
const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
const DEFAULT_RETRY_BASE_BACKOFF_MS: u64 = 500;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "FootballStadiumClubScraper/2.0 (clubscrape)";
const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["png", "svg", "jpg", "jpeg"];

const WIKI: &str = "https://en.wikipedia.org/wiki/";

/// (name, country, code, tier, page) for the 2024-25 season.
const DEFAULT_LEAGUES: &[(&str, &str, &str, u32, &str)] = &[
    ("Premier League", "ENG", "PL", 1, "2024%E2%80%9325_Premier_League"),
    ("EFL Championship", "ENG", "CH", 2, "2024%E2%80%9325_EFL_Championship"),
    ("EFL League One", "ENG", "L1", 3, "2024%E2%80%9325_EFL_League_One"),
    ("EFL League Two", "ENG", "L2", 4, "2024%E2%80%9325_EFL_League_Two"),
    ("National League", "ENG", "NL", 5, "2024%E2%80%9325_National_League"),
    ("Scottish Premiership", "SCO", "SP", 1, "2024%E2%80%9325_Scottish_Premiership"),
    ("Scottish Championship", "SCO", "SC", 2, "2024%E2%80%9325_Scottish_Championship"),
    ("Scottish League One", "SCO", "SL1", 3, "2024%E2%80%9325_Scottish_League_One"),
    ("Scottish League Two", "SCO", "SL2", 4, "2024%E2%80%9325_Scottish_League_Two"),
    ("Cymru Premier", "WAL", "CP", 1, "2024%E2%80%9325_Cymru_Premier"),
    ("LOI Premier Division", "IRL", "PD", 1, "2024_League_of_Ireland_Premier_Division"),
    ("LOI First Division", "IRL", "FD", 2, "2024_League_of_Ireland_First_Division"),
    ("NIFL Premiership", "NIR", "NIP", 1, "2024%E2%80%9325_NIFL_Premiership"),
];

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub leagues: Vec<LeagueDescriptor>,
    pub stop_words: Vec<String>,
    /// Minimum gap between two requests to the document source.
    pub request_interval_ms: u64,
    /// Extra attempts for a retriable transport failure.
    pub retry_attempts: u32,
    pub retry_base_backoff_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub policy: ExtractionPolicy,
    /// Asset file extensions, compared case-insensitively.
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leagues: DEFAULT_LEAGUES
                .iter()
                .map(|&(name, country, code, tier, page)| {
                    LeagueDescriptor::new(name, country, code, tier, format!("{WIKI}{page}"))
                })
                .collect(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            request_interval_ms: DEFAULT_REQUEST_INTERVAL_MS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_base_backoff_ms: DEFAULT_RETRY_BASE_BACKOFF_MS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            policy: ExtractionPolicy::default(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Defaults, overlaid with `path` when given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Fields it leaves out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = env::var(ENV_REQUEST_INTERVAL_MS) {
            self.request_interval_ms = parse_env(ENV_REQUEST_INTERVAL_MS, &value)?;
        }
        if let Ok(value) = env::var(ENV_RETRY_ATTEMPTS) {
            self.retry_attempts = parse_env(ENV_RETRY_ATTEMPTS, &value)?;
        }
        if let Ok(value) = env::var(ENV_USER_AGENT) {
            self.user_agent = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for league in &self.leagues {
            if league.name.trim().is_empty() || league.code.trim().is_empty() {
                return Err(invalid("leagues", "league name and code must be set"));
            }
            if league.tier == 0 {
                return Err(invalid("leagues", format!("{}: tier must be >= 1", league.name)));
            }
            let url = Url::parse(&league.url)
                .map_err(|e| invalid("leagues", format!("{}: {}", league.name, e)))?;
            if self.request_interval_ms == 0 && is_remote(&url) {
                return Err(invalid(
                    "request_interval_ms",
                    format!("must be > 0 for remote source {}", url),
                ));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "must be > 0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(invalid("user_agent", "must not be empty"));
        }
        if self.policy.ground_labels.is_empty() {
            return Err(invalid("policy.ground_labels", "at least one label is required"));
        }
        if self.policy.position_markers.is_empty() || self.policy.team_markers.is_empty() {
            return Err(invalid("policy", "standings markers must not be empty"));
        }
        if self.image_extensions.is_empty() {
            return Err(invalid("image_extensions", "at least one extension is required"));
        }
        Ok(())
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn retry_base_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_base_backoff_ms)
    }

    pub fn stop_words(&self) -> StopWords {
        StopWords::new(&self.stop_words)
    }
}

fn parse_env<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(field, format!("cannot parse '{}'", value)))
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

/// Anything that is not loopback counts as a shared service.
fn is_remote(url: &Url) -> bool {
    match url.host_str() {
        Some("localhost") => false,
        Some(host) => !host
            .trim_matches(|c| c == '[' || c == ']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
            ConfigError::Read { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "cannot parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::InvalidValue { .. } => None,
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
