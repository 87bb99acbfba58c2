use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants::{defaults, timeouts};
use crate::error::{Result, UrlvetError};
use crate::types::RequestMethod;

/// Default User-Agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,

    /// Maximum number of concurrent in-flight requests
    pub concurrency: Option<usize>,

    /// Request method to use (get or head)
    pub method: Option<RequestMethod>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Additional request headers
    pub headers: Option<BTreeMap<String, String>>,

    /// Column holding URLs in batch input files (header name or 1-based index)
    pub url_column: Option<String>,

    /// Cell delimiter for batch input files
    pub delimiter: Option<char>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations.
    ///
    /// Checks `.urlvet.toml` in the current directory and up to three
    /// parent directories, falling back to defaults.
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(".urlvet.toml") {
            return config;
        }

        for i in 1..=3 {
            let path = format!("{}.urlvet.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence).
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if cli_config.head {
            self.method = Some(RequestMethod::Head);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if !cli_config.headers.is_empty() {
            let merged = self.headers.get_or_insert_with(BTreeMap::new);
            for (name, value) in &cli_config.headers {
                merged.insert(name.clone(), value.clone());
            }
        }
        if let Some(ref url_column) = cli_config.url_column {
            self.url_column = Some(url_column.clone());
        }
        if let Some(delimiter) = cli_config.delimiter {
            self.delimiter = Some(delimiter);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate the effective configuration.
    ///
    /// Called by the engine before any request is issued; a bad value
    /// fails the whole batch up front.
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(UrlvetError::Config(
                    "timeout must be a positive number of seconds".to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(UrlvetError::Config(format!(
                    "timeout must be at most {} seconds",
                    timeouts::MAX_TIMEOUT_SECONDS
                )));
            }
        }
        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(UrlvetError::Config(
                    "concurrency must be a positive integer".to_string(),
                ));
            }
        }
        // Reject unparsable headers before the HTTP client sees them
        self.header_map()?;
        Ok(())
    }

    /// Get timeout as Duration.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Get the effective concurrency limit.
    pub fn concurrency_limit(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    /// Get the effective request method.
    pub fn request_method(&self) -> RequestMethod {
        self.method.unwrap_or_default()
    }

    /// Get the effective User-Agent.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Build the custom header map for the HTTP client.
    pub fn header_map(&self) -> Result<reqwest::header::HeaderMap> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        let mut map = HeaderMap::new();
        if let Some(ref headers) = self.headers {
            for (name, value) in headers {
                let name = name.parse::<HeaderName>().map_err(|_| {
                    UrlvetError::Config(format!("invalid header name '{name}'"))
                })?;
                let value = value.parse::<HeaderValue>().map_err(|_| {
                    UrlvetError::Config(format!("invalid header value for '{name:?}'"))
                })?;
                map.insert(name, value);
            }
        }
        Ok(map)
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub concurrency: Option<usize>,
    pub head: bool,
    pub user_agent: Option<String>,
    pub headers: Vec<(String, String)>,
    pub url_column: Option<String>,
    pub delimiter: Option<char>,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_config: bool,
    pub config_file: Option<String>,
}

/// Parse a `Name: Value` header argument into a pair.
pub fn parse_header_arg(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(UrlvetError::InvalidArgument(format!(
            "header '{raw}' is not in 'Name: Value' form"
        ))),
    }
}
