use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use url::Url;

/// HTTP method used for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Head,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Head => write!(f, "HEAD"),
        }
    }
}

/// A single URL check to perform. Immutable once created; the engine
/// builds one per input URL.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub url: String,
    pub timeout: Duration,
    pub method: RequestMethod,
}

/// Outcome bucket assigned to one URL check.
///
/// Every check ends in exactly one of these; there is no uncategorized
/// result. HTTP-derived buckets come from the response status, the rest
/// from the failure mode of the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Ok,
    NotFound,
    ClientError,
    ServerError,
    Redirect,
    Timeout,
    ConnectionError,
    InvalidUrl,
}

impl Classification {
    /// Map an HTTP status code to its bucket.
    ///
    /// Redirects are reported as such because the client never follows
    /// them. Status codes outside 200-599 are lumped in with server
    /// errors; no sane server emits them.
    pub fn from_status(status_code: u16) -> Self {
        match status_code {
            200..=299 => Self::Ok,
            404 => Self::NotFound,
            300..=399 => Self::Redirect,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::ServerError,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::NotFound => "NOT_FOUND",
            Self::ClientError => "CLIENT_ERROR",
            Self::ServerError => "SERVER_ERROR",
            Self::Redirect => "REDIRECT",
            Self::Timeout => "TIMEOUT",
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::InvalidUrl => "INVALID_URL",
        };
        write!(f, "{name}")
    }
}

/// Result of checking one URL. Created exactly once per input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub url: String,
    pub status_code: Option<u16>,
    pub classification: Classification,
    pub error_detail: Option<String>,
    pub elapsed: Duration,
}

impl CheckResult {
    /// Create a result for a received HTTP response.
    pub fn from_status(url: String, status_code: u16, elapsed: Duration) -> Self {
        Self {
            url,
            status_code: Some(status_code),
            classification: Classification::from_status(status_code),
            error_detail: None,
            elapsed,
        }
    }

    /// Create a result for a request that failed without a response.
    pub fn from_failure(
        url: String,
        classification: Classification,
        detail: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            url,
            status_code: None,
            classification,
            error_detail: Some(detail),
            elapsed,
        }
    }

    /// Create a result for a URL rejected before any network call.
    pub fn invalid(url: String, detail: String) -> Self {
        Self::from_failure(url, Classification::InvalidUrl, detail, Duration::ZERO)
    }

    pub fn is_ok(&self) -> bool {
        self.classification.is_ok()
    }

    pub fn is_not_ok(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status_code, &self.error_detail) {
            (Some(code), _) => {
                write!(f, "{} {} - {}", code, self.classification, self.url)
            }
            (None, Some(detail)) => {
                write!(f, "{} ({}) - {}", self.classification, detail, self.url)
            }
            (None, None) => write!(f, "{} - {}", self.classification, self.url),
        }
    }
}

/// One batch run over a list of URLs.
///
/// `results` is in input order, one entry per submitted URL, however the
/// concurrent checks happened to complete. The engine returns the report
/// by value and keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<CheckResult>,
    pub summary: BTreeMap<Classification, usize>,
}

impl BatchReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let mut summary = BTreeMap::new();
        for result in &results {
            *summary.entry(result.classification).or_insert(0) += 1;
        }
        Self { results, summary }
    }

    /// Count of results in a given bucket.
    pub fn count(&self, classification: Classification) -> usize {
        self.summary.get(&classification).copied().unwrap_or(0)
    }

    /// Count of results that are anything other than OK.
    pub fn issue_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_not_ok()).count()
    }

    pub fn is_all_ok(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Check that a raw string is a well-formed absolute http(s) URL.
///
/// Returns the reason it is not, for use as the INVALID_URL error detail.
pub fn validate_url(raw: &str) -> Result<(), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty URL".to_string());
    }
    let parsed = Url::parse(trimmed).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{other}'")),
    }
    if parsed.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}
