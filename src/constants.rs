/// Application-wide constants to avoid magic values throughout the codebase.
/// Output format constants
pub mod output_formats {
    /// Text output format - grouped, human-oriented
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per result
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Default number of concurrent in-flight requests
    pub const CONCURRENCY: usize = 10;
    /// Default input column selector for batch files
    pub const URL_COLUMN: &str = "url";
    /// Default cell delimiter for batch files
    pub const DELIMITER: char = ',';
}
