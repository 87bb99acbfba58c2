use std::fmt;

/// Error types for urlvet operations.
///
/// Per-URL failures never surface here; they are folded into
/// `CheckResult` classifications. These variants cover the things that
/// legitimately abort a run: bad configuration, unreadable input,
/// unwritable export targets.
#[derive(Debug)]
pub enum UrlvetError {
    /// IO error (input file, export file)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input adapter error (column extraction)
    Input(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UrlvetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlvetError::Io(err) => write!(f, "IO error: {err}"),
            UrlvetError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlvetError::Input(msg) => write!(f, "Input error: {msg}"),
            UrlvetError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlvetError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlvetError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlvetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlvetError::Io(err) => Some(err),
            UrlvetError::Http(err) => Some(err),
            UrlvetError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlvetError {
    fn from(err: std::io::Error) -> Self {
        UrlvetError::Io(err)
    }
}

impl From<reqwest::Error> for UrlvetError {
    fn from(err: reqwest::Error) -> Self {
        UrlvetError::Http(err)
    }
}

impl From<toml::de::Error> for UrlvetError {
    fn from(err: toml::de::Error) -> Self {
        UrlvetError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlvetError
pub type Result<T> = std::result::Result<T, UrlvetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_error = UrlvetError::Config("timeout must be positive".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: timeout must be positive"
        );

        let input_error = UrlvetError::Input("column 'url' not found".to_string());
        assert_eq!(format!("{input_error}"), "Input error: column 'url' not found");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = UrlvetError::from(io_error);

        match error {
            UrlvetError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = UrlvetError::Io(io_error);
        assert!(std::error::Error::source(&error).is_some());

        let config_error = UrlvetError::Config("bad".to_string());
        assert!(std::error::Error::source(&config_error).is_none());
    }
}
