//! urlvet - batch URL verification with bounded concurrency
//!
//! Checks lists of URLs (given directly or pulled out of a spreadsheet
//! export) over HTTP and classifies each outcome, preserving input
//! order in the report.

pub mod checker;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;
pub mod types;

pub use checker::{CheckUrls, Checker};
pub use config::{CliConfig, Config};
pub use error::{Result, UrlvetError};
pub use input::ColumnSelector;
pub use progress::ProgressReporter;
pub use types::{BatchReport, CheckResult, Classification, RequestMethod};
