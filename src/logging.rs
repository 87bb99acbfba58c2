use crate::config::Config;
use crate::types::CheckResult;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log effective configuration for a batch run
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: concurrency={}, timeout={}s, method={}",
        config.concurrency_limit(),
        config.timeout_duration().as_secs(),
        config.request_method()
    );
    if let Some(ref headers) = config.headers {
        info!("Custom headers: {}", headers.len());
    }
}

/// Log batch start
pub fn log_batch_start(url_count: usize) {
    info!("Checking {url_count} URL(s)");
}

/// Log batch completion
pub fn log_batch_complete(url_count: usize, issues: usize, duration_ms: u128) {
    if issues == 0 {
        info!("Batch complete: {url_count}/{url_count} URLs OK ({duration_ms}ms)");
    } else {
        warn!(
            "Batch complete: {}/{} URLs OK, {} issue(s) found ({}ms)",
            url_count - issues,
            url_count,
            issues,
            duration_ms
        );
    }
}

/// Log an individual check result for debugging
pub fn log_check_result(result: &CheckResult) {
    if result.is_ok() {
        debug!("✓ {result}");
    } else {
        debug!("✗ {result}");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
