use clap::Parser;
use std::path::PathBuf;
use std::process;

use urlvet::checker::{CheckUrls, Checker};
use urlvet::config::{CliConfig, Config, parse_header_arg};
use urlvet::constants::output_formats;
use urlvet::error::Result;
use urlvet::input::{ColumnSelector, read_url_column};
use urlvet::logging::{
    init_logger, log_batch_complete, log_batch_start, log_config_info, log_error,
};
use urlvet::output::{display_results, write_csv};
use urlvet::progress::ProgressReporter;
use urlvet::types::BatchReport;

#[derive(Parser, Debug)]
#[command(
    name = "urlvet",
    version,
    about = "Check lists of URLs for broken links and dead hosts"
)]
struct Cli {
    /// URLs to check, given directly on the command line
    #[arg(value_name = "URLS")]
    urls: Vec<String>,

    /// Read URLs from a delimited file (CSV or similar spreadsheet export)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Column holding the URLs: a header name or a 1-based position
    #[arg(long, value_name = "SELECTOR")]
    column: Option<String>,

    /// Cell delimiter used in the input file
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// Timeout in seconds for each request
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Maximum number of concurrent requests
    #[arg(short, long, value_name = "COUNT")]
    concurrency: Option<usize>,

    /// Use HEAD requests instead of GET
    #[arg(long)]
    head: bool,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT")]
    user_agent: Option<String>,

    /// Extra request header in 'Name: Value' form (repeatable)
    #[arg(long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL)]
    format: Option<String>,

    /// Export the full report as CSV to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Use a specific configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Skip loading any configuration file
    #[arg(long)]
    no_config: bool,

    /// Suppress all output except issues
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) => {
            if report.is_all_ok() {
                process::exit(0);
            }
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<BatchReport> {
    let cli_config = build_cli_config(&cli)?;
    let config = load_and_merge_config(&cli_config)?;

    // Verbosity may come from the config file, so init after the merge
    init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    log_config_info(&config);

    let urls = gather_urls(&cli, &config)?;
    if urls.is_empty() {
        return Err(urlvet::UrlvetError::InvalidArgument(
            "no URLs to check; pass them as arguments or use --input".to_string(),
        ));
    }

    log_batch_start(urls.len());
    let started = std::time::Instant::now();

    let show_progress = !cli.quiet && !cli.no_progress;
    let mut progress = ProgressReporter::new(show_progress);

    let report = Checker::default()
        .check_urls(urls, &config, Some(&mut progress))
        .await?;
    progress.finish_and_clear();

    log_batch_complete(
        report.results.len(),
        report.issue_count(),
        started.elapsed().as_millis(),
    );

    let format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT);
    display_results(&report, format, cli.quiet);

    if let Some(ref path) = cli.export {
        if let Err(err) = write_csv(&report, path) {
            log_error("Failed to write CSV export", Some(&err));
            return Err(err);
        }
        if !cli.quiet {
            println!("\nReport exported to {}", path.display());
        }
    }

    Ok(report)
}

fn build_cli_config(cli: &Cli) -> Result<CliConfig> {
    let headers = cli
        .headers
        .iter()
        .map(|raw| parse_header_arg(raw))
        .collect::<Result<Vec<_>>>()?;

    Ok(CliConfig {
        timeout: cli.timeout,
        concurrency: cli.concurrency,
        head: cli.head,
        user_agent: cli.user_agent.clone(),
        headers,
        url_column: cli.column.clone(),
        delimiter: cli.delimiter,
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_config: cli.no_config,
        config_file: cli.config.clone(),
    })
}

fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref path) = cli_config.config_file {
        Config::load_from_file(path)?
    } else {
        Config::load_from_standard_locations()
    };
    config.merge_with_cli(cli_config);
    Ok(config)
}

fn gather_urls(cli: &Cli, config: &Config) -> Result<Vec<String>> {
    let mut urls = cli.urls.clone();

    if let Some(ref path) = cli.input {
        let selector: ColumnSelector = config
            .url_column
            .as_deref()
            .unwrap_or(urlvet::constants::defaults::URL_COLUMN)
            .parse()?;
        let delimiter = config
            .delimiter
            .unwrap_or(urlvet::constants::defaults::DELIMITER);
        urls.extend(read_url_column(path, &selector, delimiter)?);
    }

    Ok(urls)
}
