//! Property-based tests for urlvet using proptest
//!
//! These tests generate random inputs to test edge cases and ensure
//! robustness across a wide range of potential inputs.

use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::process::Command;
use std::time::Duration;

use urlvet::output::to_csv;
use urlvet::types::{BatchReport, CheckResult, Classification, validate_url};

const NAME: &str = "urlvet";

/// Generate strings that are definitely not checkable URLs
fn malformed_url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        r"[a-z]{5,15}",    // No scheme
        r"://[a-z]{5,15}", // Scheme missing entirely
        Just("http://".to_string()),
        Just("ftp://example.com".to_string()),
        Just("mailto:user@example.com".to_string()),
        Just("   ".to_string()),
        Just("https://".to_string()),
    ]
}

fn result_strategy() -> impl Strategy<Value = CheckResult> {
    prop_oneof![
        (r"https://[a-z]{3,10}\.example", 100u16..600, 0u64..5000).prop_map(
            |(url, status, ms)| CheckResult::from_status(url, status, Duration::from_millis(ms))
        ),
        (r"https://[a-z]{3,10}\.example", r"[ -~]{0,40}").prop_map(|(url, detail)| {
            CheckResult::from_failure(
                url,
                Classification::ConnectionError,
                detail,
                Duration::from_millis(15),
            )
        }),
        r"[a-z ,\x22]{1,30}".prop_map(|raw| CheckResult::invalid(raw, "nonsense".to_string())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_classification_is_total_over_status_codes(status in any::<u16>()) {
        // Every conceivable status code maps to some classification
        let classification = Classification::from_status(status);
        prop_assert!(!classification.to_string().is_empty());
    }

    #[test]
    fn test_validate_url_never_panics(raw in any::<String>()) {
        let _ = validate_url(&raw);
    }

    #[test]
    fn test_summary_counts_sum_to_result_count(
        results in prop::collection::vec(result_strategy(), 0..50)
    ) {
        let total = results.len();
        let report = BatchReport::from_results(results);

        let summed: usize = report.summary.values().sum();
        prop_assert_eq!(summed, total);
        prop_assert_eq!(report.results.len(), total);
    }

    #[test]
    fn test_report_preserves_result_order(
        urls in prop::collection::vec(r"https://[a-z]{3,10}\.example/[a-z]{0,8}", 1..30)
    ) {
        let results: Vec<CheckResult> = urls
            .iter()
            .map(|url| CheckResult::from_status(url.clone(), 200, Duration::ZERO))
            .collect();
        let report = BatchReport::from_results(results);

        let reported: Vec<&str> = report.results.iter().map(|r| r.url.as_str()).collect();
        prop_assert_eq!(reported, urls.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_csv_has_one_row_per_result(
        results in prop::collection::vec(result_strategy(), 0..30)
    ) {
        let count = results.len();
        let csv = to_csv(&BatchReport::from_results(results));

        // Quoted fields never contain raw line breaks in our rows, so
        // record count is just line count minus the header
        prop_assert_eq!(csv.lines().count(), count + 1);
        for line in csv.lines() {
            prop_assert!(!line.is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Malformed URLs are classified locally, so this stays off the network
    #[test]
    fn test_cli_handles_malformed_urls(
        urls in prop::collection::vec(malformed_url_strategy(), 1..6)
    ) {
        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.args(&urls)
            .arg("--format")
            .arg("minimal")
            .arg("--no-progress")
            .arg("--no-config");

        let output = cmd.assert().failure().get_output().stdout.clone();
        let stdout = String::from_utf8(output).unwrap();
        prop_assert_eq!(stdout.lines().count(), urls.len());
        for line in stdout.lines() {
            prop_assert!(line.starts_with("INVALID_URL"));
        }
    }
}
