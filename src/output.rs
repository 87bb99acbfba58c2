//! Output formatting and export encodings for urlvet

use serde_json::{Value, json};
use std::path::Path;

use crate::constants::output_formats;
use crate::error::Result;
use crate::types::BatchReport;

/// Display a batch report in the chosen output format.
pub fn display_results(report: &BatchReport, output_format: &str, quiet: bool) {
    match output_format {
        output_formats::MINIMAL => display_minimal_output(report),
        output_formats::JSON => display_json_output(report),
        _ => display_text_output(report, quiet),
    }
}

/// One plain line per result, machine-friendly.
fn display_minimal_output(report: &BatchReport) {
    for result in &report.results {
        println!("{result}");
    }
}

fn display_json_output(report: &BatchReport) {
    println!("{}", report_to_json(report));
}

fn display_text_output(report: &BatchReport, quiet: bool) {
    if !quiet {
        println!("\nChecked {} URL(s)", report.results.len());
        for (classification, count) in &report.summary {
            println!("   {classification}: {count}");
        }
    }

    if report.is_all_ok() {
        if !quiet {
            println!("\nNo issues!");
        }
        return;
    }

    println!("\n> Issues");
    for (i, result) in report.results.iter().filter(|r| r.is_not_ok()).enumerate() {
        println!("{:4}. {}", i + 1, result);
    }
}

/// Build the JSON encoding of a report.
pub fn report_to_json(report: &BatchReport) -> Value {
    let results: Vec<Value> = report
        .results
        .iter()
        .map(|r| {
            json!({
                "url": r.url,
                "status_code": r.status_code,
                "classification": r.classification,
                "error_detail": r.error_detail,
                "elapsed_ms": r.elapsed.as_millis() as u64,
            })
        })
        .collect();

    let summary: Value = report
        .summary
        .iter()
        .map(|(classification, count)| (classification.to_string(), json!(count)))
        .collect::<serde_json::Map<String, Value>>()
        .into();

    json!({
        "status": if report.is_all_ok() { "success" } else { "failure" },
        "total": report.results.len(),
        "issues": report.issue_count(),
        "summary": summary,
        "results": results,
    })
}

/// Encode a report as delimited text, one row per result in engine
/// output order. UTF-8, RFC 4180 quoting.
pub fn to_csv(report: &BatchReport) -> String {
    let mut out = String::from("URL,Status Code,Classification,Error Detail,Elapsed (ms)\r\n");
    for result in &report.results {
        let status = result
            .status_code
            .map(|code| code.to_string())
            .unwrap_or_default();
        let detail = result.error_detail.as_deref().unwrap_or("");
        let row = [
            escape_csv_field(&result.url),
            status,
            result.classification.to_string(),
            escape_csv_field(detail),
            result.elapsed.as_millis().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }
    out
}

/// Write the CSV encoding of a report to `path`.
pub fn write_csv(report: &BatchReport, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, to_csv(report))?;
    Ok(())
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
