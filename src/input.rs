//! Input adapter: extract the URL column from a delimited spreadsheet
//! export. The engine only ever sees the resulting list of strings.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, UrlvetError};

/// Which column of the input file holds the URLs.
///
/// A numeric selector is a 1-based column position and assumes the file
/// has no header row; a name selector is matched case-insensitively
/// against the first row, which is then consumed as the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl FromStr for ColumnSelector {
    type Err = UrlvetError;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UrlvetError::InvalidArgument(
                "column selector cannot be empty".to_string(),
            ));
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Err(UrlvetError::InvalidArgument(
                "column positions are 1-based".to_string(),
            )),
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => Ok(Self::Name(trimmed.to_string())),
        }
    }
}

/// Read `path` and extract the URL column, one entry per non-empty cell,
/// in row order.
pub fn read_url_column(
    path: impl AsRef<Path>,
    selector: &ColumnSelector,
    delimiter: char,
) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    extract_url_column(&content, selector, delimiter)
}

/// Extract the URL column from already-loaded delimited content.
pub fn extract_url_column(
    content: &str,
    selector: &ColumnSelector,
    delimiter: char,
) -> Result<Vec<String>> {
    let mut rows = content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let column_index = match selector {
        ColumnSelector::Index(position) => position - 1,
        ColumnSelector::Name(name) => {
            let header = rows
                .next()
                .ok_or_else(|| UrlvetError::Input("input file is empty".to_string()))?;
            split_record(header, delimiter)
                .iter()
                .position(|cell| cell.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    UrlvetError::Input(format!("column '{name}' not found in header row"))
                })?
        }
    };

    let mut urls = Vec::new();
    for row in rows {
        let cells = split_record(row, delimiter);
        if let Some(cell) = cells.get(column_index) {
            let trimmed = cell.trim();
            if !trimmed.is_empty() {
                urls.push(trimmed.to_string());
            }
        }
    }
    Ok(urls)
}

/// Split one record into cells, honoring double-quoted fields with `""`
/// escapes. Quoted cells may contain the delimiter.
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
        } else if c == '"' && cell.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut cell));
        } else {
            cell.push(c);
        }
    }
    cells.push(cell);
    cells
}
