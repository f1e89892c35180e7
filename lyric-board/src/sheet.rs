//! Lyrics kept in a spreadsheet.
//!
//! The source is any URL returning a range in the Google Sheets `values`
//! shape, e.g. `https://sheets.googleapis.com/v4/spreadsheets/<id>/values/A:C?key=<key>`:
//!
//! ```json
//! { "values": [["Artist", "Lyric"], ["Queen", "Is this the real life?"]] }
//! ```
//!
//! The first row holds the column names.

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("spreadsheet request failed with {0}")]
    Status(StatusCode),
    #[error("no column named {0:?}")]
    MissingColumn(String),
    #[error("column {0:?} has no entries")]
    Empty(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Non-blank cells under the header `name`, matched case-insensitively.
pub fn column(values: &[Vec<String>], name: &str) -> Result<Vec<String>> {
    let (header, rows) = values
        .split_first()
        .ok_or_else(|| SheetError::MissingColumn(name.into()))?;
    let index = header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| SheetError::MissingColumn(name.into()))?;
    let cells: Vec<String> = rows
        .iter()
        .filter_map(|row| row.get(index))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect();
    if cells.is_empty() {
        return Err(SheetError::Empty(name.into()));
    }
    Ok(cells)
}

pub async fn fetch_column(http: &reqwest::Client, url: &str, name: &str) -> Result<Vec<String>> {
    debug!("Fetching spreadsheet {}", url);
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(SheetError::Status(response.status()));
    }
    let range: ValueRange = response.json().await?;
    debug!("Spreadsheet has {} rows", range.values.len());
    column(&range.values, name)
}
