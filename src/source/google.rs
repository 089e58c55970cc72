//! Google Sheets values-API source.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::error::PipelineError;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::table::{RawTable, cell};

use super::SheetSource;

/// Reads worksheets through `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// The response is JSON with a `values` array of row arrays of formatted
/// strings. Credentials are the wrapped client's concern (API key as a URL
/// parameter).
pub struct ValuesApiClient<C> {
    base_url: String,
    spreadsheet_id: String,
    http: C,
}

impl<C: HttpClient> ValuesApiClient<C> {
    pub fn new(spreadsheet_id: String, http: C) -> Self {
        Self {
            base_url: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id,
            http,
        }
    }
}

#[async_trait]
impl<C: HttpClient> SheetSource for ValuesApiClient<C> {
    async fn read(&self, worksheet: &str) -> Result<RawTable, PipelineError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?majorDimension=ROWS",
            self.base_url, self.spreadsheet_id, worksheet
        );

        let bytes = fetch_bytes(&self.http, &url)
            .await
            .map_err(|source| PipelineError::Connection {
                worksheet: worksheet.to_string(),
                source,
            })?;

        debug!(worksheet, bytes = bytes.len(), "Values API response received");

        table_from_values(&bytes).map_err(|source| PipelineError::Connection {
            worksheet: worksheet.to_string(),
            source,
        })
    }
}

/// Parses a values-API response body into a [`RawTable`]. The first row is
/// the header; shorter data rows are padded with missing cells. A response
/// without `values` (an empty worksheet) yields an empty table.
fn table_from_values(bytes: &[u8]) -> Result<RawTable> {
    let json: serde_json::Value = serde_json::from_slice(bytes)?;

    let Some(values) = json.get("values").and_then(|v| v.as_array()) else {
        return Ok(RawTable::new(Vec::new()));
    };

    let mut rows = values.iter();
    let Some(header) = rows.next() else {
        return Ok(RawTable::new(Vec::new()));
    };

    let columns = header
        .as_array()
        .ok_or_else(|| anyhow!("header row is not an array"))?
        .iter()
        .map(cell_text)
        .map(|c| c.trim().to_string())
        .collect();

    let mut table = RawTable::new(columns);
    for row in rows {
        let cells = row
            .as_array()
            .ok_or_else(|| anyhow!("data row is not an array"))?
            .iter()
            .map(|v| cell(&cell_text(v)))
            .collect();
        table.push_row(cells);
    }

    Ok(table)
}

/// The API delivers formatted strings, but unformatted requests can yield
/// bare numbers; both become text here. JSON nulls are empty cells.
fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_values() {
        let body = r#"{
            "range": "'수학'!A1:C4",
            "majorDimension": "ROWS",
            "values": [
                ["이름", "1단원", "2단원"],
                ["민수", "80", "70"],
                ["영희", "90"],
                ["철수", "", "x"]
            ]
        }"#
        .as_bytes();

        let table = table_from_values(body).unwrap();

        assert_eq!(table.columns, vec!["이름", "1단원", "2단원"]);
        assert_eq!(table.rows.len(), 3);
        // short row padded
        assert_eq!(table.rows[1], vec![Some("영희".into()), Some("90".into()), None]);
        // empty cell is missing, non-numeric text survives to the normalizer
        assert_eq!(table.rows[2], vec![Some("철수".into()), None, Some("x".into())]);
    }

    #[test]
    fn test_empty_worksheet_yields_empty_table() {
        let body = r#"{"range": "'수학'!A1:Z1000", "majorDimension": "ROWS"}"#.as_bytes();
        let table = table_from_values(body).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_numeric_json_cells_become_text() {
        let body = r#"{"values": [["이름", "수학"], ["민수", 80], ["영희", null]]}"#.as_bytes();
        let table = table_from_values(body).unwrap();
        assert_eq!(table.rows[0][1], Some("80".to_string()));
        assert_eq!(table.rows[1][1], None);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(table_from_values(b"not json").is_err());
        assert!(table_from_values(br#"{"values": ["not-a-row"]}"#).is_err());
    }
}
