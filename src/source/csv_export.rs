//! Public-sheet CSV export source.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::error::PipelineError;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::table::{RawTable, cell};

use super::SheetSource;

/// Reads worksheets through the `gviz` CSV export endpoint.
///
/// Works without credentials for spreadsheets shared by link, which is how
/// classroom sheets are usually published. The export re-encodes the sheet
/// as UTF-8 CSV with a header row.
pub struct CsvExportClient<C> {
    base_url: String,
    spreadsheet_id: String,
    http: C,
}

impl<C: HttpClient> CsvExportClient<C> {
    pub fn new(spreadsheet_id: String, http: C) -> Self {
        Self {
            base_url: "https://docs.google.com".to_string(),
            spreadsheet_id,
            http,
        }
    }
}

#[async_trait]
impl<C: HttpClient> SheetSource for CsvExportClient<C> {
    async fn read(&self, worksheet: &str) -> Result<RawTable, PipelineError> {
        let url = format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url, self.spreadsheet_id, worksheet
        );

        let bytes = fetch_bytes(&self.http, &url)
            .await
            .map_err(|source| PipelineError::Connection {
                worksheet: worksheet.to_string(),
                source,
            })?;

        debug!(worksheet, bytes = bytes.len(), "CSV export received");

        table_from_csv(&bytes).map_err(|source| PipelineError::Connection {
            worksheet: worksheet.to_string(),
            source,
        })
    }
}

/// Parses exported CSV bytes into a [`RawTable`]; the first record is the
/// header. Undecodable bytes are replaced rather than failing the read; the
/// normalizer drops the replacement characters from text cells.
fn table_from_csv(bytes: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.byte_records();
    let Some(header) = records.next() else {
        return Ok(RawTable::new(Vec::new()));
    };

    let columns = header?
        .iter()
        .map(|c| String::from_utf8_lossy(c).trim().to_string())
        .collect();

    let mut table = RawTable::new(columns);
    for record in records {
        let record = record?;
        table.push_row(
            record
                .iter()
                .map(|c| cell(&String::from_utf8_lossy(c)))
                .collect(),
        );
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_csv() {
        let body = "\"이름\",\"1단원\",\"2단원\"\n\"민수\",\"80\",\"70\"\n\"영희\",\"90\",\"\"\n";
        let table = table_from_csv(body.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["이름", "1단원", "2단원"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0],
            vec![Some("민수".into()), Some("80".into()), Some("70".into())]
        );
        assert_eq!(table.rows[1][2], None);
    }

    #[test]
    fn test_empty_body_yields_empty_table() {
        let table = table_from_csv(b"").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_short_records_are_padded() {
        let body = "이름,수학,국어\n민수,80\n";
        let table = table_from_csv(body.as_bytes()).unwrap();
        assert_eq!(table.rows[0], vec![Some("민수".into()), Some("80".into()), None]);
    }
}
