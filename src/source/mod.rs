//! Worksheet sources.
//!
//! [`SheetSource`] abstracts where a worksheet's rows come from. Two remote
//! implementations are provided: the Sheets values API for keyed access and
//! the public CSV export for sheets shared by link. Tests supply in-memory
//! sources.

mod csv_export;
mod google;

pub use csv_export::CsvExportClient;
pub use google::ValuesApiClient;

use crate::error::PipelineError;
use crate::table::RawTable;

/// Reads the full contents of one named worksheet, header row first.
///
/// Any authentication, network, or unknown-worksheet failure is a
/// [`PipelineError::Connection`]; callers halt the pipeline rather than
/// continue with partial data.
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    async fn read(&self, worksheet: &str) -> Result<RawTable, PipelineError>;
}

#[async_trait::async_trait]
impl SheetSource for Box<dyn SheetSource> {
    async fn read(&self, worksheet: &str) -> Result<RawTable, PipelineError> {
        self.as_ref().read(worksheet).await
    }
}
