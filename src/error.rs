//! Pipeline error kinds.
//!
//! Every variant is terminal for the current interaction: the CLI catches it,
//! prints a message, and draws nothing. Per-cell numeric parse failures are
//! never errors; they become missing values in the normalizer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The spreadsheet backend could not be read: network, auth, or an
    /// unknown worksheet name.
    #[error("failed to read worksheet '{worksheet}': {source}")]
    Connection {
        worksheet: String,
        #[source]
        source: anyhow::Error,
    },

    /// Required column(s) absent. `found` lists what the worksheet actually
    /// had, so the user can diagnose the sheet.
    #[error("missing required column(s) {missing:?}; worksheet has columns {found:?}")]
    Schema {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// The worksheet loaded but yielded no usable rows (or no student names).
    #[error("worksheet '{worksheet}' has no usable rows")]
    EmptyData { worksheet: String },

    /// The selected student has no row in the normalized table.
    #[error("student '{0}' not found in the worksheet")]
    NotFound(String),
}
