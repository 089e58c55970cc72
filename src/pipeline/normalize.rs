//! Worksheet normalization.
//!
//! Drops fully-empty rows, checks the identifier column exists, and coerces
//! every other column to numbers cell by cell. A cell that does not parse
//! becomes missing; a single bad cell never aborts the table.

use tracing::debug;

use crate::error::PipelineError;
use crate::pipeline::types::{NormalizedRow, NormalizedTable};
use crate::table::RawTable;

/// Parses one cell as a score. Returns `None` for blank or non-numeric
/// input instead of erroring, so the normalizer stays free of per-cell
/// control flow.
pub fn parse_score(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Strips characters that survived decoding as U+FFFD from a text cell.
/// Applied to identifier cells; a mangled character is dropped rather than
/// failing the row.
pub fn clean_text(cell: &str) -> String {
    cell.chars().filter(|&c| c != '\u{FFFD}').collect()
}

/// Fails with a schema error unless every column in `expected` is present.
/// Used by worksheets with a predeclared column set, before any numeric
/// conversion is attempted.
pub fn validate_columns(raw: &RawTable, expected: &[String]) -> Result<(), PipelineError> {
    let missing: Vec<String> = expected
        .iter()
        .filter(|c| raw.column_index(c).is_none())
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Schema {
            missing,
            found: raw.columns.clone(),
        })
    }
}

/// Normalizes a raw worksheet.
///
/// Every column other than `id_column` is treated as a score column, in the
/// worksheet's column order. Fails with a schema error carrying the columns
/// actually present when `id_column` is absent.
pub fn normalize(raw: &RawTable, id_column: &str) -> Result<NormalizedTable, PipelineError> {
    let id_index = raw
        .column_index(id_column)
        .ok_or_else(|| PipelineError::Schema {
            missing: vec![id_column.to_string()],
            found: raw.columns.clone(),
        })?;

    // One index set drives both the column names and each row's scores, so
    // they stay parallel even when a header repeats the id-column name.
    let score_indices: Vec<usize> = (0..raw.columns.len())
        .filter(|&i| i != id_index)
        .collect();

    let score_columns: Vec<String> = score_indices
        .iter()
        .map(|&i| raw.columns[i].clone())
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for cells in &raw.rows {
        let all_missing = cells
            .iter()
            .all(|c| c.as_deref().is_none_or(|v| v.trim().is_empty()));
        if all_missing {
            dropped += 1;
            continue;
        }

        let id = cells.get(id_index).and_then(|c| c.as_deref()).and_then(|v| {
            let cleaned = clean_text(v);
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

        let scores = score_indices
            .iter()
            .map(|&i| {
                cells
                    .get(i)
                    .and_then(|c| c.as_deref())
                    .and_then(parse_score)
            })
            .collect();

        rows.push(NormalizedRow { id, scores });
    }

    if dropped > 0 {
        debug!(dropped, "Dropped all-empty rows");
    }

    Ok(NormalizedTable {
        id_column: id_column.to_string(),
        score_columns,
        rows,
    })
}
