//! Single-student projection.

use crate::error::PipelineError;
use crate::pipeline::types::{NormalizedTable, ScoreEntry, StudentRow};

/// Extracts `student`'s row and reshapes it into the (column, value) layout
/// the averages use.
///
/// When the worksheet carries duplicate names the first row wins; which row
/// is authoritative is unspecified upstream, so this keeps the original
/// behavior rather than erroring or aggregating.
pub fn project(table: &NormalizedTable, student: &str) -> Result<StudentRow, PipelineError> {
    let row = table
        .rows
        .iter()
        .find(|r| r.id.as_deref() == Some(student))
        .ok_or_else(|| PipelineError::NotFound(student.to_string()))?;

    let scores = table
        .score_columns
        .iter()
        .zip(&row.scores)
        .map(|(column, value)| ScoreEntry {
            column: column.clone(),
            value: *value,
        })
        .collect();

    Ok(StudentRow {
        student: student.to_string(),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::NormalizedRow;

    fn table() -> NormalizedTable {
        NormalizedTable {
            id_column: "이름".into(),
            score_columns: vec!["수학".into(), "국어".into()],
            rows: vec![
                NormalizedRow {
                    id: Some("민수".into()),
                    scores: vec![Some(80.0), Some(70.0)],
                },
                NormalizedRow {
                    id: Some("민수".into()),
                    scores: vec![Some(10.0), Some(20.0)],
                },
                NormalizedRow {
                    id: None,
                    scores: vec![Some(50.0), None],
                },
            ],
        }
    }

    #[test]
    fn test_project_reshapes_row() {
        let row = project(&table(), "민수").unwrap();

        assert_eq!(row.student, "민수");
        assert_eq!(row.scores.len(), 2);
        assert_eq!(row.scores[0].column, "수학");
        assert_eq!(row.scores[0].value, Some(80.0));
    }

    #[test]
    fn test_project_first_match_wins() {
        let row = project(&table(), "민수").unwrap();
        assert_eq!(row.scores[0].value, Some(80.0));
    }

    #[test]
    fn test_project_unknown_student_is_not_found() {
        let err = project(&table(), "없는사람").unwrap_err();
        assert!(matches!(err, PipelineError::NotFound(name) if name == "없는사람"));
    }
}
