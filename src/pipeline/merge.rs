//! Left join of class averages with one student's scores.

use crate::pipeline::types::{AverageTable, ComparisonRow, ComparisonTable, StudentRow};

/// Left-joins on score-column name: every column of `averages` appears in
/// the output; a student value missing for some column stays missing. Row
/// order follows the average table for stable rendering.
pub fn merge(averages: &AverageTable, student: &StudentRow) -> ComparisonTable {
    let rows = averages
        .entries
        .iter()
        .map(|entry| {
            let student_score = student
                .scores
                .iter()
                .find(|s| s.column == entry.column)
                .and_then(|s| s.value);

            ComparisonRow {
                column: entry.column.clone(),
                class_average: entry.mean,
                student_score,
            }
        })
        .collect();

    ComparisonTable {
        student: student.student.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{AverageEntry, ScoreEntry};

    fn averages() -> AverageTable {
        AverageTable {
            entries: vec![
                AverageEntry {
                    column: "수학".into(),
                    mean: Some(85.0),
                },
                AverageEntry {
                    column: "국어".into(),
                    mean: Some(75.0),
                },
            ],
        }
    }

    #[test]
    fn test_merge_is_left_join() {
        // Student row missing the 국어 entry entirely
        let student = StudentRow {
            student: "철수".into(),
            scores: vec![ScoreEntry {
                column: "수학".into(),
                value: Some(90.0),
            }],
        };

        let merged = merge(&averages(), &student);

        let columns: Vec<&str> = merged.rows.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(columns, vec!["수학", "국어"]);
        assert_eq!(merged.rows[1].class_average, Some(75.0));
        assert_eq!(merged.rows[1].student_score, None);
    }

    #[test]
    fn test_missing_student_score_stays_missing() {
        let student = StudentRow {
            student: "철수".into(),
            scores: vec![
                ScoreEntry {
                    column: "수학".into(),
                    value: None,
                },
                ScoreEntry {
                    column: "국어".into(),
                    value: Some(60.0),
                },
            ],
        };

        let merged = merge(&averages(), &student);

        assert_eq!(merged.rows[0].student_score, None);
        assert_eq!(merged.rows[0].class_average, Some(85.0));
        assert_eq!(merged.rows[1].student_score, Some(60.0));
    }
}
