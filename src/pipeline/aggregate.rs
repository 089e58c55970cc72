//! Class average computation.

use crate::pipeline::types::{AverageEntry, AverageTable, NormalizedTable};

/// Arithmetic mean, or `None` for empty input. The undefined case must stay
/// visible downstream (blank in the chart), never silently become zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the per-column class mean over all rows, excluding missing
/// values from each column's mean. Column order follows the normalized
/// table.
pub fn class_average(table: &NormalizedTable) -> AverageTable {
    let entries = table
        .score_columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let values: Vec<f64> = table.rows.iter().filter_map(|r| r.scores[i]).collect();
            AverageEntry {
                column: column.clone(),
                mean: mean(&values),
            }
        })
        .collect();

    AverageTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::NormalizedRow;

    fn table(rows: Vec<NormalizedRow>) -> NormalizedTable {
        NormalizedTable {
            id_column: "이름".into(),
            score_columns: vec!["수학".into(), "국어".into()],
            rows,
        }
    }

    fn row(id: &str, scores: Vec<Option<f64>>) -> NormalizedRow {
        NormalizedRow {
            id: Some(id.into()),
            scores,
        }
    }

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[80.0, 90.0]), Some(85.0));
    }

    #[test]
    fn test_missing_values_excluded_from_mean() {
        let t = table(vec![
            row("민수", vec![Some(80.0), Some(60.0)]),
            row("영희", vec![Some(90.0), Some(100.0)]),
            row("철수", vec![None, Some(80.0)]),
        ]);

        let averages = class_average(&t);

        // 철수's missing 수학 is excluded, not counted as zero
        assert_eq!(averages.entries[0].column, "수학");
        assert_eq!(averages.entries[0].mean, Some(85.0));
        assert_eq!(averages.entries[1].mean, Some(80.0));
    }

    #[test]
    fn test_adding_missing_value_keeps_mean() {
        let mut t = table(vec![
            row("민수", vec![Some(80.0), Some(60.0)]),
            row("영희", vec![Some(90.0), Some(100.0)]),
        ]);
        let before = class_average(&t);

        t.rows.push(row("철수", vec![None, None]));
        let after = class_average(&t);

        assert_eq!(before.entries, after.entries);
    }

    #[test]
    fn test_all_missing_column_has_undefined_mean() {
        let t = table(vec![
            row("민수", vec![None, Some(60.0)]),
            row("영희", vec![None, Some(100.0)]),
        ]);

        let averages = class_average(&t);

        assert_eq!(averages.entries[0].mean, None);
        assert_eq!(averages.entries[1].mean, Some(80.0));
    }

    #[test]
    fn test_column_order_preserved() {
        let t = table(vec![row("민수", vec![Some(1.0), Some(2.0)])]);
        let averages = class_average(&t);

        let columns: Vec<&str> = averages
            .entries
            .iter()
            .map(|e| e.column.as_str())
            .collect();
        assert_eq!(columns, vec!["수학", "국어"]);
    }
}
