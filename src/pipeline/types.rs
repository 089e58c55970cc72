//! Data types flowing between pipeline stages.

/// A worksheet after normalization: empty rows gone, scores numeric.
///
/// `rows[i].scores` is parallel to `score_columns`; a `None` score is a cell
/// that was empty or failed numeric conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub id_column: String,
    pub score_columns: Vec<String>,
    pub rows: Vec<NormalizedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub id: Option<String>,
    pub scores: Vec<Option<f64>>,
}

impl NormalizedTable {
    /// Student identifiers in source row order, missing names skipped.
    /// Duplicates are kept as-is.
    pub fn student_ids(&self) -> Vec<String> {
        self.rows.iter().filter_map(|r| r.id.clone()).collect()
    }
}

/// Per-column class means, in the normalized table's score-column order.
/// A column with zero non-missing values has mean `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageTable {
    pub entries: Vec<AverageEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageEntry {
    pub column: String,
    pub mean: Option<f64>,
}

/// One student's row reshaped into the averages' (column, value) layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub student: String,
    pub scores: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub column: String,
    pub value: Option<f64>,
}

/// The merged view drawn by the chart: one row per score column, with the
/// class average and the selected student's score side by side. Missing
/// values serialize as `null` and render blank, never as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub student: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub column: String,
    pub class_average: Option<f64>,
    pub student_score: Option<f64>,
}
