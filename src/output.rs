//! Output surfaces for a comparison table.
//!
//! Chart-ready JSON for the line-chart renderer, an aligned detail table
//! for the terminal, and CSV append for keeping records across runs.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::pipeline::types::ComparisonTable;

/// Document handed to a line-chart renderer: x-axis labels are the score
/// columns, the two series are the class average and the student's scores.
/// Missing values serialize as `null` so the renderer leaves gaps instead
/// of drawing zeros.
#[derive(Debug, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub x: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl ChartSpec {
    pub fn from_comparison(comparison: &ComparisonTable) -> Self {
        let x = comparison.rows.iter().map(|r| r.column.clone()).collect();
        let series = vec![
            ChartSeries {
                name: "전체 평균".to_string(),
                values: comparison.rows.iter().map(|r| r.class_average).collect(),
            },
            ChartSeries {
                name: "내 점수".to_string(),
                values: comparison.rows.iter().map(|r| r.student_score).collect(),
            },
        ];

        Self {
            title: format!("{} 학생 점수 및 전체 평균 비교", comparison.student),
            generated_at: Utc::now(),
            x,
            series,
        }
    }
}

/// Prints the chart document as pretty JSON on stdout.
pub fn print_chart_json(comparison: &ComparisonTable) -> Result<()> {
    let spec = ChartSpec::from_comparison(comparison);
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

/// Prints the detail table, indexed by score column, blanks for missing.
pub fn print_detail(comparison: &ComparisonTable) {
    println!("{} 학생 세부 점수", comparison.student);
    println!(
        "{} {} {}",
        pad_left("단원", 12),
        pad_right("전체 평균", 10),
        pad_right("내 점수", 10)
    );
    for row in &comparison.rows {
        println!(
            "{} {} {}",
            pad_left(&row.column, 12),
            pad_right(&format_score(row.class_average), 10),
            pad_right(&format_score(row.student_score), 10)
        );
    }
}

fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => String::new(),
    }
}

// Pads by terminal display width, not char count, so double-width Hangul
// column names still line up.
fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(pad))
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{text}", " ".repeat(pad))
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    student: &'a str,
    column: &'a str,
    class_average: Option<f64>,
    student_score: Option<f64>,
}

/// Appends the comparison rows to a CSV file, writing headers only when the
/// file is created.
pub fn append_record(path: &str, comparison: &ComparisonTable) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending comparison rows");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for row in &comparison.rows {
        writer.serialize(CsvRecord {
            student: &comparison.student,
            column: &row.column,
            class_average: row.class_average,
            student_score: row.student_score,
        })?;
    }
    writer.flush()?;

    Ok(())
}
