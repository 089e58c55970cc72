//! Pipeline orchestration.
//!
//! One [`Dashboard`] holds the sheet source, the TTL cache, and the schema
//! settings, and runs a full blocking pipeline per interaction: load (cached
//! or fetched) → normalize → average → project → merge.

use tracing::{debug, info};

use crate::cache::SheetCache;
use crate::config::DashboardConfig;
use crate::error::PipelineError;
use crate::pipeline::aggregate::class_average;
use crate::pipeline::merge::merge;
use crate::pipeline::normalize::{normalize, validate_columns};
use crate::pipeline::project::project;
use crate::pipeline::types::{ComparisonTable, NormalizedTable};
use crate::source::SheetSource;
use crate::table::RawTable;

pub struct Dashboard<S> {
    source: S,
    cache: SheetCache,
    id_column: String,
    expected_columns: Option<Vec<String>>,
}

impl<S: SheetSource> Dashboard<S> {
    pub fn new(source: S, config: &DashboardConfig) -> Self {
        Self {
            source,
            cache: SheetCache::new(config.cache_ttl()),
            id_column: config.id_column.clone(),
            expected_columns: config.expected_columns.clone(),
        }
    }

    /// Returns the worksheet's raw table, from cache when fresh.
    async fn load(&mut self, worksheet: &str) -> Result<RawTable, PipelineError> {
        if let Some(table) = self.cache.get(worksheet) {
            debug!(worksheet, "Using cached worksheet");
            return Ok(table.clone());
        }

        let table = self.source.read(worksheet).await?;
        info!(
            worksheet,
            rows = table.rows.len(),
            columns = table.columns.len(),
            "Worksheet fetched"
        );
        self.cache.insert(worksheet, table.clone());
        Ok(table)
    }

    async fn normalized(&mut self, worksheet: &str) -> Result<NormalizedTable, PipelineError> {
        let raw = self.load(worksheet).await?;
        if raw.is_empty() {
            return Err(PipelineError::EmptyData {
                worksheet: worksheet.to_string(),
            });
        }

        if let Some(expected) = &self.expected_columns {
            validate_columns(&raw, expected)?;
        }

        let table = normalize(&raw, &self.id_column)?;
        if table.rows.is_empty() {
            return Err(PipelineError::EmptyData {
                worksheet: worksheet.to_string(),
            });
        }
        Ok(table)
    }

    /// The student selection list: non-missing identifiers in source row
    /// order. Empty after normalization is a user-visible error.
    #[tracing::instrument(skip(self))]
    pub async fn students(&mut self, worksheet: &str) -> Result<Vec<String>, PipelineError> {
        let ids = self.normalized(worksheet).await?.student_ids();
        if ids.is_empty() {
            return Err(PipelineError::EmptyData {
                worksheet: worksheet.to_string(),
            });
        }
        Ok(ids)
    }

    /// Runs the full pipeline for one student selection.
    #[tracing::instrument(skip(self))]
    pub async fn comparison(
        &mut self,
        worksheet: &str,
        student: &str,
    ) -> Result<ComparisonTable, PipelineError> {
        let table = self.normalized(worksheet).await?;
        let averages = class_average(&table);
        let row = project(&table, student)?;
        Ok(merge(&averages, &row))
    }
}
