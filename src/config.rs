//! Dashboard configuration.
//!
//! Loaded from a plain JSON file:
//! ```json
//! {
//!   "spreadsheet_id": "1AbC...",
//!   "worksheets": ["국어", "수학", "사회", "과학"],
//!   "id_column": "이름",
//!   "cache_ttl_secs": 600
//! }
//! ```
//! Credentials never live here; the Sheets API key comes from the
//! `SHEETS_API_KEY` environment variable.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub spreadsheet_id: String,

    /// The enumerated worksheet (subject) names the user may choose from.
    #[serde(default = "default_worksheets")]
    pub worksheets: Vec<String>,

    /// Column holding student names.
    #[serde(default = "default_id_column")]
    pub id_column: String,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// When set, worksheets must carry exactly these columns; checked before
    /// numeric conversion.
    #[serde(default)]
    pub expected_columns: Option<Vec<String>>,
}

impl DashboardConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file '{path}'"))?;
        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_worksheets() -> Vec<String> {
    ["국어", "수학", "사회", "과학"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_id_column() -> String {
    "이름".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"spreadsheet_id": "abc"}"#).unwrap();

        assert_eq!(config.spreadsheet_id, "abc");
        assert_eq!(config.worksheets, vec!["국어", "수학", "사회", "과학"]);
        assert_eq!(config.id_column, "이름");
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert!(config.expected_columns.is_none());
    }

    #[test]
    fn test_full_config_overrides_defaults() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{
                "spreadsheet_id": "abc",
                "worksheets": ["수학"],
                "id_column": "name",
                "cache_ttl_secs": 60,
                "expected_columns": ["번호", "이름", "성별", "1단원", "2단원"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.worksheets, vec!["수학"]);
        assert_eq!(config.id_column, "name");
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.expected_columns.unwrap().len(), 5);
    }
}
