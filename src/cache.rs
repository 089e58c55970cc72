//! Short-lived worksheet cache.
//!
//! Keyed by worksheet name; an entry is reused until its age reaches the
//! TTL, so repeated interactions (every student click re-runs the pipeline)
//! do not re-issue remote reads. Invalidation is purely age-based.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::table::RawTable;

pub struct SheetCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

struct CacheEntry {
    table: RawTable,
    fetched_at: Instant,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached table for `worksheet` unless it is absent or its
    /// age has reached the TTL.
    pub fn get(&self, worksheet: &str) -> Option<&RawTable> {
        let entry = self.entries.get(worksheet)?;
        if entry.fetched_at.elapsed() >= self.ttl {
            debug!(worksheet, "Cache entry expired");
            return None;
        }
        Some(&entry.table)
    }

    pub fn insert(&mut self, worksheet: &str, table: RawTable) {
        self.entries.insert(
            worksheet.to_string(),
            CacheEntry {
                table,
                fetched_at: Instant::now(),
            },
        );
    }
}
