//! Tabular particle statistics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One particle's measurements, keyed by column name. Rows are free-form
/// JSON objects so statistics steps can attach whatever columns their
/// instrument produces without the core knowing the column set.
pub type TableRow = Map<String, Value>;

/// Particle statistics table written under the stats slot by extraction
/// steps; the normal return value of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleTable {
    pub rows: Vec<TableRow>,
}

impl ParticleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names present in the first row (tables are column-uniform by
    /// convention, not by construction).
    pub fn column_names(&self) -> Vec<&str> {
        self.rows.first().map(|r| r.keys().map(|k| k.as_str()).collect()).unwrap_or_default()
    }
}
