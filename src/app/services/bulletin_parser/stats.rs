//! Parsing statistics and result structures for bulletin processing
//!
//! Skipped rows are reported here instead of failing the bulletin, so the
//! statistics double as the record of every row-level problem.

use crate::app::models::ParsedRow;

/// Parsing result with rows and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed rows in bulletin order
    pub rows: Vec<ParsedRow>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of candidate rows left after line filtering
    pub total_rows: usize,

    /// Number of rows successfully parsed
    pub rows_parsed: usize,

    /// Number of rows skipped due to errors
    pub rows_skipped: usize,

    /// Number of header, separator and blank lines dropped
    pub lines_filtered: usize,

    /// List of row errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped row together with its reason
    pub fn record_skip(&mut self, row_number: usize, reason: impl std::fmt::Display) {
        self.rows_skipped += 1;
        self.errors.push(format!("Row {}: {}", row_number, reason));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if the success rate reaches `threshold` percent
    pub fn is_successful(&self, threshold: f64) -> bool {
        self.total_rows > 0 && self.success_rate() >= threshold
    }
}
