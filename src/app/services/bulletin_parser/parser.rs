//! Core bulletin parser implementation
//!
//! This module provides the parser orchestration: envelope extraction, line
//! filtering, and row parsing with per-row failure isolation.

use tracing::{debug, info, warn};

use super::extractor::extract_bulletin_block;
use super::row_parser::parse_row;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize_rows;
use crate::Result;
use crate::constants::DEFAULT_MIN_SUCCESS_RATE;

/// Parser for KOERI bulletin pages
///
/// Holds no state between calls, so one parser can serve any number of
/// bulletins concurrently.
#[derive(Debug, Clone)]
pub struct BulletinParser {
    min_success_rate: f64,
}

impl Default for BulletinParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletinParser {
    pub fn new() -> Self {
        Self {
            min_success_rate: DEFAULT_MIN_SUCCESS_RATE,
        }
    }

    /// Success rate (percent) below which a parse is logged as degraded
    pub fn with_min_success_rate(mut self, rate: f64) -> Self {
        self.min_success_rate = rate;
        self
    }

    /// Parse a full bulletin page into rows with statistics
    ///
    /// Fails only when the `<pre>` envelope is missing. Rows that cannot be
    /// parsed are skipped and listed in [`ParseStats::errors`].
    pub fn parse(&self, response: &str) -> Result<ParseResult> {
        let block = extract_bulletin_block(response)?;
        let (candidates, lines_filtered) = tokenize_rows(block);
        debug!(
            "Bulletin block: {} candidate rows, {} lines filtered",
            candidates.len(),
            lines_filtered
        );

        let mut stats = ParseStats {
            lines_filtered,
            ..ParseStats::new()
        };
        let mut rows = Vec::with_capacity(candidates.len());

        for (index, line) in candidates.into_iter().enumerate() {
            let row_number = index + 1;
            stats.total_rows += 1;

            match parse_row(line) {
                Ok(row) => {
                    rows.push(row);
                    stats.rows_parsed += 1;
                }
                Err(e) => {
                    debug!("Skipped row {}: {} ({:?})", row_number, e, line);
                    stats.record_skip(row_number, e);
                }
            }
        }

        if rows.is_empty() {
            warn!("Bulletin contained no parsable rows");
        } else if !stats.is_successful(self.min_success_rate) {
            warn!(
                "Degraded bulletin: {:.1}% of rows parsed ({} skipped)",
                stats.success_rate(),
                stats.rows_skipped
            );
        }

        info!(
            "Parsed {} rows from {} candidates",
            stats.rows_parsed, stats.total_rows
        );

        Ok(ParseResult { rows, stats })
    }
}
