//! Parser for the KOERI plain-text earthquake bulletin
//!
//! The bulletin arrives as an HTML-like page whose `<pre>` section holds one
//! earthquake per line in fixed-width columns separated by runs of spaces.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`extractor`] - Isolates the `<pre>` data block from the page
//! - [`tokenizer`] - Splits the block into candidate rows, dropping headers and rules
//! - [`row_parser`] - Converts one candidate row into a [`ParsedRow`](crate::ParsedRow)
//! - [`field_parsers`] - Column splitting and numeric coercion helpers
//! - [`parser`] - Orchestration with per-row failure isolation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use krdae_bulletin::app::services::bulletin_parser::BulletinParser;
//!
//! # fn example() -> krdae_bulletin::Result<()> {
//! let page = "<pre>\n2024.03.05 21:07:44  39.1200  28.2310  8.4  -.-  2.4  -.-  SINDIRGI (BALIKESIR)  İlksel\n</pre>";
//! let result = BulletinParser::new().parse(page)?;
//!
//! println!("Parsed {} rows from {} candidates",
//!          result.stats.rows_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod extractor;
pub mod field_parsers;
pub mod parser;
pub mod row_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::extract_bulletin_block;
pub use parser::BulletinParser;
pub use row_parser::{RowParseError, RowShape, parse_row};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::tokenize_rows;
