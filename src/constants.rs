//! Application constants for the KRDAE bulletin client
//!
//! This module contains the source address, envelope markers, header literals
//! and formatting conventions that describe the upstream bulletin.

// =============================================================================
// Source
// =============================================================================

/// Address of the KOERI "last earthquakes" bulletin
pub const DEFAULT_SOURCE_URI: &str = "http://www.koeri.boun.edu.tr/scripts/lst1.asp";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Success rate (percent) below which a parsed bulletin is reported as degraded
pub const DEFAULT_MIN_SUCCESS_RATE: f64 = 90.0;

// =============================================================================
// Envelope and Line Filtering
// =============================================================================

/// Marker opening the bulletin data block
pub const PRE_OPEN_MARKER: &str = "<pre>";

/// Marker closing the bulletin data block
pub const PRE_CLOSE_MARKER: &str = "</pre>";

/// Pagination/continuation marker
pub const ELLIPSIS_MARKER: &str = "...";

/// Column separator rule printed under the header
pub const SEPARATOR_MARKER: &str = "---";

/// Magnitude ("Büyüklük") heading as served with a correct encoding
pub const MAGNITUDE_HEADER: &str = "Büyüklük";

/// Magnitude heading as it arrives from the source: windows-1254 bytes decoded
/// as UTF-8, each `ü` replaced by U+FFFD. Must stay byte-for-byte as emitted.
pub const MISENCODED_MAGNITUDE_HEADER: &str = "B\u{FFFD}y\u{FFFD}kl\u{FFFD}k";

/// Date ("Tarih") column heading
pub const DATE_HEADER: &str = "Tarih";

// =============================================================================
// Row Format
// =============================================================================

/// Regex for the column separator: a run of two or more spaces
pub const COLUMN_SEPARATOR_PATTERN: &str = r" {2,}";

/// Minimum number of fields a row needs to become a parsed row
pub const MIN_ROW_FIELDS: usize = 8;

/// Field count of a row whose solution attribute carries no separate date
pub const NINE_FIELD_ROW: usize = 9;

// =============================================================================
// Record Conventions
// =============================================================================

/// Offset annotation appended to every timestamp. The source publishes in
/// Turkey local time (UTC+3); this is not derived from the caller's locale.
pub const SOURCE_UTC_OFFSET: &str = "GMT+0300";

/// chrono format matching `"<date> <time> GMT+0300"` timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S GMT%z";

/// Separator used when composing a record identity
pub const IDENTITY_SEPARATOR: &str = "-";

/// Rendering of an absent magnitude inside an identity
pub const IDENTITY_NULL: &str = "null";
