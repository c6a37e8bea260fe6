//! Line filtering for the extracted bulletin block
//!
//! Everything inside `<pre>` that is not an earthquake row is dropped here:
//! blank lines, pagination markers, the dashed rule under the header and the
//! header lines themselves. Row order is kept as the source printed it.

use tracing::trace;

use crate::constants::{
    DATE_HEADER, ELLIPSIS_MARKER, MAGNITUDE_HEADER, MISENCODED_MAGNITUDE_HEADER,
    SEPARATOR_MARKER,
};

/// Why a line was not emitted as a candidate row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Ellipsis,
    Separator,
    MagnitudeHeader,
    DateHeader,
    Candidate,
}

/// Classify a single line, applying the exclusion rules in order
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if line.contains(ELLIPSIS_MARKER) {
        LineKind::Ellipsis
    } else if line.contains(SEPARATOR_MARKER) {
        LineKind::Separator
    } else if line.contains(MISENCODED_MAGNITUDE_HEADER) || line.contains(MAGNITUDE_HEADER) {
        LineKind::MagnitudeHeader
    } else if line.contains(DATE_HEADER) {
        LineKind::DateHeader
    } else {
        LineKind::Candidate
    }
}

/// Split a bulletin block into candidate row strings
///
/// Returns the surviving lines (trailing `\r` removed) and the number of
/// lines that were filtered out.
pub fn tokenize_rows(block: &str) -> (Vec<&str>, usize) {
    let mut rows = Vec::new();
    let mut filtered = 0;

    for line in block.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match classify_line(line) {
            LineKind::Candidate => rows.push(line),
            kind => {
                filtered += 1;
                trace!("Filtered {:?} line: {:?}", kind, line);
            }
        }
    }

    (rows, filtered)
}
