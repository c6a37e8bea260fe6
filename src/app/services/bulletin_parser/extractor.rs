//! Envelope extraction for bulletin pages

use crate::constants::{PRE_CLOSE_MARKER, PRE_OPEN_MARKER};
use crate::{Error, Result};

/// Return the text between the first `<pre>` and the first `</pre>`
///
/// A missing marker means the source changed format or served an error page,
/// so it is reported as [`Error::MalformedBulletin`] rather than tolerated.
pub fn extract_bulletin_block(response: &str) -> Result<&str> {
    let open = response.find(PRE_OPEN_MARKER).ok_or_else(|| {
        Error::malformed_bulletin(format!("Response has no '{}' marker", PRE_OPEN_MARKER))
    })?;
    let close = response.find(PRE_CLOSE_MARKER).ok_or_else(|| {
        Error::malformed_bulletin(format!("Response has no '{}' marker", PRE_CLOSE_MARKER))
    })?;

    let start = open + PRE_OPEN_MARKER.len();
    if close < start {
        return Err(Error::malformed_bulletin(format!(
            "'{}' appears before '{}'",
            PRE_CLOSE_MARKER, PRE_OPEN_MARKER
        )));
    }

    Ok(&response[start..close])
}
