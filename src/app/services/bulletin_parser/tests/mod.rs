//! Test utilities and fixtures for bulletin parser testing
//!
//! This module provides sample bulletin pages and helper functions used
//! across the parser test modules.

// Test modules
mod extractor_tests;
mod stats_tests;

/// Nine-field row: attribute without a separate date
pub const ROW_SINDIRGI: &str = "2024.03.05 21:07:44  39.1240   28.2310        8.4      -.-  2.4  -.-   SINDIRGI (BALIKESIR)                              İlksel";

/// Ten-field row: revised solution with its own date column
pub const ROW_NURDAGI: &str = "2024.03.05 20:58:10  37.0212   36.6540        7.0      -.-  4.1  4.0   NURDAGI (GAZIANTEP)                               REVIZE01  (2024.03.05 21:15:02)";

/// Row with too few columns
pub const ROW_BROKEN: &str = "2024.03.05 20:11:02  38.1  BROKEN LINE";

/// Nine-field row with only the MD magnitude
pub const ROW_MARMARA: &str = "2024.03.05 19:42:31  40.8512   29.1093       12.3      2.1  -.-  -.-   MARMARA DENIZI                                    İlksel";

/// Install a fmt subscriber that writes through the test harness
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A bulletin page as served: CRLF line endings, mis-encoded headers, a
/// preamble inside `<pre>` and one malformed row.
pub fn create_test_bulletin() -> String {
    let lines = [
        "<HTML><HEAD><TITLE>Son Depremler</TITLE></HEAD><BODY>",
        "<pre>",
        "RECENT EARTHQUAKES IN TURKEY",
        "KOERI REGIONAL EARTHQUAKE-TSUNAMI MONITORING CENTER",
        "(QUICK EPICENTER DETERMINATIONS)",
        "",
        "                                                                  B\u{FFFD}y\u{FFFD}kl\u{FFFD}k",
        "Tarih      Saat      Enlem(N)  Boylam(E) Derinlik(km)  MD   ML   Mw    Yer                                             \u{FFFD}\u{FFFD}z\u{FFFD}m Niteli\u{FFFD}i",
        "---------- --------  --------  -------   ----------    ------------    --------------                                  --------------",
        ROW_SINDIRGI,
        ROW_NURDAGI,
        ROW_BROKEN,
        ROW_MARMARA,
        "..........",
        "</pre>",
        "</BODY></HTML>",
    ];
    lines.join("\r\n")
}

/// Wrap data lines in a minimal `<pre>` envelope
pub fn wrap_in_pre(lines: &[&str]) -> String {
    format!("<pre>\n{}\n</pre>", lines.join("\n"))
}
