//! Tests for `<pre>` envelope extraction

use super::*;
use crate::Error;
use crate::app::services::bulletin_parser::extract_bulletin_block;

#[test]
fn test_extracts_text_between_markers() {
    let page = "<html><body><pre>inner text</pre></body></html>";
    assert_eq!(extract_bulletin_block(page).unwrap(), "inner text");
}

#[test]
fn test_uses_first_occurrence_of_each_marker() {
    let page = "<pre>first</pre> trailing <pre>second</pre>";
    assert_eq!(extract_bulletin_block(page).unwrap(), "first");
}

#[test]
fn test_empty_block_is_not_an_error() {
    assert_eq!(extract_bulletin_block("<pre></pre>").unwrap(), "");
}

#[test]
fn test_missing_open_marker_fails() {
    let result = extract_bulletin_block("<html>Service Unavailable</pre></html>");
    assert!(matches!(result, Err(Error::MalformedBulletin { .. })));
}

#[test]
fn test_missing_close_marker_fails() {
    let result = extract_bulletin_block("<html><pre>2024.03.05 21:07:44  39.12");
    let err = result.unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("</pre>"));
}

#[test]
fn test_close_before_open_fails() {
    let result = extract_bulletin_block("</pre> stray <pre>");
    assert!(matches!(result, Err(Error::MalformedBulletin { .. })));
}

#[test]
fn test_full_bulletin_block_keeps_rows() {
    let page = create_test_bulletin();
    let block = extract_bulletin_block(&page).unwrap();

    assert!(block.contains(ROW_SINDIRGI));
    assert!(block.contains(ROW_MARMARA));
    assert!(!block.contains("<pre>"));
    assert!(!block.contains("</BODY>"));
}
