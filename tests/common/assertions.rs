//! Test assertion helpers
//!
//! Helpers for checking report output produced by the CLI.

use serde_json::Value;

/// Parse stdout as the JSON module array, panicking with the raw text on failure
#[allow(dead_code)]
pub fn parse_module_array(stdout: &[u8]) -> Vec<Value> {
    let text = String::from_utf8_lossy(stdout);
    let value: Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("stdout is not valid JSON ({}):\n{}", e, text));
    value
        .as_array()
        .unwrap_or_else(|| panic!("expected a JSON array, got:\n{}", text))
        .clone()
}

/// Assert that `needles` appear in `haystack` in the given order
#[allow(dead_code)]
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match haystack[cursor..].find(needle) {
            Some(offset) => cursor += offset + needle.len(),
            None => panic!(
                "expected {:?} after position {} in:\n{}",
                needle, cursor, haystack
            ),
        }
    }
}

/// Assert that two floating-point values are approximately equal
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}
