mod common;

use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::common::mvn_compare;

#[test]
fn test_no_versions() {
    let result = mvn_compare(&[]);
    result.assert_failure();
    assert!(
        result.stderr().contains("<VERSION>..."),
        "unexpected stderr: {}",
        result.stderr()
    );
}

#[test]
fn test_text_output() {
    let result = mvn_compare(&["1.0", "1.0.0", "1.0-alpha-1", "2.0.0.RC1"]);
    result.assert_success();
    assert_eq!(
        result.stdout(),
        indoc! {"
            Display parameters as parsed by Maven (in canonical form and as a list of tokens) and comparison result:
            1. 1.0 -> 1; tokens: [1]
               1.0 == 1.0.0
            2. 1.0.0 -> 1; tokens: [1]
               1.0.0 > 1.0-alpha-1
            3. 1.0-alpha-1 -> 1-alpha-1; tokens: [1, [alpha, [1]]]
               1.0-alpha-1 < 2.0.0.RC1
            4. 2.0.0.RC1 -> 2.0.0.rc-1; tokens: [2, 0, 0, rc, [1]]
        "}
    );
}

#[test]
fn test_single_version() {
    let result = mvn_compare(&["1.0-CR1"]);
    result.assert_success();
    assert_eq!(
        result.stdout(),
        indoc! {"
            Display parameters as parsed by Maven (in canonical form and as a list of tokens) and comparison result:
            1. 1.0-CR1 -> 1-rc-1; tokens: [1, [rc, [1]]]
        "}
    );
}

#[test]
fn test_json_output() {
    let result = mvn_compare(&["--format", "json", "1-sp", "1-abc"]);
    result.assert_success();

    let report: serde_json::Value = serde_json::from_str(&result.stdout()).unwrap();
    assert_eq!(
        report,
        serde_json::json!({
            "versions": [
                { "input": "1-sp", "canonical": "1-sp", "tokens": "[1, [sp]]" },
                { "input": "1-abc", "canonical": "1-abc", "tokens": "[1, [abc]]" },
            ],
            "comparisons": [
                { "left": "1-sp", "right": "1-abc", "ordering": "<" },
            ],
        })
    );
}

#[test]
fn test_overflow_fails() {
    let result = mvn_compare(&["1.0", "12345678901234567890"]);
    result.assert_failure();
    assert_eq!(result.stdout(), "");
    assert!(
        result.stderr().contains("Numeric component"),
        "unexpected stderr: {}",
        result.stderr()
    );
}
