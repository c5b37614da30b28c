//! Converter contract acceptance tests.
//!
//! # Acceptance Criteria
//!
//! - No arguments print the usage line and exit 1
//! - A bad argument names its position, exits 1 and prints no conversions
//! - One value prints the six-line span/offset table
//! - Several values print one offset-corrected millisecond line each

use super::common::{invoke, lines};

#[test]
fn test_no_arguments() {
    let result = invoke(&[]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "Usage: time.py <number>\n");
}

#[test]
fn test_single_non_numeric() {
    let result = invoke(&["ten"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "The first argument must be a number.\n");
}

#[test]
fn test_first_of_many_non_numeric() {
    let result = invoke(&["ten", "20"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stdout, "The first argument must be a number.\n");
}

#[test]
fn test_second_argument_invalid_has_no_conversions() {
    let result = invoke(&["1", "two"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(lines(&result), ["The argument 2 must be a number."]);
}

#[test]
fn test_later_argument_invalid() {
    let result = invoke(&["1", "2", "3", "four", "five"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(lines(&result), ["The argument 4 must be a number."]);
}

#[test]
fn test_zero() {
    let result = invoke(&["0"]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(
        lines(&result),
        [
            "Time span",
            "ISNS -> µs 0.00 us",
            "µs -> ISNS 0.00",
            "Interrupt offset",
            "ISNS -> µs 1709.76 us",
            "µs -> ISNS -53430.00",
        ]
    );
}

#[test]
fn test_hundred() {
    let result = invoke(&["100"]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(
        lines(&result),
        [
            "Time span",
            "ISNS -> µs 3.20 us",
            "µs -> ISNS 3125.00",
            "Interrupt offset",
            "ISNS -> µs 1714.56 us",
            "µs -> ISNS -50305.00",
        ]
    );
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(invoke(&[" 100 "]).stdout, invoke(&["100"]).stdout);
}

#[test]
fn test_multiple_values() {
    let result = invoke(&["0", "100"]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(lines(&result), ["1.71", "1.71"]);
}

#[test]
fn test_multiple_values_scientific_notation() {
    let result = invoke(&["3.125e7", "-53430", "6.25e7"]);
    assert_eq!(result.exit_code, 0);
    assert_eq!(lines(&result), ["1001.71", "0.00", "2001.71"]);
}
