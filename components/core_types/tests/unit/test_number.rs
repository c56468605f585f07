//! Unit tests for number formatting

use core_types::format_number;

#[test]
fn test_whole_numbers_have_no_fraction() {
    assert_eq!(format_number(14.0), "14");
    assert_eq!(format_number(20.0), "20");
    assert_eq!(format_number(1_000_000.0), "1000000");
}

#[test]
fn test_fractions() {
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(10.0 / 4.0), "2.5");
}

#[test]
fn test_special_values() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}
