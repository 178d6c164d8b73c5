use super::*;

#[test]
fn test_half_up_rounding() {
    assert_eq!(format_fixed(87.25, 1), "87.3");
    assert_eq!(format_fixed(0.125, 2), "0.13");
    assert_eq!(format_fixed(-0.00001, 4), "0.0000");
    assert_eq!(format_fixed(2.0, 2), "2.00");
}

#[test]
fn test_percent_formatting() {
    assert_eq!(format_percent(0.237), "23.7%");
    assert_eq!(format_percent(0.763), "76.3%");
    assert_eq!(format_percent(1.0), "100.0%");
    assert_eq!(format_percent(0.0), "0.0%");
}

#[test]
fn test_four_decimal_and_placeholder() {
    assert_eq!(format_f64_4(0.31234), "0.3123");
    assert_eq!(format_f64_4(-0.12345), "-0.1235");
    assert_eq!(format_optional_4(None), "N/A");
}

#[test]
fn test_non_finite_passthrough() {
    assert_eq!(round_half_up(f64::INFINITY, 2), f64::INFINITY);
    assert!(round_half_up(f64::NAN, 2).is_nan());
}
