use crate::utility::{format_float, is_close, round_to};

#[test]
fn inlines_is_close_exact() {
    assert!(is_close(0.0, 0.0, 1E-9, 0.0));
    assert!(is_close(2.0, 2.0, 0.0, 0.0));
}

#[test]
fn inlines_is_close_inexact() {
    let a = 0.3;
    let errored = a + f64::EPSILON;
    assert_ne!(a, errored);
    assert!(is_close(a, errored, 1E-9, 0.0));
    assert!(!is_close(a, errored, 1E-17, 0.0));
}

#[test]
fn inlines_is_close_relative_scale() {
    assert!(is_close(1E12, 1E12 + 1E2, 1E-9, 0.0));
    assert!(!is_close(1.0, 1.0 + 1E-6, 1E-9, 0.0));
}

#[test]
fn inlines_is_close_zero_needs_abs_tol() {
    assert!(!is_close(0.0, 1E-12, 1E-9, 0.0));
    assert!(is_close(0.0, 1E-12, 1E-9, 1E-10));
}

#[test]
fn inlines_is_close_symmetric() {
    assert_eq!(
        is_close(100.0, 100.0000001, 1E-9, 0.0),
        is_close(100.0000001, 100.0, 1E-9, 0.0)
    );
}

#[test]
fn inlines_is_close_nan() {
    assert!(!is_close(f64::NAN, f64::NAN, 1E-9, 1.0));
}

#[test]
fn inlines_round_to() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(-1.005, 0), -1.0);
    assert_eq!(round_to(0.5, 0), 1.0);
    assert_eq!(round_to(7.0, 3), 7.0);
}

#[test]
fn inlines_round_to_non_finite() {
    assert!(round_to(f64::NAN, 2).is_nan());
    assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    assert_eq!(round_to(f64::MAX, 2), f64::MAX);
}

#[test]
fn inlines_round_to_halves_away_from_zero() {
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(-0.125, 2), -0.13);
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -3.0);
}

#[test]
fn inlines_format_float() {
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(-0.13), "-0.13");
    assert_eq!(format_float(1E16), "1e+16");
    assert_eq!(format_float(1.5E300), "1.5e+300");
    assert_eq!(format_float(1E-5), "1e-05");
    assert_eq!(format_float(1E15), "1000000000000000.0");
}

#[test]
fn inlines_format_float_non_finite() {
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_float(f64::NAN), "nan");
}
