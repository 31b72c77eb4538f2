/// Performs a tolerant equality comparison between two double precision floats.
///
/// Two values are considered close if their difference is not greater than the largest between
/// `rel_tol` scaled by the bigger magnitude of the two, and the absolute floor `abs_tol`.
/// With an `abs_tol` of zero, a value is close to `0.0` only if it is exactly zero.
/// # Examples
/// Basic usage:
/// ```
/// use coopstructs::utility::is_close;
///
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert!(is_close(0.1 + 0.2, 0.3, 1E-9, 0.0));
/// ```
#[inline]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// Rounds a value to a given number of decimal digits.
///
/// Halfway cases are rounded away from zero.
/// # Examples
/// Basic usage:
/// ```
/// use coopstructs::utility::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    let rounded = (value * factor).round() / factor;
    // huge values overflow the scaled intermediate, they carry no decimals anyway
    if rounded.is_finite() || !value.is_finite() {
        rounded
    } else {
        value
    }
}

/// Renders a double precision float in its shortest round-trip form.
///
/// Integral values keep a trailing `.0` and very large or very small magnitudes switch to
/// scientific notation with an explicitly signed, two digits wide exponent.
/// # Examples
/// Basic usage:
/// ```
/// use coopstructs::utility::format_float;
///
/// assert_eq!(format_float(2.0), "2.0");
/// assert_eq!(format_float(1E16), "1e+16");
/// assert_eq!(format_float(1.5E-7), "1.5e-07");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
