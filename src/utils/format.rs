//! Fixed-point rendering with half-up rounding.
//!
//! `format!("{:.4}", x)` rounds ties to even, while vectors and matrices print with
//! ties rounded away from zero. Rounding is decided on the exact decimal expansion
//! of the stored binary value, so `0.30005` (stored just below the midpoint) prints
//! as `0.3000` at four digits.

use num_traits::Float;

/// Fractional digits needed to print any finite `f64` exactly (the smallest
/// subnormal has 1074).
const EXACT_DIGITS: usize = 1100;

/// Render `value` with `precision` fractional digits, rounding half away from zero.
pub fn fixed_half_up<T: Float>(value: T, precision: usize) -> String {
    let v = value.to_f64().unwrap_or(f64::NAN);
    if !v.is_finite() {
        return format!("{v}");
    }
    if precision >= EXACT_DIGITS {
        return format!("{:.*}", precision, v);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, v.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac[..precision].iter().copied())
        .collect();
    let mut int_len = int_part.len();
    if frac.get(precision).is_some_and(|&d| d >= b'5') {
        // carry through trailing nines
        let mut pos = digits.len();
        loop {
            if pos == 0 {
                digits.insert(0, b'1');
                int_len += 1;
                break;
            }
            pos -= 1;
            if digits[pos] == b'9' {
                digits[pos] = b'0';
            } else {
                digits[pos] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if v.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}
