// File: crates/ledgerview-core/src/format.rs
// Summary: Number formatting for tick labels, value labels and tooltips.
// Notes:
// - Fixed-precision output rounds exact ties away from zero (1.25 -> "1.3" at one digit).
// - Negative values use U+2212 MINUS SIGN; a value that rounds to zero never keeps its sign.

const MINUS: char = '\u{2212}';

/// Format `value` with exactly `digits` fractional digits.
pub fn fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { format!("{MINUS}Infinity") } else { "Infinity".to_string() };
    }
    let abs = value.abs();
    let body = if is_exact_tie(abs, digits) {
        format!("{:.*}", digits, abs + 0.5 / 10f64.powi(digits as i32))
    } else {
        format!("{:.*}", digits, abs)
    };
    let rounds_to_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !rounds_to_zero {
        format!("{MINUS}{body}")
    } else {
        body
    }
}

/// Integer formatting: rounds half up, then prints without separators.
pub fn integer(value: f64) -> String {
    if !value.is_finite() {
        return fixed(value, 0);
    }
    let rounded = (value + 0.5).floor();
    if rounded < 0.0 {
        format!("{MINUS}{}", -rounded)
    } else {
        format!("{}", rounded.abs())
    }
}

/// Whole-unit value in millions, e.g. `"120 M"`.
pub fn millions(value: f64) -> String {
    format!("{} M", fixed(value, 0))
}

/// One-decimal value in millions, e.g. `"120.5 M"`.
pub fn millions_precise(value: f64) -> String {
    format!("{} M", fixed(value, 1))
}

// The decimal expansion of an f64 is finite; a tie means the digits after the
// rounding position read exactly "5000...".
fn is_exact_tie(abs: f64, digits: usize) -> bool {
    let expanded = format!("{:.*}", digits + 40, abs);
    let Some(dot) = expanded.find('.') else { return false };
    let tail = &expanded[dot + 1 + digits..];
    let mut chars = tail.chars();
    chars.next() == Some('5') && chars.all(|c| c == '0')
}
