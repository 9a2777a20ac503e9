//! Result formatting.
//!
//! Magnitudes inside `[lower, upper)` are rounded to a fixed number of significant digits and printed in their
//! shortest decimal form (`5`, `0.005`, `123457`). Anything outside that window, zero excepted, switches to
//! exponential notation with an explicit exponent sign (`1.234568e+6`, `1.500000e-4`).

use serde::{Deserialize, Serialize};

/// Formatting knobs. The defaults reproduce the calculator's historical output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Significant digits kept in fixed notation.
    pub significant_digits: usize,
    /// Digits after the decimal point of the mantissa in exponential notation.
    pub exponent_digits: usize,
    /// Smallest magnitude printed in fixed notation.
    pub lower: f64,
    /// Magnitudes at or above this switch to exponential notation.
    pub upper: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            significant_digits: 6,
            exponent_digits: 6,
            lower: 1e-3,
            upper: 1e6,
        }
    }
}

/// Fraction digits that make `{:e}` print the exact decimal expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 767;

/// Formats a result for display. Non-finite values format as an empty string.
///
/// Rounding is half away from zero on the exact binary value, so `100000.5` keeps six digits as `100001`.
pub fn format_number(n: f64, options: &FormatOptions) -> String {
    if !n.is_finite() {
        return String::new();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs < options.lower || abs >= options.upper {
        return exponential(n, options.exponent_digits);
    }

    let (digits, exponent) = round_significant(abs, options.significant_digits);
    let sign = if n < 0.0 { "-" } else { "" };
    let rounded = format!("{}{}e{}", sign, mantissa(&digits, 0), exponent);
    match rounded.parse::<f64>() {
        Ok(value) => value.to_string(),
        Err(_) => n.to_string(),
    }
}

/// [`format_number`] with the default options.
pub fn format_default(n: f64) -> String {
    format_number(n, &FormatOptions::default())
}

fn exponential(n: f64, fraction_digits: usize) -> String {
    let (digits, exponent) = round_significant(n.abs(), fraction_digits + 1);
    let sign = if n < 0.0 { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}{}e{}{}",
        sign,
        mantissa(&digits, fraction_digits),
        exponent_sign,
        exponent.unsigned_abs()
    )
}

/// `d.ddd`, or just `d` when there is no fraction. Missing fraction digits are zero-padded.
fn mantissa(digits: &str, min_fraction: usize) -> String {
    let (first, rest) = digits.split_at(1);
    let fraction = format!("{:0<width$}", rest, width = min_fraction.max(rest.len()));
    if fraction.is_empty() {
        first.to_string()
    } else {
        format!("{}.{}", first, fraction)
    }
}

/// Rounds a positive finite `value` to `significant` digits, ties away from zero.
///
/// Returns the kept digits and the decimal exponent of the first one.
fn round_significant(value: f64, significant: usize) -> (String, i32) {
    let significant = significant.clamp(1, EXACT_FRACTION_DIGITS + 1);
    let exact = format!("{:.*e}", EXACT_FRACTION_DIGITS, value);
    let (digits, exponent) = match exact.split_once('e') {
        Some((lead, exponent)) => (
            lead.bytes().filter(u8::is_ascii_digit).collect::<Vec<u8>>(),
            exponent.parse::<i32>().unwrap_or(0),
        ),
        None => (exact.bytes().filter(u8::is_ascii_digit).collect(), 0),
    };

    let mut kept: Vec<u8> = digits.iter().copied().take(significant).collect();
    kept.resize(significant, b'0');
    let mut exponent = exponent;

    if digits.get(significant).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.99.. rolled over to 10.0..
            kept.insert(0, b'1');
            kept.truncate(significant);
            exponent += 1;
        }
    }

    (String::from_utf8_lossy(&kept).into_owned(), exponent)
}
