//! Human-readable value formatting with SI prefix scaling.
//!
//! These are the formatting strategies unit definitions dispatch to. A value
//! is scaled by powers of 1000 into the nearest SI prefix, then printed with
//! a fixed number of significant digits, e.g. `physical_precision(1_500_000.0,
//! 2, "bit/s")` gives `"1.5 Mbit/s"`.

/// SI prefixes by power-of-1000 exponent, from 1000^-3 to 1000^5
const SCALE_PREFIXES: [&str; 9] = ["n", "µ", "m", "", "k", "M", "G", "T", "P"];

/// Exponent of the smallest supported prefix (nano)
const MIN_EXPONENT: i32 = -3;

/// Exponent of the largest supported prefix (peta)
const MAX_EXPONENT: i32 = 5;

/// Power-of-1000 exponent that scales `value` into [1, 1000)
fn scale_exponent(value: f64) -> i32 {
    let mut magnitude = value.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return 0;
    }
    let mut exponent = 0;
    while magnitude >= 1000.0 && exponent < MAX_EXPONENT {
        magnitude /= 1000.0;
        exponent += 1;
    }
    while magnitude < 1.0 && exponent > MIN_EXPONENT {
        magnitude *= 1000.0;
        exponent -= 1;
    }
    exponent
}

fn prefix_for(exponent: i32) -> &'static str {
    SCALE_PREFIXES[(exponent - MIN_EXPONENT) as usize]
}

/// Format `value` with `digits` significant digits.
///
/// `value` is expected to already be scaled into [1, 1000); larger values
/// simply get no decimal places.
fn format_significant(value: f64, digits: usize) -> String {
    let places_before = if value.abs() >= 1.0 {
        value.abs().log10().floor() as usize + 1
    } else {
        1
    };
    let places_after = digits.saturating_sub(places_before);
    format!("{:.*}", places_after, value)
}

/// Render a value with an SI-prefixed unit symbol at a fixed number of
/// significant digits.
pub fn physical_precision(value: f64, digits: usize, symbol: &str) -> String {
    let exponent = scale_exponent(value);
    let scaled = value / 1000f64.powi(exponent);
    format!(
        "{} {}{}",
        format_significant(scaled, digits),
        prefix_for(exponent),
        symbol
    )
}

/// Render a list of graph axis values at one common SI scale.
///
/// The scale is chosen from the value with the largest magnitude so labels on
/// the same axis line up; every label carries the prefixed symbol.
pub fn physical_precision_list(values: &[f64], digits: usize, symbol: &str) -> Vec<String> {
    let reference = values
        .iter()
        .copied()
        .fold(0.0f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
    let exponent = scale_exponent(reference);
    let factor = 1000f64.powi(exponent);
    let prefix = prefix_for(exponent);
    values
        .iter()
        .map(|v| {
            format!(
                "{} {}{}",
                format_significant(v / factor, digits),
                prefix,
                symbol
            )
        })
        .collect()
}
