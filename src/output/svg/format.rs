//! Text and number formatting for SVG output and tick labels.

/// Escape text for use in SVG text nodes and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a coordinate rounded to two decimals, without trailing zeros.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Abbreviate thousands: `2000 -> "2k"`, `999 -> "999"`.
///
/// Values are truncated toward zero, never rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_thousands(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{}k", (value / 1000.0).trunc() as i64)
    } else {
        format!("{}", value.trunc() as i64)
    }
}

/// One-significant-digit exponential notation: `0.0001 -> "1e-4"`.
///
/// Zero is the literal `"0"`. The exponent is written with an explicit sign and
/// at least two digits, then a leading zero after a minus sign is dropped, so
/// positive exponents keep their padding (`1000 -> "1e+03"`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_exponent(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let raw = format!("{value:.0e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };

    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs()).replacen("e-0", "e-", 1)
}

/// Decade label with a superscript exponent: `1000 -> "10³"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_power_of_ten(value: f64) -> String {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let exponent = value.log10().round() as i32;
    let mut label = String::from("10");
    if exponent < 0 {
        label.push('⁻');
    }
    for digit in exponent.unsigned_abs().to_string().chars() {
        let index = digit.to_digit(10).unwrap_or(0) as usize;
        label.push(SUPERSCRIPTS[index]);
    }
    label
}

/// Largest number of decimals shown on a plain axis.
const MAX_PLAIN_DECIMALS: usize = 6;

/// Decimals needed to show `value` exactly (up to [`MAX_PLAIN_DECIMALS`]).
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn decimals_needed(value: f64) -> usize {
    (0..MAX_PLAIN_DECIMALS)
        .find(|&decimals| {
            let scaled = value * 10f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(MAX_PLAIN_DECIMALS)
}

/// Format a whole axis of plain numbers with one shared precision.
///
/// `[0.0, 0.25, 0.5]` becomes `["0.00", "0.25", "0.50"]`; integral axes get no
/// decimal point.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn format_plain(values: &[f64]) -> Vec<String> {
    let decimals = values.iter().map(|v| decimals_needed(*v)).max().unwrap_or(0);
    let zero_band = 0.5 / 10f64.powi(decimals as i32);
    values
        .iter()
        .map(|&value| {
            // no "-0.00"
            let value = if value.abs() < zero_band { 0.0 } else { value };
            format!("{value:.decimals$}")
        })
        .collect()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
