// License: MIT
// Copyright © 2024 The emissions-wedges Authors

//! Number formatting for Czech texts.

/// The minus sign, U+2212.
const MINUS: char = '\u{2212}';

/// Formats a number the Czech way: thousands separated by a space, a decimal
/// comma, and a proper minus sign.
pub fn czech_float(value: f64, decimals: usize) -> String {
    format_grouped(value, decimals, " ")
}

/// Like [`czech_float`], but separates thousands with `&thinsp;`.
pub fn czech_float_for_html(value: f64, decimals: usize) -> String {
    format_grouped(value, decimals, "&thinsp;")
}

fn format_grouped(value: f64, decimals: usize, separator: &str) -> String {
    let formatted = format!("{:.decimals$}", value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::with_capacity(formatted.len() + 8);
    if value.is_sign_negative() && !value.is_nan() {
        result.push(MINUS);
    }
    let digits = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    if let Some(fraction) = fraction {
        result.push(',');
        result.push_str(fraction);
    }
    result
}
