//! Currency Values
//!
//! Deal values are free-form pt-BR strings ("R$ 1.234,56", "12k", "3.4M").
//! Parsing extracts a magnitude; formatting produces a compact label for
//! dashboard cards. The two are not inverses.

use std::sync::LazyLock;

use regex::Regex;

/// First run of digits/dots/commas, with an optional unit right after it.
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9.,]+)([km])?").expect("amount pattern is valid")
});

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Extract a numeric magnitude from a localized currency string.
///
/// Whitespace is ignored and case folded. Comma is the decimal separator and
/// dot groups thousands, except that a lone dot not followed by exactly three
/// digits ("3.4") is read as a decimal point. A `k`/`m` suffix scales by
/// 1,000 / 1,000,000. Anything unparseable yields `0.0`.
pub fn parse_value(value: &str) -> f64 {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let Some(caps) = AMOUNT.captures(&normalized) else {
        return 0.0;
    };

    let base = normalize_number(&caps[1]).parse::<f64>().unwrap_or(0.0);
    let base = if base.is_finite() { base } else { 0.0 };

    match caps.get(2).map(|m| m.as_str()) {
        Some("m") => base * MILLION,
        Some("k") => base * THOUSAND,
        _ => base,
    }
}

fn normalize_number(raw: &str) -> String {
    if raw.contains(',') {
        return raw.replace('.', "").replacen(',', ".", 1);
    }

    let mut parts = raw.split('.');
    if let (Some(_), Some(fraction), None) = (parts.next(), parts.next(), parts.next()) {
        if fraction.len() != 3 {
            return raw.to_string();
        }
    }
    raw.replace('.', "")
}

/// Compact pt-BR label: "R$ 2.5M", "R$ 4k", "R$ 999".
pub fn format_value(value: f64) -> String {
    if value >= MILLION {
        let millions = (value / MILLION * 10.0).round() / 10.0;
        let text = format!("{:.1}", millions);
        let text = text.strip_suffix(".0").unwrap_or(&text);
        return format!("R$ {}M", text);
    }
    if value >= THOUSAND {
        return format!("R$ {}k", (value / THOUSAND).round() as i64);
    }
    format!("R$ {}", group_thousands(value.round() as i64))
}

/// Group digits with '.' as pt-BR does ("12.345").
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
