//! Display formatting helpers.
//!
//! Presentation renders cells through these so the `Scalar` tag is the single
//! place that decides between numeric and text treatment.

use crate::scalar::Scalar;

/// Format a cell as a plain number with thousands separators.
///
/// Text cells pass through unchanged; views routinely point a numeric
/// formatter at a mixed column (e.g. an "amount" column with a "—" placeholder
/// row).
pub fn format_number(value: &Scalar) -> String {
    match value {
        Scalar::Number(n) => group_thousands(*n, decimals_for(*n)),
        Scalar::Text(s) => s.clone(),
    }
}

/// Format a cell as a currency amount (`$1,234.50`).
pub fn format_currency(value: &Scalar) -> String {
    match value {
        Scalar::Number(n) => format!("${}", group_thousands(*n, 2)),
        Scalar::Text(s) => s.clone(),
    }
}

fn decimals_for(n: f64) -> usize {
    if n.fract() == 0.0 { 0 } else { 2 }
}

fn group_thousands(n: f64, decimals: usize) -> String {
    let negative = n.is_sign_negative() && n != 0.0;
    let formatted = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
