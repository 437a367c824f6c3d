//! Cell value model.
//!
//! Dataset cells are either text or a number. The distinction is carried as an
//! explicit tag so downstream code (filtering, sorting, formatting) dispatches
//! on the variant instead of sniffing runtime types.

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Serialized untagged: JSON numbers become [`Scalar::Number`], JSON strings
/// become [`Scalar::Text`], so persisted rows stay plain JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric view of the cell, if it carries a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }

    /// Text view of the cell, if it carries text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Number(_) => None,
            Scalar::Text(s) => Some(s),
        }
    }

    /// String form used by search and display.
    ///
    /// Whole numbers print without a fractional part (`3` rather than `3.0`)
    /// so search terms typed against rendered tables match.
    pub fn to_display(&self) -> String {
        match self {
            Scalar::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Scalar::Text(s) => s.clone(),
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(Scalar::Number(3.0).to_display(), "3");
        assert_eq!(Scalar::Number(1200.0).to_display(), "1200");
    }

    #[test]
    fn fractional_numbers_keep_their_fraction() {
        assert_eq!(Scalar::Number(3.7).to_display(), "3.7");
    }

    #[test]
    fn text_displays_verbatim() {
        assert_eq!(Scalar::from("Widget A").to_display(), "Widget A");
    }

    #[test]
    fn untagged_serde_round_trip() {
        let json = r#"{"name":"Widget A","stock":42}"#;
        let row: std::collections::BTreeMap<String, Scalar> =
            serde_json::from_str(json).unwrap();
        assert_eq!(row["name"], Scalar::from("Widget A"));
        assert_eq!(row["stock"], Scalar::Number(42.0));

        let back = serde_json::to_string(&row).unwrap();
        let reparsed: std::collections::BTreeMap<String, Scalar> =
            serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, row);
    }
}
