//! Opaque measurement values.

use serde::{Deserialize, Serialize};

/// A height or weight as supplied by the data source.
///
/// Compared by equality only, never by magnitude: `"0.7 m"` and `0.7` are
/// different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Create a text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_equality_is_literal() {
        assert_eq!(Scalar::text("0.7 m"), Scalar::text("0.7 m"));
        assert_ne!(Scalar::text("0.7"), Scalar::Float(0.7));
        assert_ne!(Scalar::Int(7), Scalar::Float(7.0));
    }

    #[test]
    fn test_scalar_untagged_deserialize() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[7, 6.9, "6.9 kg"]"#).unwrap();
        assert_eq!(
            values,
            vec![Scalar::Int(7), Scalar::Float(6.9), Scalar::text("6.9 kg")]
        );
    }
}
