//! Entity definitions for the catalog.

mod record;
mod scalar;

pub use record::*;
pub use scalar::*;

use serde::{Deserialize, Serialize};

/// Dex number of an entity. Positive, unique and globally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DexId(pub u32);

impl DexId {
    /// Get the raw dex number.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Format as a zero-padded dex tag, e.g. `#025`.
    pub fn padded(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl std::fmt::Display for DexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DexId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Canonical form used for every name comparison: trimmed and lowercased.
pub fn normalize_name(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_id() {
        assert_eq!(DexId(1).padded(), "#001");
        assert_eq!(DexId(25).padded(), "#025");
        assert_eq!(DexId(905).padded(), "#905");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Bulbasaur \n"), "bulbasaur");
        assert_eq!(normalize_name("Mr. Mime"), "mr. mime");
        assert_eq!(normalize_name(""), "");
    }
}
