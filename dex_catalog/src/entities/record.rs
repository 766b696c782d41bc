//! Entity record definitions.

use serde::{Deserialize, Serialize};

use super::{normalize_name, DexId, Scalar};

/// One guessable entity. Immutable once placed in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: DexId,
    pub name: String,

    /// One or two category labels. Order is display order only.
    pub types: Vec<String>,
    pub species: String,

    // Compared by equality only
    pub height: Option<Scalar>,
    pub weight: Option<Scalar>,

    /// Opaque asset references, never interpreted by the engine.
    pub sprite_ref: String,
    pub hires_ref: Option<String>,
}

impl EntityRecord {
    /// Create a new record with the given id, name and types.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: DexId(id),
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            species: String::new(),
            height: None,
            weight: None,
            sprite_ref: String::new(),
            hires_ref: None,
        }
    }

    /// Set the species label.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    /// Set the height value.
    pub fn with_height(mut self, height: Scalar) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the weight value.
    pub fn with_weight(mut self, weight: Scalar) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the sprite and optional hi-res asset references.
    pub fn with_images(mut self, sprite: impl Into<String>, hires: Option<String>) -> Self {
        self.sprite_ref = sprite.into();
        self.hires_ref = hires;
        self
    }

    /// The name in lookup form (trimmed, lowercased).
    pub fn canonical_name(&self) -> String {
        normalize_name(&self.name)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = EntityRecord::new(25, "Pikachu", ["Electric"])
            .with_species("Mouse Pokémon")
            .with_height(Scalar::text("0.4 m"))
            .with_weight(Scalar::text("6 kg"))
            .with_images("sprites/25.png", None);

        assert_eq!(record.id, DexId(25));
        assert_eq!(record.types, vec!["Electric".to_string()]);
        assert_eq!(record.canonical_name(), "pikachu");
        assert_eq!(record.sprite_ref, "sprites/25.png");
        assert!(record.hires_ref.is_none());
    }
}
