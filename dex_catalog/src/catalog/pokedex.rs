//! Adapter for the upstream dex JSON layout.

use serde::Deserialize;

use super::{Catalog, CatalogError};
use crate::entities::{DexId, EntityRecord, Scalar};

#[derive(Debug, Deserialize)]
struct DexEntry {
    id: DexId,
    name: DexNames,
    #[serde(rename = "type")]
    types: Vec<String>,
    #[serde(default)]
    species: String,
    #[serde(default)]
    profile: Option<DexProfile>,
    #[serde(default)]
    image: Option<DexImage>,
}

#[derive(Debug, Deserialize)]
struct DexNames {
    english: String,
}

#[derive(Debug, Default, Deserialize)]
struct DexProfile {
    #[serde(default)]
    height: Option<Scalar>,
    #[serde(default)]
    weight: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
struct DexImage {
    #[serde(default)]
    sprite: String,
    #[serde(default)]
    hires: Option<String>,
}

impl From<DexEntry> for EntityRecord {
    fn from(entry: DexEntry) -> Self {
        let profile = entry.profile.unwrap_or_default();
        let image = entry.image.unwrap_or_default();
        Self {
            id: entry.id,
            name: entry.name.english,
            types: entry.types,
            species: entry.species,
            height: profile.height,
            weight: profile.weight,
            sprite_ref: image.sprite,
            hires_ref: image.hires,
        }
    }
}

impl Catalog {
    /// Build a catalog from a dex JSON array.
    ///
    /// Entries are trusted as well-formed; unknown fields are ignored.
    pub fn from_pokedex_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<DexEntry> = serde_json::from_str(json)?;
        Self::new(entries.into_iter().map(EntityRecord::from).collect())
    }
}
