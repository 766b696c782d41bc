//! The catalog - immutable, pre-loaded collection of entity records.

mod pokedex;

use std::collections::HashMap;

use crate::entities::{normalize_name, DexId, EntityRecord};
use crate::generation::classify_generation;
use crate::random::RandomSource;

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no entries")]
    Empty,

    #[error("Invalid dex data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only set of guessable entities.
///
/// The data source is trusted: records are stored as supplied and only the
/// non-empty requirement is checked. Safe to share between sessions.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<EntityRecord>,

    /// Index: canonical name -> position in `records`.
    by_name: HashMap<String, usize>,

    /// Index: dex number -> position in `records`.
    by_id: HashMap<DexId, usize>,
}

impl Catalog {
    /// Build a catalog from already-validated records.
    pub fn new(records: Vec<EntityRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            // First record wins on duplicates
            by_name.entry(record.canonical_name()).or_insert(index);
            by_id.entry(record.id).or_insert(index);
        }

        Ok(Self {
            records,
            by_name,
            by_id,
        })
    }

    /// Number of records. Always at least one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; an empty catalog cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order.
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    /// Get a record by dex number.
    pub fn get(&self, id: DexId) -> Option<&EntityRecord> {
        self.by_id.get(&id).map(|&i| &self.records[i])
    }

    /// Exact, case-insensitive name lookup after trimming whitespace.
    pub fn find_by_name(&self, text: &str) -> Option<&EntityRecord> {
        self.by_name
            .get(&normalize_name(text))
            .map(|&i| &self.records[i])
    }

    /// Pick a record uniformly at random.
    pub fn pick_random(&self, rng: &mut impl RandomSource) -> &EntityRecord {
        &self.records[rng.pick_index(self.records.len())]
    }

    /// Generation of a dex number.
    pub fn classify_generation(&self, id: DexId) -> u8 {
        classify_generation(id)
    }

    /// Names containing `query` (case-insensitive), in catalog order, at most `limit`.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}
