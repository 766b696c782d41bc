//! Generation classification: contiguous dex-number buckets.

use serde::{Deserialize, Serialize};

use crate::entities::DexId;

/// Generation used when no range matches. Unreachable with the shipped table.
pub const DEFAULT_GENERATION: u8 = 1;

/// Highest dex number covered by [`GENERATIONS`].
pub const MAX_DEX_ID: u32 = 905;

/// Inclusive dex-number interval belonging to one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRange {
    pub generation: u8,
    pub min: u32,
    pub max: u32,
}

impl GenerationRange {
    const fn new(generation: u8, min: u32, max: u32) -> Self {
        Self {
            generation,
            min,
            max,
        }
    }

    /// Check if a dex number falls inside this range.
    pub fn contains(&self, id: DexId) -> bool {
        (self.min..=self.max).contains(&id.0)
    }
}

/// The fixed generation table, ordered by generation.
pub const GENERATIONS: [GenerationRange; 8] = [
    GenerationRange::new(1, 1, 151),
    GenerationRange::new(2, 152, 251),
    GenerationRange::new(3, 252, 386),
    GenerationRange::new(4, 387, 493),
    GenerationRange::new(5, 494, 649),
    GenerationRange::new(6, 650, 721),
    GenerationRange::new(7, 722, 809),
    GenerationRange::new(8, 810, 905),
];

/// Classify a dex number against a range table.
///
/// Returns the generation of the first range containing `id`, or
/// [`DEFAULT_GENERATION`] if none does.
pub fn classify_in(table: &[GenerationRange], id: DexId) -> u8 {
    table
        .iter()
        .find(|range| range.contains(id))
        .map(|range| range.generation)
        .unwrap_or(DEFAULT_GENERATION)
}

/// Classify a dex number against [`GENERATIONS`].
pub fn classify_generation(id: DexId) -> u8 {
    classify_in(&GENERATIONS, id)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_covered_id_has_exactly_one_range(id in 1u32..=MAX_DEX_ID) {
            let hits = GENERATIONS.iter().filter(|r| r.contains(DexId(id))).count();
            prop_assert_eq!(hits, 1);

            let generation = classify_generation(DexId(id));
            prop_assert!((1..=8).contains(&generation));
        }

        #[test]
        fn classification_is_monotonic(a in 1u32..=MAX_DEX_ID, b in 1u32..=MAX_DEX_ID) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_generation(DexId(lo)) <= classify_generation(DexId(hi)));
        }
    }
}
