//! Matcher - scores a guessed entity against the target, channel by channel.
//!
//! Every field of a [`MatchResult`] is computed independently and truthfully.
//! Precedence between fields (full vs partial type match) is a display policy
//! left to the caller; see [`MatchResult::types_verdict`].

use dex_catalog::{classify_generation, EntityRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::hints::HintChannel;

/// Per-guess comparison against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub name_exact: bool,
    pub id_exact: bool,
    /// Type sets are equal, ignoring order.
    pub types_full: bool,
    /// Type sets share at least one label.
    pub types_partial: bool,
    pub generation_exact: bool,
    pub species_exact: bool,
    pub height_exact: bool,
    pub weight_exact: bool,
}

/// How a guess's types relate to the target's, after display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeVerdict {
    Full,
    Partial,
    Miss,
}

impl MatchResult {
    /// Check if every field matched.
    pub fn is_perfect(&self) -> bool {
        self.name_exact
            && self.id_exact
            && self.types_full
            && self.types_partial
            && self.generation_exact
            && self.species_exact
            && self.height_exact
            && self.weight_exact
    }

    /// Collapse the type fields for display.
    ///
    /// A full match always wins. A partial match is only reported when
    /// `partial_enabled` is set; otherwise it reads as a miss.
    pub fn types_verdict(&self, partial_enabled: bool) -> TypeVerdict {
        if self.types_full {
            TypeVerdict::Full
        } else if partial_enabled && self.types_partial {
            TypeVerdict::Partial
        } else {
            TypeVerdict::Miss
        }
    }

    /// The match flag shown alongside a hint channel.
    pub fn channel_match(&self, channel: HintChannel) -> bool {
        match channel {
            HintChannel::Sprite => self.name_exact,
            HintChannel::Id => self.id_exact,
            HintChannel::Types => self.types_full,
            HintChannel::Generation => self.generation_exact,
            HintChannel::Species => self.species_exact,
            HintChannel::Height => self.height_exact,
            HintChannel::Weight => self.weight_exact,
        }
    }
}

/// Compare `candidate` against `target`.
pub fn evaluate(candidate: &EntityRecord, target: &EntityRecord) -> MatchResult {
    let candidate_types: HashSet<&str> = candidate.types.iter().map(String::as_str).collect();
    let target_types: HashSet<&str> = target.types.iter().map(String::as_str).collect();

    MatchResult {
        name_exact: candidate.canonical_name() == target.canonical_name(),
        id_exact: candidate.id == target.id,
        types_full: candidate_types == target_types,
        types_partial: !candidate_types.is_disjoint(&target_types),
        generation_exact: classify_generation(candidate.id) == classify_generation(target.id),
        species_exact: candidate.species == target.species,
        height_exact: candidate.height == target.height,
        weight_exact: candidate.weight == target.weight,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const TYPES: [&str; 6] = ["Grass", "Poison", "Fire", "Water", "Electric", "Psychic"];

    fn type_set() -> impl Strategy<Value = Vec<String>> {
        proptest::sample::subsequence(TYPES.to_vec(), 1..=2)
            .prop_shuffle()
            .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    proptest! {
        #[test]
        fn full_type_match_implies_partial(a in type_set(), b in type_set()) {
            let x = EntityRecord::new(1, "X", a);
            let y = EntityRecord::new(2, "Y", b);
            let result = evaluate(&x, &y);
            if result.types_full {
                prop_assert!(result.types_partial);
            }
        }

        #[test]
        fn evaluation_is_symmetric_for_types(a in type_set(), b in type_set()) {
            let x = EntityRecord::new(1, "X", a);
            let y = EntityRecord::new(2, "Y", b);
            let forward = evaluate(&x, &y);
            let backward = evaluate(&y, &x);
            prop_assert_eq!(forward.types_full, backward.types_full);
            prop_assert_eq!(forward.types_partial, backward.types_partial);
        }

        #[test]
        fn any_record_matches_itself(id in 1u32..=905, types in type_set(), species in "[A-Za-z ]{0,12}") {
            let record = EntityRecord::new(id, "Self", types).with_species(species);
            prop_assert!(evaluate(&record, &record).is_perfect());
        }
    }
}
