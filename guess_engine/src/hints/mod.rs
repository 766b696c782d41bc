//! Hint channels - the attribute dimensions that can be revealed about the target.

mod scheduler;

pub use scheduler::*;

use dex_catalog::{classify_generation, EntityRecord, Scalar};
use serde::{Deserialize, Serialize};

/// One revealable attribute of the target.
///
/// Declaration order matters: the leading channels form the seed pool and
/// reveals scan the remaining ones in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintChannel {
    Sprite,
    Id,
    Types,
    Generation,
    Species,
    Height,
    Weight,
}

impl HintChannel {
    /// Every channel in declaration order.
    pub const ALL: [HintChannel; 7] = [
        HintChannel::Sprite,
        HintChannel::Id,
        HintChannel::Types,
        HintChannel::Generation,
        HintChannel::Species,
        HintChannel::Height,
        HintChannel::Weight,
    ];

    /// Machine name of the channel.
    pub fn name(&self) -> &'static str {
        match self {
            HintChannel::Sprite => "sprite",
            HintChannel::Id => "id",
            HintChannel::Types => "types",
            HintChannel::Generation => "generation",
            HintChannel::Species => "species",
            HintChannel::Height => "height",
            HintChannel::Weight => "weight",
        }
    }

    /// Display label of the channel.
    pub fn label(&self) -> &'static str {
        match self {
            HintChannel::Sprite => "Silhouette",
            HintChannel::Id => "ID Number",
            HintChannel::Types => "Types",
            HintChannel::Generation => "Generation",
            HintChannel::Species => "Species",
            HintChannel::Height => "Height",
            HintChannel::Weight => "Weight",
        }
    }

    /// The first `pool` channels, clamped to the channel count.
    pub fn seed_pool(pool: usize) -> &'static [HintChannel] {
        &Self::ALL[..pool.min(Self::ALL.len())]
    }

    /// What this channel shows about `target`.
    pub fn reveal(&self, target: &EntityRecord) -> HintValue {
        match self {
            HintChannel::Sprite => HintValue::Silhouette(target.sprite_ref.clone()),
            HintChannel::Id => HintValue::Text(target.id.padded()),
            HintChannel::Types => HintValue::Types(target.types.clone()),
            HintChannel::Generation => {
                HintValue::Text(format!("Generation {}", classify_generation(target.id)))
            }
            HintChannel::Species => HintValue::Text(target.species.clone()),
            HintChannel::Height => HintValue::Text(measure_text(target.height.as_ref())),
            HintChannel::Weight => HintValue::Text(measure_text(target.weight.as_ref())),
        }
    }
}

impl std::fmt::Display for HintChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn measure_text(value: Option<&Scalar>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}

/// The rendered content of a revealed hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintValue {
    /// Asset reference to be drawn as a darkened silhouette.
    Silhouette(String),
    Types(Vec<String>),
    Text(String),
}

impl std::fmt::Display for HintValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintValue::Silhouette(asset) => write!(f, "{}", asset),
            HintValue::Types(types) => write!(f, "{}", types.join(" / ")),
            HintValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> EntityRecord {
        EntityRecord::new(25, "Pikachu", ["Electric"])
            .with_species("Mouse Pokémon")
            .with_height(Scalar::text("0.4 m"))
            .with_images("sprites/025.png", None)
    }

    #[test]
    fn test_channel_order_and_labels() {
        let names: Vec<_> = HintChannel::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["sprite", "id", "types", "generation", "species", "height", "weight"]
        );
        assert_eq!(HintChannel::Sprite.label(), "Silhouette");
        assert_eq!(HintChannel::Id.label(), "ID Number");
    }

    #[test]
    fn test_seed_pool() {
        assert_eq!(
            HintChannel::seed_pool(3),
            &[HintChannel::Sprite, HintChannel::Id, HintChannel::Types]
        );
        assert_eq!(HintChannel::seed_pool(99).len(), 7);
    }

    #[test]
    fn test_reveal_values() {
        let target = pikachu();
        assert_eq!(
            HintChannel::Sprite.reveal(&target),
            HintValue::Silhouette("sprites/025.png".into())
        );
        assert_eq!(HintChannel::Id.reveal(&target), HintValue::Text("#025".into()));
        assert_eq!(
            HintChannel::Types.reveal(&target),
            HintValue::Types(vec!["Electric".into()])
        );
        assert_eq!(
            HintChannel::Generation.reveal(&target),
            HintValue::Text("Generation 1".into())
        );
        assert_eq!(
            HintChannel::Species.reveal(&target).to_string(),
            "Mouse Pokémon"
        );
        assert_eq!(HintChannel::Height.reveal(&target).to_string(), "0.4 m");
        assert_eq!(HintChannel::Weight.reveal(&target).to_string(), "?");
    }

    #[test]
    fn test_channel_serde_names() {
        let json = serde_json::to_string(&HintChannel::Generation).unwrap();
        assert_eq!(json, "\"generation\"");
    }
}
