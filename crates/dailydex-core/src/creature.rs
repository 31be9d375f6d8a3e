//! Creature definitions and the static catalog

use crate::identity::CreatureId;
use crate::input::{Mood, StyleTag};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Elemental type of a creature (one or two per definition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
}

/// Rarity tier; rarer creatures score slightly lower to spread encounters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// Numeric tier (1 = common, 3 = legendary)
    pub fn tier(&self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
        }
    }
}

/// Color keywords a creature harmonizes with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorAffinity {
    /// Keywords matched against the day's main color
    pub main: Vec<String>,
    /// Keywords matched against the day's sub color
    #[serde(default)]
    pub sub: Vec<String>,
}

/// A single catalog entry (static, immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureDef {
    pub id: CreatureId,
    pub name: String,
    /// One or two elemental types
    pub types: Vec<ElementType>,
    pub color_affinity: ColorAffinity,
    #[serde(default)]
    pub mood_affinity: Vec<Mood>,
    #[serde(default)]
    pub style_tags: Vec<StyleTag>,
    #[serde(default)]
    pub rarity: Rarity,
    /// Short speech-bubble line shown with the day's result
    #[serde(default)]
    pub flavor: String,
    /// Next form, when this creature evolves linearly
    #[serde(default)]
    pub evolves_to: Option<CreatureId>,
    /// Possible first-evolution targets when the line branches; empty for
    /// every non-branching line
    #[serde(default)]
    pub branch_evolutions: Vec<CreatureId>,
}

impl CreatureDef {
    /// Whether the first evolution picks among multiple targets
    pub fn is_branching(&self) -> bool {
        !self.branch_evolutions.is_empty()
    }

    /// Whether any evolution is available from this form
    pub fn can_evolve(&self) -> bool {
        self.evolves_to.is_some() || self.is_branching()
    }
}

/// The read-only creature catalog, ordered by ascending ID
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    creatures: IndexMap<CreatureId, CreatureDef>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from definitions, sorted by ascending ID
    pub fn from_defs(defs: impl IntoIterator<Item = CreatureDef>) -> Self {
        let mut creatures: IndexMap<CreatureId, CreatureDef> =
            defs.into_iter().map(|d| (d.id, d)).collect();
        creatures.sort_keys();
        Self { creatures }
    }

    /// Get a definition by ID
    pub fn get(&self, id: CreatureId) -> Option<&CreatureDef> {
        self.creatures.get(&id)
    }

    /// Check whether an ID exists in the catalog
    pub fn contains(&self, id: CreatureId) -> bool {
        self.creatures.contains_key(&id)
    }

    /// Definitions in ascending-ID order
    pub fn iter(&self) -> impl Iterator<Item = &CreatureDef> {
        self.creatures.values()
    }

    /// All catalog IDs in ascending order
    pub fn ids(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.creatures.keys().copied()
    }

    /// Number of catalog slots
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Resolve the display form of an owned creature: the permanent base
    /// slot plus the current (possibly evolved) form
    pub fn display_form(&self, base: CreatureId, current: CreatureId) -> Option<DisplayForm<'_>> {
        Some(DisplayForm {
            base: self.get(base)?,
            current: self.get(current)?,
        })
    }
}

/// Explicit base + current resolve for an owned creature
///
/// The current form wins for name, types, and evolvability; the base ID
/// stays the permanent collection key.
#[derive(Debug, Clone, Copy)]
pub struct DisplayForm<'a> {
    pub base: &'a CreatureDef,
    pub current: &'a CreatureDef,
}

impl<'a> DisplayForm<'a> {
    /// Display name of the current form
    pub fn name(&self) -> &'a str {
        &self.current.name
    }

    /// Types of the current form
    pub fn types(&self) -> &'a [ElementType] {
        &self.current.types
    }

    /// Next evolution of the current form, if any
    pub fn evolves_to(&self) -> Option<CreatureId> {
        self.current.evolves_to
    }

    /// Permanent collection key
    pub fn base_id(&self) -> CreatureId {
        self.base.id
    }

    /// Current form ID
    pub fn current_id(&self) -> CreatureId {
        self.current.id
    }
}
