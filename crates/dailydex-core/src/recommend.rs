//! Daily recommendation engine
//!
//! Scores every not-yet-collected creature against the day's input and
//! picks the highest. A date-seeded RNG contributes a small jitter per
//! candidate, drawn in ascending catalog order, so the outcome depends only
//! on the date, the input, and the collected set.

use crate::color::{classify_hex, ColorKeywords};
use crate::creature::{Catalog, CreatureDef};
use crate::date::DateKey;
use crate::identity::CreatureId;
use crate::input::UserInput;
use crate::rng::DailyRng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Scoring weights for candidate ranking
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Bonus when the main color hits a main affinity keyword
    pub main_color: f64,
    /// Bonus when the sub color hits a sub affinity keyword
    pub sub_color: f64,
    /// Bonus when the day's mood is in the creature's mood affinity
    pub mood: f64,
    /// Bonus per shared style tag
    pub style_tag: f64,
    /// Penalty per rarity tier above common
    pub rarity_step: f64,
    /// Scale of the seeded tie-breaking jitter
    pub jitter: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        main_color: 5.0,
        sub_color: 3.0,
        mood: 4.0,
        style_tag: 2.0,
        rarity_step: 0.5,
        jitter: 0.1,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of a recommendation pass
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    /// The winning creature; absent only when the collection is complete
    pub creature: Option<&'a CreatureDef>,
    /// True once every catalog slot has been collected
    pub is_complete: bool,
}

fn intersects(affinity: &[String], keys: &ColorKeywords) -> bool {
    affinity.iter().any(|k| keys.contains(k.as_str()))
}

/// Score one candidate against the day's input
fn score(
    def: &CreatureDef,
    input: &UserInput,
    main_keys: &ColorKeywords,
    sub_keys: &ColorKeywords,
    jitter: f64,
    w: &ScoreWeights,
) -> f64 {
    let mut score = 0.0;

    if intersects(&def.color_affinity.main, main_keys) {
        score += w.main_color;
    }
    if intersects(&def.color_affinity.sub, sub_keys) {
        score += w.sub_color;
    }
    if def.mood_affinity.contains(&input.mood) {
        score += w.mood;
    }

    let shared = def
        .style_tags
        .iter()
        .filter(|t| input.style_tags.contains(t))
        .count();
    score += shared as f64 * w.style_tag;

    // Rarity counterweight keeps legendaries from crowding out commons
    score -= f64::from(def.rarity.tier() - 1) * w.rarity_step;

    score + jitter * w.jitter
}

/// Recommend the day's creature with the default weights
pub fn recommend<'a>(
    catalog: &'a Catalog,
    input: &UserInput,
    collected: &HashSet<CreatureId>,
    date: &DateKey,
) -> Recommendation<'a> {
    recommend_weighted(catalog, input, collected, date, &ScoreWeights::DEFAULT)
}

/// Recommend the day's creature with explicit weights
///
/// Exactly one jitter value is drawn per candidate, in ascending catalog
/// order. An exhausted catalog is the terminal "collection complete"
/// result, not an error.
pub fn recommend_weighted<'a>(
    catalog: &'a Catalog,
    input: &UserInput,
    collected: &HashSet<CreatureId>,
    date: &DateKey,
    weights: &ScoreWeights,
) -> Recommendation<'a> {
    let mut rng = DailyRng::for_date(date);

    let candidates: Vec<&CreatureDef> = catalog
        .iter()
        .filter(|d| !collected.contains(&d.id))
        .collect();
    if candidates.is_empty() {
        return Recommendation {
            creature: None,
            is_complete: true,
        };
    }

    let main_keys = classify_hex(&input.main_color);
    let sub_keys = classify_hex(&input.sub_color);

    let mut scored: Vec<(f64, &CreatureDef)> = candidates
        .into_iter()
        .map(|def| {
            let jitter = rng.next_f64();
            (score(def, input, &main_keys, &sub_keys, jitter, weights), def)
        })
        .collect();

    // Stable descending sort: bit-identical scores keep ascending-ID order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    Recommendation {
        creature: scored.first().map(|(_, def)| *def),
        is_complete: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{ColorAffinity, ElementType, Rarity};
    use crate::input::{Mood, StyleTag};

    fn def(id: u16) -> CreatureDef {
        CreatureDef {
            id: CreatureId::new(id),
            name: format!("creature-{id}"),
            types: vec![ElementType::Normal],
            color_affinity: ColorAffinity::default(),
            mood_affinity: Vec::new(),
            style_tags: Vec::new(),
            rarity: Rarity::Common,
            flavor: String::new(),
            evolves_to: None,
            branch_evolutions: Vec::new(),
        }
    }

    fn input() -> UserInput {
        UserInput {
            main_color: "#FF6B6B".to_string(),
            sub_color: "#48DBFB".to_string(),
            mood: Mood::Excited,
            mood_note: None,
            style_tags: vec![StyleTag::Sporty],
        }
    }

    #[test]
    fn test_excludes_collected() {
        let catalog = Catalog::from_defs((1..=10).map(def));
        let collected: HashSet<CreatureId> = (1..=5).map(CreatureId::new).collect();
        let date = DateKey::new(2025, 1, 1);

        let rec = recommend(&catalog, &input(), &collected, &date);
        let winner = rec.creature.unwrap();
        assert!(!collected.contains(&winner.id));
        assert!(!rec.is_complete);
    }

    #[test]
    fn test_complete_collection_is_terminal() {
        let catalog = Catalog::from_defs((1..=4).map(def));
        let collected: HashSet<CreatureId> = (1..=4).map(CreatureId::new).collect();
        let date = DateKey::new(2025, 1, 1);

        let rec = recommend(&catalog, &input(), &collected, &date);
        assert!(rec.creature.is_none());
        assert!(rec.is_complete);
    }

    #[test]
    fn test_deterministic_for_fixed_date() {
        let catalog = Catalog::from_defs((1..=30).map(def));
        let collected = HashSet::new();
        let date = DateKey::new(2025, 6, 15);

        let first = recommend(&catalog, &input(), &collected, &date)
            .creature
            .unwrap()
            .id;
        let second = recommend(&catalog, &input(), &collected, &date)
            .creature
            .unwrap()
            .id;
        assert_eq!(first, second);
    }

    #[test]
    fn test_mood_match_beats_jitter() {
        // A +4 mood bonus dwarfs the 0..0.1 jitter, so the winner is
        // forced regardless of the date
        let mut favored = def(2);
        favored.mood_affinity = vec![Mood::Excited];
        let catalog = Catalog::from_defs([def(1), favored, def(3)]);

        for day in 1..=20 {
            let date = DateKey::new(2025, 3, day);
            let winner = recommend(&catalog, &input(), &HashSet::new(), &date)
                .creature
                .unwrap();
            assert_eq!(winner.id, CreatureId::new(2));
        }
    }

    #[test]
    fn test_rarity_penalty_disfavors_legendary() {
        // Identical affinities; only rarity differs
        let mut legendary = def(1);
        legendary.rarity = Rarity::Legendary;
        let common = def(2);
        let catalog = Catalog::from_defs([legendary, common]);

        // -1.0 penalty vs at most 0.1 jitter: the common form always wins
        for day in 1..=20 {
            let date = DateKey::new(2025, 4, day);
            let winner = recommend(&catalog, &input(), &HashSet::new(), &date)
                .creature
                .unwrap();
            assert_eq!(winner.id, CreatureId::new(2));
        }
    }

    #[test]
    fn test_style_overlap_scales() {
        let mut one_tag = def(1);
        one_tag.style_tags = vec![StyleTag::Sporty];
        let mut two_tags = def(2);
        two_tags.style_tags = vec![StyleTag::Sporty, StyleTag::Street];

        let catalog = Catalog::from_defs([one_tag, two_tags]);
        let mut input = input();
        input.style_tags = vec![StyleTag::Sporty, StyleTag::Street];

        let date = DateKey::new(2025, 2, 2);
        let winner = recommend(&catalog, &input, &HashSet::new(), &date)
            .creature
            .unwrap();
        assert_eq!(winner.id, CreatureId::new(2));
    }
}
