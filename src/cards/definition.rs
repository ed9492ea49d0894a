//! Card definitions - static card data.
//!
//! Four card kinds exist, each offering two choices. The definitions are
//! immutable; the deck deals in `CardKind` values and looks descriptions
//! up here when presenting a draw.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The four kinds of card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    JudgeJury,
    SummonExile,
    ResurrectReap,
    Chaos,
}

impl CardKind {
    /// All card kinds, in deck-building order.
    #[must_use]
    pub const fn all() -> [CardKind; 4] {
        [
            CardKind::JudgeJury,
            CardKind::SummonExile,
            CardKind::ResurrectReap,
            CardKind::Chaos,
        ]
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::JudgeJury => "Judge/Jury",
            CardKind::SummonExile => "Summon/Exile",
            CardKind::ResurrectReap => "Resurrect/Reap",
            CardKind::Chaos => "Chaos",
        };
        write!(f, "{name}")
    }
}

/// One of the two faces of a drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardOption {
    A,
    B,
}

/// A concrete choice made on a drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardChoice {
    Judge,
    Jury,
    Summon,
    Exile,
    Resurrect,
    Reap,
    /// Chaos: the drawer throws; the target stands with the can.
    Can,
    /// Chaos: the target throws; the drawer stands with the can.
    Ball,
}

impl std::fmt::Display for CardChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardChoice::Judge => "Judge",
            CardChoice::Jury => "Jury",
            CardChoice::Summon => "Summon",
            CardChoice::Exile => "Exile",
            CardChoice::Resurrect => "Resurrect",
            CardChoice::Reap => "Reap",
            CardChoice::Can => "Can",
            CardChoice::Ball => "Ball",
        };
        write!(f, "{name}")
    }
}

/// Static definition of a card kind: its two choices and the text shown
/// for each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub kind: CardKind,
    pub option_a: CardChoice,
    pub option_b: CardChoice,
    pub description_a: String,
    pub description_b: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        kind: CardKind,
        option_a: CardChoice,
        option_b: CardChoice,
        description_a: impl Into<String>,
        description_b: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            option_a,
            option_b,
            description_a: description_a.into(),
            description_b: description_b.into(),
        }
    }

    /// The choice behind a face.
    #[must_use]
    pub fn choice(&self, option: CardOption) -> CardChoice {
        match option {
            CardOption::A => self.option_a,
            CardOption::B => self.option_b,
        }
    }
}

/// Lookup table of the four fixed card definitions.
#[derive(Clone, Debug)]
pub struct CardSet {
    definitions: FxHashMap<CardKind, CardDefinition>,
}

impl CardSet {
    /// The standard set.
    #[must_use]
    pub fn standard() -> Self {
        let mut definitions = FxHashMap::default();

        for definition in [
            CardDefinition::new(
                CardKind::JudgeJury,
                CardChoice::Judge,
                CardChoice::Jury,
                "Select a target. They lose 1 life.",
                "Choose a selector. They pick a victim who loses 2 lives.",
            ),
            CardDefinition::new(
                CardKind::SummonExile,
                CardChoice::Summon,
                CardChoice::Exile,
                "Move a target to your position.",
                "Send a target to Jail. They lose 1 life and skip next turn.",
            ),
            CardDefinition::new(
                CardKind::ResurrectReap,
                CardChoice::Resurrect,
                CardChoice::Reap,
                "Revive a dead player at start with 1 life.",
                "Instantly kill a target.",
            ),
            CardDefinition::new(
                CardKind::Chaos,
                CardChoice::Can,
                CardChoice::Ball,
                "Target stands with can. You throw.",
                "You stand with can. Target throws.",
            ),
        ] {
            definitions.insert(definition.kind, definition);
        }

        Self { definitions }
    }

    /// Definition for a card kind.
    #[must_use]
    pub fn get(&self, kind: CardKind) -> &CardDefinition {
        self.definitions
            .get(&kind)
            .expect("Card kind not in definition set")
    }

    /// Number of definitions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for CardSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_covers_all_kinds() {
        let set = CardSet::standard();
        assert_eq!(set.len(), 4);
        for kind in CardKind::all() {
            assert_eq!(set.get(kind).kind, kind);
        }
    }

    #[test]
    fn test_option_mapping() {
        let set = CardSet::standard();
        let judge_jury = set.get(CardKind::JudgeJury);

        assert_eq!(judge_jury.choice(CardOption::A), CardChoice::Judge);
        assert_eq!(judge_jury.choice(CardOption::B), CardChoice::Jury);

        let chaos = set.get(CardKind::Chaos);
        assert_eq!(chaos.choice(CardOption::A), CardChoice::Can);
        assert_eq!(chaos.choice(CardOption::B), CardChoice::Ball);
    }

    #[test]
    fn test_descriptions_present() {
        let set = CardSet::standard();
        for kind in CardKind::all() {
            let definition = set.get(kind);
            assert!(!definition.description_a.is_empty());
            assert!(!definition.description_b.is_empty());
        }
    }

    #[test]
    fn test_definition_serialization() {
        let set = CardSet::standard();
        let definition = set.get(CardKind::Chaos);
        let json = serde_json::to_string(definition).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(*definition, deserialized);
    }
}
