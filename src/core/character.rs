//! The fixed cast of characters.
//!
//! Each character carries the two knobs the AI policy reads: a coarse
//! strategy and a throwing accuracy for the Chaos duel. The standard
//! cast is seven characters; one is picked for the human each game.

use serde::{Deserialize, Serialize};

/// How an AI-controlled character plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiStrategy {
    /// Always takes the more damaging card option.
    Aggressive,
    /// Prefers the safer option.
    Cautious,
    /// Safer options, but will spend a card on a resurrection.
    Balanced,
    /// No consistent preference.
    Random,
}

/// A playable character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,

    /// Card-choice temperament when AI-controlled.
    pub strategy: AiStrategy,

    /// Throwing accuracy in `[0, 1]`; drives the Chaos stance choice.
    pub aim_skill: f32,
}

impl Character {
    /// Create a character.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: AiStrategy, aim_skill: f32) -> Self {
        Self {
            name: name.into(),
            strategy,
            aim_skill,
        }
    }
}

/// The standard seven-character cast, in seating order.
#[must_use]
pub fn standard_cast() -> Vec<Character> {
    vec![
        Character::new("Miles", AiStrategy::Balanced, 0.6),
        Character::new("Fara", AiStrategy::Cautious, 0.9),
        Character::new("Innis", AiStrategy::Aggressive, 0.95),
        Character::new("Kingston", AiStrategy::Cautious, 0.7),
        Character::new("Gary Kent", AiStrategy::Aggressive, 0.5),
        Character::new("Stacy", AiStrategy::Balanced, 0.3),
        Character::new("Paul", AiStrategy::Random, 0.4),
    ]
}
