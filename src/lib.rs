//! # door-engine
//!
//! Rules engine for The Door, a turn-based party board game: dice
//! movement toward a winning square, a card-effect system with
//! player-mediated choices, and the Chaos duel, a distance-scaled
//! throwing minigame.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: The engine exposes commands and snapshots
//!    only. Rendering, animation, and input belong to the caller, which
//!    drives the engine across explicit suspension points.
//!
//! 2. **Arena + id**: All players live in one owned roster addressed by
//!    `PlayerId`; no component holds a live player reference.
//!
//! 3. **Seeded randomness**: Shuffles and AI rolls draw from an injected
//!    `GameRng`, so a fixed seed reproduces a full game.
//!
//! ## Modules
//!
//! - `core`: Player ids, roster, characters, RNG, configuration
//! - `cards`: The four card definitions and the deck lifecycle
//! - `turn`: Turn sequencing, Lightning Round, game-over detection
//! - `effects`: Card effect resolution with the two-phase target contract
//! - `chaos`: The Chaos duel's distance and outcome math
//! - `ai`: Decision heuristics for AI-controlled players
//! - `game`: The driving state machine and its event stream

pub mod ai;
pub mod cards;
pub mod chaos;
pub mod core;
pub mod effects;
pub mod game;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    standard_cast, AiStrategy, ChaosConfig, Character, GameConfig, GameRng, Player, PlayerId,
    Roster, Seat, SeatRow,
};

pub use crate::cards::{
    CardChoice, CardDefinition, CardKind, CardOption, CardSet, Deck, CARD_DISTRIBUTION, DECK_SIZE,
};

pub use crate::turn::TurnSequencer;

pub use crate::effects::{CardResolver, EffectOutcome, TargetRule};

pub use crate::chaos::{
    classify_throw, seat_distance, sweep_offset, DuelPerspective, DuelResult, DuelSetup,
    ThrowOutcome,
};

pub use crate::game::{Awaiting, CommandError, DoorGame, GameEvent, ResolutionPhase};
