//! The Chaos duel: a distance-scaled 1v1 elimination minigame.

pub mod duel;

pub use duel::{
    ai_ball_throw, ai_can_throw, classify_throw, seat_distance, sweep_offset, DuelPerspective,
    DuelResult, DuelSetup, ThrowOutcome,
};
