//! Core engine types: players, roster, characters, RNG, configuration.
//!
//! Everything above this module (cards, effects, the turn loop) operates
//! on these building blocks via `PlayerId` lookups on the `Roster`.

pub mod character;
pub mod config;
pub mod player;
pub mod rng;
pub mod roster;

pub use character::{standard_cast, AiStrategy, Character};
pub use config::{ChaosConfig, GameConfig};
pub use player::{PlayerId, Seat, SeatRow};
pub use rng::GameRng;
pub use roster::{Player, Roster, JAIL_POSITION};
