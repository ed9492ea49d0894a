//! Game configuration.
//!
//! The rules constants live here rather than being scattered through the
//! engine: board geometry, life totals, the card-square cadence, the
//! Lightning Round threshold, and the Chaos duel scaling tables. Defaults
//! reproduce the standard game; tests shrink them to force edge cases.

use serde::{Deserialize, Serialize};

/// Fixed rules constants for a game of The Door.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Index of the last board square, the Door. Reaching it wins.
    pub board_squares: i8,

    /// Lives each player starts with; also the cap for any life gain.
    pub starting_lives: u8,

    /// Square a jailed player re-enters the board from.
    pub jail_square: i8,

    /// Every `n`-th square (above 0) draws a card on landing.
    pub card_square_interval: i8,

    /// Turns every alive player must have taken before the Lightning
    /// Round activates.
    pub lightning_round_after_turns: u32,

    /// Chaos duel scaling tables.
    pub chaos: ChaosConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_squares: 20,
            starting_lives: 3,
            jail_square: 10,
            card_square_interval: 4,
            lightning_round_after_turns: 4,
            chaos: ChaosConfig::default(),
        }
    }
}

impl GameConfig {
    /// Whether landing on `position` draws a card.
    #[must_use]
    pub fn is_card_square(&self, position: i8) -> bool {
        position > 0 && position % self.card_square_interval == 0
    }
}

/// Distance-scaled tables for the Chaos duel.
///
/// Tables are indexed by duel distance 1..=4; index 0 is unused padding
/// so that `table[distance]` reads naturally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChaosConfig {
    /// Visual scale of the defender by distance.
    pub scale: [f32; 5],

    /// Projectile speed in px/s by distance.
    pub speed: [f32; 5],

    /// AI hit chance in percent by distance.
    pub ai_hit_chance: [u8; 5],

    /// The aim pointer sweeps between `±sweep_half_width` px of center.
    pub sweep_half_width: f32,

    /// Width of the can hit zone at distance 1, before scaling.
    pub can_hit_zone_base: f32,

    /// Width of the body hit zone at distance 1, before scaling.
    pub body_hit_zone_base: f32,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 0.75, 0.55, 0.4],
            speed: [150.0, 150.0, 225.0, 300.0, 375.0],
            ai_hit_chance: [55, 55, 43, 32, 20],
            sweep_half_width: 120.0,
            can_hit_zone_base: 50.0,
            body_hit_zone_base: 80.0,
        }
    }
}

impl ChaosConfig {
    /// Half-width of the can hit zone at `distance`.
    #[must_use]
    pub fn can_half_width(&self, distance: u8) -> f32 {
        self.can_hit_zone_base * self.scale[distance as usize] / 2.0
    }

    /// Half-width of the body hit zone at `distance`.
    #[must_use]
    pub fn body_half_width(&self, distance: u8) -> f32 {
        self.body_hit_zone_base * self.scale[distance as usize] / 2.0
    }
}
