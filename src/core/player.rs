//! Player identification and table seating.
//!
//! ## PlayerId
//!
//! Type-safe index into the fixed roster. The roster never grows or
//! shrinks during a game, so ids stay valid for its whole lifetime.
//!
//! ## Seat
//!
//! Where a player's portrait sits around the board. The Chaos duel
//! derives its throw distance from seating, not board positions.

use serde::{Deserialize, Serialize};

/// Identifier for a player in the fixed roster.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Which row of portraits a player sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatRow {
    /// Above the board.
    Top,
    /// Below the board.
    Bottom,
}

/// A player's portrait position: row plus 1-indexed slot within the row.
///
/// The standard 7-player layout seats roster indices 0..=3 in the top
/// row (slots 1..=4) and indices 4..=6 in the bottom row (slots 1..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub row: SeatRow,
    pub slot: u8,
}

impl Seat {
    /// Create a seat.
    #[must_use]
    pub const fn new(row: SeatRow, slot: u8) -> Self {
        Self { row, slot }
    }

    /// Seat for a roster index under the standard layout.
    #[must_use]
    pub const fn for_roster_index(index: usize) -> Self {
        if index < 4 {
            Self::new(SeatRow::Top, index as u8 + 1)
        } else {
            Self::new(SeatRow::Bottom, (index - 4) as u8 + 1)
        }
    }
}
