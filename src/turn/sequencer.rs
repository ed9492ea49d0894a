//! The turn sequencer.
//!
//! Turn order is roster order filtered to alive players, recomputed from
//! the roster on every query rather than cached. Eliminations and
//! resurrections therefore take effect immediately: eliminated players
//! are skipped transparently, and a resurrected player re-enters the
//! rotation at their original roster slot. The index is reclamped to 0
//! whenever the alive list has shrunk underneath it.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};

/// Tracks whose turn it is, per-player turn counts, and the Lightning
/// Round flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnSequencer {
    /// Index into the *alive* player list, not the full roster.
    current_index: usize,

    /// Full rotations completed.
    turn_number: u32,

    /// Turns taken per roster slot.
    turns_taken: Vec<u32>,

    /// Once true, stays true: new entrants cannot deactivate it.
    lightning_round: bool,

    /// Activation threshold for the Lightning Round.
    threshold: u32,
}

impl TurnSequencer {
    /// Create a sequencer for a roster of `player_count` players.
    #[must_use]
    pub fn new(player_count: usize, lightning_round_after_turns: u32) -> Self {
        Self {
            current_index: 0,
            turn_number: 0,
            turns_taken: vec![0; player_count],
            lightning_round: false,
            threshold: lightning_round_after_turns,
        }
    }

    /// The player whose turn it is. `None` only when nobody is alive.
    ///
    /// Reclamps a drifted index (the alive list shrank since the last
    /// query) to 0 rather than failing.
    pub fn current_player(&mut self, roster: &Roster) -> Option<PlayerId> {
        let alive = roster.alive_ids();
        if alive.is_empty() {
            return None;
        }

        if self.current_index >= alive.len() {
            self.current_index = 0;
        }

        Some(alive[self.current_index])
    }

    /// Move to the next alive player, incrementing the turn number on
    /// wrap-around.
    pub fn advance(&mut self, roster: &Roster) -> Option<PlayerId> {
        let alive = roster.alive_ids();
        if alive.is_empty() {
            return None;
        }

        self.current_index += 1;
        if self.current_index >= alive.len() {
            self.current_index = 0;
            self.turn_number += 1;
        }

        self.current_player(roster)
    }

    /// Record that a player completed a turn, then check Lightning Round
    /// activation. Returns `true` if the Lightning Round activated on
    /// this exact call.
    ///
    /// Activation happens once, the moment the minimum turn count across
    /// all currently-alive players reaches the threshold; it never
    /// deactivates afterwards.
    pub fn record_turn_taken(&mut self, roster: &Roster, id: PlayerId) -> bool {
        self.turns_taken[id.index()] += 1;

        if self.lightning_round {
            return false;
        }

        let threshold = self.threshold;
        let everyone_ready = roster
            .alive_ids()
            .iter()
            .all(|p| self.turns_taken[p.index()] >= threshold);

        if everyone_ready {
            self.lightning_round = true;
            log::info!("Lightning Round activated on turn {}", self.turn_number);
        }
        self.lightning_round
    }

    /// Whether the Lightning Round is active.
    #[must_use]
    pub fn is_lightning_round(&self) -> bool {
        self.lightning_round
    }

    /// Turns taken by one player.
    #[must_use]
    pub fn turns_taken(&self, id: PlayerId) -> u32 {
        self.turns_taken[id.index()]
    }

    /// Full rotations completed.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The game ends when at most one player remains alive, or an alive
    /// player stands at or past the Door.
    #[must_use]
    pub fn is_game_over(&self, roster: &Roster) -> bool {
        let alive = roster.alive_ids();
        if alive.len() <= 1 {
            return true;
        }

        alive
            .iter()
            .any(|&id| roster.player(id).position >= roster.board_squares())
    }

    /// The winner, if the game is over: a Door occupant takes priority
    /// over the last player standing.
    #[must_use]
    pub fn winner(&self, roster: &Roster) -> Option<PlayerId> {
        let alive = roster.alive_ids();

        let door_winner = alive
            .iter()
            .copied()
            .find(|&id| roster.player(id).position >= roster.board_squares());
        if door_winner.is_some() {
            return door_winner;
        }

        if alive.len() == 1 {
            return Some(alive[0]);
        }

        None
    }
}
