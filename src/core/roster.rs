//! The player roster: canonical player records and their mutators.
//!
//! All players live in one owned collection indexed by `PlayerId`; every
//! other component addresses them through id lookups on the roster, never
//! through shared references. Players are created once at game start and
//! only ever marked eliminated or resurrected in place.
//!
//! Invariants maintained here:
//! - `is_eliminated` iff `lives == 0`
//! - `lives` never exceeds the configured starting total
//! - `position == -1` (the jail sentinel) only while `in_jail`; callers
//!   releasing a player must reposition them in the same step

use serde::{Deserialize, Serialize};

use super::character::Character;
use super::config::GameConfig;
use super::player::{PlayerId, Seat};

/// Board position a jailed player holds until released.
pub const JAIL_POSITION: i8 = -1;

/// A player's full record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub character: Character,
    pub is_ai: bool,
    pub lives: u8,
    /// Board square in `[0, board_squares]`, or `JAIL_POSITION`.
    pub position: i8,
    pub is_eliminated: bool,
    pub in_jail: bool,
    pub skipping_turn: bool,
    /// Portrait seat; the Chaos duel derives distance from this.
    pub seat: Seat,
}

impl Player {
    /// Alive means not eliminated.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.is_eliminated
    }
}

/// Owned collection of all players, with the game's data-mutation API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    starting_lives: u8,
    board_squares: i8,
}

impl Roster {
    /// Build the roster from a cast, marking one member human.
    ///
    /// Panics if the cast is empty or `human` is out of range.
    #[must_use]
    pub fn new(config: &GameConfig, cast: Vec<Character>, human: PlayerId) -> Self {
        assert!(!cast.is_empty(), "Cast must not be empty");
        assert!(human.index() < cast.len(), "Human index out of range");

        let players = cast
            .into_iter()
            .enumerate()
            .map(|(index, character)| Player {
                id: PlayerId::new(index as u8),
                name: character.name.clone(),
                is_ai: index != human.index(),
                lives: config.starting_lives,
                position: 0,
                is_eliminated: false,
                in_jail: false,
                skipping_turn: false,
                seat: Seat::for_roster_index(index),
                character,
            })
            .collect();

        Self {
            players,
            starting_lives: config.starting_lives,
            board_squares: config.board_squares,
        }
    }

    /// Number of players in the roster (alive or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// A roster is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player. Panics on an unknown id: ids come from this
    /// roster, so a miss is a programmer error.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// All players in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Ids of players still in the game, in roster order.
    #[must_use]
    pub fn alive_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| p.id)
            .collect()
    }

    /// Ids of eliminated players, in roster order.
    #[must_use]
    pub fn eliminated_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_eliminated)
            .map(|p| p.id)
            .collect()
    }

    /// The human-controlled player, if any.
    #[must_use]
    pub fn human(&self) -> Option<&Player> {
        self.players.iter().find(|p| !p.is_ai)
    }

    /// Index of the last board square, the Door.
    #[must_use]
    pub fn board_squares(&self) -> i8 {
        self.board_squares
    }

    /// Remove lives, clamping at zero and eliminating at zero.
    pub fn lose_life(&mut self, id: PlayerId, amount: u8) {
        let player = self.player_mut(id);
        player.lives = player.lives.saturating_sub(amount);
        if player.lives == 0 && !player.is_eliminated {
            player.is_eliminated = true;
            log::info!("{} is eliminated", player.name);
        }
    }

    /// Add lives, clamped at the starting total. No-op on an eliminated
    /// player: the dead do not heal.
    pub fn gain_life(&mut self, id: PlayerId, amount: u8) {
        let starting = self.starting_lives;
        let player = self.player_mut(id);
        if !player.is_eliminated {
            player.lives = player.lives.saturating_add(amount).min(starting);
        }
    }

    /// Revive an eliminated player: 1 life, back at the start, jail and
    /// skip flags cleared. No-op on a living player.
    pub fn resurrect(&mut self, id: PlayerId) {
        let player = self.player_mut(id);
        if player.is_eliminated {
            player.is_eliminated = false;
            player.lives = 1;
            player.position = 0;
            player.in_jail = false;
            player.skipping_turn = false;
            log::info!("{} returns to the game", player.name);
        }
    }

    /// Set a player's board position, clamped to `[0, board_squares]`.
    pub fn move_to(&mut self, id: PlayerId, new_position: i8) {
        let board_squares = self.board_squares;
        let player = self.player_mut(id);
        player.position = new_position.clamp(0, board_squares);
    }

    /// Jail a player: sentinel position, jail and skip flags, one life
    /// lost.
    pub fn send_to_jail(&mut self, id: PlayerId) {
        {
            let player = self.player_mut(id);
            player.position = JAIL_POSITION;
            player.in_jail = true;
            player.skipping_turn = true;
        }
        self.lose_life(id, 1);
    }

    /// Clear the jail flag. Does not touch lives or position; the caller
    /// repositions the player (normally to the jail square) immediately.
    pub fn release_from_jail(&mut self, id: PlayerId) {
        self.player_mut(id).in_jail = false;
    }

    /// Clear the skip flag once the skipped turn has been consumed.
    pub fn clear_skipping_turn(&mut self, id: PlayerId) {
        self.player_mut(id).skipping_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::character::standard_cast;

    fn test_roster() -> Roster {
        Roster::new(&GameConfig::default(), standard_cast(), PlayerId::new(0))
    }

    #[test]
    fn test_roster_creation() {
        let roster = test_roster();
        assert_eq!(roster.len(), 7);
        assert_eq!(roster.alive_ids().len(), 7);
        assert_eq!(roster.human().unwrap().id, PlayerId::new(0));

        for player in roster.players() {
            assert_eq!(player.lives, 3);
            assert_eq!(player.position, 0);
            assert!(!player.is_eliminated);
            assert!(!player.in_jail);
            assert!(!player.skipping_turn);
        }
        assert!(roster.player(PlayerId::new(1)).is_ai);
    }

    #[test]
    fn test_lose_life_and_eliminate() {
        let mut roster = test_roster();
        let id = PlayerId::new(2);

        roster.lose_life(id, 1);
        assert_eq!(roster.player(id).lives, 2);
        assert!(!roster.player(id).is_eliminated);

        roster.lose_life(id, 2);
        assert_eq!(roster.player(id).lives, 0);
        assert!(roster.player(id).is_eliminated);

        // Already at zero: stays clamped, no underflow.
        roster.lose_life(id, 5);
        assert_eq!(roster.player(id).lives, 0);
    }

    #[test]
    fn test_elimination_invariant() {
        let mut roster = test_roster();
        roster.lose_life(PlayerId::new(3), 3);
        roster.lose_life(PlayerId::new(4), 1);

        for player in roster.players() {
            assert_eq!(player.lives == 0, player.is_eliminated);
        }
    }

    #[test]
    fn test_gain_life_clamps_at_starting() {
        let mut roster = test_roster();
        let id = PlayerId::new(1);

        roster.lose_life(id, 1);
        roster.gain_life(id, 5);
        assert_eq!(roster.player(id).lives, 3);
    }

    #[test]
    fn test_gain_life_noop_when_eliminated() {
        let mut roster = test_roster();
        let id = PlayerId::new(1);

        roster.lose_life(id, 3);
        roster.gain_life(id, 1);
        assert_eq!(roster.player(id).lives, 0);
        assert!(roster.player(id).is_eliminated);
    }

    #[test]
    fn test_resurrect() {
        let mut roster = test_roster();
        let id = PlayerId::new(5);

        roster.move_to(id, 12);
        roster.send_to_jail(id);
        roster.lose_life(id, 2);
        assert!(roster.player(id).is_eliminated);

        roster.resurrect(id);
        let player = roster.player(id);
        assert!(!player.is_eliminated);
        assert_eq!(player.lives, 1);
        assert_eq!(player.position, 0);
        assert!(!player.in_jail);
        assert!(!player.skipping_turn);
    }

    #[test]
    fn test_resurrect_noop_on_living() {
        let mut roster = test_roster();
        let id = PlayerId::new(5);

        roster.move_to(id, 12);
        roster.resurrect(id);
        assert_eq!(roster.player(id).lives, 3);
        assert_eq!(roster.player(id).position, 12);
    }

    #[test]
    fn test_move_clamps_to_board() {
        let mut roster = test_roster();
        let id = PlayerId::new(0);

        roster.move_to(id, 25);
        assert_eq!(roster.player(id).position, 20);

        roster.move_to(id, -5);
        assert_eq!(roster.player(id).position, 0);
    }

    #[test]
    fn test_jail_round_trip() {
        let mut roster = test_roster();
        let id = PlayerId::new(6);

        roster.move_to(id, 8);
        roster.send_to_jail(id);
        let player = roster.player(id);
        assert_eq!(player.position, JAIL_POSITION);
        assert!(player.in_jail);
        assert!(player.skipping_turn);
        assert_eq!(player.lives, 2);

        roster.release_from_jail(id);
        roster.move_to(id, 10);
        let player = roster.player(id);
        assert!(!player.in_jail);
        assert_eq!(player.position, 10);
        // Release does not refund the life.
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_player_serialization() {
        let roster = test_roster();
        let json = serde_json::to_string(roster.player(PlayerId::new(0))).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(*roster.player(PlayerId::new(0)), deserialized);
    }
}
