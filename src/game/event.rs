//! Outbound game events.
//!
//! Every engine command returns the events it produced, and the same
//! events are appended to the game's history. The presentation layer
//! renders from these; the engine never calls out.

use serde::{Deserialize, Serialize};

use crate::cards::{CardChoice, CardKind};
use crate::chaos::{DuelSetup, ThrowOutcome};
use crate::core::PlayerId;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new turn began for `player`.
    TurnStarted { player: PlayerId },

    /// `player` sat out their turn (jail) without rolling.
    TurnSkipped { player: PlayerId },

    /// The die came up `roll` for `player`.
    Rolled { player: PlayerId, roll: u8 },

    /// `player` left jail and re-enters from the jail square.
    ReleasedFromJail { player: PlayerId },

    /// `player` moved along the board.
    Moved { player: PlayerId, from: i8, to: i8 },

    /// `player` drew a card; both option texts ride along for display.
    CardDrawn {
        player: PlayerId,
        kind: CardKind,
        description_a: String,
        description_b: String,
    },

    /// A draw was due but both piles were empty.
    DeckExhausted,

    /// `player` committed to a card face.
    OptionChosen { player: PlayerId, choice: CardChoice },

    /// A card effect mutated state.
    EffectApplied {
        message: String,
        affected: Vec<PlayerId>,
    },

    /// A card effect was blocked before doing anything.
    EffectRejected { message: String },

    /// `player` canceled target selection; the card is discarded.
    CardCanceled { player: PlayerId },

    /// A Chaos duel is on; the presentation runs it from this setup.
    DuelStarted { setup: DuelSetup },

    /// The duel came back with its verdict.
    DuelResolved {
        outcome: ThrowOutcome,
        loser: PlayerId,
    },

    /// `player` dropped to zero lives.
    PlayerEliminated { player: PlayerId },

    /// From now on every turn draws a card.
    LightningRoundActivated,

    /// The game ended. `winner` is `None` only if nobody survived.
    GameOver { winner: Option<PlayerId> },
}
