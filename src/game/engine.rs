//! The game engine: one struct owning all state, driven by commands.
//!
//! The engine is strictly sequential. Whenever it needs outside input
//! (a die roll, a card choice, a target, a duel verdict) it parks in an
//! `Awaiting` phase and returns; the caller supplies the value through
//! the matching command and the turn continues. Commands sent in the
//! wrong phase are rejected with an error, never applied.
//!
//! Human input and AI policy are interchangeable here: the caller asks
//! `ai::policy` for choices on AI turns and forwards human input
//! otherwise. The engine does not care which it was.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::ai;
use crate::cards::{CardChoice, CardKind, CardOption, CardSet, Deck};
use crate::chaos::{DuelSetup, ThrowOutcome};
use crate::core::{standard_cast, Character, GameConfig, GameRng, PlayerId, Roster};
use crate::effects::{CardResolver, EffectOutcome, TargetRule};
use crate::turn::TurnSequencer;

use super::event::GameEvent;

/// Which external value the engine is suspended on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Awaiting {
    /// A die roll for the current player.
    Roll { player: PlayerId },

    /// An A/B choice on the drawn card.
    CardChoice { player: PlayerId, kind: CardKind },

    /// A target pick (or cancel) by `chooser`.
    Target {
        chooser: PlayerId,
        prompt: String,
        candidates: Vec<PlayerId>,
    },

    /// The Chaos duel's verdict.
    ChaosResult { setup: DuelSetup },

    /// Nothing; the game is over.
    GameOver { winner: Option<PlayerId> },
}

impl Awaiting {
    fn name(&self) -> &'static str {
        match self {
            Awaiting::Roll { .. } => "roll",
            Awaiting::CardChoice { .. } => "card choice",
            Awaiting::Target { .. } => "target selection",
            Awaiting::ChaosResult { .. } => "chaos result",
            Awaiting::GameOver { .. } => "game over",
        }
    }
}

/// Where an in-flight card stands in its resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionPhase {
    /// Waiting for the single target (or the Chaos opponent).
    AwaitingPrimaryTarget,
    /// Jury: waiting for the actor to pick who selects the victim.
    AwaitingSecondarySelector,
    /// Jury: waiting for the selector's victim pick.
    AwaitingSecondaryVictim { selector: PlayerId },
    /// Done; the card is about to be discarded.
    Resolved,
}

/// The card currently being resolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PendingCard {
    actor: PlayerId,
    kind: CardKind,
    choice: Option<CardChoice>,
    phase: ResolutionPhase,
}

/// A command arrived that the current phase cannot accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The engine is suspended on something else.
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },
    /// Die rolls are 1..=6.
    InvalidRoll(u8),
    /// The picked player is not among the legal candidates.
    InvalidTarget(PlayerId),
    /// This selection step cannot be aborted.
    CancelUnavailable,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::WrongPhase { expected, actual } => {
                write!(f, "expected a {expected} command while awaiting {actual}")
            }
            CommandError::InvalidRoll(roll) => write!(f, "invalid die roll {roll}"),
            CommandError::InvalidTarget(id) => write!(f, "{id} is not a legal target"),
            CommandError::CancelUnavailable => {
                write!(f, "this selection step cannot be canceled")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// A full game of The Door.
#[derive(Clone, Debug)]
pub struct DoorGame {
    config: GameConfig,
    roster: Roster,
    deck: Deck,
    cards: CardSet,
    sequencer: TurnSequencer,
    rng: GameRng,
    pending: Option<PendingCard>,
    awaiting: Awaiting,
    history: Vector<GameEvent>,
}

impl DoorGame {
    /// Start a standard 7-player game with `human` at the given roster
    /// slot. The first turn is already started on return.
    #[must_use]
    pub fn new(seed: u64, human: PlayerId) -> Self {
        Self::with_config(GameConfig::default(), standard_cast(), human, seed)
    }

    /// Start a game with a custom configuration and cast.
    #[must_use]
    pub fn with_config(
        config: GameConfig,
        cast: Vec<Character>,
        human: PlayerId,
        seed: u64,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let roster = Roster::new(&config, cast, human);
        let deck = Deck::standard(&mut rng);
        let sequencer = TurnSequencer::new(roster.len(), config.lightning_round_after_turns);

        let mut game = Self {
            roster,
            deck,
            cards: CardSet::standard(),
            sequencer,
            rng,
            pending: None,
            awaiting: Awaiting::GameOver { winner: None },
            history: Vector::new(),
            config,
        };

        let mut events = Vec::new();
        game.start_turn(&mut events);
        game.append_history(&events);
        game
    }

    // === Snapshots ===

    /// The rules constants in force.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The card deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The turn sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &TurnSequencer {
        &self.sequencer
    }

    /// What the engine is currently suspended on.
    #[must_use]
    pub fn awaiting(&self) -> &Awaiting {
        &self.awaiting
    }

    /// Everything that has happened so far.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.awaiting, Awaiting::GameOver { .. })
    }

    /// The player whose turn is in progress, if the game is running.
    /// During card resolution this is the card's actor, whoever is
    /// making the current selection.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match &self.awaiting {
            Awaiting::Roll { player } | Awaiting::CardChoice { player, .. } => Some(*player),
            Awaiting::Target { .. } | Awaiting::ChaosResult { .. } => {
                self.pending.as_ref().map(|p| p.actor)
            }
            Awaiting::GameOver { .. } => None,
        }
    }

    /// Whether a card face can currently be taken. Resurrect is blocked
    /// while nobody is eliminated; dialogs disable it up front.
    #[must_use]
    pub fn option_enabled(&self, kind: CardKind, option: CardOption) -> bool {
        match self.cards.get(kind).choice(option) {
            CardChoice::Resurrect => !self.roster.eliminated_ids().is_empty(),
            _ => true,
        }
    }

    // === Commands ===

    /// Feed the externally-rolled die value for the current player.
    pub fn apply_roll(&mut self, roll: u8) -> Result<Vec<GameEvent>, CommandError> {
        let Awaiting::Roll { player } = self.awaiting else {
            return Err(self.wrong_phase("roll"));
        };
        if !(1..=6).contains(&roll) {
            return Err(CommandError::InvalidRoll(roll));
        }

        let mut events = vec![GameEvent::Rolled { player, roll }];

        // Jail exit happens before movement: the roll is walked from
        // the jail square, not the sentinel.
        let mut start = self.roster.player(player).position;
        if self.roster.player(player).in_jail {
            self.roster.release_from_jail(player);
            start = self.config.jail_square;
            events.push(GameEvent::ReleasedFromJail { player });
        }

        self.roster.move_to(player, start + roll as i8);
        let to = self.roster.player(player).position;
        events.push(GameEvent::Moved {
            player,
            from: start,
            to,
        });

        // Reaching the Door ends the game on the spot, before any card.
        if to >= self.config.board_squares {
            let winner = self.sequencer.winner(&self.roster);
            events.push(GameEvent::GameOver { winner });
            self.awaiting = Awaiting::GameOver { winner };
            self.append_history(&events);
            return Ok(events);
        }

        let draws_card =
            self.config.is_card_square(to) || self.sequencer.is_lightning_round();
        if draws_card {
            match self.deck.draw(&mut self.rng) {
                Some(kind) => {
                    let definition = self.cards.get(kind);
                    events.push(GameEvent::CardDrawn {
                        player,
                        kind,
                        description_a: definition.description_a.clone(),
                        description_b: definition.description_b.clone(),
                    });
                    self.pending = Some(PendingCard {
                        actor: player,
                        kind,
                        choice: None,
                        phase: ResolutionPhase::AwaitingPrimaryTarget,
                    });
                    self.awaiting = Awaiting::CardChoice { player, kind };
                    self.append_history(&events);
                    return Ok(events);
                }
                None => events.push(GameEvent::DeckExhausted),
            }
        }

        self.finish_turn(player, &mut events);
        self.append_history(&events);
        Ok(events)
    }

    /// Commit the current player to a face of the drawn card.
    pub fn choose_option(&mut self, option: CardOption) -> Result<Vec<GameEvent>, CommandError> {
        let Awaiting::CardChoice { player, kind } = self.awaiting else {
            return Err(self.wrong_phase("card choice"));
        };

        let definition = self.cards.get(kind);
        let choice = definition.choice(option);
        let mut events = vec![GameEvent::OptionChosen { player, choice }];

        let pending = self.pending.as_mut().expect("card choice without a pending card");
        pending.choice = Some(choice);
        pending.phase = match choice {
            CardChoice::Jury => ResolutionPhase::AwaitingSecondarySelector,
            _ => ResolutionPhase::AwaitingPrimaryTarget,
        };

        match choice {
            // Chaos needs an opponent before the duel can be cast.
            CardChoice::Can | CardChoice::Ball => {
                let candidates = TargetRule::AliveExcluding(player).candidates(&self.roster);
                self.awaiting = Awaiting::Target {
                    chooser: player,
                    prompt: "Select a player for Chaos showdown".to_string(),
                    candidates,
                };
            }
            _ => {
                let outcome = CardResolver::apply(&mut self.roster, player, choice, None, None);
                if outcome.requires_input {
                    self.awaiting = Awaiting::Target {
                        chooser: player,
                        prompt: outcome.message,
                        candidates: outcome.available_targets,
                    };
                } else {
                    // Blocked up front (resurrect with nobody dead).
                    events.push(GameEvent::EffectRejected {
                        message: outcome.message,
                    });
                    self.discard_pending();
                    self.finish_turn(player, &mut events);
                }
            }
        }

        self.append_history(&events);
        Ok(events)
    }

    /// Supply the pending target pick, or `None` to cancel the card.
    ///
    /// Canceling discards the drawn card to the discard pile and ends
    /// the turn segment; the deck never loses a card.
    pub fn select_target(
        &mut self,
        target: Option<PlayerId>,
    ) -> Result<Vec<GameEvent>, CommandError> {
        let Awaiting::Target { candidates, .. } = &self.awaiting else {
            return Err(self.wrong_phase("target selection"));
        };

        let pending = self
            .pending
            .as_ref()
            .expect("target selection without a pending card");
        let actor = pending.actor;
        let phase = pending.phase;
        let choice = pending.choice.expect("target selection before a card choice");

        let Some(picked) = target else {
            // Jury's victim pick cannot be aborted once the selector is
            // committed; every other selection step can.
            if matches!(phase, ResolutionPhase::AwaitingSecondaryVictim { .. }) {
                return Err(CommandError::CancelUnavailable);
            }
            let mut events = vec![GameEvent::CardCanceled { player: actor }];
            self.discard_pending();
            self.finish_turn(actor, &mut events);
            self.append_history(&events);
            return Ok(events);
        };

        if !candidates.contains(&picked) {
            return Err(CommandError::InvalidTarget(picked));
        }

        let mut events = Vec::new();
        match phase {
            ResolutionPhase::AwaitingPrimaryTarget => match choice {
                CardChoice::Can | CardChoice::Ball => {
                    let setup = DuelSetup::from_choice(&self.roster, actor, picked, choice);
                    events.push(GameEvent::DuelStarted {
                        setup: setup.clone(),
                    });
                    self.awaiting = Awaiting::ChaosResult { setup };
                }
                _ => {
                    let outcome =
                        CardResolver::apply(&mut self.roster, actor, choice, Some(picked), None);
                    self.conclude_effect(actor, outcome, &mut events);
                }
            },
            ResolutionPhase::AwaitingSecondarySelector => {
                let outcome =
                    CardResolver::apply(&mut self.roster, actor, choice, Some(picked), None);
                debug_assert!(outcome.requires_secondary);
                self.pending.as_mut().expect("pending card").phase =
                    ResolutionPhase::AwaitingSecondaryVictim { selector: picked };
                self.awaiting = Awaiting::Target {
                    chooser: outcome
                        .secondary_chooser
                        .expect("jury outcome names its selector"),
                    prompt: outcome.message,
                    candidates: outcome.available_targets,
                };
            }
            ResolutionPhase::AwaitingSecondaryVictim { selector } => {
                let outcome = CardResolver::apply(
                    &mut self.roster,
                    actor,
                    choice,
                    Some(selector),
                    Some(picked),
                );
                self.conclude_effect(actor, outcome, &mut events);
            }
            ResolutionPhase::Resolved => {
                unreachable!("resolved cards leave no pending selection")
            }
        }

        self.append_history(&events);
        Ok(events)
    }

    /// Roll the throw for an AI thrower of the pending duel. The engine
    /// stays suspended; feed the outcome back via `apply_chaos_result`.
    pub fn ai_throw(&mut self) -> Result<ThrowOutcome, CommandError> {
        let Awaiting::ChaosResult { setup } = &self.awaiting else {
            return Err(self.wrong_phase("chaos result"));
        };
        let setup = setup.clone();
        Ok(setup.ai_throw(&self.config.chaos, &mut self.rng))
    }

    /// Resolve the pending duel with the throw's outcome. Exactly one
    /// duelist is eliminated, losing all remaining lives.
    pub fn apply_chaos_result(
        &mut self,
        outcome: ThrowOutcome,
    ) -> Result<Vec<GameEvent>, CommandError> {
        let Awaiting::ChaosResult { setup } = &self.awaiting else {
            return Err(self.wrong_phase("chaos result"));
        };
        let result = setup.resolve(outcome);
        let actor = self
            .pending
            .as_ref()
            .expect("duel without a pending card")
            .actor;

        let lives = self.roster.player(result.loser).lives;
        self.roster.lose_life(result.loser, lives);
        log::debug!("chaos duel: {:?} eliminates {}", result.outcome, result.loser);

        let mut events = vec![
            GameEvent::DuelResolved {
                outcome: result.outcome,
                loser: result.loser,
            },
            GameEvent::PlayerEliminated {
                player: result.loser,
            },
        ];

        if let Some(pending) = self.pending.as_mut() {
            pending.phase = ResolutionPhase::Resolved;
        }
        self.discard_pending();
        self.finish_turn(actor, &mut events);
        self.append_history(&events);
        Ok(events)
    }

    /// Ask the AI policy for the acting player's pending decision and
    /// feed it straight back into the engine. Panics if called while
    /// awaiting a roll or a duel result for a human thrower; those come
    /// from outside.
    pub fn ai_act(&mut self) -> Result<Vec<GameEvent>, CommandError> {
        match self.awaiting.clone() {
            Awaiting::CardChoice { player, kind } => {
                let any_eliminated = !self.roster.eliminated_ids().is_empty();
                let option =
                    ai::choose_card_option(self.roster.player(player), kind, any_eliminated);
                self.choose_option(option)
            }
            Awaiting::Target {
                chooser,
                candidates,
                ..
            } => {
                let picked =
                    ai::choose_target(self.roster.player(chooser), &self.roster, &candidates);
                self.select_target(picked)
            }
            Awaiting::ChaosResult { .. } => {
                let outcome = self.ai_throw()?;
                self.apply_chaos_result(outcome)
            }
            other => Err(CommandError::WrongPhase {
                expected: "an AI-decidable phase",
                actual: other.name(),
            }),
        }
    }

    // === Internals ===

    fn wrong_phase(&self, expected: &'static str) -> CommandError {
        CommandError::WrongPhase {
            expected,
            actual: self.awaiting.name(),
        }
    }

    /// Start turns until a player who is not skipping comes up. A
    /// skipped turn consumes the flag without rolling, drawing, or
    /// counting toward the Lightning Round.
    fn start_turn(&mut self, events: &mut Vec<GameEvent>) {
        loop {
            let Some(player) = self.sequencer.current_player(&self.roster) else {
                events.push(GameEvent::GameOver { winner: None });
                self.awaiting = Awaiting::GameOver { winner: None };
                return;
            };

            if self.roster.player(player).skipping_turn {
                self.roster.clear_skipping_turn(player);
                events.push(GameEvent::TurnSkipped { player });
                self.sequencer.advance(&self.roster);
                continue;
            }

            events.push(GameEvent::TurnStarted { player });
            self.awaiting = Awaiting::Roll { player };
            return;
        }
    }

    /// Close out a turn: count it, check Lightning Round activation and
    /// game over, then hand off to the next player.
    fn finish_turn(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) {
        if self.sequencer.record_turn_taken(&self.roster, player) {
            events.push(GameEvent::LightningRoundActivated);
        }

        if self.sequencer.is_game_over(&self.roster) {
            let winner = self.sequencer.winner(&self.roster);
            events.push(GameEvent::GameOver { winner });
            self.awaiting = Awaiting::GameOver { winner };
        } else {
            self.sequencer.advance(&self.roster);
            self.start_turn(events);
        }
    }

    /// Report a final effect outcome and retire the card.
    fn conclude_effect(
        &mut self,
        actor: PlayerId,
        outcome: EffectOutcome,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some(pending) = self.pending.as_mut() {
            pending.phase = ResolutionPhase::Resolved;
        }

        if outcome.success {
            events.push(GameEvent::EffectApplied {
                message: outcome.message.clone(),
                affected: outcome.affected.to_vec(),
            });
            for &id in &outcome.affected {
                if self.roster.player(id).is_eliminated {
                    events.push(GameEvent::PlayerEliminated { player: id });
                }
            }
        } else {
            events.push(GameEvent::EffectRejected {
                message: outcome.message,
            });
        }

        self.discard_pending();
        self.finish_turn(actor, events);
    }

    /// Return the in-flight card to the discard pile.
    fn discard_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.deck.discard(pending.kind);
        }
    }

    fn append_history(&mut self, events: &[GameEvent]) {
        for event in events {
            self.history.push_back(event.clone());
        }
    }
}
