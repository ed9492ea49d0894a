//! Card effect resolution.
//!
//! Every choice follows the same two-phase contract: invoked without a
//! target it returns `requires_input` plus the legal candidates; invoked
//! with one it applies the mutation and reports what changed. Jury adds
//! a third call for the victim. Intermediate calls are read-only; only
//! the final call of a resolution mutates the roster.
//!
//! Elimination is checked inline in every life-affecting arm (the roster
//! clamps lives at zero and flips the eliminated flag), never deferred.

use crate::cards::CardChoice;
use crate::core::{PlayerId, Roster};

use super::outcome::EffectOutcome;
use super::targeting::TargetRule;

/// Resolves card choices against the roster.
pub struct CardResolver;

impl CardResolver {
    /// Execute a card choice for `actor`.
    ///
    /// `primary` is the target (or, for Jury, the selector); `secondary`
    /// is Jury's victim. Omitted arguments produce selection prompts per
    /// the two-phase contract.
    pub fn apply(
        roster: &mut Roster,
        actor: PlayerId,
        choice: CardChoice,
        primary: Option<PlayerId>,
        secondary: Option<PlayerId>,
    ) -> EffectOutcome {
        match choice {
            CardChoice::Judge => Self::judge(roster, actor, primary),
            CardChoice::Jury => Self::jury(roster, actor, primary, secondary),
            CardChoice::Summon => Self::summon(roster, actor, primary),
            CardChoice::Exile => Self::exile(roster, actor, primary),
            CardChoice::Resurrect => Self::resurrect(roster, actor, primary),
            CardChoice::Reap => Self::reap(roster, actor, primary),
            // The duel is run by the caller; this is only the hand-off.
            CardChoice::Can | CardChoice::Ball => {
                EffectOutcome::duel_pending("Chaos mini-game initiated")
            }
        }
    }

    fn judge(roster: &mut Roster, actor: PlayerId, target: Option<PlayerId>) -> EffectOutcome {
        let Some(target) = target else {
            return EffectOutcome::needs_target(
                "Select a player to lose 1 life",
                TargetRule::AliveExcluding(actor).candidates(roster),
            );
        };

        if roster.player(target).is_eliminated {
            return EffectOutcome::failure("Invalid target");
        }

        roster.lose_life(target, 1);

        let actor_name = &roster.player(actor).name;
        let victim = roster.player(target);
        let message = if victim.is_eliminated {
            format!(
                "{actor_name} judged {0}! {0} lost their last life and is eliminated!",
                victim.name
            )
        } else {
            format!(
                "{actor_name} judged {0}! {0} lost 1 life ({1} remaining).",
                victim.name, victim.lives
            )
        };
        EffectOutcome::applied(message, [target])
    }

    fn jury(
        roster: &mut Roster,
        actor: PlayerId,
        selector: Option<PlayerId>,
        victim: Option<PlayerId>,
    ) -> EffectOutcome {
        // Phase one: the actor picks who will choose the victim.
        let Some(selector) = selector else {
            return EffectOutcome::needs_target(
                "Choose a selector (they will pick the victim)",
                TargetRule::AliveExcluding(actor).candidates(roster),
            );
        };

        if roster.player(selector).is_eliminated {
            return EffectOutcome::failure("Invalid selector");
        }

        // Phase two: the selector picks the victim. The actor is a
        // legal victim; only the selector is excluded.
        let Some(victim) = victim else {
            let selector_name = &roster.player(selector).name;
            return EffectOutcome::needs_secondary(
                format!("{selector_name} must choose a victim (they will lose 2 lives)"),
                selector,
                TargetRule::AliveExcluding(selector).candidates(roster),
            );
        };

        if roster.player(victim).is_eliminated {
            return EffectOutcome::failure("Invalid victim");
        }

        roster.lose_life(victim, 2);

        let actor_name = roster.player(actor).name.clone();
        let selector_name = roster.player(selector).name.clone();
        let target = roster.player(victim);
        let message = if target.is_eliminated {
            format!(
                "{actor_name} summoned the Jury! {selector_name} chose {0} who lost their last life and is eliminated!",
                target.name
            )
        } else {
            format!(
                "{actor_name} summoned the Jury! {selector_name} chose {0} who lost 2 lives ({1} remaining).",
                target.name, target.lives
            )
        };
        EffectOutcome::applied(message, [victim])
    }

    fn summon(roster: &mut Roster, actor: PlayerId, target: Option<PlayerId>) -> EffectOutcome {
        let Some(target) = target else {
            return EffectOutcome::needs_target(
                "Select a player to summon to your position",
                TargetRule::AliveExcluding(actor).candidates(roster),
            );
        };

        if roster.player(target).is_eliminated {
            return EffectOutcome::failure("Invalid target");
        }

        let destination = roster.player(actor).position;
        let old_position = roster.player(target).position;
        roster.move_to(target, destination);

        let actor_name = &roster.player(actor).name;
        let target_name = &roster.player(target).name;
        EffectOutcome::applied(
            format!(
                "{actor_name} summoned {target_name} from square {old_position} to {destination}!"
            ),
            [target],
        )
    }

    fn exile(roster: &mut Roster, actor: PlayerId, target: Option<PlayerId>) -> EffectOutcome {
        let Some(target) = target else {
            return EffectOutcome::needs_target(
                "Select a player to exile to Jail",
                TargetRule::AliveExcluding(actor).candidates(roster),
            );
        };

        if roster.player(target).is_eliminated {
            return EffectOutcome::failure("Invalid target");
        }

        roster.send_to_jail(target);

        let actor_name = &roster.player(actor).name;
        let victim = roster.player(target);
        let message = if victim.is_eliminated {
            format!(
                "{actor_name} exiled {0} to Jail! {0} lost their last life and is eliminated!",
                victim.name
            )
        } else {
            format!(
                "{actor_name} exiled {0} to Jail! Lost 1 life ({1} remaining) and will skip next turn.",
                victim.name, victim.lives
            )
        };
        EffectOutcome::applied(message, [target])
    }

    fn resurrect(roster: &mut Roster, actor: PlayerId, target: Option<PlayerId>) -> EffectOutcome {
        let dead = TargetRule::EliminatedExcluding(actor).candidates(roster);
        if dead.is_empty() {
            return EffectOutcome::failure("No dead players to resurrect");
        }

        let Some(target) = target else {
            return EffectOutcome::needs_target("Select a dead player to resurrect", dead);
        };

        if !roster.player(target).is_eliminated {
            return EffectOutcome::failure("Target is not dead");
        }

        roster.resurrect(target);

        let actor_name = &roster.player(actor).name;
        let target_name = &roster.player(target).name;
        EffectOutcome::applied(
            format!("{actor_name} resurrected {target_name}! They return with 1 life at the start."),
            [target],
        )
    }

    fn reap(roster: &mut Roster, actor: PlayerId, target: Option<PlayerId>) -> EffectOutcome {
        let Some(target) = target else {
            return EffectOutcome::needs_target(
                "Select a player to reap (instant death)",
                TargetRule::AliveExcluding(actor).candidates(roster),
            );
        };

        if roster.player(target).is_eliminated {
            return EffectOutcome::failure("Invalid target");
        }

        // Instant death: drain whatever lives remain.
        let lives = roster.player(target).lives;
        roster.lose_life(target, lives);

        let actor_name = &roster.player(actor).name;
        let target_name = &roster.player(target).name;
        EffectOutcome::applied(
            format!("{actor_name} reaped {target_name}! {target_name} is instantly eliminated!"),
            [target],
        )
    }
}
