//! AI decision policy.
//!
//! Pure functions of the player's character and the visible game state;
//! no randomness, so AI behavior is reproducible and testable. The
//! driving loop calls these where a human would be prompted.

use crate::cards::{CardKind, CardOption};
use crate::core::{AiStrategy, Player, PlayerId, Roster};

/// Pick a card face for an AI player.
///
/// `any_eliminated` gates the resurrect branch: reviving is only worth a
/// card to a balanced character, and only when there is someone to
/// revive.
#[must_use]
pub fn choose_card_option(player: &Player, kind: CardKind, any_eliminated: bool) -> CardOption {
    match kind {
        // Option B is the damage play on both; aggressive takes it.
        CardKind::JudgeJury | CardKind::SummonExile => {
            if player.character.strategy == AiStrategy::Aggressive {
                CardOption::B
            } else {
                CardOption::A
            }
        }
        CardKind::ResurrectReap => {
            if any_eliminated && player.character.strategy == AiStrategy::Balanced {
                CardOption::A
            } else {
                CardOption::B
            }
        }
        // Good aim wants the ball in hand; poor aim hands it over.
        CardKind::Chaos => {
            if player.character.aim_skill > 0.6 {
                CardOption::A
            } else {
                CardOption::B
            }
        }
    }
}

/// Pick a target from `candidates` for an AI player.
///
/// Aggressive characters go for the most lives; everyone else picks the
/// nearest player on the board. Ties resolve to the earliest candidate.
#[must_use]
pub fn choose_target(
    player: &Player,
    roster: &Roster,
    candidates: &[PlayerId],
) -> Option<PlayerId> {
    if candidates.is_empty() {
        return None;
    }

    let best = if player.character.strategy == AiStrategy::Aggressive {
        candidates
            .iter()
            .copied()
            .fold(None, |best: Option<PlayerId>, id| match best {
                Some(current) if roster.player(id).lives <= roster.player(current).lives => best,
                _ => Some(id),
            })
    } else {
        let own_position = player.position;
        candidates
            .iter()
            .copied()
            .fold(None, |best: Option<PlayerId>, id| {
                let distance = (roster.player(id).position - own_position).unsigned_abs();
                match best {
                    Some(current)
                        if (roster.player(current).position - own_position).unsigned_abs()
                            <= distance =>
                    {
                        best
                    }
                    _ => Some(id),
                }
            })
    };

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{standard_cast, GameConfig, Roster};

    fn test_roster() -> Roster {
        Roster::new(&GameConfig::default(), standard_cast(), PlayerId::new(0))
    }

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    #[test]
    fn test_aggressive_takes_option_b() {
        let roster = test_roster();
        // Innis (index 2) is aggressive.
        let innis = roster.player(p(2));
        assert_eq!(
            choose_card_option(innis, CardKind::JudgeJury, false),
            CardOption::B
        );
        assert_eq!(
            choose_card_option(innis, CardKind::SummonExile, false),
            CardOption::B
        );
    }

    #[test]
    fn test_cautious_takes_option_a() {
        let roster = test_roster();
        // Fara (index 1) is cautious.
        let fara = roster.player(p(1));
        assert_eq!(
            choose_card_option(fara, CardKind::JudgeJury, false),
            CardOption::A
        );
        assert_eq!(
            choose_card_option(fara, CardKind::SummonExile, false),
            CardOption::A
        );
    }

    #[test]
    fn test_resurrect_needs_balanced_and_dead() {
        let roster = test_roster();
        let miles = roster.player(p(0)); // balanced
        let innis = roster.player(p(2)); // aggressive

        assert_eq!(
            choose_card_option(miles, CardKind::ResurrectReap, true),
            CardOption::A
        );
        assert_eq!(
            choose_card_option(miles, CardKind::ResurrectReap, false),
            CardOption::B
        );
        assert_eq!(
            choose_card_option(innis, CardKind::ResurrectReap, true),
            CardOption::B
        );
    }

    #[test]
    fn test_chaos_stance_follows_aim() {
        let roster = test_roster();
        // Fara aims at 0.9: keep the ball. Stacy at 0.3: hand it over.
        assert_eq!(
            choose_card_option(roster.player(p(1)), CardKind::Chaos, false),
            CardOption::A
        );
        assert_eq!(
            choose_card_option(roster.player(p(5)), CardKind::Chaos, false),
            CardOption::B
        );
    }

    #[test]
    fn test_aggressive_targets_most_lives() {
        let mut roster = test_roster();
        roster.lose_life(p(1), 2);
        roster.lose_life(p(3), 1);

        let candidates = vec![p(1), p(3), p(4)];
        let innis = roster.player(p(2)).clone();
        assert_eq!(choose_target(&innis, &roster, &candidates), Some(p(4)));
    }

    #[test]
    fn test_aggressive_tie_takes_earliest() {
        let roster = test_roster();
        let candidates = vec![p(4), p(5), p(6)];
        let innis = roster.player(p(2)).clone();
        // Everyone has 3 lives; the first candidate wins the tie.
        assert_eq!(choose_target(&innis, &roster, &candidates), Some(p(4)));
    }

    #[test]
    fn test_positional_targets_nearest() {
        let mut roster = test_roster();
        roster.move_to(p(0), 10);
        roster.move_to(p(2), 4);
        roster.move_to(p(3), 9);
        roster.move_to(p(4), 16);

        let candidates = vec![p(2), p(3), p(4)];
        let miles = roster.player(p(0)).clone();
        assert_eq!(choose_target(&miles, &roster, &candidates), Some(p(3)));
    }

    #[test]
    fn test_no_candidates_no_target() {
        let roster = test_roster();
        let miles = roster.player(p(0)).clone();
        assert_eq!(choose_target(&miles, &roster, &[]), None);
    }
}
