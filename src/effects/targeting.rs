//! Target selection rules.
//!
//! Every card effect targets players through one of two rules: the
//! living (excluding someone, usually the actor) or the eliminated.
//! Candidate lists are computed fresh from the roster so an elimination
//! mid-resolution is reflected immediately.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};

/// Who an in-flight selection may legally pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRule {
    /// Alive players other than the excluded one.
    AliveExcluding(PlayerId),
    /// Eliminated players other than the excluded one.
    EliminatedExcluding(PlayerId),
}

impl TargetRule {
    /// All legal candidates under this rule, in roster order.
    #[must_use]
    pub fn candidates(&self, roster: &Roster) -> Vec<PlayerId> {
        match *self {
            TargetRule::AliveExcluding(excluded) => roster
                .alive_ids()
                .into_iter()
                .filter(|&id| id != excluded)
                .collect(),
            TargetRule::EliminatedExcluding(excluded) => roster
                .eliminated_ids()
                .into_iter()
                .filter(|&id| id != excluded)
                .collect(),
        }
    }

    /// Whether `id` is a legal pick under this rule.
    #[must_use]
    pub fn permits(&self, roster: &Roster, id: PlayerId) -> bool {
        self.candidates(roster).contains(&id)
    }
}
