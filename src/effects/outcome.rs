//! The value a card-effect call returns.
//!
//! Outcomes are transient: they either report an applied mutation, ask
//! the caller to supply a target (phase one of the two-phase contract),
//! or reject invalid input with a message. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Result of invoking a card effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectOutcome {
    /// True once the effect has mutated state (or, for Chaos, once the
    /// duel hand-off is initiated).
    pub success: bool,

    /// Human-readable description for the presentation layer.
    pub message: String,

    /// Players whose records changed. Empty until the final phase.
    pub affected: SmallVec<[PlayerId; 2]>,

    /// The caller must supply a target before the effect can proceed.
    pub requires_input: bool,

    /// Legal targets for the pending selection.
    pub available_targets: Vec<PlayerId>,

    /// A second selection round is needed (Jury's victim pick).
    pub requires_secondary: bool,

    /// Who makes the secondary selection (Jury's selector).
    pub secondary_chooser: Option<PlayerId>,
}

impl EffectOutcome {
    /// Rejected input: nothing mutated.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            affected: SmallVec::new(),
            requires_input: false,
            available_targets: Vec::new(),
            requires_secondary: false,
            secondary_chooser: None,
        }
    }

    /// Phase one: a target must be chosen from `targets`.
    #[must_use]
    pub fn needs_target(message: impl Into<String>, targets: Vec<PlayerId>) -> Self {
        Self {
            requires_input: true,
            available_targets: targets,
            ..Self::failure(message)
        }
    }

    /// Jury's second phase: `chooser` must pick from `targets`.
    #[must_use]
    pub fn needs_secondary(
        message: impl Into<String>,
        chooser: PlayerId,
        targets: Vec<PlayerId>,
    ) -> Self {
        Self {
            requires_secondary: true,
            secondary_chooser: Some(chooser),
            ..Self::needs_target(message, targets)
        }
    }

    /// The effect mutated state.
    #[must_use]
    pub fn applied(
        message: impl Into<String>,
        affected: impl IntoIterator<Item = PlayerId>,
    ) -> Self {
        Self {
            success: true,
            affected: affected.into_iter().collect(),
            ..Self::failure(message)
        }
    }

    /// Chaos hand-off marker: successful, but the duel must run before
    /// anyone is affected.
    #[must_use]
    pub fn duel_pending(message: impl Into<String>) -> Self {
        Self {
            success: true,
            requires_input: true,
            ..Self::failure(message)
        }
    }
}
