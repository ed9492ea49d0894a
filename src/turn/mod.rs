//! Turn sequencing: whose turn it is, turn counting, Lightning Round
//! activation, and game-over detection.

pub mod sequencer;

pub use sequencer::TurnSequencer;
