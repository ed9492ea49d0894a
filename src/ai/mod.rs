//! Deterministic decision heuristics for AI-controlled players.

pub mod policy;

pub use policy::{choose_card_option, choose_target};
