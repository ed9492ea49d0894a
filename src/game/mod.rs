//! The driving state machine: turn flow, suspension points, and the
//! outbound event stream a presentation layer consumes.

pub mod engine;
pub mod event;

pub use engine::{Awaiting, CommandError, DoorGame, ResolutionPhase};
pub use event::GameEvent;
