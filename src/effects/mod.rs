//! Card effect system.
//!
//! - `CardResolver`: Executes card choices with the two-phase contract
//! - `EffectOutcome`: What a resolution call returns
//! - `TargetRule`: Who an in-flight selection may legally pick
//!
//! ## Design
//!
//! Effects are data-in/data-out: the resolver takes ids and returns an
//! outcome value, mutating only the roster. Multi-step selection is
//! sequenced by the caller (the game loop keeps an explicit resolution
//! state machine per in-flight card); the resolver itself stays
//! stateless and validates every call.

mod outcome;
mod resolver;
mod targeting;

pub use outcome::EffectOutcome;
pub use resolver::CardResolver;
pub use targeting::TargetRule;
