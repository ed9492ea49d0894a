//! Card system: the four card definitions and the deck lifecycle.
//!
//! ## Key Types
//!
//! - `CardKind`: The four kinds of card in the deck
//! - `CardChoice`: The eight concrete choices across all cards
//! - `CardDefinition` / `CardSet`: Static card data and lookup
//! - `Deck`: Draw and discard piles over the fixed 22-card multiset

pub mod deck;
pub mod definition;

pub use deck::{Deck, CARD_DISTRIBUTION, DECK_SIZE};
pub use definition::{CardChoice, CardDefinition, CardKind, CardOption, CardSet};
