//! The card deck: draw pile, discard pile, reshuffle lifecycle.
//!
//! The deck is a fixed multiset of 22 cards partitioned between the two
//! piles. Cards are never created or destroyed after `standard()`; when
//! the draw pile runs dry the discard pile is reshuffled into it.

use serde::{Deserialize, Serialize};

use super::definition::CardKind;
use crate::core::GameRng;

/// How many of each kind go into a fresh deck.
pub const CARD_DISTRIBUTION: [(CardKind, usize); 4] = [
    (CardKind::JudgeJury, 6),
    (CardKind::SummonExile, 6),
    (CardKind::ResurrectReap, 6),
    (CardKind::Chaos, 4),
];

/// Total cards in a fresh deck.
pub const DECK_SIZE: usize = 22;

/// Draw and discard piles over the fixed card multiset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Draw pile; the top of the pile is the end of the vec.
    draw_pile: Vec<CardKind>,
    discard_pile: Vec<CardKind>,
}

impl Deck {
    /// Build and shuffle a fresh deck from the standard distribution.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut deck = Self {
            draw_pile: Self::build_draw_pile(),
            discard_pile: Vec::new(),
        };
        rng.shuffle(&mut deck.draw_pile);
        deck
    }

    fn build_draw_pile() -> Vec<CardKind> {
        let mut pile = Vec::with_capacity(DECK_SIZE);
        for (kind, count) in CARD_DISTRIBUTION {
            pile.extend(std::iter::repeat(kind).take(count));
        }
        pile
    }

    /// Draw the top card, reshuffling the discard pile into the draw
    /// pile if it is empty. Returns `None` only when both piles are
    /// empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<CardKind> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_pile(rng);
        }
        self.draw_pile.pop()
    }

    fn reshuffle_discard_pile(&mut self, rng: &mut GameRng) {
        if self.discard_pile.is_empty() {
            return;
        }

        log::debug!(
            "reshuffling {} discarded cards into the draw pile",
            self.discard_pile.len()
        );
        self.draw_pile.append(&mut self.discard_pile);
        rng.shuffle(&mut self.draw_pile);
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, kind: CardKind) {
        self.discard_pile.push(kind);
    }

    /// Rebuild the full multiset from the distribution, reshuffle, and
    /// clear the discard pile.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.draw_pile = Self::build_draw_pile();
        self.discard_pile.clear();
        rng.shuffle(&mut self.draw_pile);
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(deck_cards: &[CardKind]) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for kind in deck_cards {
            let slot = CardKind::all()
                .iter()
                .position(|k| k == kind)
                .unwrap();
            counts[slot] += 1;
        }
        counts
    }

    #[test]
    fn test_standard_deck_distribution() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(deck.total(), DECK_SIZE);
        assert_eq!(counts(&deck.draw_pile), [6, 6, 6, 4]);
    }

    #[test]
    fn test_draw_and_discard_conserve_cards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        for _ in 0..10 {
            let card = deck.draw(&mut rng).unwrap();
            deck.discard(card);
            assert_eq!(deck.total(), DECK_SIZE);
        }
    }

    #[test]
    fn test_reshuffle_on_empty_draw_pile() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        // Exhaust the draw pile, discarding everything.
        for _ in 0..DECK_SIZE {
            let card = deck.draw(&mut rng).unwrap();
            deck.discard(card);
        }
        assert_eq!(deck.remaining(), 0);

        // Next draw reshuffles the discard pile back in.
        let card = deck.draw(&mut rng);
        assert!(card.is_some());
        assert_eq!(deck.total(), DECK_SIZE - 1);
    }

    #[test]
    fn test_exhausted_deck_returns_none() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        // Draw everything without discarding: all cards "in flight".
        for _ in 0..DECK_SIZE {
            assert!(deck.draw(&mut rng).is_some());
        }

        assert!(deck.draw(&mut rng).is_none());
        assert_eq!(deck.total(), 0);
    }

    #[test]
    fn test_reset_rebuilds_full_deck() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard(&mut rng);

        for _ in 0..5 {
            let card = deck.draw(&mut rng).unwrap();
            deck.discard(card);
        }
        let _ = deck.draw(&mut rng);

        deck.reset(&mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(deck.total(), DECK_SIZE);
        assert_eq!(counts(&deck.draw_pile), [6, 6, 6, 4]);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        let mut deck1 = Deck::standard(&mut rng1);
        let mut deck2 = Deck::standard(&mut rng2);

        for _ in 0..DECK_SIZE {
            assert_eq!(deck1.draw(&mut rng1), deck2.draw(&mut rng2));
        }
    }
}
