//! The shuffled deck and its stack-style access.

use alloc::vec::Vec;
use core::slice;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, JOKER_COUNT, RANKS_PER_SUIT, SUITS};
use crate::error::{DeckError, StackError};
use crate::rng::IndexSource;

/// An ordered deck of cards.
///
/// Index 0 of [`Deck::cards`] is the bottom of the deck and the last card is
/// the top. The deck owns its random source, which decides where
/// [`Deck::insert`] places each card.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Builds a shuffled deck from a `ChaCha8` generator seeded with `seed`.
    ///
    /// The same seed always produces the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_deal::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::with_seed(false, 42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn with_seed(include_jokers: bool, seed: u64) -> Self {
        Self::new(include_jokers, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: IndexSource> Deck<R> {
    /// Builds a full deck, shuffling it as it is built.
    ///
    /// Cards are enumerated suit by suit (Spades, Hearts, Clubs, Diamonds) and
    /// rank by rank (Ace to King), and each one goes through [`Deck::insert`].
    /// With `include_jokers`, two jokers are inserted the same way.
    #[must_use]
    pub fn new(include_jokers: bool, rng: R) -> Self {
        let capacity = if include_jokers {
            DECK_SIZE + JOKER_COUNT
        } else {
            DECK_SIZE
        };
        let mut deck = Self {
            cards: Vec::with_capacity(capacity),
            rng,
        };

        for suit in SUITS {
            for rank in 1..=RANKS_PER_SUIT {
                deck.insert(Card::from_valid_parts(rank, suit));
            }
        }

        if include_jokers {
            for _ in 0..JOKER_COUNT {
                deck.insert(Card::joker());
            }
        }

        tracing::debug!(cards = deck.len(), include_jokers, "built deck");
        deck
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty(rng: R) -> Self {
        Self {
            cards: Vec::new(),
            rng,
        }
    }

    /// Creates a deck holding `cards` in bottom-to-top order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a non-joker card appears more
    /// than once.
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I, rng: R) -> Result<Self, DeckError> {
        let cards: Vec<Card> = cards.into_iter().collect();
        let mut seen = HashSet::with_capacity(cards.len());

        for card in cards.iter().filter(|card| !card.is_joker()) {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards, rng })
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyCollection`] if the deck is empty.
    pub fn peek(&self) -> Result<Card, StackError> {
        self.cards.last().copied().ok_or(StackError::EmptyCollection)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyCollection`] if the deck is empty.
    pub fn pop(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::EmptyCollection)
    }

    /// Places a card on top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Inserts a card at a uniformly random position.
    ///
    /// The position is drawn from `0..=len`, so the card may become the new
    /// bottom, the new top, or land anywhere between. Inserting every card of a
    /// deck this way yields a uniformly random permutation.
    pub fn insert(&mut self, card: Card) {
        let position = self.rng.index_up_to(self.cards.len());
        self.cards.insert(position, card);
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards from bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the deck holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl<'a, R> IntoIterator for &'a Deck<R> {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
