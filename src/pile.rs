//! Last-in, first-out card piles.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::StackError;

/// A pile of cards on the table.
///
/// The last card of [`Pile::cards`] is the top. The capacity hint records how
/// many cards the pile is expected to hold; it is advisory and never enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    capacity_hint: usize,
}

impl Pile {
    /// Creates an empty pile with no capacity hint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            capacity_hint: 0,
        }
    }

    /// Creates an empty pile expected to hold about `hint` cards.
    #[must_use]
    pub fn with_capacity_hint(hint: usize) -> Self {
        Self {
            cards: Vec::with_capacity(hint),
            capacity_hint: hint,
        }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyCollection`] if the pile is empty.
    pub fn pop(&mut self) -> Result<Card, StackError> {
        self.cards.pop().ok_or(StackError::EmptyCollection)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::EmptyCollection`] if the pile is empty.
    pub fn peek(&self) -> Result<Card, StackError> {
        self.cards.last().copied().ok_or(StackError::EmptyCollection)
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The advisory number of cards this pile was allocated for.
    #[must_use]
    pub const fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }
}
