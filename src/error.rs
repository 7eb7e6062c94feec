//! Error types for deck and table operations.

use thiserror::Error;

use crate::card::{Card, Suit};

/// Errors raised by stack-style access to a deck or pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The deck or pile holds no cards.
    #[error("collection is empty")]
    EmptyCollection,
}

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank and suit do not describe a valid card or joker.
    #[error("invalid card state: rank {rank} with suit {suit}")]
    InvalidCardState {
        /// Rejected rank.
        rank: u8,
        /// Rejected suit.
        suit: Suit,
    },
}

/// Errors that can occur when building a deck from existing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A non-joker card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing the initial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot supply every card the deal pattern needs.
    #[error("not enough cards in the deck: need {needed}, have {available}")]
    NotEnoughCards {
        /// Cards the deal pattern requires.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}
