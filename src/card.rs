//! Card types and deck constants.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// [`Suit::None`] is the sentinel carried only by jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// No suit (jokers only).
    None,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

/// The four real suits, in deck enumeration order.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

/// Number of ranks in each suit (Ace through King).
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Number of jokers added to a deck built with jokers.
pub const JOKER_COUNT: usize = 2;

/// Rank reserved for jokers.
pub const JOKER_RANK: u8 = 0;

impl Suit {
    /// Returns the suit name with only its first letter capitalized.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are immutable once built. A joker always has rank 0 and
/// [`Suit::None`]; every other card has a rank in `1..=13` and a real suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card, rejecting malformed rank and suit combinations.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCardState`] if the rank is above 13, if a
    /// joker rank is paired with a real suit, or if a nonzero rank is paired
    /// with [`Suit::None`].
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_deal::{Card, Suit};
    ///
    /// let ace = Card::new(1, Suit::Spades).unwrap();
    /// assert_eq!(ace.to_string(), "A of Spades");
    /// assert!(Card::new(0, Suit::Hearts).is_err());
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        let valid = match (rank, suit) {
            (JOKER_RANK, Suit::None) => true,
            (JOKER_RANK, _) | (_, Suit::None) => false,
            _ => rank <= RANKS_PER_SUIT,
        };

        if valid {
            Ok(Self { rank, suit })
        } else {
            Err(CardError::InvalidCardState { rank, suit })
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            rank: JOKER_RANK,
            suit: Suit::None,
        }
    }

    /// Builds a card from parts the caller has already checked.
    pub(crate) const fn from_valid_parts(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The rank of the card (0 = Joker, 1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER_RANK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JOKER_RANK => return f.write_str("Joker"),
            1 => f.write_str("A")?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, " of {}", self.suit)
    }
}
