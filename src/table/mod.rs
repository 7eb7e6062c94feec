//! Initial Solitaire table layout.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::SetupOptions;
use crate::pile::Pile;

mod deal;

/// The table as it stands after the initial deal.
///
/// The table owns every pile. The stock is the deck the table was dealt
/// from, holding whatever the tableau did not take.
#[derive(Debug, Clone)]
pub struct Table<R = ChaCha8Rng> {
    /// Tableau piles, in index order.
    tableau: Vec<Pile>,
    /// Foundation piles, one per suit.
    foundations: Vec<Pile>,
    /// Waste pile.
    waste: Pile,
    /// Undealt remainder of the deck.
    stock: Deck<R>,
}

impl Table<ChaCha8Rng> {
    /// Deals a new game from a fresh jokerless deck seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deal pattern needs more
    /// cards than a full deck holds.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_deal::{SetupOptions, Table};
    ///
    /// let table = Table::new_game(&SetupOptions::default(), 42).unwrap();
    /// assert_eq!(table.tableau().len(), 7);
    /// assert_eq!(table.stock().len(), 45);
    /// ```
    pub fn new_game(options: &SetupOptions, seed: u64) -> Result<Self, DealError> {
        let deck = Deck::new(false, ChaCha8Rng::seed_from_u64(seed));
        Self::deal(deck, options)
    }
}

impl<R> Table<R> {
    /// Returns the tableau piles.
    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    /// Returns the foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    /// Returns the waste pile.
    #[must_use]
    pub const fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Returns the stock.
    #[must_use]
    pub const fn stock(&self) -> &Deck<R> {
        &self.stock
    }

    /// Iterates over the top card of each tableau pile, in index order.
    pub fn tableau_tops(&self) -> impl Iterator<Item = Option<Card>> {
        self.tableau.iter().map(|pile| pile.top().copied())
    }

    /// Renders the top card of each tableau pile, one per line, under a
    /// `tableau:` heading.
    #[must_use]
    pub fn tableau_summary(&self) -> String {
        let mut out = String::from("tableau:");
        for top in self.tableau_tops() {
            match top {
                Some(card) => {
                    let _ = write!(out, "\n{card}");
                }
                None => out.push_str("\n(empty)"),
            }
        }
        out
    }
}
