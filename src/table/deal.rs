use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::DealError;
use crate::options::{
    DealPattern, FOUNDATION_CAPACITY, FOUNDATION_PILES, SetupOptions, TABLEAU_PILES,
};
use crate::pile::Pile;
use crate::rng::IndexSource;

use super::Table;

impl<R: IndexSource> Table<R> {
    /// Deals the initial table from `deck`.
    ///
    /// Foundations and the waste pile start empty. Tableau piles are allocated
    /// with capacity hints 1 through 7 and filled from the top of the deck
    /// according to [`SetupOptions::deal`]. Whatever is left in the deck
    /// becomes the stock.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is too small for the
    /// deal pattern. No cards are moved in that case.
    pub fn deal(mut deck: Deck<R>, options: &SetupOptions) -> Result<Self, DealError> {
        let needed = options.deal.total_cards(TABLEAU_PILES);
        let available = deck.len();
        if available < needed {
            tracing::warn!(needed, available, "deck too small for tableau deal");
            return Err(DealError::NotEnoughCards { needed, available });
        }

        let foundations = (0..FOUNDATION_PILES)
            .map(|_| Pile::with_capacity_hint(FOUNDATION_CAPACITY))
            .collect();
        let mut tableau: Vec<Pile> = (0..TABLEAU_PILES)
            .map(|index| Pile::with_capacity_hint(index + 1))
            .collect();

        let rows = (0..TABLEAU_PILES)
            .map(|index| options.deal.cards_for_pile(index))
            .max()
            .unwrap_or(0);

        for row in 0..rows {
            for (index, pile) in tableau.iter_mut().enumerate() {
                if row >= options.deal.cards_for_pile(index) {
                    continue;
                }
                let card = deck
                    .pop()
                    .map_err(|_| DealError::NotEnoughCards { needed, available })?;
                pile.push(card);
            }
        }

        tracing::debug!(
            dealt = needed,
            stock = deck.len(),
            classic = matches!(options.deal, DealPattern::Classic),
            "dealt table"
        );

        Ok(Self {
            tableau,
            foundations,
            waste: Pile::new(),
            stock: deck,
        })
    }
}
