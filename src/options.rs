//! Table setup options.

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles (one per suit).
pub const FOUNDATION_PILES: usize = 4;

/// Advisory capacity of each foundation pile.
pub const FOUNDATION_CAPACITY: usize = 13;

/// How many cards each tableau pile receives during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealPattern {
    /// Every tableau pile receives exactly one card.
    #[default]
    OnePerPile,
    /// Tableau pile `i` receives `i + 1` cards, dealt row by row as in Klondike.
    Classic,
}

impl DealPattern {
    /// Number of cards dealt onto the tableau pile at `index`.
    #[must_use]
    pub const fn cards_for_pile(self, index: usize) -> usize {
        match self {
            Self::OnePerPile => 1,
            Self::Classic => index + 1,
        }
    }

    /// Total number of cards dealt across `piles` tableau piles.
    ///
    /// # Example
    ///
    /// ```
    /// use solitaire_deal::DealPattern;
    ///
    /// assert_eq!(DealPattern::OnePerPile.total_cards(7), 7);
    /// assert_eq!(DealPattern::Classic.total_cards(7), 28);
    /// ```
    #[must_use]
    pub const fn total_cards(self, piles: usize) -> usize {
        match self {
            Self::OnePerPile => piles,
            Self::Classic => piles * (piles + 1) / 2,
        }
    }
}

/// Configuration options for setting up a table.
///
/// ```
/// use solitaire_deal::{DealPattern, SetupOptions};
///
/// let options = SetupOptions::default().with_deal(DealPattern::Classic);
/// assert_eq!(options.deal, DealPattern::Classic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetupOptions {
    /// Tableau deal pattern.
    pub deal: DealPattern,
}

impl SetupOptions {
    /// Sets the tableau deal pattern.
    #[must_use]
    pub const fn with_deal(mut self, deal: DealPattern) -> Self {
        self.deal = deal;
        self
    }
}
