//! Random index sources used by the deck shuffle.

use alloc::vec::Vec;

use rand::{Rng, RngCore};

/// A source of uniformly distributed insertion positions.
///
/// The deck owns its source and draws one index per inserted card. Any
/// [`RngCore`] works as a source; [`ScriptedIndices`] replays fixed draws.
pub trait IndexSource {
    /// Returns an index drawn uniformly from the closed range `0..=max`.
    fn index_up_to(&mut self, max: usize) -> usize;
}

impl<R: RngCore> IndexSource for R {
    fn index_up_to(&mut self, max: usize) -> usize {
        self.random_range(0..=max)
    }
}

/// An index source that replays a fixed list of draws.
///
/// A draw larger than the requested maximum is clamped to it. Once the script
/// runs out every draw returns the maximum, so further insertions land on top.
///
/// # Example
///
/// ```
/// use solitaire_deal::{IndexSource, ScriptedIndices};
///
/// let mut source = ScriptedIndices::new([0, 5]);
/// assert_eq!(source.index_up_to(3), 0);
/// assert_eq!(source.index_up_to(3), 3);
/// assert_eq!(source.index_up_to(7), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedIndices {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedIndices {
    /// Creates a source that returns `draws` in order.
    #[must_use]
    pub fn new<I: IntoIterator<Item = usize>>(draws: I) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len().saturating_sub(self.next)
    }
}

impl IndexSource for ScriptedIndices {
    fn index_up_to(&mut self, max: usize) -> usize {
        let Some(&draw) = self.draws.get(self.next) else {
            return max;
        };
        self.next += 1;
        draw.min(max)
    }
}
