//! A playing-card deck and Solitaire table setup with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that shuffles itself as it is built, by
//! inserting each card at a uniformly random position, and a [`Table`] that
//! deals the initial tableau from it. The random source is injected, so a
//! seeded generator or a [`ScriptedIndices`] script makes every deal
//! reproducible.
//!
//! # Example
//!
//! ```
//! use solitaire_deal::{SetupOptions, Table};
//!
//! let table = Table::new_game(&SetupOptions::default(), 42).unwrap();
//! for card in table.tableau_tops().flatten() {
//!     let _ = card.to_string();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod pile;
pub mod rng;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, RANKS_PER_SUIT, SUITS, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, DeckError, StackError};
pub use options::{
    DealPattern, FOUNDATION_CAPACITY, FOUNDATION_PILES, SetupOptions, TABLEAU_PILES,
};
pub use pile::Pile;
pub use rng::{IndexSource, ScriptedIndices};
pub use table::Table;
