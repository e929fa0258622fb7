//! A 52-card deck engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that manages the full deck lifecycle,
//! including dealing, shuffling, canonical-order restoration, and structural
//! validation, over [`Card`]s whose ranks and suits parse from flexible
//! human-entered input.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! let card = deck.deal();
//! assert!(card.is_some());
//! assert_eq!(deck.len(), 51);
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
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::{Card, DECK_SIZE, collect_cards};
pub use deck::Deck;
pub use error::{InvalidCard, InvalidRank, InvalidSuit, UnknownQuery};
pub use options::DeckOptions;
pub use rank::{Rank, RankToken};
pub use suit::{Suit, SuitToken};
