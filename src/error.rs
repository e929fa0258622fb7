//! Error types for parsing and queries.

use thiserror::Error;

/// Error returned when input fails to parse as a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input does not name a rank")]
pub struct InvalidRank;

/// Error returned when input fails to parse as a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input does not name a suit")]
pub struct InvalidSuit;

/// Errors that can occur when constructing a card from loose input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// The rank input did not name a rank.
    #[error("invalid rank for card")]
    Rank,
    /// The suit input did not name a suit.
    #[error("invalid suit for card")]
    Suit,
    /// The text named neither a card nor a joker.
    #[error("unrecognized card text")]
    Unrecognized,
}

impl From<InvalidRank> for InvalidCard {
    fn from(_: InvalidRank) -> Self {
        Self::Rank
    }
}

impl From<InvalidSuit> for InvalidCard {
    fn from(_: InvalidSuit) -> Self {
        Self::Suit
    }
}

/// Error returned when a predicate query names neither a rank nor a suit,
/// or combines parts that cannot be resolved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown card query")]
pub struct UnknownQuery;
