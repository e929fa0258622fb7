//! Cards, card comparison, and predicate queries.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::{InvalidCard, UnknownQuery};
use crate::rank::{Rank, RankToken};
use crate::suit::{Suit, SuitToken};

/// A playing card: a rank-and-suit pair, or a joker.
///
/// Jokers have no rank or suit and are incomparable with every card,
/// themselves included; [`Card::compare`] returns `None` for them. Equality
/// stays structural (two jokers are equal), so ordering is exposed only
/// through [`Card::compare`] and there is no `PartialOrd` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// A joker.
    Joker,
    /// A standard rank-and-suit card.
    Standard {
        /// The rank of the card.
        rank: Rank,
        /// The suit of the card.
        suit: Suit,
    },
}

impl Card {
    /// Constructs a card from loose rank and suit input.
    ///
    /// Accepts everything [`Rank::parse`] and [`Suit::parse`] accept:
    /// names, abbreviations, 1-based rank positions, or already-typed
    /// values.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new("ace", "spades").unwrap();
    /// assert_eq!(card.rank(), Some(Rank::Ace));
    /// assert_eq!(card.suit(), Some(Suit::Spades));
    /// assert_eq!(Card::new(10, "h").unwrap().to_string(), "Ten of Hearts");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] when either input fails to parse.
    pub fn new<'a>(
        rank: impl Into<RankToken<'a>>,
        suit: impl Into<SuitToken<'a>>,
    ) -> Result<Self, InvalidCard> {
        let rank = Rank::parse(rank).ok_or(InvalidCard::Rank)?;
        let suit = Suit::parse(suit).ok_or(InvalidCard::Suit)?;
        Ok(Self::Standard { rank, suit })
    }

    /// Lenient variant of [`Card::new`]: `None` instead of an error.
    #[must_use]
    pub fn parse<'a>(
        rank: impl Into<RankToken<'a>>,
        suit: impl Into<SuitToken<'a>>,
    ) -> Option<Self> {
        Self::new(rank, suit).ok()
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Joker => None,
            Self::Standard { rank, .. } => Some(*rank),
        }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Joker => None,
            Self::Standard { suit, .. } => Some(*suit),
        }
    }

    /// Compares two cards under the given ace-high setting.
    ///
    /// Suits order first (Clubs lowest, Spades highest); ranks break ties.
    /// Returns `None` when either card is a joker.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use deckrs::Card;
    ///
    /// let ace = Card::new("a", "s").unwrap();
    /// let king = Card::new("k", "s").unwrap();
    /// assert_eq!(ace.compare(&king, true), Some(Ordering::Greater));
    /// assert_eq!(ace.compare(&king, false), Some(Ordering::Less));
    /// assert_eq!(ace.compare(&Card::Joker, true), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self, aces_high: bool) -> Option<Ordering> {
        let (
            Self::Standard {
                rank: rank_a,
                suit: suit_a,
            },
            Self::Standard {
                rank: rank_b,
                suit: suit_b,
            },
        ) = (self, other)
        else {
            return None;
        };
        Some(
            suit_a
                .cmp(suit_b)
                .then_with(|| rank_a.compare(*rank_b, aces_high)),
        )
    }

    /// Answers an ad-hoc predicate query against this card.
    ///
    /// The query is a single token split on underscores or whitespace; the
    /// first part is read as a rank and the last part as a suit, so
    /// `"ace"`, `"spades"`, and `"ace_of_spades"` all resolve. The bare
    /// token `"joker"` asks whether the card is a joker. When both parts
    /// are recognized the card must match both. A joker answers `false` to
    /// any recognized rank or suit query rather than erroring.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Card;
    ///
    /// let card = Card::new("ace", "spades").unwrap();
    /// assert_eq!(card.is("ace_of_spades"), Ok(true));
    /// assert_eq!(card.is("hearts"), Ok(false));
    /// assert_eq!(Card::Joker.is("ace"), Ok(false));
    /// assert!(card.is("emperor").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UnknownQuery`] when the query names neither a rank nor a
    /// suit, or has multiple parts that do not resolve to a rank and a suit
    /// together.
    pub fn is(&self, query: &str) -> Result<bool, UnknownQuery> {
        if query.eq_ignore_ascii_case("joker") {
            return Ok(self.is_joker());
        }
        let mut parts = query
            .split(|c: char| c == '_' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let first = parts.next().ok_or(UnknownQuery)?;
        let mut last = first;
        let mut multipart = false;
        for part in parts {
            last = part;
            multipart = true;
        }

        let rank = Rank::parse(first);
        let suit = Suit::parse(last);

        if self.is_joker() && (rank.is_some() || suit.is_some()) {
            return Ok(false);
        }
        match (rank, suit) {
            (Some(rank), Some(suit)) => {
                Ok(self.rank() == Some(rank) && self.suit() == Some(suit))
            }
            _ if multipart => Err(UnknownQuery),
            (Some(rank), None) => Ok(self.rank() == Some(rank)),
            (None, Some(suit)) => Ok(self.suit() == Some(suit)),
            (None, None) => Err(UnknownQuery),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joker => f.write_str("Joker"),
            Self::Standard { rank, suit } => write!(f, "{rank} of {suit}"),
        }
    }
}

impl FromStr for Card {
    type Err = InvalidCard;

    /// Parses the display form back into a card: `"Ace of Spades"` or
    /// `"Joker"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next(), words.next()) {
            (Some(word), None, _, _) if word.eq_ignore_ascii_case("joker") => Ok(Self::Joker),
            (Some(rank), Some(of), Some(suit), None) if of.eq_ignore_ascii_case("of") => {
                let rank = rank.parse::<Rank>()?;
                let suit = suit.parse::<Suit>()?;
                Ok(Self::Standard { rank, suit })
            }
            _ => Err(InvalidCard::Unrecognized),
        }
    }
}

/// Number of cards in a standard deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

/// Sifts a loosely-typed sequence down to the entries that parse as cards.
///
/// Each entry is read with [`Card::from_str`]; entries that do not describe
/// a card are dropped and relative order is preserved. An already-typed
/// collection of [`Card`]s never needs this conversion; it exists for the
/// boundary where card text enters the system.
///
/// # Example
///
/// ```
/// use deckrs::collect_cards;
///
/// let cards = collect_cards(["Ace of Spades", "teapot", "joker"]);
/// assert_eq!(cards.len(), 2);
/// ```
#[must_use]
pub fn collect_cards<I, T>(items: I) -> Vec<Card>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| item.as_ref().parse().ok())
        .collect()
}
