//! Card suits and the loose-input suit parser.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidSuit, UnknownQuery};

/// Card suit.
///
/// Declaration order is the fixed suit priority used when ordering cards:
/// Clubs lowest, Spades highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

/// Loosely-typed suit input accepted by [`Suit::parse`].
#[derive(Debug, Clone, Copy)]
pub enum SuitToken<'a> {
    /// An already-typed suit, passed through unchanged.
    Suit(Suit),
    /// A suit name such as `"Spades"`, or a single-letter abbreviation.
    Text(&'a str),
}

impl From<Suit> for SuitToken<'_> {
    fn from(suit: Suit) -> Self {
        Self::Suit(suit)
    }
}

impl<'a> From<&'a str> for SuitToken<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl Suit {
    /// All suits in ascending priority order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit name, e.g. `"Spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Parses loose suit input, returning `None` when nothing matches.
    ///
    /// Accepts an already-typed [`Suit`], a case-insensitive name in
    /// singular or plural form (`"Spade"` and `"Spades"` both parse), or a
    /// single-letter abbreviation (C, D, H, S).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::parse("spades"), Some(Suit::Spades));
    /// assert_eq!(Suit::parse("Heart"), Some(Suit::Hearts));
    /// assert_eq!(Suit::parse("d"), Some(Suit::Diamonds));
    /// assert_eq!(Suit::parse("gold"), None);
    /// ```
    #[must_use]
    pub fn parse<'a>(input: impl Into<SuitToken<'a>>) -> Option<Self> {
        match input.into() {
            SuitToken::Suit(suit) => Some(suit),
            SuitToken::Text(text) => Self::parse_text(text),
        }
    }

    /// Answers a suit predicate query such as `"spades"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownQuery`] when the token does not name a suit.
    pub fn is(&self, token: &str) -> Result<bool, UnknownQuery> {
        Self::parse_text(token)
            .map(|suit| suit == *self)
            .ok_or(UnknownQuery)
    }

    fn parse_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(initial), None) => Self::from_initial(initial),
            _ => Self::ALL.into_iter().find(|suit| {
                let name = suit.name();
                // every suit name ends in "s"; the singular drops it
                text.eq_ignore_ascii_case(name) || text.eq_ignore_ascii_case(&name[..name.len() - 1])
            }),
        }
    }

    const fn from_initial(initial: char) -> Option<Self> {
        match initial {
            'c' | 'C' => Some(Self::Clubs),
            'd' | 'D' => Some(Self::Diamonds),
            'h' | 'H' => Some(Self::Hearts),
            's' | 'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = InvalidSuit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s).ok_or(InvalidSuit)
    }
}
