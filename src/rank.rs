//! Card ranks and the loose-input rank parser.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidRank, UnknownQuery};

/// Card rank.
///
/// Ordering is deliberately not derived: where an ace sorts depends on the
/// owning deck's ace-high setting, so comparisons go through
/// [`Rank::compare`] with the setting threaded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace. Sorts above King when aces are high, below Two otherwise.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// Loosely-typed rank input accepted by [`Rank::parse`].
#[derive(Debug, Clone, Copy)]
pub enum RankToken<'a> {
    /// An already-typed rank, passed through unchanged.
    Rank(Rank),
    /// A rank name such as `"Ace"`, or a single-letter abbreviation.
    Text(&'a str),
    /// A 1-based position in the 14-slot rank sequence. Positions 1 and 14
    /// both address the ace.
    Position(u8),
}

impl From<Rank> for RankToken<'_> {
    fn from(rank: Rank) -> Self {
        Self::Rank(rank)
    }
}

impl<'a> From<&'a str> for RankToken<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<u8> for RankToken<'_> {
    fn from(position: u8) -> Self {
        Self::Position(position)
    }
}

impl Rank {
    /// All ranks in canonical enumeration order, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank name, e.g. `"Ace"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the comparison value of the rank (1-14).
    ///
    /// Every rank except the ace has a fixed value (Two = 2 through
    /// King = 13). The ace is 14 when `aces_high`, 1 otherwise.
    #[must_use]
    pub const fn value(self, aces_high: bool) -> u8 {
        match self {
            Self::Ace if aces_high => 14,
            rank => rank as u8,
        }
    }

    /// Compares two ranks under the given ace-high setting.
    #[must_use]
    pub fn compare(self, other: Self, aces_high: bool) -> core::cmp::Ordering {
        self.value(aces_high).cmp(&other.value(aces_high))
    }

    /// Parses loose rank input, returning `None` when nothing matches.
    ///
    /// Accepts an already-typed [`Rank`], a 1-based position (1-14, with 1
    /// and 14 both yielding [`Rank::Ace`]), a case-insensitive full name, or
    /// a single-letter abbreviation for the court cards and the ace
    /// (J, Q, K, A).
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::parse("ace"), Some(Rank::Ace));
    /// assert_eq!(Rank::parse(14), Some(Rank::Ace));
    /// assert_eq!(Rank::parse("J"), Some(Rank::Jack));
    /// assert_eq!(Rank::parse("T"), None);
    /// ```
    #[must_use]
    pub fn parse<'a>(input: impl Into<RankToken<'a>>) -> Option<Self> {
        match input.into() {
            RankToken::Rank(rank) => Some(rank),
            RankToken::Text(text) => Self::parse_text(text),
            RankToken::Position(position) => Self::from_position(position),
        }
    }

    /// Maps a 1-based position in the 14-slot rank sequence to a rank.
    ///
    /// Positions 1 and 14 both yield the ace; positions outside 1-14 yield
    /// `None`.
    #[must_use]
    pub const fn from_position(position: u8) -> Option<Self> {
        match position {
            1 | 14 => Some(Self::Ace),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::Ten),
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            _ => None,
        }
    }

    /// Answers a rank predicate query such as `"ace"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownQuery`] when the token does not name a rank.
    pub fn is(&self, token: &str) -> Result<bool, UnknownQuery> {
        Self::parse_text(token)
            .map(|rank| rank == *self)
            .ok_or(UnknownQuery)
    }

    fn parse_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(initial), None) => Self::from_initial(initial),
            _ => Self::ALL
                .into_iter()
                .find(|rank| text.eq_ignore_ascii_case(rank.name())),
        }
    }

    // Only the court cards and the ace abbreviate to a single letter; "T"
    // stays unparseable so letters never collide with numeric ranks.
    const fn from_initial(initial: char) -> Option<Self> {
        match initial {
            'j' | 'J' => Some(Self::Jack),
            'q' | 'Q' => Some(Self::Queen),
            'k' | 'K' => Some(Self::King),
            'a' | 'A' => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = InvalidRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s).ok_or(InvalidRank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        Self::from_position(position).ok_or(InvalidRank)
    }
}
