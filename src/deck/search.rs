//! Deck membership: adding, finding, and removing cards.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::InvalidCard;
use crate::rank::{Rank, RankToken};
use crate::suit::{Suit, SuitToken};

use super::Deck;

/// A resolved search token: a rank, a suit, or the joker marker.
#[derive(Debug, Clone, Copy)]
enum SearchToken {
    Rank(Rank),
    Suit(Suit),
    Joker,
}

impl SearchToken {
    fn parse(token: &str) -> Option<Self> {
        Rank::parse(token)
            .map(Self::Rank)
            .or_else(|| Suit::parse(token).map(Self::Suit))
            .or_else(|| token.eq_ignore_ascii_case("joker").then_some(Self::Joker))
    }

    fn matches(self, card: &Card) -> bool {
        match self {
            Self::Rank(rank) => card.rank() == Some(rank),
            Self::Suit(suit) => card.suit() == Some(suit),
            Self::Joker => card.is_joker(),
        }
    }
}

fn parse_tokens(tokens: &[&str]) -> Vec<SearchToken> {
    tokens.iter().copied().filter_map(SearchToken::parse).collect()
}

impl Deck {
    /// Appends an already-typed card to the in-play sequence.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Constructs a card from loose rank and suit input and appends it to
    /// the in-play sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] when either input fails to parse; the deck is
    /// left unchanged.
    pub fn add_card<'a>(
        &mut self,
        rank: impl Into<RankToken<'a>>,
        suit: impl Into<SuitToken<'a>>,
    ) -> Result<(), InvalidCard> {
        let card = Card::new(rank, suit)?;
        self.cards.push(card);
        Ok(())
    }

    /// Appends a joker to the in-play sequence.
    pub fn add_joker(&mut self) {
        self.cards.push(Card::Joker);
    }

    /// Finds every card matching all of the given tokens, searching the
    /// in-play and dealt sequences.
    ///
    /// Tokens parse as a rank, a suit, or `"joker"` (case-insensitive);
    /// unparseable tokens are dropped. A card matches when it satisfies
    /// every surviving token. With no surviving tokens nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 7);
    /// assert_eq!(deck.find_cards(&["ace"]).len(), 4);
    /// assert_eq!(deck.find_cards(&["ace", "spades"]).len(), 1);
    /// assert_eq!(deck.find_cards(&["teapot"]).len(), 0);
    /// ```
    #[must_use]
    pub fn find_cards(&self, tokens: &[&str]) -> Vec<Card> {
        let tokens = parse_tokens(tokens);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.iter_all()
            .copied()
            .filter(|card| tokens.iter().all(|token| token.matches(card)))
            .collect()
    }

    /// Finds every card satisfying the predicate, searching the in-play and
    /// dealt sequences.
    #[must_use]
    pub fn find_cards_by<F: FnMut(&Card) -> bool>(&self, mut predicate: F) -> Vec<Card> {
        self.iter_all()
            .copied()
            .filter(|card| predicate(card))
            .collect()
    }

    /// Finds the first card matching all of the given tokens, or `None`.
    #[must_use]
    pub fn find_card(&self, tokens: &[&str]) -> Option<Card> {
        self.find_cards(tokens).first().copied()
    }

    /// Finds the first card satisfying the predicate, or `None`.
    #[must_use]
    pub fn find_card_by<F: FnMut(&Card) -> bool>(&self, predicate: F) -> Option<Card> {
        self.find_cards_by(predicate).first().copied()
    }

    /// Removes every card matching all of the given tokens from both the
    /// in-play and dealt sequences.
    ///
    /// Token grammar is that of [`Deck::find_cards`]. Returns the removed
    /// cards: in-play matches first, each group in its original order.
    pub fn remove_cards(&mut self, tokens: &[&str]) -> Vec<Card> {
        let tokens = parse_tokens(tokens);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.remove_cards_by(|card| tokens.iter().all(|token| token.matches(card)))
    }

    /// Removes every card satisfying the predicate from both the in-play
    /// and dealt sequences. Returns the removed cards.
    pub fn remove_cards_by<F: FnMut(&Card) -> bool>(&mut self, mut predicate: F) -> Vec<Card> {
        let mut removed = Vec::new();
        self.cards.retain(|card| {
            let hit = predicate(card);
            if hit {
                removed.push(*card);
            }
            !hit
        });
        self.dealt.retain(|card| {
            let hit = predicate(card);
            if hit {
                removed.push(*card);
            }
            !hit
        });
        removed
    }
}
