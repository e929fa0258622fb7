//! Deck state and lifecycle.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::DeckOptions;
use crate::rank::Rank;
use crate::suit::Suit;

mod search;
mod shuffle;

/// An ordered, mutable deck of cards.
///
/// Cards are partitioned into an in-play sequence (drawable from the front)
/// and a dealt sequence (out of play but retained for recall). The deck owns
/// a seeded RNG, so shuffles are reproducible from the seed.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards currently in play; the front of the sequence deals first.
    cards: Vec<Card>,
    /// Cards dealt out of play, in deal order.
    dealt: Vec<Card>,
    /// Whether aces sort above kings in this deck.
    aces_high: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a standard deck with the given options and seed.
    ///
    /// Populates all 13 ranks for each of the 4 suits, plus two jokers when
    /// `options.jokers` is set, then shuffles or restores canonical order
    /// per `options.shuffle`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_jokers(true), 42);
    /// assert_eq!(deck.len(), 54);
    /// assert!(deck.aces_high());
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut deck = Self::empty(seed);
        deck.aces_high = options.aces_high;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::Standard { rank, suit });
            }
        }
        if options.jokers {
            deck.add_joker();
            deck.add_joker();
        }
        if options.shuffle {
            deck.shuffle();
        } else {
            deck.unshuffle();
        }
        deck
    }

    /// Creates an empty deck for manual assembly. Aces are high.
    #[must_use]
    pub fn empty(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            dealt: Vec::new(),
            aces_high: true,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the cards currently in play, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards dealt out of play, oldest first.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns the number of cards in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether aces sort above kings in this deck.
    #[must_use]
    pub const fn aces_high(&self) -> bool {
        self.aces_high
    }

    /// Sets whether aces sort above kings in this deck.
    pub const fn set_aces_high(&mut self, aces_high: bool) {
        self.aces_high = aces_high;
    }

    /// Returns whether any card in the deck, in play or dealt, is a joker.
    #[must_use]
    pub fn has_jokers(&self) -> bool {
        self.iter_all().any(Card::is_joker)
    }

    /// Deals one card from the front of the in-play sequence.
    ///
    /// The card moves to the dealt sequence. Returns `None` when the deck
    /// is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.deal_many(1).first().copied()
    }

    /// Deals `count` cards from the front of the in-play sequence.
    ///
    /// The cards move to the dealt sequence in the same relative order. An
    /// exhausted deck yields fewer cards than asked for, down to none.
    pub fn deal_many(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        let dealt: Vec<Card> = self.cards.drain(..count).collect();
        self.dealt.extend_from_slice(&dealt);
        dealt
    }

    /// All cards in the deck: in play first, then dealt.
    fn iter_all(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().chain(self.dealt.iter())
    }
}
