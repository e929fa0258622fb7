//! Deck order: shuffling, canonical order, and structural validation.

use core::cmp::Ordering;
use core::mem;

use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};

use super::Deck;

impl Deck {
    /// Shuffles the deck in place.
    ///
    /// Dealt cards return to the in-play sequence before the permutation,
    /// leaving the dealt sequence empty.
    pub fn shuffle(&mut self) {
        self.reclaim_dealt();
        self.cards.shuffle(&mut self.rng);
    }

    /// Non-destructive [`Deck::shuffle`]: returns a shuffled copy, leaving
    /// this deck untouched.
    #[must_use]
    pub fn shuffled(&self) -> Self {
        let mut deck = self.clone();
        deck.shuffle();
        deck
    }

    /// Restores canonical order in place.
    ///
    /// Dealt cards return to the in-play sequence, jokers move to the back
    /// in their current relative order, and everything else sorts ascending
    /// suit-major, rank-minor under this deck's ace-high setting.
    pub fn unshuffle(&mut self) {
        self.reclaim_dealt();
        let jokers = self.remove_cards_by(Card::is_joker);
        let aces_high = self.aces_high;
        self.cards
            .sort_by(|a, b| a.compare(b, aces_high).unwrap_or(Ordering::Equal));
        self.cards.extend(jokers);
    }

    /// Non-destructive [`Deck::unshuffle`]: returns a copy in canonical
    /// order, leaving this deck untouched.
    #[must_use]
    pub fn unshuffled(&self) -> Self {
        let mut deck = self.clone();
        deck.unshuffle();
        deck
    }

    /// Checks that the deck is structurally a full standard deck,
    /// independent of its current order.
    ///
    /// A deck is valid when it holds either no jokers or exactly two, and
    /// the remaining cards, restored to canonical order, form a strictly
    /// ascending run of exactly 52 cards under this deck's comparator.
    /// Dealt cards count toward the check; duplicates and missing cards
    /// invalidate it.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut deck = self.unshuffled();
        let jokers = deck.remove_cards_by(Card::is_joker);
        if jokers.len() != 2 && !jokers.is_empty() {
            return false;
        }
        deck.cards.len() == DECK_SIZE
            && deck
                .cards
                .windows(2)
                .all(|pair| pair[0].compare(&pair[1], deck.aces_high) == Some(Ordering::Less))
    }

    fn reclaim_dealt(&mut self) {
        let dealt = mem::take(&mut self.dealt);
        self.cards.extend(dealt);
    }
}
