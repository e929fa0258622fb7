//! Deck integration tests.

use core::cmp::Ordering;

use deckrs::{Card, DECK_SIZE, Deck, DeckOptions, Rank, Suit};

fn fresh_deck(seed: u64) -> Deck {
    Deck::new(DeckOptions::default(), seed)
}

#[test]
fn standard_construction_populates_52_cards() {
    let deck = fresh_deck(42);
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.dealt().is_empty());
    assert!(deck.aces_high());
    assert!(!deck.has_jokers());
    assert!(deck.is_valid());
}

#[test]
fn construction_covers_every_rank_and_suit() {
    let deck = fresh_deck(0);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert_eq!(deck.find_cards(&[rank.name(), suit.name()]).len(), 1);
        }
    }
}

#[test]
fn unshuffled_construction_with_jokers_is_canonical() {
    let options = DeckOptions::default().with_shuffle(false).with_jokers(true);
    let deck = Deck::new(options, 1);
    assert_eq!(deck.len(), 54);

    // first thirteen cards share one suit, ascending
    let cards = deck.cards();
    let first_suit = cards[0].suit();
    assert!(first_suit.is_some());
    assert!(cards[..13].iter().all(|c| c.suit() == first_suit));
    for pair in cards[..13].windows(2) {
        assert_eq!(pair[0].compare(&pair[1], true), Some(Ordering::Less));
    }

    // jokers sit at the tail, outside the ascending run
    assert!(cards[52].is_joker());
    assert!(cards[53].is_joker());
    assert!(deck.is_valid());
}

#[test]
fn empty_deck_starts_bare() {
    let mut deck = Deck::empty(3);
    assert!(deck.is_empty());
    assert_eq!(deck.deal(), None);
    assert!(!deck.is_valid());

    deck.add_card("ace", "spades").unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.cards()[0].to_string(), "Ace of Spades");
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let a = fresh_deck(42);
    let b = fresh_deck(42);
    assert_eq!(a.cards(), b.cards());

    let c = fresh_deck(43);
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn deal_moves_cards_front_to_dealt_in_order() {
    let mut deck = Deck::new(DeckOptions::default().with_shuffle(false), 5);
    let expected: Vec<Card> = deck.cards()[..3].to_vec();

    let first = deck.deal().unwrap();
    assert_eq!(first, expected[0]);
    let rest = deck.deal_many(2);
    assert_eq!(rest, expected[1..]);

    assert_eq!(deck.len(), 49);
    assert_eq!(deck.dealt(), expected.as_slice());
}

#[test]
fn dealing_past_exhaustion_returns_what_is_left() {
    let mut deck = fresh_deck(9);
    let cards = deck.deal_many(60);
    assert_eq!(cards.len(), 52);
    assert_eq!(deck.deal(), None);
    assert!(deck.deal_many(5).is_empty());
    assert_eq!(deck.dealt().len(), 52);
}

#[test]
fn shuffle_reclaims_dealt_cards() {
    let mut deck = fresh_deck(7);
    deck.deal_many(10);
    assert_eq!(deck.len(), 42);

    deck.shuffle();
    assert_eq!(deck.len(), 52);
    assert!(deck.dealt().is_empty());
    assert!(deck.is_valid());
}

#[test]
fn unshuffle_restores_canonical_order_with_jokers_last() {
    let mut deck = Deck::new(DeckOptions::default().with_jokers(true), 11);
    deck.deal_many(20);
    deck.unshuffle();

    assert_eq!(deck.len(), 54);
    assert!(deck.dealt().is_empty());
    let cards = deck.cards();
    for pair in cards[..52].windows(2) {
        assert_eq!(pair[0].compare(&pair[1], true), Some(Ordering::Less));
    }
    assert!(cards[52].is_joker() && cards[53].is_joker());
    assert!(deck.is_valid());
}

#[test]
fn non_destructive_variants_leave_the_original_untouched() {
    let mut deck = fresh_deck(13);
    deck.deal_many(5);
    let before: Vec<Card> = deck.cards().to_vec();

    let sorted = deck.unshuffled();
    assert_eq!(sorted.len(), 52);
    assert!(sorted.dealt().is_empty());
    assert_eq!(deck.cards(), before.as_slice());
    assert_eq!(deck.dealt().len(), 5);

    let reshuffled = deck.shuffled();
    assert_eq!(reshuffled.len(), 52);
    assert_eq!(deck.dealt().len(), 5);
}

#[test]
fn ace_low_decks_sort_aces_first() {
    let options = DeckOptions::default()
        .with_shuffle(false)
        .with_aces_high(false);
    let deck = Deck::new(options, 2);
    assert!(!deck.aces_high());
    assert_eq!(deck.cards()[0].rank(), Some(Rank::Ace));
    assert_eq!(deck.cards()[0].suit(), Some(Suit::Clubs));
    assert!(deck.is_valid());

    let high = Deck::new(DeckOptions::default().with_shuffle(false), 2);
    assert_eq!(high.cards()[0].rank(), Some(Rank::Two));
    assert_eq!(high.cards()[12].rank(), Some(Rank::Ace));
}

#[test]
fn deck_ace_setting_drives_comparisons() {
    let mut deck = Deck::new(DeckOptions::default().with_shuffle(false), 53);
    assert_eq!(deck.cards()[12].rank(), Some(Rank::Ace));

    deck.set_aces_high(false);
    deck.unshuffle();
    assert_eq!(deck.cards()[0].rank(), Some(Rank::Ace));
    assert!(deck.is_valid());
}

#[test]
fn find_searches_dealt_cards_too() {
    let mut deck = fresh_deck(17);
    deck.deal_many(26);

    let aces = deck.find_cards(&["ace"]);
    assert_eq!(aces.len(), 4);
    for ace in &aces {
        assert_eq!(ace.is("ace"), Ok(true));
    }
    assert_eq!(deck.find_cards(&["spades"]).len(), 13);
    assert!(deck.find_card(&["queen", "hearts"]).is_some());
}

#[test]
fn find_with_unknown_tokens_matches_nothing() {
    let deck = fresh_deck(19);
    assert!(deck.find_cards(&["teapot"]).is_empty());
    assert!(deck.find_cards(&[]).is_empty());
    assert!(deck.find_card(&["teapot"]).is_none());
}

#[test]
fn find_by_predicate() {
    let deck = fresh_deck(23);
    let spades = deck.find_cards_by(|card| card.suit() == Some(Suit::Spades));
    assert_eq!(spades.len(), 13);

    let ace = deck.find_card_by(|card| card.is("ace").unwrap_or(false));
    assert!(ace.is_some());
}

#[test]
fn remove_cards_strips_both_partitions() {
    let mut deck = fresh_deck(29);
    deck.deal_many(26);

    let aces = deck.remove_cards(&["ace"]);
    assert_eq!(aces.len(), 4);
    assert!(deck.find_cards(&["ace"]).is_empty());
    assert_eq!(deck.len() + deck.dealt().len(), 48);
    assert!(!deck.is_valid());
}

#[test]
fn remove_jokers_leaves_a_valid_deck() {
    let mut deck = Deck::new(DeckOptions::default().with_jokers(true), 31);
    let jokers = deck.remove_cards(&["joker"]);
    assert_eq!(jokers.len(), 2);
    assert!(!deck.has_jokers());
    assert!(deck.is_valid());
}

#[test]
fn a_53_card_deck_is_invalid() {
    let mut deck = fresh_deck(37);
    deck.add_card("ace", "spades").unwrap();
    assert_eq!(deck.len(), 53);
    assert!(!deck.is_valid());
}

#[test]
fn duplicates_invalidate_even_at_52_cards() {
    let mut deck = fresh_deck(41);
    let removed = deck.remove_cards(&["two", "clubs"]);
    assert_eq!(removed.len(), 1);

    deck.add_card("ace", "spades").unwrap();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_valid());
}

#[test]
fn a_single_joker_invalidates() {
    let mut deck = fresh_deck(43);
    deck.add_joker();
    assert!(!deck.is_valid());
}

#[test]
fn validity_is_order_independent() {
    let mut deck = Deck::new(DeckOptions::default().with_jokers(true), 47);
    deck.shuffle();
    deck.deal_many(13);
    assert!(deck.is_valid());
}

#[test]
fn push_accepts_typed_cards() {
    let mut deck = Deck::empty(59);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::Standard { rank, suit });
        }
    }
    assert_eq!(deck.len(), 52);
    assert!(deck.is_valid());
}
