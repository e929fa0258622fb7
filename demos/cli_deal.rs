//! CLI dealing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Deck, DeckOptions};

fn main() {
    println!("Deck CLI example (Enter to deal, 's' to shuffle, 'u' to sort, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(DeckOptions::default().with_jokers(true), seed);

    loop {
        print!("{} in play, {} dealt > ", deck.len(), deck.dealt().len());
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            break;
        }

        match line.trim() {
            "q" => {
                println!("Goodbye.");
                break;
            }
            "s" => {
                deck.shuffle();
                println!("Shuffled; dealt cards returned to the deck.");
            }
            "u" => {
                deck.unshuffle();
                println!("Restored canonical order.");
            }
            "" => match deck.deal() {
                Some(card) => println!("{card}"),
                None => println!("Deck exhausted. 's' shuffles everything back in."),
            },
            query => match deck.find_cards(&[query]) {
                cards if cards.is_empty() => println!("No cards match {query:?}."),
                cards => {
                    for card in cards {
                        println!("{card}");
                    }
                }
            },
        }
    }
}
