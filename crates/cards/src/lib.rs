// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdrill cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use pokerdrill_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "10♦".parse::<Card>().unwrap();
//! assert_eq!(td.value(), 10);
//! assert_eq!(ah.to_string(), "A♥");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all the 2 cards hands an opponent can hold
//! once some cards are known:
//!
//! ```
//! # use pokerdrill_cards::{parse_cards, Deck};
//! let known = parse_cards("A♠ K♠ 2♠ 7♠ 9♣").unwrap();
//! let mut counter = 0;
//! Deck::without(&known).for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_081);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::{ParseCardError, parse_cards};
