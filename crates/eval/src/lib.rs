// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdrill hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and a nuts finder that
//! searches all the hole cards an opponent can hold on a given board.
//!
//! To use the evaluator create a hand and use [HandEval] to evaluate the hand
//! and get its category:
//!
//! ```
//! # use pokerdrill_eval::*;
//! let cards = parse_cards("A♠ K♠ 2♠ 7♠ 9♣ 4♠ 4♥").unwrap();
//! let eval = HandEval::best(&cards);
//! assert_eq!(eval.category(), HandCategory::Flush);
//!
//! let other = HandEval::best(&parse_cards("A♥ Q♥ 3♥ 7♥ 9♥").unwrap());
//! assert!(is_better(&other, &eval));
//! ```
//!
//! and [find_nuts] for the best category an opponent can make:
//!
//! ```
//! # use pokerdrill_eval::*;
//! let board = parse_cards("2♠ 7♠ 9♠ J♠ K♦").unwrap();
//! assert_eq!(find_nuts(&board, None), Nuts::Hand(HandCategory::StraightFlush));
//! assert_eq!(find_nuts(&[], None).to_string(), "Pocket Aces");
//! ```
//!
//! The **`parallel`** feature enables [find_nuts_par] that splits the
//! opponent hands search across a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandEval, HandStrength, best_category, is_better};

pub mod nuts;
#[cfg(feature = "parallel")]
pub use nuts::find_nuts_par;
pub use nuts::{Nuts, find_nuts};

// Reexport cards types.
pub use pokerdrill_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
