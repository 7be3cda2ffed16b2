// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nuts finder.
//!
//! The nuts is the best hand any opponent can hold on a board, it is found
//! by trying every two cards an opponent can hold with the board.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use pokerdrill_cards::{Card, Deck};

use crate::{HandCategory, best_category};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::find_nuts_par;

/// The best hand an opponent can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nuts {
    /// Preflop the nuts are pocket aces.
    PocketAces,
    /// The best category on the board.
    Hand(HandCategory),
}

impl fmt::Display for Nuts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nuts::PocketAces => f.write_str("Pocket Aces"),
            Nuts::Hand(category) => write!(f, "{category}"),
        }
    }
}

/// Finds the best category an opponent can make with the board.
///
/// The hero cards, if given, are removed from the cards an opponent can
/// hold. An empty board returns [Nuts::PocketAces].
///
/// Panics if the board is not empty and has not 3 to 5 cards.
pub fn find_nuts(board: &[Card], hero: Option<&[Card]>) -> Nuts {
    if board.is_empty() {
        return Nuts::PocketAces;
    }

    let deck = opponent_deck(board, hero);
    debug!(
        "Nuts search on {} cards board over {} unseen cards",
        board.len(),
        deck.count()
    );

    let mut cards = board.to_vec();
    let mut best = HandCategory::HighCard;

    deck.for_each(2, |hole| {
        cards.truncate(board.len());
        cards.extend_from_slice(hole);
        best = best.max(best_category(&cards));
    });

    Nuts::Hand(best)
}

/// The cards an opponent can hold.
fn opponent_deck(board: &[Card], hero: Option<&[Card]>) -> Deck {
    assert!(
        (3..=5).contains(&board.len()),
        "board must have 3 to 5 cards, got {}",
        board.len()
    );

    let mut known = board.to_vec();
    known.extend_from_slice(hero.unwrap_or_default());
    Deck::without(&known)
}
