// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity estimation from outs.
//!
//! Equity here is the chance of hitting at least one out by the river,
//! assuming every out wins and every other card loses.
use std::collections::BTreeMap;

use pokerdrill_eval::{Card, Deck, HandCategory, best_category};

/// Rounds a percentage to one decimal.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Returns the equity percentage for `outs` with a flop or turn board.
///
/// The exact value is `1 - (non_outs / unknown) ^ cards_to_come` rounded to
/// one decimal, where unknown are the cards not in the hero hand or on the
/// board. Returns 0 for no outs or a board that is not a flop or a turn.
pub fn equity(outs: usize, board_len: usize) -> f64 {
    if outs == 0 || !matches!(board_len, 3 | 4) {
        return 0.0;
    }

    let unknown = Deck::SIZE - (2 + board_len);
    let to_come = 5 - board_len as i32;
    let non_outs = unknown.saturating_sub(outs);
    let miss = (non_outs as f64 / unknown as f64).powi(to_come);

    round1((1.0 - miss) * 100.0)
}

/// The rule of 4 and 2 approximation: outs times 4 on the flop and times 2
/// on the turn, capped at 100.
pub fn rule_of_thumb(outs: usize, board_len: usize) -> f64 {
    let equity = match board_len {
        3 => outs * 4,
        4 => outs * 2,
        _ => 0,
    };

    equity.min(100) as f64
}

/// Returns, for each category the hand can improve to with the next card,
/// the percentage of unseen cards that make it.
///
/// The map is empty when the board is not a flop or a turn.
pub fn equity_by_category(hand: &[Card; 2], board: &[Card]) -> BTreeMap<HandCategory, f64> {
    let mut equities = BTreeMap::new();
    if !matches!(board.len(), 3 | 4) {
        return equities;
    }

    let mut known = hand.to_vec();
    known.extend_from_slice(board);
    let current = best_category(&known);

    let unseen = Deck::without(&known);
    let mut counts = BTreeMap::<HandCategory, usize>::new();
    let mut cards = known.clone();

    for &card in unseen.cards() {
        cards.truncate(known.len());
        cards.push(card);

        let category = best_category(&cards);
        if category > current {
            *counts.entry(category).or_default() += 1;
        }
    }

    let total = unseen.count() as f64;
    for (category, count) in counts {
        equities.insert(category, round1(count as f64 / total * 100.0));
    }

    equities
}
