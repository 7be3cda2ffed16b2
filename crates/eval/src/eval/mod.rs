// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a five cards hand into one of the ten
//! [HandCategory] values and selects the best five cards hand out of 5, 6,
//! or 7 cards by trying all the five cards subsets.
//!
//! It provides a [best_category] function that returns only the category,
//! useful for counting and nuts computation, and [HandEval::best] that also
//! keeps the five winning cards, useful to compare two hands of the same
//! category with [is_better] or to show a winning hand.

mod category;
pub use category::HandCategory;

mod hand;
pub use hand::{HandEval, HandStrength, best_category, is_better};
