// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Outs calculation.
//!
//! An out is an unseen card that improves the hero hand when it comes on
//! the next street, either to a stronger category or to a better hand of
//! the same category. On the flop backdoor flush cards are counted too.
use ahash::AHashMap;
use log::debug;
use std::{collections::BTreeMap, fmt};

use pokerdrill_eval::{Card, Deck, HandCategory, HandEval, Suit};

/// The kind of improvement an out makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutsLabel {
    /// The out makes a stronger category.
    Category(HandCategory),
    /// The out makes a better hand in the current category.
    Better(HandCategory),
    /// The out is the third card of a suit that needs two more.
    BackdoorFlush,
    /// The out is part of a two cards straight draw.
    BackdoorStraight,
}

impl fmt::Display for OutsLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutsLabel::Category(category) => write!(f, "{category}"),
            OutsLabel::Better(category) => write!(f, "Better {category}"),
            OutsLabel::BackdoorFlush => f.write_str("Backdoor Flush"),
            OutsLabel::BackdoorStraight => f.write_str("Backdoor Straight"),
        }
    }
}

/// The outs for a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outs {
    outs: Vec<Card>,
    by_label: BTreeMap<OutsLabel, Vec<Card>>,
}

impl Outs {
    /// The unique outs cards.
    pub fn cards(&self) -> &[Card] {
        &self.outs
    }

    /// The number of unique outs.
    pub fn total(&self) -> usize {
        self.outs.len()
    }

    /// The outs grouped by improvement, a card may be in more than one group.
    pub fn by_label(&self) -> &BTreeMap<OutsLabel, Vec<Card>> {
        &self.by_label
    }

    /// The outs for an improvement.
    pub fn get(&self, label: OutsLabel) -> &[Card] {
        self.by_label
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn add(&mut self, label: OutsLabel, card: Card) {
        if !self.outs.contains(&card) {
            self.outs.push(card);
        }

        let cards = self.by_label.entry(label).or_default();
        if !cards.contains(&card) {
            cards.push(card);
        }
    }
}

/// Calculates the outs for a hand on a flop or turn board.
///
/// Returns no outs for other board sizes.
pub fn calculate_outs(hand: &[Card; 2], board: &[Card]) -> Outs {
    let mut outs = Outs::default();
    if !matches!(board.len(), 3 | 4) {
        return outs;
    }

    let mut known = hand.to_vec();
    known.extend_from_slice(board);

    let current = HandEval::best(&known);
    let unseen = Deck::without(&known);

    if board.len() == 3 {
        for card in backdoor_flush_outs(hand, board, unseen.cards()) {
            outs.add(OutsLabel::BackdoorFlush, card);
        }

        for card in backdoor_straight_outs(hand, board, unseen.cards()) {
            outs.add(OutsLabel::BackdoorStraight, card);
        }
    }

    let mut cards = known.clone();
    for &card in unseen.cards() {
        cards.truncate(known.len());
        cards.push(card);

        let new = HandEval::best(&cards);
        if new.category() > current.category() {
            outs.add(OutsLabel::Category(new.category()), card);
        } else if new.category() == current.category()
            && current.category() != HandCategory::HighCard
            && new.is_better_than(&current)
        {
            outs.add(OutsLabel::Better(current.category()), card);
        }
    }

    debug!(
        "{} outs for {} with {} board cards",
        outs.total(),
        current.category(),
        board.len()
    );

    outs
}

/// Returns the unseen cards of any suit held exactly three times by hand
/// and board, these need another card of the same suit to make a flush.
pub fn backdoor_flush_outs(hand: &[Card; 2], board: &[Card], unseen: &[Card]) -> Vec<Card> {
    let mut counts = AHashMap::<Suit, usize>::new();
    for card in hand.iter().chain(board) {
        *counts.entry(card.suit()).or_default() += 1;
    }

    unseen
        .iter()
        .filter(|c| counts.get(&c.suit()) == Some(&3))
        .copied()
        .collect()
}

/// Returns the backdoor straight outs.
///
/// Backdoor straight draws are not detected, this always returns no cards.
pub fn backdoor_straight_outs(_hand: &[Card; 2], _board: &[Card], _unseen: &[Card]) -> Vec<Card> {
    Vec::new()
}
