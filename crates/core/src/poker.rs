// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker situation.
use log::trace;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops};
use thiserror::Error;

pub use pokerdrill_eval::{Card, Deck, Rank, Suit};

use crate::odds::PotOddsScenario;

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "${},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "${},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "${}", amount)
        }
    }
}

/// A betting street after the flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// All the streets.
    pub const ALL: [Street; 3] = [Street::Flop, Street::Turn, Street::River];

    /// The number of board cards on this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street for a board length, none for a preflop empty board.
    pub fn from_board_len(len: usize) -> Option<Street> {
        Street::ALL.into_iter().find(|s| s.board_len() == len)
    }

    /// Picks a street uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Street {
        Street::ALL[rng.random_range(0..Street::ALL.len())]
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        f.write_str(street)
    }
}

/// An invalid situation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SituationError {
    /// The board must have 0, 3, 4, or 5 cards.
    #[error("invalid board with {0} cards")]
    BoardSize(usize),
    /// A card is both in the hand and on the board or repeated.
    #[error("card {0} dealt twice")]
    Duplicate(Card),
}

/// The hero hole cards and the board, with an optional pot odds scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    hand: [Card; 2],
    board: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pot_odds: Option<PotOddsScenario>,
}

impl Situation {
    /// Creates a situation from given cards.
    pub fn new(hand: [Card; 2], board: Vec<Card>) -> Result<Self, SituationError> {
        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(SituationError::BoardSize(board.len()));
        }

        let mut seen = Vec::with_capacity(7);
        for &card in hand.iter().chain(&board) {
            if seen.contains(&card) {
                return Err(SituationError::Duplicate(card));
            }
            seen.push(card);
        }

        Ok(Self {
            hand,
            board,
            pot_odds: None,
        })
    }

    /// Deals a situation from a shuffled deck on a random street.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let street = Street::random(rng);
        Self::generate_on(rng, street)
    }

    /// Deals a situation from a shuffled deck on the given street.
    ///
    /// The hand, flop, turn, and river are dealt in this order from the
    /// top of one deck, the board keeps the cards for the street.
    pub fn generate_on<R: Rng + ?Sized>(rng: &mut R, street: Street) -> Self {
        let mut deck = Deck::new_and_shuffled(rng);
        let hand = [deck.deal(), deck.deal()];
        let mut board = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
        board.truncate(street.board_len());

        trace!("Dealt {street} situation {hand:?} {board:?}");

        Self {
            hand,
            board,
            pot_odds: None,
        }
    }

    /// Sets the pot odds scenario for this situation.
    pub fn with_pot_odds(mut self, pot_odds: PotOddsScenario) -> Self {
        self.pot_odds = Some(pot_odds);
        self
    }

    /// The hero hole cards.
    pub fn hand(&self) -> &[Card; 2] {
        &self.hand
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The pot odds scenario, if any.
    pub fn pot_odds(&self) -> Option<PotOddsScenario> {
        self.pot_odds
    }

    /// The street, none for a preflop situation.
    pub fn street(&self) -> Option<Street> {
        Street::from_board_len(self.board.len())
    }

    /// The hand and board cards.
    pub fn cards(&self) -> Vec<Card> {
        self.hand.iter().chain(&self.board).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerdrill_eval::parse_cards;
    use rand::rngs::StdRng;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(25).to_string(), "$25");
        assert_eq!(Chips(1_000).to_string(), "$1,000");
        assert_eq!(Chips(12_345).to_string(), "$12,345");
        assert_eq!(Chips(1_234_567).to_string(), "$1,234,567");
        assert_eq!(Chips(100) + Chips(25), Chips(125));
    }

    #[test]
    fn street_board_len() {
        for street in Street::ALL {
            assert_eq!(Street::from_board_len(street.board_len()), Some(street));
        }
        assert_eq!(Street::from_board_len(0), None);
        assert_eq!(Street::from_board_len(2), None);
    }

    #[test]
    fn generated_cards_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let situation = Situation::generate(&mut rng);
            assert!(matches!(situation.board().len(), 3..=5));

            let cards = situation.cards();
            let rebuilt = Situation::new(*situation.hand(), situation.board().to_vec());
            assert_eq!(rebuilt, Ok(situation.clone()), "{cards:?}");
        }
    }

    #[test]
    fn generate_reaches_every_street() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [0usize; 3];

        for _ in 0..300 {
            let street = Situation::generate(&mut rng).street().unwrap();
            seen[street as usize] += 1;
        }

        assert!(seen.iter().all(|&n| n > 50), "{seen:?}");
    }

    #[test]
    fn generate_on_street() {
        let mut rng = StdRng::seed_from_u64(3);
        for street in Street::ALL {
            let situation = Situation::generate_on(&mut rng, street);
            assert_eq!(situation.street(), Some(street));
            assert_eq!(situation.cards().len(), 2 + street.board_len());
        }
    }

    #[test]
    fn same_seed_same_situation() {
        let a = Situation::generate(&mut StdRng::seed_from_u64(9));
        let b = Situation::generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_situations() {
        let hand = parse_cards("A♠ K♠").unwrap();
        let hand = [hand[0], hand[1]];

        let board = parse_cards("2♠ 7♠").unwrap();
        let err = Situation::new(hand, board);
        assert_eq!(err, Err(SituationError::BoardSize(2)));

        let board = parse_cards("2♠ 7♠ A♠").unwrap();
        assert_eq!(
            Situation::new(hand, board),
            Err(SituationError::Duplicate(hand[0]))
        );

        let situation = Situation::new(hand, vec![]).unwrap();
        assert_eq!(situation.street(), None);
    }

    #[test]
    fn situation_serde() {
        let hand = parse_cards("A♠ T♥").unwrap();
        let board = parse_cards("2♠ 7♠ 9♣").unwrap();
        let situation = Situation::new([hand[0], hand[1]], board)
            .unwrap()
            .with_pot_odds(PotOddsScenario::new(100, 25));

        let json = serde_json::to_string(&situation).unwrap();
        assert!(json.contains("\"T♥\""), "{json}");
        assert_eq!(serde_json::from_str::<Situation>(&json).unwrap(), situation);
    }
}
