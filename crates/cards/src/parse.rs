// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing from text tokens like `A♠`, `10h` or `Td`.
use ahash::AHashSet;
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// A card parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The rank prefix is not a known rank.
    #[error("invalid card rank {0:?}")]
    InvalidRank(String),
    /// The last character is not a known suit.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(String),
    /// A card appears more than once in a list.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♠' | 's' | 'S' => Ok(Suit::Spades),
            '♥' | 'h' | 'H' => Ok(Suit::Hearts),
            '♦' | 'd' | 'D' => Ok(Suit::Diamonds),
            '♣' | 'c' | 'C' => Ok(Suit::Clubs),
            _ => Err(ParseCardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card token, the suit is the last character and the rank
    /// the remaining prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((pos, suit)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };

        let rank = s[..pos].parse::<Rank>()?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// Fails if any token is invalid or if a card is repeated.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let mut seen = AHashSet::new();
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            let card = t.parse::<Card>()?;
            if seen.insert(card) {
                Ok(card)
            } else {
                Err(ParseCardError::Duplicate(card))
            }
        })
        .collect()
}
