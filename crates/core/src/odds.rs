// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pot odds and call or fold decisions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{equity::round1, poker::Chips};

/// Realistic (pot, bet) pairs used for drills.
const SCENARIOS: [(u32, u32); 8] = [
    (100, 25),
    (200, 50),
    (150, 50),
    (300, 100),
    (200, 80),
    (100, 50),
    (120, 60),
    (180, 120),
];

/// The pot and the bet the hero has to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotOddsScenario {
    /// The pot before the call.
    pub pot: Chips,
    /// The bet to call.
    pub bet: Chips,
}

impl PotOddsScenario {
    /// Creates a scenario.
    pub const fn new(pot: u32, bet: u32) -> Self {
        Self {
            pot: Chips::new(pot),
            bet: Chips::new(bet),
        }
    }

    /// Picks one of the drill scenarios at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (pot, bet) = SCENARIOS[rng.random_range(0..SCENARIOS.len())];
        Self::new(pot, bet)
    }

    /// The break-even equity percentage for calling.
    pub fn pot_odds(&self) -> f64 {
        pot_odds(self.pot, self.bet)
    }
}

/// Returns the pot odds percentage `bet / (pot + bet)` rounded to one
/// decimal, 0 if there is nothing to call.
pub fn pot_odds(pot: Chips, bet: Chips) -> f64 {
    if bet == Chips::ZERO {
        return 0.0;
    }

    let total = (pot + bet).amount() as f64;
    round1(bet.amount() as f64 / total * 100.0)
}

/// Checks if calling is profitable, the equity must be strictly greater
/// than the pot odds.
pub fn should_call(equity: f64, pot_odds: f64) -> bool {
    equity > pot_odds
}

/// A call or fold decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Call the bet.
    Call,
    /// Fold the hand.
    Fold,
}

impl Decision {
    /// The decision for the given equity and pot odds.
    pub fn from_odds(equity: f64, pot_odds: f64) -> Self {
        if should_call(equity, pot_odds) {
            Decision::Call
        } else {
            Decision::Fold
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Call => f.write_str("CALL"),
            Decision::Fold => f.write_str("FOLD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn pot_odds_values() {
        assert_eq!(pot_odds(Chips::new(100), Chips::new(25)), 20.0);
        assert_eq!(pot_odds(Chips::new(150), Chips::new(50)), 25.0);
        assert_eq!(pot_odds(Chips::new(200), Chips::new(80)), 28.6);
        assert_eq!(pot_odds(Chips::new(100), Chips::new(50)), 33.3);
        assert_eq!(pot_odds(Chips::new(180), Chips::new(120)), 40.0);
        assert_eq!(pot_odds(Chips::ZERO, Chips::ZERO), 0.0);
        assert_eq!(pot_odds(Chips::new(100), Chips::ZERO), 0.0);
    }

    #[test]
    fn call_or_fold() {
        assert!(should_call(40.0, 20.0));
        assert!(!should_call(15.0, 20.0));
        assert!(!should_call(20.0, 20.0));

        assert_eq!(Decision::from_odds(34.6, 25.0), Decision::Call);
        assert_eq!(Decision::from_odds(0.0, 20.0), Decision::Fold);
        assert_eq!(Decision::Call.to_string(), "CALL");
    }

    #[test]
    fn random_scenarios() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let scenario = PotOddsScenario::random(&mut rng);
            let amounts = (scenario.pot.amount(), scenario.bet.amount());
            assert!(SCENARIOS.contains(&amounts));
            assert!(scenario.pot_odds() > 0.0 && scenario.pot_odds() < 50.0);
        }
    }
}
