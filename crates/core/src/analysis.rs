// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Full analysis of a situation.
use std::collections::BTreeMap;

use pokerdrill_eval::{HandCategory, HandEval, Nuts, find_nuts};

use crate::{
    equity::{equity, equity_by_category, rule_of_thumb},
    odds::Decision,
    outs::{Outs, calculate_outs},
    poker::Situation,
};

/// The analysis values for a situation with a board.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The hero best hand.
    pub best: HandEval,
    /// The best hand an opponent can hold.
    pub nuts: Nuts,
    /// The hero outs, empty on the river.
    pub outs: Outs,
    /// The exact equity from the outs.
    pub equity: f64,
    /// The rule of 4 and 2 equity.
    pub rule_of_thumb: f64,
    /// The chance of improving to each stronger category with the next card.
    pub equity_by_category: BTreeMap<HandCategory, f64>,
    /// The pot odds and call or fold decision, when the situation has a pot
    /// odds scenario and there are cards to come.
    pub pot_odds: Option<(f64, Decision)>,
}

impl Analysis {
    /// Analyzes a situation, returns none for a preflop situation.
    pub fn of(situation: &Situation) -> Option<Self> {
        let board = situation.board();
        if board.is_empty() {
            return None;
        }

        let hand = situation.hand();
        let best = HandEval::best(&situation.cards());
        let nuts = find_nuts(board, Some(hand));
        let outs = calculate_outs(hand, board);
        let equity = equity(outs.total(), board.len());

        let pot_odds = situation
            .pot_odds()
            .filter(|_| board.len() < 5)
            .map(|scenario| {
                let pot_odds = scenario.pot_odds();
                (pot_odds, Decision::from_odds(equity, pot_odds))
            });

        Some(Self {
            best,
            nuts,
            rule_of_thumb: rule_of_thumb(outs.total(), board.len()),
            equity_by_category: equity_by_category(hand, board),
            outs,
            equity,
            pot_odds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerdrill_eval::parse_cards;

    use crate::odds::PotOddsScenario;

    fn situation(hand: &str, board: &str) -> Situation {
        let hand = parse_cards(hand).unwrap();
        Situation::new([hand[0], hand[1]], parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn flush_draw_analysis() {
        let scenario = PotOddsScenario::new(100, 25);
        let situation = situation("A♠ K♠", "2♠ 7♠ 9♣").with_pot_odds(scenario);
        let analysis = Analysis::of(&situation).unwrap();

        assert_eq!(analysis.best.category(), HandCategory::HighCard);
        assert_eq!(analysis.nuts, Nuts::Hand(HandCategory::ThreeOfAKind));
        assert_eq!(analysis.outs.total(), 23);
        assert_eq!(analysis.equity, equity(23, 3));
        assert_eq!(analysis.rule_of_thumb, 92.0);
        assert_eq!(analysis.pot_odds, Some((20.0, Decision::Call)));
    }

    #[test]
    fn river_has_no_draws() {
        let scenario = PotOddsScenario::new(100, 25);
        let situation = situation("A♠ K♠", "2♠ 7♠ 9♣ 4♦ 5♥").with_pot_odds(scenario);
        let analysis = Analysis::of(&situation).unwrap();

        assert_eq!(analysis.outs.total(), 0);
        assert_eq!(analysis.equity, 0.0);
        assert!(analysis.equity_by_category.is_empty());
        assert_eq!(analysis.pot_odds, None);
    }

    #[test]
    fn preflop_has_no_analysis() {
        assert!(Analysis::of(&situation("A♠ K♠", "")).is_none());
    }
}
