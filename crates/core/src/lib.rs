// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdrill situations, analysis and quizzes.
//!
//! ```
//! use pokerdrill_core::{Analysis, PotOddsScenario, Situation, Decision};
//! use pokerdrill_eval::parse_cards;
//!
//! let hand = parse_cards("A♠ K♠").unwrap();
//! let board = parse_cards("2♠ 7♠ 9♣").unwrap();
//! let situation = Situation::new([hand[0], hand[1]], board)
//!     .unwrap()
//!     .with_pot_odds(PotOddsScenario::new(100, 25));
//!
//! let analysis = Analysis::of(&situation).unwrap();
//! assert_eq!(analysis.outs.total(), 23);
//! assert_eq!(analysis.pot_odds, Some((20.0, Decision::Call)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod analysis;
pub mod equity;
pub mod odds;
pub mod outs;
pub mod poker;
pub mod quiz;

pub use analysis::Analysis;
pub use equity::{equity, equity_by_category, rule_of_thumb};
pub use odds::{Decision, PotOddsScenario, pot_odds, should_call};
pub use outs::{Outs, OutsLabel, calculate_outs};
pub use poker::{Chips, Situation, SituationError, Street};
pub use quiz::{
    AnswerRecord, Question, QuestionKind, QuizError, QuizResult, QuizSession, QuizStats,
    ScoreBucket, build_quiz,
};
