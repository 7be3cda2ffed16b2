// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quiz questions, answers grading, and results.
//!
//! A [QuizSession] owns a situation and the questions built from its
//! analysis, it records the user answers and grades them into a
//! [QuizResult] that a front end can store and review.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pokerdrill_eval::{HandCategory, Nuts};

use crate::{analysis::Analysis, odds::Decision, poker::Situation};

/// The maximum number of options for a question.
const MAX_OPTIONS: usize = 4;

/// Pot odds percentages offered as wrong answers.
const POT_ODDS_CHOICES: [f64; 6] = [20.0, 25.0, 28.6, 33.3, 40.0, 50.0];

/// A quiz error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A preflop situation has nothing to analyze.
    #[error("no board cards to quiz on")]
    NoBoard,
    /// The question index is out of range.
    #[error("no question {0}")]
    NoQuestion(usize),
}

/// What a question asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// The hero best hand.
    Hand,
    /// The opponent best possible hand.
    Nuts,
    /// The number of outs.
    Outs,
    /// The equity percentage.
    Equity,
    /// The pot odds percentage.
    PotOdds,
    /// Call or fold.
    Decision,
}

/// A multiple choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// What the question asks.
    pub kind: QuestionKind,
    /// The question text.
    pub prompt: String,
    /// The correct answer.
    pub correct: String,
    /// The shuffled options, one of them is the correct answer.
    pub options: Vec<String>,
}

impl Question {
    fn new<R>(
        kind: QuestionKind,
        prompt: String,
        correct: String,
        wrong: Vec<String>,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut options = vec![correct.clone()];
        options.extend(wrong.choose_multiple(rng, MAX_OPTIONS - 1).cloned());
        options.shuffle(rng);

        Self {
            kind,
            prompt,
            correct,
            options,
        }
    }
}

/// Builds the quiz questions for a situation.
///
/// The hand and nuts questions are always asked, outs only with cards to
/// come, equity only when there are outs, pot odds and decision only when
/// the situation has a pot odds scenario and cards to come.
pub fn build_quiz<R>(situation: &Situation, rng: &mut R) -> Result<Vec<Question>, QuizError>
where
    R: Rng + ?Sized,
{
    let analysis = Analysis::of(situation).ok_or(QuizError::NoBoard)?;
    let mut questions = Vec::new();

    let best = analysis.best.category();
    questions.push(Question::new(
        QuestionKind::Hand,
        "What is your current best hand?".to_string(),
        best.to_string(),
        category_distractors(Some(best)),
        rng,
    ));

    let nuts = match analysis.nuts {
        Nuts::PocketAces => None,
        Nuts::Hand(category) => Some(category),
    };
    questions.push(Question::new(
        QuestionKind::Nuts,
        "What is the nuts (opponent's best possible hand)?".to_string(),
        analysis.nuts.to_string(),
        category_distractors(nuts),
        rng,
    ));

    if situation.board().len() >= 5 {
        return Ok(questions);
    }

    let outs = analysis.outs.total();
    questions.push(Question::new(
        QuestionKind::Outs,
        "How many outs do you have to improve?".to_string(),
        outs.to_string(),
        outs_distractors(outs),
        rng,
    ));

    if outs > 0 {
        questions.push(Question::new(
            QuestionKind::Equity,
            "What is your equity percentage?".to_string(),
            format!("{}%", analysis.equity),
            equity_distractors(analysis.equity),
            rng,
        ));
    }

    let scenario = situation.pot_odds();
    if let (Some(scenario), Some((pot_odds, decision))) = (scenario, analysis.pot_odds) {
        let stakes = format!("Pot: {}, Bet to call: {}.", scenario.pot, scenario.bet);

        questions.push(Question::new(
            QuestionKind::PotOdds,
            format!("{stakes} What are the pot odds?"),
            format!("{pot_odds}%"),
            pot_odds_distractors(pot_odds),
            rng,
        ));

        questions.push(Question::new(
            QuestionKind::Decision,
            format!("{stakes} Based on your hand analysis, what should you do?"),
            decision.to_string(),
            decision_distractors(decision),
            rng,
        ));
    }

    Ok(questions)
}

fn category_distractors(correct: Option<HandCategory>) -> Vec<String> {
    HandCategory::ALL
        .into_iter()
        .filter(|c| Some(*c) != correct)
        .map(|c| c.to_string())
        .collect()
}

fn outs_distractors(correct: usize) -> Vec<String> {
    (correct.saturating_sub(3)..=correct + 3)
        .filter(|&n| n != correct && n <= 20)
        .map(|n| n.to_string())
        .collect()
}

fn equity_distractors(correct: f64) -> Vec<String> {
    (5..=95)
        .step_by(5)
        .filter(|&n| (n as f64 - correct).abs() > 5.0)
        .map(|n| format!("{n}%"))
        .collect()
}

fn pot_odds_distractors(correct: f64) -> Vec<String> {
    POT_ODDS_CHOICES
        .into_iter()
        .filter(|n| (n - correct).abs() > 2.0)
        .map(|n| format!("{n}%"))
        .collect()
}

fn decision_distractors(correct: Decision) -> Vec<String> {
    let other = match correct {
        Decision::Call => Decision::Fold,
        Decision::Fold => Decision::Call,
    };

    vec![other.to_string(), "RAISE".to_string(), "CHECK".to_string()]
}

/// A quiz for one situation and the answers given so far.
#[derive(Debug, Clone)]
pub struct QuizSession {
    situation: Situation,
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
}

impl QuizSession {
    /// Creates a quiz session for a situation with a board.
    pub fn new<R>(situation: Situation, rng: &mut R) -> Result<Self, QuizError>
    where
        R: Rng + ?Sized,
    {
        let questions = build_quiz(&situation, rng)?;
        let answers = vec![None; questions.len()];
        Ok(Self {
            situation,
            questions,
            answers,
        })
    }

    /// The quiz situation.
    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    /// The quiz questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Records the answer to a question, returns true if it is correct.
    pub fn answer(&mut self, index: usize, answer: &str) -> Result<bool, QuizError> {
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::NoQuestion(index))?;

        let correct = question.correct == answer;
        self.answers[index] = Some(answer.to_string());
        Ok(correct)
    }

    /// Grades the answers, `timestamp` is the result time in seconds since
    /// the epoch.
    pub fn grade(&self, timestamp: u64) -> QuizResult {
        let answers = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| AnswerRecord {
                question: question.prompt.clone(),
                kind: question.kind,
                user_answer: answer.clone(),
                correct_answer: question.correct.clone(),
                is_correct: answer.as_deref() == Some(question.correct.as_str()),
            })
            .collect::<Vec<_>>();

        let score = answers.iter().filter(|a| a.is_correct).count();
        let total_questions = answers.len();
        let percentage = if total_questions == 0 {
            0
        } else {
            (score as f64 / total_questions as f64 * 100.0).round() as u32
        };

        QuizResult {
            timestamp,
            situation: self.situation.clone(),
            answers,
            score,
            total_questions,
            percentage,
        }
    }
}

/// A graded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The question text.
    pub question: String,
    /// What the question asked.
    pub kind: QuestionKind,
    /// The user answer, none if not answered.
    pub user_answer: Option<String>,
    /// The correct answer.
    pub correct_answer: String,
    /// Whether the user answer is correct.
    pub is_correct: bool,
}

/// A graded quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Seconds since the epoch.
    pub timestamp: u64,
    /// The quiz situation.
    pub situation: Situation,
    /// The graded answers.
    pub answers: Vec<AnswerRecord>,
    /// The number of correct answers.
    pub score: usize,
    /// The number of questions.
    pub total_questions: usize,
    /// The rounded score percentage.
    pub percentage: u32,
}

impl QuizResult {
    /// The score bucket for this result.
    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::of(self.percentage)
    }
}

/// Score ranges used to filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    /// 100%.
    Perfect,
    /// 80% to 99%.
    Good,
    /// 60% to 79%.
    Fair,
    /// Below 60%.
    Poor,
}

impl ScoreBucket {
    /// The bucket for a percentage.
    pub fn of(percentage: u32) -> Self {
        match percentage {
            100.. => ScoreBucket::Perfect,
            80..=99 => ScoreBucket::Good,
            60..=79 => ScoreBucket::Fair,
            _ => ScoreBucket::Poor,
        }
    }
}

/// Summary statistics over quiz results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizStats {
    /// Number of quizzes.
    pub total: usize,
    /// Rounded average percentage.
    pub average: u32,
    /// Number of perfect scores.
    pub perfect: usize,
    /// Rounded average percentage of the 5 most recent quizzes.
    pub recent_average: u32,
}

impl QuizStats {
    /// Number of recent results in the recent average.
    pub const RECENT: usize = 5;

    /// Computes the stats for results sorted newest first, none if there
    /// are no results.
    pub fn of(results: &[QuizResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let recent = &results[..results.len().min(Self::RECENT)];
        Some(Self {
            total: results.len(),
            average: average(results),
            perfect: results
                .iter()
                .filter(|r| r.bucket() == ScoreBucket::Perfect)
                .count(),
            recent_average: average(recent),
        })
    }
}

fn average(results: &[QuizResult]) -> u32 {
    let sum = results.iter().map(|r| r.percentage as f64).sum::<f64>();
    (sum / results.len() as f64).round() as u32
}
