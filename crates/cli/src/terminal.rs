// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use crossterm::{
    queue,
    style::{self, Color, StyledContent, Stylize},
};
use std::io;

use pokerdrill_core::{Analysis, QuizResult, QuizSession, QuizStats, ScoreBucket, Situation};
use pokerdrill_eval::{Card, Suit};

/// Card text colored with the four colors scheme.
fn styled_card(card: Card) -> StyledContent<String> {
    let text = card.to_string();
    match card.suit() {
        Suit::Spades => style::style(text),
        Suit::Hearts => text.with(Color::Red),
        Suit::Diamonds => text.with(Color::Blue),
        Suit::Clubs => text.with(Color::Green),
    }
}

fn print_cards(w: &mut impl io::Write, cards: &[Card]) -> Result<()> {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            queue!(w, style::Print(" "))?;
        }
        queue!(w, style::PrintStyledContent(styled_card(*card)))?;
    }

    Ok(())
}

/// Prints the hand, the board, and the pot odds scenario.
pub fn print_situation(w: &mut impl io::Write, situation: &Situation) -> Result<()> {
    let street = situation
        .street()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "preflop".to_string());

    let title = format!("Situation ({street})").bold();
    queue!(w, style::PrintStyledContent(title))?;
    queue!(w, style::Print("\n  Hand:  "))?;
    print_cards(w, situation.hand())?;
    queue!(w, style::Print("\n  Board: "))?;
    print_cards(w, situation.board())?;

    if let Some(scenario) = situation.pot_odds() {
        let text = format!("\n  Pot:   {}, bet to call {}", scenario.pot, scenario.bet);
        queue!(w, style::Print(text))?;
    }

    queue!(w, style::Print("\n\n"))?;
    w.flush()?;

    Ok(())
}

/// Prints a situation analysis.
pub fn print_analysis(
    w: &mut impl io::Write,
    situation: &Situation,
    analysis: &Analysis,
) -> Result<()> {
    queue!(w, style::PrintStyledContent("Analysis".bold()))?;

    let best = format!("\n  Best hand: {} ", analysis.best.category());
    queue!(w, style::Print(best))?;
    print_cards(w, analysis.best.cards())?;

    queue!(w, style::Print(format!("\n  Nuts:      {}", analysis.nuts)))?;

    if situation.board().len() < 5 {
        let outs = &analysis.outs;
        queue!(w, style::Print(format!("\n  Outs:      {}", outs.total())))?;
        for (label, cards) in outs.by_label() {
            let text = format!("\n    {label} ({}): ", cards.len());
            queue!(w, style::Print(text))?;
            print_cards(w, cards)?;
        }

        let equity = format!(
            "\n  Equity:    {}% (rule of 4 and 2: {}%)",
            analysis.equity, analysis.rule_of_thumb
        );
        queue!(w, style::Print(equity))?;

        for (category, equity) in &analysis.equity_by_category {
            queue!(w, style::Print(format!("\n    {category}: {equity}%")))?;
        }
    }

    if let Some((pot_odds, decision)) = analysis.pot_odds {
        let text = format!("\n  Pot odds:  {pot_odds}% -> ");
        queue!(w, style::Print(text))?;
        queue!(w, style::PrintStyledContent(decision.to_string().bold()))?;
    }

    queue!(w, style::Print("\n\n"))?;
    w.flush()?;

    Ok(())
}

fn option_letter(idx: usize) -> char {
    (b'A' + idx as u8) as char
}

/// Parses an option letter, case insensitive.
fn parse_choice(text: &str, options: usize) -> Option<usize> {
    let mut chars = text.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !c.is_ascii_uppercase() {
        return None;
    }

    let idx = (c as u8 - b'A') as usize;
    (idx < options).then_some(idx)
}

fn read_choice(
    w: &mut impl io::Write,
    input: &mut impl io::BufRead,
    options: usize,
) -> Result<usize> {
    let last = option_letter(options - 1);
    loop {
        write!(w, "Answer [A-{last}]: ")?;
        w.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Quiz aborted");
        }

        match parse_choice(line.trim(), options) {
            Some(idx) => return Ok(idx),
            None => writeln!(w, "Choose a letter between A and {last}")?,
        }
    }
}

/// Asks the quiz questions and records the answers read from `input`.
pub fn run_quiz(
    w: &mut impl io::Write,
    input: &mut impl io::BufRead,
    session: &mut QuizSession,
) -> Result<()> {
    print_situation(w, session.situation())?;

    let questions = session.questions().to_vec();
    for (qidx, question) in questions.iter().enumerate() {
        let title = format!("{}. {}", qidx + 1, question.prompt);
        queue!(w, style::PrintStyledContent(title.bold()))?;
        queue!(w, style::Print("\n"))?;
        for (idx, option) in question.options.iter().enumerate() {
            let text = format!("  {}) {option}\n", option_letter(idx));
            queue!(w, style::Print(text))?;
        }

        let choice = read_choice(w, input, question.options.len())?;
        if session.answer(qidx, &question.options[choice])? {
            queue!(w, style::PrintStyledContent("Correct".green()))?;
        } else {
            let text = format!("Wrong, the answer is {}", question.correct);
            queue!(w, style::PrintStyledContent(text.red()))?;
        }

        queue!(w, style::Print("\n\n"))?;
        w.flush()?;
    }

    Ok(())
}

fn bucket_color(bucket: ScoreBucket) -> Color {
    match bucket {
        ScoreBucket::Perfect => Color::Green,
        ScoreBucket::Good => Color::Blue,
        ScoreBucket::Fair => Color::Yellow,
        ScoreBucket::Poor => Color::Red,
    }
}

fn score_text(result: &QuizResult) -> StyledContent<String> {
    let text = format!(
        "{}/{} ({}%)",
        result.score, result.total_questions, result.percentage
    );
    text.with(bucket_color(result.bucket()))
}

/// Prints a graded quiz.
pub fn print_result(w: &mut impl io::Write, result: &QuizResult) -> Result<()> {
    queue!(w, style::Print("Score: "))?;
    queue!(w, style::PrintStyledContent(score_text(result)))?;
    queue!(w, style::Print("\n"))?;
    w.flush()?;
    Ok(())
}

/// Formats how long ago a timestamp was.
fn format_age(now: u64, timestamp: u64) -> String {
    let secs = now.saturating_sub(timestamp);
    match secs {
        0..60 => "just now".to_string(),
        60..3600 => format!("{}m ago", secs / 60),
        3600..86400 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86400),
    }
}

/// Prints the pot odds scenario and every answer of a graded quiz.
fn print_details(w: &mut impl io::Write, result: &QuizResult) -> Result<()> {
    if let Some(scenario) = result.situation.pot_odds() {
        let text = format!("\n    Pot: {}, bet to call {}", scenario.pot, scenario.bet);
        queue!(w, style::Print(text))?;
    }

    for (idx, record) in result.answers.iter().enumerate() {
        let text = format!("\n    {}. {}", idx + 1, record.question);
        queue!(w, style::Print(text))?;

        let answer = record.user_answer.as_deref().unwrap_or("No answer");
        let text = format!("\n       Your answer: {answer}");
        if record.is_correct {
            queue!(w, style::PrintStyledContent(text.green()))?;
        } else {
            queue!(w, style::PrintStyledContent(text.red()))?;
            let text = format!("\n       Correct answer: {}", record.correct_answer);
            queue!(w, style::Print(text))?;
        }
    }

    queue!(w, style::Print("\n"))?;
    Ok(())
}

/// Prints the history stats and the results in the `filter` bucket, or all
/// results if `filter` is none. With `details` every result also shows the
/// pot odds scenario and the answers.
pub fn print_review(
    w: &mut impl io::Write,
    results: &[QuizResult],
    filter: Option<ScoreBucket>,
    details: bool,
    now: u64,
) -> Result<()> {
    let Some(stats) = QuizStats::of(results) else {
        writeln!(w, "No quiz results yet.")?;
        return Ok(());
    };

    queue!(w, style::PrintStyledContent("Review".bold()))?;
    let text = format!(
        "\n  Quizzes: {}\n  Average: {}%\n  Perfect: {}\n  Recent:  {}% (last {})\n\n",
        stats.total, stats.average, stats.perfect, stats.recent_average, QuizStats::RECENT
    );
    queue!(w, style::Print(text))?;

    let mut shown = 0;
    for result in results {
        if filter.is_some_and(|bucket| result.bucket() != bucket) {
            continue;
        }

        let age = format!("  {:>9}  ", format_age(now, result.timestamp));
        queue!(w, style::Print(age))?;
        print_cards(w, result.situation.hand())?;
        queue!(w, style::Print(" | "))?;
        print_cards(w, result.situation.board())?;
        queue!(w, style::Print("  "))?;
        queue!(w, style::PrintStyledContent(score_text(result)))?;
        queue!(w, style::Print("\n"))?;
        if details {
            print_details(w, result)?;
        }

        shown += 1;
    }

    if shown == 0 {
        writeln!(w, "  No results match the filter.")?;
    }

    w.flush()?;
    Ok(())
}
