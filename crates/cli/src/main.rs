// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdrill terminal drill.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    io,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use pokerdrill_core::{Analysis, PotOddsScenario, QuizSession, ScoreBucket, Situation, Street};
use pokerdrill_eval::parse_cards;

pub mod history;
pub mod terminal;

use history::History;

#[derive(Debug, Parser)]
#[clap(about = "Poker situations drill")]
struct Cli {
    /// The street to deal situations on.
    #[clap(long, value_enum, default_value_t = StreetArg::Random)]
    street: StreetArg,
    /// Seed for reproducible situations.
    #[clap(long)]
    seed: Option<u64>,
    /// The quiz history file.
    #[clap(long)]
    history: Option<PathBuf>,
    /// The pot size, requires --bet.
    #[clap(long)]
    pot: Option<u32>,
    /// The bet to call, requires --pot.
    #[clap(long)]
    bet: Option<u32>,
    #[clap(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Deal a situation and show its analysis.
    Analyze,
    /// Deal a situation and run a quiz on it.
    Quiz,
    /// Show the quiz history.
    Review {
        /// Show only results in this score range.
        #[clap(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Show the pot odds scenario and the answers of each quiz.
        #[clap(long)]
        details: bool,
    },
    /// Delete the quiz history.
    Clear,
    /// Analyze the given cards, the first two are the hand.
    Eval {
        /// Cards like `As Kh 10d`.
        #[clap(required = true)]
        cards: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StreetArg {
    Flop,
    Turn,
    River,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Perfect,
    Good,
    Fair,
    Poor,
}

/// What to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Show a situation analysis.
    Analyze,
    /// Run a quiz.
    Quiz,
    /// Show the history.
    Review {
        /// Show only results in this bucket, all if none.
        filter: Option<ScoreBucket>,
        /// Show the answers of each quiz.
        details: bool,
    },
    /// Delete the history.
    Clear,
    /// Analyze user cards.
    Eval(String),
}

/// The drill configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// What to run.
    pub task: Task,
    /// The street, random if none.
    pub street: Option<Street>,
    /// The RNG seed, random if none.
    pub seed: Option<u64>,
    /// The quiz history file.
    pub history: PathBuf,
    /// The pot odds scenario, random if none.
    pub pot_odds: Option<PotOddsScenario>,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let pot_odds = match (cli.pot, cli.bet) {
            (Some(pot), Some(bet)) => Some(PotOddsScenario::new(pot, bet)),
            (None, None) => None,
            _ => bail!("--pot and --bet must be given together"),
        };

        let history = match cli.history {
            Some(path) => path,
            None => directories::ProjectDirs::from("", "", "pokerdrill")
                .map(|dirs| dirs.data_dir().join("history.json"))
                .ok_or_else(|| anyhow!("Cannot find a data directory, use --history"))?,
        };

        let street = match cli.street {
            StreetArg::Flop => Some(Street::Flop),
            StreetArg::Turn => Some(Street::Turn),
            StreetArg::River => Some(Street::River),
            StreetArg::Random => None,
        };

        let task = match cli.command.unwrap_or(CliCommand::Quiz) {
            CliCommand::Analyze => Task::Analyze,
            CliCommand::Quiz => Task::Quiz,
            CliCommand::Review { filter, details } => Task::Review {
                filter: match filter {
                    FilterArg::All => None,
                    FilterArg::Perfect => Some(ScoreBucket::Perfect),
                    FilterArg::Good => Some(ScoreBucket::Good),
                    FilterArg::Fair => Some(ScoreBucket::Fair),
                    FilterArg::Poor => Some(ScoreBucket::Poor),
                },
                details,
            },
            CliCommand::Clear => Task::Clear,
            CliCommand::Eval { cards } => Task::Eval(cards.join(" ")),
        };

        Ok(Config {
            task,
            street,
            seed: cli.seed,
            history,
            pot_odds,
        })
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = Config::try_from(cli).and_then(run) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let history = History::new(&config.history);
    let mut stdout = io::stdout();

    match &config.task {
        Task::Analyze => {
            let situation = deal(&config, &mut rng);
            terminal::print_situation(&mut stdout, &situation)?;
            if let Some(analysis) = Analysis::of(&situation) {
                terminal::print_analysis(&mut stdout, &situation, &analysis)?;
            }
        }
        Task::Quiz => {
            let situation = deal(&config, &mut rng);
            let mut input = io::stdin().lock();
            quiz(&history, situation, &mut rng, &mut stdout, &mut input)?;
        }
        Task::Review { filter, details } => {
            let results = history.load()?;
            let now = now()?;
            terminal::print_review(&mut stdout, &results, *filter, *details, now)?;
        }
        Task::Clear => {
            if history.clear()? {
                info!("Removed quiz history {}", config.history.display());
            } else {
                info!("No quiz history to remove");
            }
        }
        Task::Eval(text) => eval(&mut stdout, text, config.pot_odds)?,
    }

    Ok(())
}

/// Runs a quiz and records its result.
///
/// The history is read before the first question so that a bad history file
/// fails before the user answers.
fn quiz(
    history: &History,
    situation: Situation,
    rng: &mut StdRng,
    w: &mut impl io::Write,
    input: &mut impl io::BufRead,
) -> Result<()> {
    let mut results = history.load()?;

    let mut session = QuizSession::new(situation, rng)?;
    terminal::run_quiz(w, input, &mut session)?;

    let result = session.grade(now()?);
    terminal::print_result(w, &result)?;
    history.record(&mut results, result)
}

/// Prints the situation and the analysis for user cards.
fn eval(w: &mut impl io::Write, text: &str, pot_odds: Option<PotOddsScenario>) -> Result<()> {
    let situation = user_situation(text)?;
    let situation = match pot_odds {
        Some(pot_odds) => situation.with_pot_odds(pot_odds),
        None => situation,
    };

    terminal::print_situation(w, &situation)?;
    match Analysis::of(&situation) {
        Some(analysis) => terminal::print_analysis(w, &situation, &analysis)?,
        None => writeln!(w, "Add flop, turn, or river cards to analyze the hand.")?,
    }

    Ok(())
}

/// Deals a random situation with a pot odds scenario.
fn deal(config: &Config, rng: &mut StdRng) -> Situation {
    let situation = match config.street {
        Some(street) => Situation::generate_on(rng, street),
        None => Situation::generate(rng),
    };

    let pot_odds = config
        .pot_odds
        .unwrap_or_else(|| PotOddsScenario::random(rng));
    situation.with_pot_odds(pot_odds)
}

/// Builds a situation from user cards, the first two are the hand.
fn user_situation(text: &str) -> Result<Situation> {
    let cards = parse_cards(text)?;
    if cards.len() < 2 {
        bail!("Expected at least two hand cards, got {}", cards.len());
    }

    let situation = Situation::new([cards[0], cards[1]], cards[2..].to_vec())?;
    Ok(situation)
}

fn now() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}
