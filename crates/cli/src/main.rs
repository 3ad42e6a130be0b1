// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker house way CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::prelude::*;
use std::io;

use paigow_eval::{
    ArrangedHand, Card, Deck, HandDigest, HouseWay, JokerRule, Seat, StrategyKind, candidates,
    format_cards, parse_cards,
};

pub mod terminal;
use terminal::Terminal;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Play the strongest low hand.
    Simple,
    /// Play the Wong house way.
    Wong,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simple => StrategyKind::Simple,
            StrategyArg::Wong => StrategyKind::Wong,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum JokerArg {
    /// The joker completes straights and flushes, otherwise it is an ace.
    Bug,
    /// The joker is fully wild.
    Wild,
}

impl From<JokerArg> for JokerRule {
    fn from(arg: JokerArg) -> Self {
        match arg {
            JokerArg::Bug => JokerRule::Bug,
            JokerArg::Wild => JokerRule::Wild,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// The strategy used to set the hands.
    #[clap(long, value_enum, default_value_t = StrategyArg::Wong, global = true)]
    strategy: StrategyArg,
    /// How the joker plays.
    #[clap(long, value_enum, default_value_t = JokerArg::Bug, global = true)]
    joker: JokerArg,
    /// Set the hands as the banker.
    #[clap(long, global = true)]
    banker: bool,
    /// Print the cards without colors.
    #[clap(long, global = true)]
    no_color: bool,
    /// Log the rules that set the hands.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sets a seven cards hand the house way.
    Arrange {
        /// The seven cards, for example "AS KD jo 7C 7H 3D 2S".
        hand: String,
    },
    /// Lists the settings of a hand that are neither foul nor dominated.
    Settings {
        /// The seven cards.
        hand: String,
    },
    /// Scores a five cards high hand or a two cards low hand.
    Classify {
        /// The five or two cards.
        hand: String,
    },
    /// Shows how the joker and the cards of a hand play.
    Digest {
        /// The hand cards.
        hand: String,
    },
    /// Settles a player setting against the house hand.
    Compare {
        /// The player five cards high hand.
        high: String,
        /// The player two cards low hand.
        low: String,
        /// The house seven cards, set as the banker.
        house: String,
    },
    /// Deals random hands and sets them the house way.
    Sample {
        /// Number of hands.
        #[clap(long, short, default_value_t = 10)]
        count: usize,
        /// The random generator seed.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let way = HouseWay::new(cli.strategy.into(), cli.joker.into());
    let seat = Seat::from_banker(cli.banker);
    let mut term = Terminal::new(io::stdout(), !cli.no_color);

    match cli.command {
        Command::Arrange { hand } => arrange(&mut term, way, seat, &hand),
        Command::Settings { hand } => settings(&mut term, way, seat, &hand),
        Command::Classify { hand } => {
            let cards = parse_cards(&hand)?;
            let score = way.classify(&cards)?;
            term.print_score(&cards, &score)
        }
        Command::Digest { hand } => {
            let cards = parse_cards(&hand)?;
            let digest = HandDigest::with_rule(&cards, way.joker);
            term.print_digest(&cards, &digest)
        }
        Command::Compare { high, low, house } => compare(&mut term, way, &high, &low, &house),
        Command::Sample { count, seed } => sample(&mut term, way, seat, count, seed),
    }
}

fn arrange<W: io::Write>(
    term: &mut Terminal<W>,
    way: HouseWay,
    seat: Seat,
    hand: &str,
) -> Result<()> {
    let cards = parse_cards(hand)?;
    let arranged = way.resolve_cards(&cards, seat)?;
    term.print_arranged("Hand", &arranged)
}

fn settings<W: io::Write>(
    term: &mut Terminal<W>,
    way: HouseWay,
    seat: Seat,
    hand: &str,
) -> Result<()> {
    let cards = parse_cards(hand)?;
    let chosen = way.resolve_cards(&cards, seat)?;

    // The hand is valid once it has been set.
    let hand: [Card; 7] = match cards.try_into() {
        Ok(hand) => hand,
        Err(cards) => bail!("Expected 7 cards, found {}", cards.len()),
    };

    let settings = candidates(&hand, way.joker)
        .into_iter()
        .map(|s| (s, ArrangedHand::new(&hand, &s, way.joker, "")))
        .collect::<Vec<_>>();

    term.print_settings(&settings, &chosen)?;
    term.print_arranged("Chosen", &chosen)
}

fn compare<W: io::Write>(
    term: &mut Terminal<W>,
    way: HouseWay,
    high: &str,
    low: &str,
    house: &str,
) -> Result<()> {
    let player = way.validate_setting(&parse_cards(high)?, &parse_cards(low)?)?;
    let house = way.resolve_cards(&parse_cards(house)?, Seat::Banker)?;

    if let Some(card) = player.cards().iter().find(|c| house.cards().contains(c)) {
        bail!("Card {card} is in both hands");
    }

    term.print_showdown(&player, &house)
}

fn sample<W: io::Write>(
    term: &mut Terminal<W>,
    way: HouseWay,
    seat: Seat,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!("Setting {count} hands with the {} strategy", way.strategy);

    for _ in 0..count {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let cards = (0..7).filter_map(|_| deck.deal()).collect::<Vec<_>>();
        let arranged = way.resolve_cards(&cards, seat)?;
        debug!("Dealt {}", format_cards(&cards));
        term.print_arranged("Hand", &arranged)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut Terminal<Vec<u8>>) -> Result<()>) -> String {
        let mut term = Terminal::new(Vec::new(), false);
        f(&mut term).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["paigow", "arrange", "AS KD jo 7C 7H 3D 2S", "--banker"])
            .unwrap();
        assert!(cli.banker);
        assert!(matches!(cli.strategy, StrategyArg::Wong));
        assert!(matches!(cli.command, Command::Arrange { .. }));

        let cli = Cli::try_parse_from(["paigow", "--strategy", "simple", "sample", "-c", "3"])
            .unwrap();
        assert!(matches!(cli.strategy, StrategyArg::Simple));
        assert!(matches!(cli.command, Command::Sample { count: 3, seed: None }));
    }

    #[test]
    fn arrange_command() {
        let way = HouseWay::default();
        let out = run(|t| arrange(t, way, Seat::Banker, "KC KD 5H 5S AC 9D 3H"));
        assert!(out.starts_with("Hand    AC KC KD 9D 3H | 5S 5H"));

        let mut term = Terminal::new(Vec::new(), false);
        assert!(arrange(&mut term, way, Seat::Banker, "KC KD 5H").is_err());
        assert!(arrange(&mut term, way, Seat::Banker, "KC KX 5H 5S AC 9D 3H").is_err());
    }

    #[test]
    fn settings_command() {
        let way = HouseWay::default();
        let out = run(|t| settings(t, way, Seat::Player, "KC KD 5H 5S AC 9D 3H"));
        assert_eq!(out.lines().filter(|l| l.starts_with('*')).count(), 1);
        assert!(out.contains("Chosen  AC KC KD 9D 3H | 5S 5H"));
    }

    #[test]
    fn compare_command() {
        let way = HouseWay::default();
        let out = run(|t| compare(t, way, "AH AS 8C 7C 2C", "6D 6H", "KC KD 5H 5S AC 9D 3H"));
        assert!(out.contains("Result: Win"));

        let mut term = Terminal::new(Vec::new(), false);
        let err = compare(&mut term, way, "AH AS 8C 7C 2C", "6D 6H", "KC KD 5H 5S AH 9D 3H");
        assert!(err.is_err());
    }

    #[test]
    fn sample_command() {
        let way = HouseWay::default();
        let out = run(|t| sample(t, way, Seat::Player, 5, Some(42)));
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().all(|l| l.contains(" | ")));
    }
}
