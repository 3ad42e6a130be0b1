// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Sets all the 154M Pai Gow hands and counts the rules that set them, run
// with:
//
// ```bash
// $ cargo r --release --features=parallel --example house_all7 -- --tasks 8
// ```
//
// or sample hands with `--samples 100000`.

use clap::Parser;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use paigow_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4)]
    tasks: usize,
    /// Number of hands sampled by each task, all hands if not set.
    #[clap(long, short)]
    samples: Option<usize>,
    /// The seed for sampled hands.
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Set the banker hand.
    #[clap(long)]
    banker: bool,
    /// Use the simple strategy.
    #[clap(long)]
    simple: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let strategy = if cli.simple {
        StrategyKind::Simple
    } else {
        StrategyKind::Wong
    };

    let way = HouseWay::new(strategy, JokerRule::Bug);
    let seat = Seat::from_banker(cli.banker);

    // The Wong rules followed by the default rule.
    let mut rules = WongStrategy::rules()
        .iter()
        .map(|r| r.name)
        .collect::<Vec<_>>();
    rules.push(DefaultStrategy::RULE);

    const NUM_CATEGORIES: usize = 10;

    // Create per task counters to avoid contention.
    let counters = |n: usize| {
        (0..cli.tasks)
            .map(|_| (0..n).map(|_| AtomicU64::new(0)).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };

    let rule_counters = counters(rules.len());
    let category_counters = counters(NUM_CATEGORIES);

    let now = Instant::now();

    let set_hand = |task_id: usize, cards: &[Card]| {
        let arranged = match way.resolve_cards(cards, seat) {
            Ok(arranged) => arranged,
            Err(e) => panic!("Hand {} error: {e}", format_cards(cards)),
        };

        if let Some(idx) = rules.iter().position(|r| *r == arranged.rule()) {
            rule_counters[task_id][idx].fetch_add(1, Ordering::Relaxed);
        }

        let category = arranged.high_score().category() as usize;
        category_counters[task_id][category].fetch_add(1, Ordering::Relaxed);
    };

    let deck = Deck::default();
    match cli.samples {
        Some(samples) => deck.par_sample(cli.tasks, samples, 7, cli.seed, set_hand),
        None => deck.par_for_each(cli.tasks, 7, set_hand),
    }

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let aggregate = |counters: &[Vec<AtomicU64>], idx: usize| {
        counters
            .iter()
            .map(|c| c[idx].load(Ordering::Relaxed))
            .sum::<u64>()
    };

    let total = (0..NUM_CATEGORIES)
        .map(|idx| aggregate(&category_counters, idx))
        .sum::<u64>();

    println!("Strategy:        {strategy} {seat}");
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (idx, rule) in rules.iter().enumerate() {
        println!("{:<17}{}", format!("{rule}:"), aggregate(&rule_counters, idx));
    }

    println!();
    for category in Category::categories() {
        let count = aggregate(&category_counters, category as usize);
        println!("{:<17}{count}", format!("{category}:"));
    }
}
