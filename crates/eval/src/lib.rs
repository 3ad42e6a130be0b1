// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker hand evaluator and house way.
//!
//! A Pai Gow hand has seven cards from a deck of 52 cards and a joker, the
//! cards are set into a five cards high hand and a two cards low hand that
//! must score lower than the high hand. The joker completes a straight, a
//! flush, or a straight flush, otherwise it plays as an ace.
//!
//! Use [resolve] to set a hand the house way, the result is the seven cards
//! with the high hand first in display order:
//!
//! ```
//! # use paigow_eval::*;
//! let hand = parse_cards("3H 4H 5H jo 7H 8H 9H").unwrap();
//! let arranged = resolve(hand.try_into().unwrap(), false).unwrap();
//! assert_eq!(arranged.to_string(), "7H jo 5H 4H 3H | 9H 8H");
//! assert_eq!(arranged.high_score().to_string(), "Straight Flush, Seven high");
//! ```
//!
//! and [classify] to score a hand set by a player:
//!
//! ```
//! # use paigow_eval::*;
//! let high = classify(&parse_cards("ACADACASJO").unwrap()).unwrap();
//! assert_eq!(high.to_string(), "Five Aces");
//!
//! let low = classify(&parse_cards("KS KD").unwrap()).unwrap();
//! assert!(high > low);
//! ```
//!
//! A [HouseWay] configures the strategy and the joker rule:
//!
//! ```
//! # use paigow_eval::*;
//! let way = HouseWay::new(StrategyKind::Simple, JokerRule::Bug);
//! let hand = parse_cards("KC KD 5H 5S AC 9D 3H").unwrap();
//! let arranged = way.resolve_cards(&hand, Seat::Banker).unwrap();
//! assert_eq!(arranged.low_score().category(), Category::Pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod arrange;
pub use arrange::{ArrangedHand, Showdown};

mod digest;
pub use digest::{Flush, HandDigest, JokerRule, Run, Substitution};

mod error;
pub use error::EvalError;

mod house;
pub use house::{HouseWay, PLAYER_RULE, classify, resolve, validate_setting};

mod prune;
pub use prune::{ScoredSetting, candidates, prune, score_settings};

mod score;
pub use score::{Category, PokerScore};

mod setting;
pub use setting::{NUM_SETTINGS, SETTINGS, Setting};

pub mod strategy;
pub use strategy::{
    CategorySet, Context, DefaultStrategy, Seat, Selection, Strategy, StrategyKind, WongStrategy,
};

// Reexport cards types.
pub use paigow_cards::{Card, CardError, Deck, Rank, Suit, format_cards, parse_cards};
