// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow Poker cards types.
//!
//! This crate define types to create cards, each card is encoded in one byte
//! with the rank in the low nibble and the suit in the high nibble:
//!
//! ```
//! # use paigow_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.byte(), 0x3e);
//! assert_eq!(Card::from_byte(0x3e), Some(ah));
//! assert!(Card::JOKER.is_joker());
//! ```
//!
//! cards can be parsed from and formatted to text:
//!
//! ```
//! # use paigow_cards::{parse_cards, format_cards};
//! let hand = parse_cards("ACADACASJO").unwrap();
//! assert_eq!(format_cards(&hand), "AC AD AC AS jo");
//! ```
//!
//! and a [Deck] type with the 53 Pai Gow cards for shuffling, sampling, and
//! iterating hands:
//!
//! ```no_run
//! # use paigow_cards::Deck;
//! // Iterate through all 7 cards hands (154M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 154_143_080);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration and sampling with a
//! given number of tasks, the closure `task_id` can be used to store per task
//! data to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use paigow_cards::Deck;
//! // Sample 10 7-cards hands from each of 4 tasks.
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 10, 7, 42, |_task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, format_cards, parse_cards};

mod deck;
pub use deck::Deck;

mod error;
pub use error::CardError;

#[cfg(feature = "parallel")]
mod parallel;
