// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation errors.
use thiserror::Error;

use crate::{Card, CardError, PokerScore};

/// An error validating a hand before evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand with the wrong number of cards.
    #[error("expected {expected} cards, found {found}")]
    CardCount {
        /// The accepted number of cards.
        expected: &'static str,
        /// The number of cards in the hand.
        found: usize,
    },
    /// A card that appears more than once, or a second joker.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A low hand that doesn't score lower than the high hand.
    #[error("foul hand, low hand {low} doesn't play under high hand {high}")]
    Foul {
        /// The high hand score.
        high: PokerScore,
        /// The low hand score.
        low: PokerScore,
    },
    /// A card parsing or decoding error.
    #[error(transparent)]
    Card(#[from] CardError),
}
