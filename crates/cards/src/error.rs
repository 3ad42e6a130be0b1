// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards parsing and decoding errors.
use thiserror::Error;

/// An error decoding or parsing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Unknown rank character.
    #[error("invalid rank character '{0}'")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("invalid suit character '{0}'")]
    InvalidSuit(char),
    /// A card text that is not a rank and a suit.
    #[error("incomplete card '{0}'")]
    Incomplete(String),
    /// A byte that doesn't encode a card.
    #[error("invalid card encoding 0x{0:02x}")]
    InvalidEncoding(u8),
}
