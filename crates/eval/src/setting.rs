// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The ways to set a Pai Gow hand.
use std::fmt;

use crate::Card;

/// The number of settings of a seven cards hand, 7 choose 2.
pub const NUM_SETTINGS: usize = 21;

/// All the settings in enumeration order.
pub static SETTINGS: [Setting; NUM_SETTINGS] = make_settings();

/// A setting of a seven cards hand.
///
/// A setting holds the positions of the two cards that play in the low hand,
/// the other five cards play in the high hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Setting {
    low: (u8, u8),
}

impl Setting {
    /// Creates a setting with the two low hand positions, panics if the
    /// positions are not 0 <= i < j < 7.
    pub const fn new(i: usize, j: usize) -> Self {
        assert!(i < j && j < 7, "0 <= i < j < 7");
        Self {
            low: (i as u8, j as u8),
        }
    }

    /// All the settings in enumeration order.
    pub fn all() -> &'static [Setting; NUM_SETTINGS] {
        &SETTINGS
    }

    /// The low hand positions.
    pub fn low(&self) -> (usize, usize) {
        (self.low.0 as usize, self.low.1 as usize)
    }

    /// Checks if the card at the given position plays in the low hand.
    pub fn is_low(&self, position: usize) -> bool {
        let (i, j) = self.low();
        position == i || position == j
    }

    /// Returns a new hand with the five high hand cards first, in their
    /// original order, followed by the two low hand cards.
    pub fn apply(&self, hand: &[Card; 7]) -> [Card; 7] {
        let (i, j) = self.low();
        let mut cards = [Card::JOKER; 7];

        let high = hand
            .iter()
            .enumerate()
            .filter(|(pos, _)| !self.is_low(*pos))
            .map(|(_, card)| *card);
        for (slot, card) in cards.iter_mut().zip(high) {
            *slot = card;
        }

        cards[5] = hand[i];
        cards[6] = hand[j];
        cards
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low.0, self.low.1)
    }
}

const fn make_settings() -> [Setting; NUM_SETTINGS] {
    let mut settings = [Setting { low: (0, 1) }; NUM_SETTINGS];
    let mut idx = 0;

    let mut i = 0;
    while i < 7 {
        let mut j = i + 1;
        while j < 7 {
            settings[idx] = Setting::new(i, j);
            idx += 1;
            j += 1;
        }
        i += 1;
    }

    settings
}
