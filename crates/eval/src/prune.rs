// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Settings scoring and dominance pruning.
//!
//! Every setting of a hand is scored, the foul settings where the low hand
//! doesn't score lower than the high hand are discarded, then a setting is
//! discarded if another setting scores at least as well in both hands and
//! better in one of them.
use crate::{Card, HandDigest, JokerRule, PokerScore, Setting};

/// A setting with the scores of its high and low hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSetting {
    /// The setting.
    pub setting: Setting,
    /// The five cards high hand score.
    pub high: PokerScore,
    /// The two cards low hand score.
    pub low: PokerScore,
}

impl ScoredSetting {
    /// Scores a setting of a hand.
    pub fn new(setting: Setting, hand: &[Card; 7], rule: JokerRule) -> Self {
        let cards = setting.apply(hand);
        Self {
            setting,
            high: PokerScore::from_digest(&HandDigest::with_rule(&cards[..5], rule)),
            low: PokerScore::from_digest(&HandDigest::with_rule(&cards[5..], rule)),
        }
    }

    /// Checks if the low hand doesn't score lower than the high hand.
    pub fn is_foul(&self) -> bool {
        self.low >= self.high
    }

    /// Checks if this setting is at least as good as the other in both hands
    /// and better in one of them.
    pub fn dominates(&self, other: &ScoredSetting) -> bool {
        self.high >= other.high
            && self.low >= other.low
            && (self.high > other.high || self.low > other.low)
    }
}

/// Scores all the settings of a hand and returns the ones that are not foul in
/// enumeration order.
///
/// Panics if all the settings are foul.
pub fn score_settings(hand: &[Card; 7], rule: JokerRule) -> Vec<ScoredSetting> {
    let scored = Setting::all()
        .iter()
        .map(|s| ScoredSetting::new(*s, hand, rule))
        .filter(|s| !s.is_foul())
        .collect::<Vec<_>>();

    assert!(!scored.is_empty(), "All settings are foul for {hand:?}");
    scored
}

/// Removes the dominated settings keeping the others in their order.
///
/// Panics if all the settings are removed.
pub fn prune(scored: Vec<ScoredSetting>) -> Vec<ScoredSetting> {
    let pruned = scored
        .iter()
        .filter(|s| !scored.iter().any(|other| other.dominates(s)))
        .copied()
        .collect::<Vec<_>>();

    assert!(!pruned.is_empty(), "All settings are dominated");
    pruned
}

/// The settings of a hand that are neither foul nor dominated.
pub fn candidates(hand: &[Card; 7], rule: JokerRule) -> Vec<ScoredSetting> {
    prune(score_settings(hand, rule))
}
