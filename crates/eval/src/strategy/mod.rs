// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Strategies that pick a setting among the non dominated candidates.
//!
//! The [DefaultStrategy] plays the setting with the strongest low hand, the
//! [WongStrategy] looks at the high hand categories the candidates make and
//! applies the threshold tables of a published house way.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Category, HandDigest, Rank, ScoredSetting};

mod wong;
pub use wong::{Rule, WongStrategy};

/// The seat of the hand being arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// A player hand.
    #[default]
    Player,
    /// The banker hand, the banker wins copies.
    Banker,
}

impl Seat {
    /// Creates a seat from a banker flag.
    pub fn from_banker(is_banker: bool) -> Self {
        if is_banker { Seat::Banker } else { Seat::Player }
    }

    /// Checks if this is the banker seat.
    pub fn is_banker(&self) -> bool {
        matches!(self, Seat::Banker)
    }

    /// Index into the per seat tables.
    pub(crate) fn idx(&self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Banker => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Banker => write!(f, "banker"),
        }
    }
}

/// The strategies used to arrange hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Plays the strongest low hand.
    Simple,
    /// Plays the Wong house way.
    #[default]
    Wong,
}

impl StrategyKind {
    /// Returns the strategy for this kind.
    pub fn strategy(&self) -> &'static dyn Strategy {
        static SIMPLE: DefaultStrategy = DefaultStrategy;
        static WONG: WongStrategy = WongStrategy;

        match self {
            StrategyKind::Simple => &SIMPLE,
            StrategyKind::Wong => &WONG,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

/// A set of hand categories.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u16);

impl CategorySet {
    /// The empty set.
    pub const EMPTY: CategorySet = CategorySet(0);

    /// Creates a set with the given categories.
    pub const fn of(categories: &[Category]) -> Self {
        let mut bits = 0;
        let mut idx = 0;
        while idx < categories.len() {
            bits |= 1 << categories[idx] as u16;
            idx += 1;
        }

        Self(bits)
    }

    /// Adds a category to the set.
    pub fn insert(&mut self, category: Category) {
        self.0 |= 1 << category as u16;
    }

    /// Checks if the set contains a category.
    pub fn contains(&self, category: Category) -> bool {
        self.0 & (1 << category as u16) != 0
    }

    /// Checks if the two sets have a category in common.
    pub fn intersects(&self, other: CategorySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The set bits.
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// The categories in the set from the weakest to the strongest.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::categories().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(", "))
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategorySet({self})")
    }
}

/// The state a strategy looks at to pick a setting.
#[derive(Debug)]
pub struct Context<'a> {
    /// The seven cards hand.
    pub hand: &'a [Card; 7],
    /// The digest of the seven cards.
    pub digest: &'a HandDigest,
    /// The non dominated settings in enumeration order.
    pub candidates: &'a [ScoredSetting],
    /// The seat of the hand.
    pub seat: Seat,
    /// The high hand categories of the candidates.
    pub mask: CategorySet,
}

impl<'a> Context<'a> {
    /// Creates a context for a hand.
    pub fn new(
        hand: &'a [Card; 7],
        digest: &'a HandDigest,
        candidates: &'a [ScoredSetting],
        seat: Seat,
    ) -> Self {
        let mask = candidates.iter().map(|s| s.high.category()).collect();
        Self {
            hand,
            digest,
            candidates,
            seat,
            mask,
        }
    }

    /// The candidate at the given index.
    pub fn candidate(&self, idx: usize) -> &ScoredSetting {
        &self.candidates[idx]
    }

    /// The index of the candidate with the strongest low hand among the ones
    /// that match a predicate, the first one wins a tie.
    pub fn best_low_where<F>(&self, pred: F) -> Option<usize>
    where
        F: Fn(&ScoredSetting) -> bool,
    {
        let mut best: Option<(usize, &ScoredSetting)> = None;
        for (idx, s) in self.candidates.iter().enumerate() {
            if pred(s) && best.is_none_or(|(_, b)| s.low > b.low) {
                best = Some((idx, s));
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// The index of the candidate with the strongest high hand among the ones
    /// that match a predicate, ties go to the strongest low hand and then to
    /// the first one.
    pub fn best_high_where<F>(&self, pred: F) -> Option<usize>
    where
        F: Fn(&ScoredSetting) -> bool,
    {
        let mut best: Option<(usize, &ScoredSetting)> = None;
        for (idx, s) in self.candidates.iter().enumerate() {
            if pred(s) && best.is_none_or(|(_, b)| (s.high, s.low) > (b.high, b.low)) {
                best = Some((idx, s));
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// The rank of the low hand top card or pair for a candidate.
    pub fn low_rank(&self, idx: usize) -> Option<Rank> {
        self.candidates[idx].low.rank()
    }
}

/// A setting picked by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The index of the candidate.
    pub index: usize,
    /// The name of the rule that picked the candidate.
    pub rule: &'static str,
}

/// A strategy that picks one of the candidate settings.
pub trait Strategy: Send + Sync {
    /// The strategy name.
    fn name(&self) -> &'static str;

    /// Picks a candidate, the context has at least one candidate.
    fn select(&self, ctx: &Context<'_>) -> Selection;
}

/// Plays the strongest low hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStrategy;

impl DefaultStrategy {
    /// The rule name reported by this strategy.
    pub const RULE: &'static str = "best-low";
}

impl Strategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn select(&self, ctx: &Context<'_>) -> Selection {
        let index = ctx
            .best_low_where(|_| true)
            .unwrap_or_else(|| panic!("No candidates for {:?}", ctx.hand));

        Selection {
            index,
            rule: Self::RULE,
        }
    }
}
