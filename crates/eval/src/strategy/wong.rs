// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wong house way.
//!
//! The rules are checked in order, a rule runs if the candidates make one of
//! its high hand categories and it either picks a candidate or passes to the
//! next rule. When all the rules pass the strongest low hand is played.
use log::trace;

use super::{Context, DefaultStrategy, Selection, Strategy};
use crate::{Category, CategorySet, Rank, ScoredSetting};

use Rank as R;

/// Minimum low hand pair to keep five aces together, by seat.
const FIVE_ACES_KEEP_PAIR: [Rank; 2] = [R::King, R::Queen];

/// How to play four of a kind without a pair for the low hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuadPlay {
    /// Play the four of a kind together.
    Keep,
    /// Split into two pairs unless the low hand top card is at least the rank.
    SplitUnless(Rank),
    /// Split into two pairs.
    Split,
}

use QuadPlay::{Keep, Split, SplitUnless};

/// Four of a kind play by seat and rank.
const QUADS: [[QuadPlay; 13]; 2] = [
    [
        Keep,
        Keep,
        Keep,
        Keep,
        Keep,
        SplitUnless(R::Queen),
        SplitUnless(R::Queen),
        SplitUnless(R::Queen),
        SplitUnless(R::Queen),
        SplitUnless(R::Ace),
        SplitUnless(R::Ace),
        SplitUnless(R::Ace),
        Split,
    ],
    [
        Keep,
        Keep,
        Keep,
        Keep,
        Keep,
        SplitUnless(R::King),
        SplitUnless(R::King),
        SplitUnless(R::King),
        SplitUnless(R::King),
        SplitUnless(R::Ace),
        SplitUnless(R::Ace),
        Split,
        Split,
    ],
];

/// Minimum low hand top card to keep a full house, by seat and pair rank.
const FULL_HOUSE_KEEP: [[Option<Rank>; 13]; 2] = [
    [
        Some(R::Ace),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ],
    [
        Some(R::King),
        Some(R::Ace),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ],
];

/// Minimum low hand top card to play a straight or a flush over a pair, by
/// seat and pair rank, `None` always plays the straight or the flush.
const MADE_OVER_PAIR: [[Option<Rank>; 13]; 2] = [
    [
        None,
        None,
        None,
        None,
        None,
        Some(R::Ten),
        Some(R::Ten),
        Some(R::Ten),
        Some(R::Ten),
        Some(R::Queen),
        Some(R::Queen),
        Some(R::Queen),
        Some(R::King),
    ],
    [
        None,
        None,
        None,
        None,
        None,
        Some(R::Nine),
        Some(R::Nine),
        Some(R::Nine),
        Some(R::Nine),
        Some(R::Jack),
        Some(R::Jack),
        Some(R::Jack),
        Some(R::Queen),
    ],
];

/// Minimum three of a kind rank that is split, by seat.
const TRIPS_SPLIT: [Rank; 2] = [R::Ace, R::Ace];

/// Minimum low hand top card to keep two pair together, by seat and high pair
/// rank, `None` always splits.
const TWO_PAIR_KEEP: [[Option<Rank>; 13]; 2] = [
    [
        Some(R::Queen),
        Some(R::Queen),
        Some(R::Queen),
        Some(R::King),
        Some(R::King),
        Some(R::King),
        Some(R::Ace),
        Some(R::Ace),
        Some(R::Ace),
        Some(R::Ace),
        Some(R::Ace),
        None,
        None,
    ],
    [
        Some(R::Queen),
        Some(R::Queen),
        Some(R::Queen),
        Some(R::Queen),
        Some(R::King),
        Some(R::King),
        Some(R::King),
        Some(R::Ace),
        Some(R::Ace),
        Some(R::Ace),
        None,
        None,
        None,
    ],
];

fn rank_idx(rank: Rank) -> usize {
    rank as usize - 2
}

/// A house way rule.
pub struct Rule {
    /// The rule name.
    pub name: &'static str,
    /// The rule runs if the candidates make any of these high hand categories.
    pub any: CategorySet,
    select: fn(&Context<'_>) -> Option<usize>,
}

impl Rule {
    /// Checks if the rule runs for a context.
    pub fn matches(&self, ctx: &Context<'_>) -> bool {
        self.any.intersects(ctx.mask)
    }

    /// Runs the rule returning the index of the picked candidate, `None` if
    /// the rule passes.
    pub fn apply(&self, ctx: &Context<'_>) -> Option<usize> {
        (self.select)(ctx)
    }
}

static RULES: [Rule; 6] = [
    Rule {
        name: "five-of-a-kind",
        any: CategorySet::of(&[Category::FiveOfAKind]),
        select: five_of_a_kind,
    },
    Rule {
        name: "four-of-a-kind",
        any: CategorySet::of(&[Category::FourOfAKind]),
        select: four_of_a_kind,
    },
    Rule {
        name: "full-house",
        any: CategorySet::of(&[Category::FullHouse]),
        select: full_house,
    },
    Rule {
        name: "straight-or-flush",
        any: CategorySet::of(&[Category::Straight, Category::Flush, Category::StraightFlush]),
        select: straight_or_flush,
    },
    Rule {
        name: "three-of-a-kind",
        any: CategorySet::of(&[Category::ThreeOfAKind]),
        select: three_of_a_kind,
    },
    Rule {
        name: "two-pair",
        any: CategorySet::of(&[Category::TwoPair]),
        select: two_pair,
    },
];

/// The Wong house way.
#[derive(Debug, Default, Clone, Copy)]
pub struct WongStrategy;

impl WongStrategy {
    /// The rules in the order they are checked.
    pub fn rules() -> &'static [Rule] {
        &RULES
    }
}

impl Strategy for WongStrategy {
    fn name(&self) -> &'static str {
        "wong"
    }

    fn select(&self, ctx: &Context<'_>) -> Selection {
        for rule in RULES.iter().filter(|r| r.matches(ctx)) {
            match rule.apply(ctx) {
                Some(index) => {
                    return Selection {
                        index,
                        rule: rule.name,
                    };
                }
                None => trace!("Rule {} passed on {}", rule.name, ctx.mask),
            }
        }

        DefaultStrategy.select(ctx)
    }
}

fn is_high(category: Category) -> impl Fn(&ScoredSetting) -> bool {
    move |s| s.high.category() == category
}

fn five_of_a_kind(ctx: &Context<'_>) -> Option<usize> {
    let keep = ctx.best_low_where(is_high(Category::FiveOfAKind))?;
    let low = ctx.candidate(keep).low;
    if low.category() == Category::Pair && low.rank() >= Some(FIVE_ACES_KEEP_PAIR[ctx.seat.idx()])
    {
        return Some(keep);
    }

    // Split with a pair of the five of a kind rank in the low hand.
    let rank = ctx.candidate(keep).high.rank()?;
    ctx.best_high_where(|s| s.low.category() == Category::Pair && s.low.rank() == Some(rank))
        .or(Some(keep))
}

fn four_of_a_kind(ctx: &Context<'_>) -> Option<usize> {
    let with_pair = ctx.best_low_where(|s| {
        s.high.category() == Category::FourOfAKind && s.low.category() == Category::Pair
    });
    if with_pair.is_some() {
        return with_pair;
    }

    let keep = ctx.best_low_where(is_high(Category::FourOfAKind))?;
    let rank = ctx.candidate(keep).high.rank()?;
    let split = || {
        ctx.best_high_where(|s| s.low.category() == Category::Pair && s.low.rank() == Some(rank))
            .or(Some(keep))
    };

    match QUADS[ctx.seat.idx()][rank_idx(rank)] {
        Keep => Some(keep),
        SplitUnless(min) if ctx.low_rank(keep) >= Some(min) => Some(keep),
        SplitUnless(_) | Split => split(),
    }
}

fn full_house(ctx: &Context<'_>) -> Option<usize> {
    let keep = ctx.best_low_where(is_high(Category::FullHouse))?;
    let scored = ctx.candidate(keep);
    if scored.low.category() == Category::Pair {
        return Some(keep);
    }

    let pair = scored.high.kicker(0)?;
    if let Some(min) = FULL_HOUSE_KEEP[ctx.seat.idx()][rank_idx(pair)] {
        if scored.low.rank() >= Some(min) {
            return Some(keep);
        }
    }

    // Pair in the low hand and three of a kind in the high hand.
    ctx.best_low_where(|s| {
        s.low.category() == Category::Pair && s.high.category() >= Category::ThreeOfAKind
    })
    .or(Some(keep))
}

fn straight_or_flush(ctx: &Context<'_>) -> Option<usize> {
    let seat = ctx.seat.idx();

    // A straight flush is played over a straight or a flush.
    let straight_flush = ctx.mask.contains(Category::StraightFlush);
    let formed = ctx.best_low_where(|s| {
        let category = s.high.category();
        if straight_flush {
            category == Category::StraightFlush
        } else {
            category.is_made()
        }
    })?;

    if ctx.candidate(formed).low.category() == Category::Pair {
        return Some(formed);
    }

    if ctx.mask.contains(Category::TwoPair) {
        return None;
    }

    if let Some(pair) = ctx.best_low_where(is_high(Category::Pair)) {
        let rank = ctx.candidate(pair).high.rank()?;
        if let Some(min) = MADE_OVER_PAIR[seat][rank_idx(rank)] {
            if ctx.low_rank(formed) < Some(min) {
                return Some(pair);
            }
        }
    }

    Some(formed)
}

fn three_of_a_kind(ctx: &Context<'_>) -> Option<usize> {
    let keep = ctx.best_low_where(is_high(Category::ThreeOfAKind))?;
    let rank = ctx.candidate(keep).high.rank()?;
    if rank < TRIPS_SPLIT[ctx.seat.idx()] {
        return Some(keep);
    }

    // A pair in the high hand and the third card on top of the low hand.
    ctx.best_low_where(|s| {
        s.high.category() == Category::Pair
            && s.high.rank() == Some(rank)
            && s.low.rank() == Some(rank)
    })
    .or(Some(keep))
}

fn two_pair(ctx: &Context<'_>) -> Option<usize> {
    // With three pairs the highest pair plays in the low hand.
    if ctx.digest.pair_count() >= 3 {
        let three_pairs = ctx.best_low_where(|s| {
            s.high.category() == Category::TwoPair && s.low.category() == Category::Pair
        });
        if three_pairs.is_some() {
            return three_pairs;
        }
    }

    let keep = ctx.best_low_where(is_high(Category::TwoPair))?;
    let high_pair = ctx.candidate(keep).high.rank()?;
    if let Some(min) = TWO_PAIR_KEEP[ctx.seat.idx()][rank_idx(high_pair)] {
        if ctx.low_rank(keep) >= Some(min) {
            return Some(keep);
        }
    }

    ctx.best_low_where(|s| {
        s.high.category() == Category::Pair && s.low.category() == Category::Pair
    })
    .or(Some(keep))
}
