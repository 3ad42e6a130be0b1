// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand digest.
//!
//! A [HandDigest] is a read only snapshot of a 2, 5, or 7 cards hand with the
//! ranks sorted, the jokers resolved to the rank that helps the hand most, and
//! the straight, flush, and tuples statistics used to score and arrange hands.
use serde::{Deserialize, Serialize};

use crate::{Card, Rank, Suit};

/// How a joker is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerRule {
    /// The Pai Gow joker, it completes a straight, a flush, or a straight
    /// flush, otherwise it plays as an ace.
    #[default]
    Bug,
    /// A fully wild joker that also joins the highest tuple in the hand.
    Wild,
}

/// A joker standing in for a natural card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// The joker position in the hand.
    pub position: usize,
    /// The rank the joker plays as.
    pub rank: Rank,
    /// The suit the joker plays as when it completes a flush.
    pub suit: Option<Suit>,
}

/// Five cards in sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    high: Rank,
    ace_low: bool,
    positions: [usize; 5],
    fills: Vec<Substitution>,
}

impl Run {
    /// The top rank of the run, a five for an ace-low run.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// Checks if this is the A-2-3-4-5 run.
    pub fn is_ace_low(&self) -> bool {
        self.ace_low
    }

    /// The run cards positions from the top of the run down.
    pub fn positions(&self) -> &[usize; 5] {
        &self.positions
    }
}

/// The best five cards of one suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flush {
    suit: Suit,
    ranks: [Rank; 5],
    positions: [usize; 5],
    fills: Vec<Substitution>,
}

impl Flush {
    /// The flush suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The flush ranks in descending order.
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.ranks
    }

    /// The flush cards positions in descending rank order.
    pub fn positions(&self) -> &[usize; 5] {
        &self.positions
    }
}

/// A natural card with its position in the hand.
#[derive(Debug, Clone, Copy)]
struct Natural {
    position: usize,
    rank: Rank,
    suit: Suit,
}

/// A digest of a hand.
#[derive(Debug, Clone)]
pub struct HandDigest {
    rule: JokerRule,
    cards: Vec<Card>,
    naturals: Vec<Natural>,
    wilds: Vec<usize>,
    resolved: Vec<Option<Rank>>,
    ranks: Vec<Rank>,
    counts: [u8; 15],
    straight: Option<Run>,
    flush: Option<Flush>,
    straight_flush: Option<Run>,
    substitutions: Vec<Substitution>,
    quints: Vec<Rank>,
    quads: Vec<Rank>,
    triples: Vec<Rank>,
    pairs: Vec<Rank>,
}

impl HandDigest {
    /// Creates a digest of a hand with a Pai Gow joker.
    pub fn new(cards: &[Card]) -> Self {
        Self::with_rule(cards, JokerRule::Bug)
    }

    /// Creates a digest of a hand using the given joker rule.
    pub fn with_rule(cards: &[Card], rule: JokerRule) -> Self {
        let mut naturals = cards
            .iter()
            .enumerate()
            .filter_map(|(position, card)| {
                card.decode().map(|(rank, suit)| Natural {
                    position,
                    rank,
                    suit,
                })
            })
            .collect::<Vec<_>>();

        // A stable sort keeps the deal order of cards with the same rank.
        naturals.sort_by_key(|n| n.rank);

        let wilds = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_joker())
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();

        let flush = find_flush(&naturals, &wilds);
        let straight_flush = flush.as_ref().and_then(|f| {
            let suited = naturals
                .iter()
                .copied()
                .filter(|n| n.suit == f.suit)
                .collect::<Vec<_>>();
            find_run(&suited, &wilds, Some(f.suit))
        });
        let straight = find_run(&naturals, &wilds, None);

        // Jokers complete the best made hand first.
        let mut substitutions = if let Some(run) = &straight_flush {
            run.fills.clone()
        } else if let Some(flush) = &flush {
            flush.fills.clone()
        } else if let Some(run) = &straight {
            run.fills.clone()
        } else {
            Vec::new()
        };

        let mut counts = [0u8; 15];
        for n in &naturals {
            counts[n.rank as usize] += 1;
        }

        for s in &substitutions {
            counts[s.rank as usize] += 1;
        }

        for &position in &wilds {
            if substitutions.iter().any(|s| s.position == position) {
                continue;
            }

            let rank = match rule {
                JokerRule::Bug => Rank::Ace,
                JokerRule::Wild => Rank::ranks()
                    .rev()
                    .filter(|&r| counts[r as usize] > 0)
                    .max_by_key(|&r| (counts[r as usize], r))
                    .unwrap_or(Rank::Ace),
            };

            counts[rank as usize] += 1;
            substitutions.push(Substitution {
                position,
                rank,
                suit: None,
            });
        }

        let mut resolved = vec![None; cards.len()];
        for n in &naturals {
            resolved[n.position] = Some(n.rank);
        }

        for s in &substitutions {
            resolved[s.position] = Some(s.rank);
        }

        let mut ranks = resolved.iter().flatten().copied().collect::<Vec<_>>();
        ranks.sort();

        let tuples = |n: u8| {
            Rank::ranks()
                .rev()
                .filter(|&r| {
                    let count = counts[r as usize];
                    if n == 5 { count >= 5 } else { count == n }
                })
                .collect::<Vec<_>>()
        };

        Self {
            rule,
            cards: cards.to_vec(),
            quints: tuples(5),
            quads: tuples(4),
            triples: tuples(3),
            pairs: tuples(2),
            naturals,
            wilds,
            resolved,
            ranks,
            counts,
            straight,
            flush,
            straight_flush,
            substitutions,
        }
    }

    /// The joker rule used by this digest.
    pub fn rule(&self) -> JokerRule {
        self.rule
    }

    /// The hand cards in hand order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the hand.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// The number of wild cards.
    pub fn wild_count(&self) -> usize {
        self.wilds.len()
    }

    /// The hand ranks in ascending order with wild cards resolved.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// The suits of the natural cards in ascending order.
    pub fn suits(&self) -> Vec<Suit> {
        let mut suits = self.naturals.iter().map(|n| n.suit).collect::<Vec<_>>();
        suits.sort();
        suits
    }

    /// The number of cards with the given resolved rank.
    pub fn count(&self, rank: Rank) -> usize {
        usize::from(self.counts[rank as usize])
    }

    /// The highest resolved rank.
    pub fn high_rank(&self) -> Option<Rank> {
        self.ranks.last().copied()
    }

    /// The resolved rank of the card at the given position.
    pub fn resolved_rank(&self, position: usize) -> Option<Rank> {
        self.resolved.get(position).copied().flatten()
    }

    /// How each wild card is played.
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Checks if the hand contains a flush.
    pub fn is_flush(&self) -> bool {
        self.flush.is_some()
    }

    /// Checks if the hand contains a straight.
    pub fn is_straight(&self) -> bool {
        self.straight.is_some()
    }

    /// Checks if the hand contains a straight flush.
    pub fn is_straight_flush(&self) -> bool {
        self.straight_flush.is_some()
    }

    /// Checks if the best straight in the hand is the A-2-3-4-5.
    pub fn is_ace_low_straight(&self) -> bool {
        self.straight.as_ref().is_some_and(Run::is_ace_low)
    }

    /// Checks if the best straight flush in the hand is the A-2-3-4-5.
    pub fn is_ace_low_straight_flush(&self) -> bool {
        self.straight_flush.as_ref().is_some_and(Run::is_ace_low)
    }

    /// The best straight.
    pub fn straight(&self) -> Option<&Run> {
        self.straight.as_ref()
    }

    /// The best flush.
    pub fn flush(&self) -> Option<&Flush> {
        self.flush.as_ref()
    }

    /// The best straight flush.
    pub fn straight_flush(&self) -> Option<&Run> {
        self.straight_flush.as_ref()
    }

    /// The positions of the cards that are not part of the best straight flush,
    /// flush, or straight, empty if there is none of them.
    pub fn skipped(&self) -> Vec<usize> {
        let made = self
            .straight_flush
            .as_ref()
            .map(|r| r.positions)
            .or_else(|| self.flush.as_ref().map(|f| f.positions))
            .or_else(|| self.straight.as_ref().map(|r| r.positions));

        match made {
            Some(positions) => (0..self.len())
                .filter(|p| !positions.contains(p))
                .collect(),
            None => Vec::new(),
        }
    }

    /// The number of five of a kind.
    pub fn quint_count(&self) -> usize {
        self.quints.len()
    }

    /// The number of four of a kind.
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// The number of three of a kind.
    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// The number of pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// The rank of the highest five of a kind.
    pub fn quint_rank(&self) -> Option<Rank> {
        self.quints.first().copied()
    }

    /// The rank of the highest four of a kind.
    pub fn quad_rank(&self) -> Option<Rank> {
        self.quads.first().copied()
    }

    /// The rank of the highest three of a kind.
    pub fn triple_rank(&self) -> Option<Rank> {
        self.triples.first().copied()
    }

    /// The ranks of all three of a kind in descending order.
    pub fn triple_ranks(&self) -> &[Rank] {
        &self.triples
    }

    /// The rank of the highest pair.
    pub fn high_pair_rank(&self) -> Option<Rank> {
        self.pairs.first().copied()
    }

    /// The rank of the second highest pair.
    pub fn low_pair_rank(&self) -> Option<Rank> {
        self.pairs.get(1).copied()
    }

    /// The ranks of all pairs in descending order.
    pub fn pair_ranks(&self) -> &[Rank] {
        &self.pairs
    }

    /// The resolved ranks in descending order that are not in the given ranks.
    pub fn kickers(&self, exclude: &[Rank]) -> Vec<Rank> {
        self.ranks
            .iter()
            .rev()
            .copied()
            .filter(|r| !exclude.contains(r))
            .collect()
    }
}

/// Bit mask of the ranks in a list of naturals, the ace sets both bit 1 and 14.
fn rank_mask(naturals: &[Natural]) -> u16 {
    naturals.iter().fold(0, |mask, n| {
        let mut mask = mask | (1 << n.rank as u16);
        if n.rank == Rank::Ace {
            mask |= 1 << 1;
        }
        mask
    })
}

/// Finds the best run of five cards, jokers fill the missing ranks.
///
/// The A-2-3-4-5 run is checked before the other runs and it is only replaced
/// by a higher run that has a natural card above the five, so that a joker is
/// not promoted to a six to beat the wheel.
fn find_run(naturals: &[Natural], wilds: &[usize], suit: Option<Suit>) -> Option<Run> {
    let mask = rank_mask(naturals);
    let missing = |low: u8| (low..low + 5).filter(|v| mask & (1 << v) == 0).count();

    let wheel = missing(1) <= wilds.len();
    let general = (2..=10u8).rev().find(|&low| missing(low) <= wilds.len());

    let low = match general {
        Some(low) if (6.max(low)..low + 5).any(|v| mask & (1 << v) != 0) => low,
        _ if wheel => 1,
        Some(low) => low,
        None => return None,
    };

    let mut positions = [0; 5];
    let mut fills = Vec::new();
    let mut jokers = wilds.iter();

    for (idx, value) in (low..low + 5).rev().enumerate() {
        let rank_value = if value == 1 { Rank::Ace.value() } else { value };
        let natural = naturals.iter().find(|n| n.rank.value() == rank_value);

        positions[idx] = match natural {
            Some(n) => n.position,
            None => {
                // The missing count guarantees a joker for each missing rank.
                let position = *jokers.next()?;
                fills.push(Substitution {
                    position,
                    rank: Rank::from_value(rank_value)?,
                    suit,
                });
                position
            }
        };
    }

    Some(Run {
        high: Rank::from_value(low + 4)?,
        ace_low: low == 1,
        positions,
        fills,
    })
}

/// Finds the best flush, jokers play as the highest ranks missing in the suit.
fn find_flush(naturals: &[Natural], wilds: &[usize]) -> Option<Flush> {
    let suit = Suit::suits()
        .map(|s| (naturals.iter().filter(|n| n.suit == s).count(), s))
        .filter(|(count, _)| count + wilds.len() >= 5)
        .max_by_key(|(count, _)| *count)
        .map(|(_, s)| s)?;

    let mut cards = naturals
        .iter()
        .filter(|n| n.suit == suit)
        .map(|n| (n.rank, n.position, false))
        .collect::<Vec<_>>();

    let missing = Rank::ranks()
        .rev()
        .filter(|r| !cards.iter().any(|(rank, _, _)| rank == r))
        .collect::<Vec<_>>();

    let mut missing = missing.into_iter();
    for &position in wilds {
        cards.push((missing.next()?, position, true));
    }

    // Descending ranks, stable for naturals with the same rank.
    cards.sort_by(|a, b| b.0.cmp(&a.0));
    cards.truncate(5);

    let mut ranks = [Rank::Deuce; 5];
    let mut positions = [0; 5];
    let mut fills = Vec::new();
    for (idx, &(rank, position, wild)) in cards.iter().enumerate() {
        ranks[idx] = rank;
        positions[idx] = position;
        if wild {
            fills.push(Substitution {
                position,
                rank,
                suit: Some(suit),
            });
        }
    }

    Some(Flush {
        suit,
        ranks,
        positions,
        fills,
    })
}
