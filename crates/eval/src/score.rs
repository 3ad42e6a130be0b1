// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands scores.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HandDigest, Rank};

/// A Poker hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Five of a kind, only five aces with a Pai Gow joker.
    FiveOfAKind,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            FiveOfAKind,
        ]
        .into_iter()
    }

    /// Checks if this is a straight, a flush, or a straight flush.
    pub fn is_made(&self) -> bool {
        matches!(
            self,
            Category::Straight | Category::Flush | Category::StraightFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::FiveOfAKind => "Five of a Kind",
        };

        write!(f, "{name}")
    }
}

/// The ace value when it plays below the deuce.
const LOW_ACE: u8 = 0;

/// A Poker hand score.
///
/// Scores are compared by category, then by the primary rank, then by the
/// kickers. Each factory stores the ranks in descending significance order, a
/// zero value is an unused kicker.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PokerScore {
    category: Category,
    values: [u8; 5],
}

impl PokerScore {
    fn make(category: Category, primary: Rank, kickers: &[Rank]) -> Self {
        debug_assert!(kickers.len() <= 4);

        let mut values = [0; 5];
        values[0] = primary.value();
        for (v, k) in values[1..].iter_mut().zip(kickers) {
            *v = k.value();
        }

        Self { category, values }
    }

    /// Five of a kind.
    pub fn five_of_a_kind(rank: Rank) -> Self {
        Self::make(Category::FiveOfAKind, rank, &[])
    }

    /// A straight flush with the given top card.
    pub fn straight_flush(high: Rank) -> Self {
        Self {
            category: Category::StraightFlush,
            values: run_values(high.value()),
        }
    }

    /// The A-2-3-4-5 straight flush.
    pub fn ace_low_straight_flush() -> Self {
        Self {
            category: Category::StraightFlush,
            values: ace_low_values(),
        }
    }

    /// Four of a kind with an optional kicker.
    pub fn four_of_a_kind(rank: Rank, kicker: Option<Rank>) -> Self {
        Self::make(Category::FourOfAKind, rank, kicker.as_slice())
    }

    /// A full house.
    pub fn full_house(trips: Rank, pair: Rank) -> Self {
        Self::make(Category::FullHouse, trips, &[pair])
    }

    /// A flush with ranks in descending order.
    pub fn flush(ranks: &[Rank]) -> Self {
        let (high, kickers) = split_high(ranks);
        Self::make(Category::Flush, high, kickers)
    }

    /// A straight with the given top card.
    pub fn straight(high: Rank) -> Self {
        Self {
            category: Category::Straight,
            values: run_values(high.value()),
        }
    }

    /// The A-2-3-4-5 straight.
    pub fn ace_low_straight() -> Self {
        Self {
            category: Category::Straight,
            values: ace_low_values(),
        }
    }

    /// Three of a kind with kickers in descending order.
    pub fn three_of_a_kind(rank: Rank, kickers: &[Rank]) -> Self {
        Self::make(Category::ThreeOfAKind, rank, kickers)
    }

    /// Two pair with an optional kicker.
    pub fn two_pair(high: Rank, low: Rank, kicker: Option<Rank>) -> Self {
        debug_assert!(high > low);
        let mut kickers = vec![low];
        kickers.extend(kicker);
        Self::make(Category::TwoPair, high, &kickers)
    }

    /// One pair with kickers in descending order.
    pub fn pair(rank: Rank, kickers: &[Rank]) -> Self {
        Self::make(Category::Pair, rank, kickers)
    }

    /// High card with ranks in descending order.
    pub fn high_card(ranks: &[Rank]) -> Self {
        let (high, kickers) = split_high(ranks);
        Self::make(Category::HighCard, high, kickers)
    }

    /// Scores a hand digest.
    ///
    /// Hands longer than five cards score the best five cards, shorter hands
    /// can only make pairs and high cards.
    pub fn from_digest(digest: &HandDigest) -> Self {
        if digest.len() > 5 {
            return Self::best_five(digest);
        }

        let five = digest.len() == 5;
        let width = digest.len().min(5);

        if let Some(rank) = digest.quint_rank() {
            return Self::five_of_a_kind(rank);
        }

        if let Some(run) = digest.straight_flush().filter(|_| five) {
            return if run.is_ace_low() {
                Self::ace_low_straight_flush()
            } else {
                Self::straight_flush(run.high())
            };
        }

        if let Some(rank) = digest.quad_rank() {
            let kicker = digest.kickers(&[rank]).first().copied().filter(|_| five);
            return Self::four_of_a_kind(rank, kicker);
        }

        let triples = digest.triple_ranks();
        if let Some(&trips) = triples.first() {
            // A second three of a kind plays as the pair.
            let pair = triples.get(1).copied().into_iter().chain(digest.high_pair_rank()).max();
            if let Some(pair) = pair.filter(|_| five) {
                return Self::full_house(trips, pair);
            }
        }

        if let Some(flush) = digest.flush().filter(|_| five) {
            return Self::flush(flush.ranks());
        }

        if let Some(run) = digest.straight().filter(|_| five) {
            return if run.is_ace_low() {
                Self::ace_low_straight()
            } else {
                Self::straight(run.high())
            };
        }

        if let Some(&trips) = triples.first() {
            let kickers = digest.kickers(&[trips]);
            return Self::three_of_a_kind(trips, take(&kickers, width.saturating_sub(3)));
        }

        match (digest.high_pair_rank(), digest.low_pair_rank()) {
            (Some(high), Some(low)) => {
                let kicker = digest.kickers(&[high, low]).first().copied();
                Self::two_pair(high, low, kicker.filter(|_| width >= 5))
            }
            (Some(pair), None) => {
                let kickers = digest.kickers(&[pair]);
                Self::pair(pair, take(&kickers, width.saturating_sub(2)))
            }
            _ => Self::high_card(take(&digest.kickers(&[]), width)),
        }
    }

    /// The best score of the five cards hands in a longer hand.
    fn best_five(digest: &HandDigest) -> Self {
        let cards = digest.cards();
        let n = cards.len();

        let score = |idx: &[usize; 5]| {
            let hand = idx.map(|i| cards[i]);
            Self::from_digest(&HandDigest::with_rule(&hand, digest.rule()))
        };

        let mut idx = [0, 1, 2, 3, 4];
        let mut best = score(&idx);

        loop {
            // Next combination in lexicographic order.
            let Some(i) = (0..5).rev().find(|&i| idx[i] < n - 5 + i) else {
                return best;
            };

            idx[i] += 1;
            for j in i + 1..5 {
                idx[j] = idx[j - 1] + 1;
            }

            best = best.max(score(&idx));
        }
    }

    /// The score category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The primary rank, the top card of a straight or the rank of a tuple.
    ///
    /// The ace-low straights return the five.
    pub fn rank(&self) -> Option<Rank> {
        Rank::from_value(self.values[0])
    }

    /// The kicker at the given index, for a full house and two pair the first
    /// kicker is the rank of the second tuple.
    pub fn kicker(&self, idx: usize) -> Option<Rank> {
        self.values.get(idx + 1).and_then(|&v| Rank::from_value(v))
    }

    /// Checks if this is an ace-low straight or straight flush.
    pub fn is_ace_low(&self) -> bool {
        matches!(
            self.category,
            Category::Straight | Category::StraightFlush
        ) && self.values == ace_low_values()
    }

    /// Returns the index of the first field that differs from another score,
    /// where 0 is the category, 1 the primary rank, and 2.. the kickers.
    pub fn differs_at(&self, other: &PokerScore) -> Option<usize> {
        if self.category != other.category {
            return Some(0);
        }

        self.values
            .iter()
            .zip(other.values)
            .position(|(a, b)| *a != b)
            .map(|idx| idx + 1)
    }

    /// Describes this score naming the kicker that decides a comparison with
    /// another score of the same category and rank.
    pub fn describe_against(&self, other: &PokerScore) -> String {
        // Fields already in the description.
        let shown = match self.category {
            Category::FullHouse | Category::TwoPair => 2,
            _ => 1,
        };

        match self.differs_at(other) {
            Some(idx) if idx > shown && !self.category.is_made() => {
                match self.kicker(idx - 2) {
                    Some(kicker) => format!("{self}, {} kicker", kicker.name()),
                    None => self.to_string(),
                }
            }
            _ => self.to_string(),
        }
    }
}

/// The values of a straight, the top card and the cards below it.
fn run_values(high: u8) -> [u8; 5] {
    let mut values = [0; 5];
    for (idx, v) in values.iter_mut().enumerate() {
        *v = high.saturating_sub(idx as u8);
    }
    values
}

/// The values of the A-2-3-4-5 straight, they sort below any other straight.
fn ace_low_values() -> [u8; 5] {
    [5, 4, 3, 2, LOW_ACE]
}

fn split_high(ranks: &[Rank]) -> (Rank, &[Rank]) {
    debug_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    match ranks.split_first() {
        Some((high, kickers)) => (*high, kickers),
        None => panic!("Scoring an empty hand"),
    }
}

fn take(ranks: &[Rank], n: usize) -> &[Rank] {
    &ranks[..n.min(ranks.len())]
}

impl fmt::Display for PokerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(rank), kicker) = (self.rank(), self.kicker(0)) else {
            return write!(f, "{}", self.category);
        };

        match self.category {
            Category::FiveOfAKind => write!(f, "Five {}", rank.plural()),
            Category::StraightFlush if self.is_ace_low() => write!(f, "Ace-low Straight Flush"),
            Category::StraightFlush if rank == Rank::Ace => write!(f, "Royal Flush"),
            Category::StraightFlush => write!(f, "Straight Flush, {} high", rank.name()),
            Category::FourOfAKind => write!(f, "Four {}", rank.plural()),
            Category::FullHouse => match kicker {
                Some(pair) => write!(f, "Full House, {} over {}", rank.plural(), pair.plural()),
                None => write!(f, "Full House, {}", rank.plural()),
            },
            Category::Flush => write!(f, "Flush, {} high", rank.name()),
            Category::Straight if self.is_ace_low() => write!(f, "Ace-low Straight"),
            Category::Straight => write!(f, "Straight, {} high", rank.name()),
            Category::ThreeOfAKind => write!(f, "Three {}", rank.plural()),
            Category::TwoPair => match kicker {
                Some(low) => write!(f, "Two Pair, {} and {}", rank.plural(), low.plural()),
                None => write!(f, "Two Pair, {}", rank.plural()),
            },
            Category::Pair => write!(f, "Pair of {}", rank.plural()),
            Category::HighCard => write!(f, "{} High", rank.name()),
        }
    }
}

impl fmt::Debug for PokerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PokerScore({self}, {:?})", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JokerRule, parse_cards};

    fn score(s: &str) -> PokerScore {
        PokerScore::from_digest(&HandDigest::new(&parse_cards(s).unwrap()))
    }

    #[test]
    fn five_aces() {
        let s = score("ACADACASJO");
        assert_eq!(s, PokerScore::five_of_a_kind(Rank::Ace));
        assert_eq!(s.to_string(), "Five Aces");
        assert!(s > PokerScore::ace_low_straight_flush());
        assert!(s > PokerScore::straight_flush(Rank::Ace));
    }

    #[test]
    fn ace_low_with_joker() {
        let s = score("2C3D4H5SJO");
        assert_eq!(s, PokerScore::ace_low_straight());
        assert_ne!(s, PokerScore::straight(Rank::Five));
        assert!(s.is_ace_low());
        assert_eq!(s.to_string(), "Ace-low Straight");

        let s = score("2C3C4C5CJO");
        assert_eq!(s, PokerScore::ace_low_straight_flush());
        assert_eq!(s.to_string(), "Ace-low Straight Flush");
    }

    #[test]
    fn ace_low_placement() {
        let wheel = PokerScore::ace_low_straight();
        assert!(wheel > PokerScore::straight(Rank::Four));
        assert!(wheel < PokerScore::straight(Rank::Five));
        assert!(wheel < PokerScore::straight(Rank::Six));
        assert!(wheel < PokerScore::straight(Rank::Ace));
        assert_eq!(wheel.rank(), Some(Rank::Five));

        let wheel = PokerScore::ace_low_straight_flush();
        assert!(wheel < PokerScore::straight_flush(Rank::Six));
        assert!(wheel > PokerScore::four_of_a_kind(Rank::Ace, Some(Rank::King)));
    }

    #[test]
    fn categories_order() {
        let ranked = [
            score("AC KD 9H 5S 3C"),
            score("2C 2D 9H 5S 3C"),
            score("2C 2D 3H 3S 4C"),
            score("2C 2D 2H 5S 3C"),
            score("2C 3D 4H 5S AC"),
            score("9C TD JH QS KC"),
            score("2C 7C 9C JC KC"),
            score("2C 2D 2H 3S 3C"),
            score("2C 2D 2H 2S 3C"),
            score("9C TC JC QC KC"),
            score("AC AD AH AS jo"),
        ];

        for pair in ranked.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }

        let categories = ranked.iter().map(|s| s.category()).collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                Category::HighCard,
                Category::Pair,
                Category::TwoPair,
                Category::ThreeOfAKind,
                Category::Straight,
                Category::Straight,
                Category::Flush,
                Category::FullHouse,
                Category::FourOfAKind,
                Category::StraightFlush,
                Category::FiveOfAKind,
            ]
        );

        // Any four of a kind beats any flush regardless of rank.
        assert!(score("2C 2D 2H 2S 3C") > score("AC KC QC JC 9C"));
    }

    #[test]
    fn kickers() {
        assert_eq!(
            score("KC KD 9H 5S 3C"),
            PokerScore::pair(Rank::King, &[Rank::Nine, Rank::Five, Rank::Trey])
        );
        assert!(score("KC KD 9H 5S 4C") > score("KC KD 9H 5S 3C"));
        assert_eq!(
            score("KC KD 3H 3S jo"),
            PokerScore::two_pair(Rank::King, Rank::Trey, Some(Rank::Ace))
        );
        assert_eq!(
            score("7C 7D 7H 7S jo"),
            PokerScore::four_of_a_kind(Rank::Seven, Some(Rank::Ace))
        );
        assert_eq!(
            score("AC AD jo 7S 7C"),
            PokerScore::full_house(Rank::Ace, Rank::Seven)
        );
        assert_eq!(
            score("AH 9H jo KH 5H"),
            PokerScore::flush(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Nine, Rank::Five])
        );
    }

    #[test]
    fn two_cards() {
        assert_eq!(score("jo KD"), PokerScore::high_card(&[Rank::Ace, Rank::King]));
        assert_eq!(score("jo AD"), PokerScore::pair(Rank::Ace, &[]));
        assert_eq!(score("9C 9D"), PokerScore::pair(Rank::Nine, &[]));

        // A five cards hand beats the two cards hand with the same top cards.
        assert!(score("AC KD 4H 3S 2C") > score("AD KC"));
        assert!(score("9H 9S 4H 3S 2C") > score("9C 9D"));
        assert!(score("AC QD JH 3S 2C") < score("AD KC"));

        let wild = |s: &str| {
            let cards = parse_cards(s).unwrap();
            PokerScore::from_digest(&HandDigest::with_rule(&cards, JokerRule::Wild))
        };
        assert_eq!(wild("jo 6D"), PokerScore::pair(Rank::Six, &[]));
        assert_eq!(wild("KC KD 3H 3S jo"), PokerScore::full_house(Rank::King, Rank::Trey));
    }

    #[test]
    fn seven_cards() {
        assert_eq!(
            score("KC KD 5H 5S 5C 3D 3S"),
            PokerScore::full_house(Rank::Five, Rank::King)
        );
        assert_eq!(
            score("8C 8D 8H 5S 5C 5D 3S"),
            PokerScore::full_house(Rank::Eight, Rank::Five)
        );
        assert_eq!(
            score("3H 4H 5H jo 7H 8H 9H"),
            PokerScore::straight_flush(Rank::Nine)
        );

        // The joker plays as an ace when that beats the flush or the straight.
        assert_eq!(
            score("AS AD AH 2S 5S 9S jo"),
            PokerScore::four_of_a_kind(Rank::Ace, Some(Rank::Nine))
        );
        assert_eq!(
            score("AH AD KH KD 9H 2H jo"),
            PokerScore::full_house(Rank::Ace, Rank::King)
        );
        assert_eq!(
            score("AC AD AH KS QH JC jo"),
            PokerScore::four_of_a_kind(Rank::Ace, Some(Rank::King))
        );
        assert_eq!(
            score("2H 5H 9H JH QH 3C 7D"),
            PokerScore::flush(&[Rank::Queen, Rank::Jack, Rank::Nine, Rank::Five, Rank::Deuce])
        );
    }

    #[test]
    fn descriptions() {
        let kings = score("KC KD 9H 5S 3C");
        assert_eq!(kings.to_string(), "Pair of Kings");

        let better = score("KH KS AH 5D 3D");
        assert_eq!(better.differs_at(&kings), Some(2));
        assert_eq!(better.describe_against(&kings), "Pair of Kings, Ace kicker");
        assert_eq!(kings.describe_against(&score("QC QD 9H 5S 3C")), "Pair of Kings");
        assert_eq!(kings.differs_at(&kings), None);

        let two_pair = PokerScore::two_pair(Rank::King, Rank::Five, Some(Rank::Ace));
        assert_eq!(two_pair.to_string(), "Two Pair, Kings and Fives");
        assert_eq!(
            PokerScore::full_house(Rank::Trey, Rank::Deuce).to_string(),
            "Full House, Treys over Deuces"
        );
        assert_eq!(PokerScore::straight_flush(Rank::Ace).to_string(), "Royal Flush");
        assert_eq!(score("AD KC").to_string(), "Ace High");
    }
}
