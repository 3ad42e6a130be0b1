// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Arranged hands.
use std::fmt;

use crate::{Card, HandDigest, JokerRule, PokerScore, Rank, ScoredSetting, format_cards};

/// A seven cards hand set into a five cards high hand and a two cards low hand.
///
/// The cards of each hand are in display order, from the highest rank to the
/// lowest, with the ace at the bottom of an ace-low straight and the joker in
/// the slot of the rank it plays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrangedHand {
    cards: [Card; 7],
    high: PokerScore,
    low: PokerScore,
    rule: &'static str,
}

/// The result of a player hand against the banker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showdown {
    /// The player wins both hands.
    Win,
    /// The banker wins both hands.
    Lose,
    /// Each side wins one hand.
    Push,
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Showdown::Win => write!(f, "Win"),
            Showdown::Lose => write!(f, "Lose"),
            Showdown::Push => write!(f, "Push"),
        }
    }
}

impl ArrangedHand {
    /// Arranges a hand with the given scored setting.
    pub fn new(
        hand: &[Card; 7],
        scored: &ScoredSetting,
        joker: JokerRule,
        rule: &'static str,
    ) -> Self {
        let arranged = Self::from_cards(scored.setting.apply(hand), joker, rule);
        debug_assert_eq!(arranged.high, scored.high);
        debug_assert_eq!(arranged.low, scored.low);
        arranged
    }

    /// Arranges a hand with the high hand in the first five cards and the low
    /// hand in the last two.
    pub fn from_cards(mut cards: [Card; 7], joker: JokerRule, rule: &'static str) -> Self {
        let (high, low) = cards.split_at_mut(5);
        let high = sort_hand(high, joker);
        let low = sort_hand(low, joker);

        Self {
            cards,
            high,
            low,
            rule,
        }
    }

    /// All the cards, the high hand followed by the low hand.
    pub fn cards(&self) -> &[Card; 7] {
        &self.cards
    }

    /// The five cards high hand.
    pub fn high(&self) -> &[Card] {
        &self.cards[..5]
    }

    /// The two cards low hand.
    pub fn low(&self) -> &[Card] {
        &self.cards[5..]
    }

    /// The high hand score.
    pub fn high_score(&self) -> PokerScore {
        self.high
    }

    /// The low hand score.
    pub fn low_score(&self) -> PokerScore {
        self.low
    }

    /// The name of the rule that set the hand.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Settles this player hand against the banker hand, a tied hand goes to
    /// the banker.
    pub fn showdown(&self, banker: &ArrangedHand) -> Showdown {
        let high = self.high > banker.high;
        let low = self.low > banker.low;
        match (high, low) {
            (true, true) => Showdown::Win,
            (false, false) => Showdown::Lose,
            _ => Showdown::Push,
        }
    }
}

impl From<ArrangedHand> for [Card; 7] {
    fn from(hand: ArrangedHand) -> Self {
        hand.cards
    }
}

impl fmt::Display for ArrangedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", format_cards(self.high()), format_cards(self.low()))
    }
}

/// Sorts a hand in display order and returns its score.
fn sort_hand(cards: &mut [Card], joker: JokerRule) -> PokerScore {
    let digest = HandDigest::with_rule(cards, joker);
    let score = PokerScore::from_digest(&digest);
    let ace_low = score.is_ace_low();

    let display_rank = |pos: usize| match digest.resolved_rank(pos) {
        Some(Rank::Ace) if ace_low => 1,
        Some(rank) => rank.value(),
        None => 0,
    };

    let mut keyed = cards
        .iter()
        .enumerate()
        .map(|(pos, card)| (display_rank(pos), *card))
        .collect::<Vec<_>>();

    // Descending rank, a natural card before a joker, then descending suit.
    keyed.sort_by(|(ra, a), (rb, b)| {
        rb.cmp(ra)
            .then_with(|| a.is_joker().cmp(&b.is_joker()))
            .then_with(|| b.suit().cmp(&a.suit()))
    });

    for (slot, (_, card)) in cards.iter_mut().zip(keyed) {
        *slot = card;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Setting, parse_cards};

    fn hand(s: &str) -> [Card; 7] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn arrange(s: &str) -> ArrangedHand {
        ArrangedHand::from_cards(hand(s), JokerRule::Bug, "test")
    }

    #[test]
    fn display_order() {
        let h = arrange("4D KS 9C KH AC 2S 7D");
        assert_eq!(h.to_string(), "AC KS KH 9C 4D | 7D 2S");
        assert_eq!(h.high().len(), 5);
        assert_eq!(h.low().len(), 2);
        assert_eq!(h.rule(), "test");
    }

    #[test]
    fn ace_low_straight_order() {
        let h = arrange("AC 3D 5H 2S 4C KD QH");
        assert_eq!(h.to_string(), "5H 4C 3D 2S AC | KD QH");
        assert!(h.high_score().is_ace_low());

        // The joker plays as the ace at the bottom of the straight.
        let h = arrange("jo 3D 5H 2S 4C KD QH");
        assert_eq!(h.to_string(), "5H 4C 3D 2S jo | KD QH");
    }

    #[test]
    fn joker_in_its_slot() {
        let h = arrange("3H 4H 5H jo 7H 9H 8H");
        assert_eq!(h.to_string(), "7H jo 5H 4H 3H | 9H 8H");
        assert_eq!(h.high_score(), PokerScore::straight_flush(Rank::Seven));

        // A joker that plays as an ace goes after a natural ace.
        let h = arrange("jo AS 9C 7H 5D KD QH");
        assert_eq!(h.to_string(), "AS jo 9C 7H 5D | KD QH");

        // A joker at the top of a straight without a natural ace.
        let h = arrange("KS QC JD TH jo 5D 2H");
        assert_eq!(h.to_string(), "jo KS QC JD TH | 5D 2H");
        assert_eq!(h.high_score(), PokerScore::straight(Rank::Ace));

        // In the low hand the joker is an ace.
        let h = arrange("KS KC 9D 7H 5D jo 2H");
        assert_eq!(h.to_string(), "KS KC 9D 7H 5D | jo 2H");
    }

    #[test]
    fn scored_setting() {
        let h = hand("3H 4H 5H jo 7H 8H 9H");
        let scored = ScoredSetting::new(Setting::new(5, 6), &h, JokerRule::Bug);
        let arranged = ArrangedHand::new(&h, &scored, JokerRule::Bug, "test");
        assert_eq!(arranged.high_score(), scored.high);
        assert_eq!(arranged.low_score(), scored.low);
        assert_eq!(arranged.to_string(), "7H jo 5H 4H 3H | 9H 8H");

        let cards: [Card; 7] = arranged.into();
        assert_eq!(cards[1], Card::JOKER);
    }

    #[test]
    fn showdown() {
        let banker = arrange("KS KC 9D 7H 5D QH 2H");

        // Wins both hands.
        let player = arrange("AS AC 9C 7C 5C KD 2D");
        assert_eq!(player.showdown(&banker), Showdown::Win);
        assert_eq!(banker.showdown(&player), Showdown::Lose);

        // Wins the high hand, loses the low hand.
        let player = arrange("AS AC 9C 7C 5C JD 2D");
        assert_eq!(player.showdown(&banker), Showdown::Push);

        // Copies go to the banker.
        let player = arrange("KD KH 9H 7D 5H QD 2C");
        assert_eq!(player.showdown(&banker), Showdown::Lose);

        // A copy and a win is a push.
        let player = arrange("KD KH 9H 7D 5H AD 2C");
        assert_eq!(player.showdown(&banker), Showdown::Push);
    }
}
