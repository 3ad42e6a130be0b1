// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! House way hand resolution.
use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    ArrangedHand, Card, Context, EvalError, HandDigest, JokerRule, PokerScore, Seat, StrategyKind,
    candidates, format_cards,
};

/// The rule name of a hand set by a player.
pub const PLAYER_RULE: &str = "player";

/// The house way configuration, the strategy and how the joker plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseWay {
    /// The strategy that sets the hands.
    pub strategy: StrategyKind,
    /// How the joker plays.
    pub joker: JokerRule,
}

impl HouseWay {
    /// Creates a house way with the given strategy and joker rule.
    pub fn new(strategy: StrategyKind, joker: JokerRule) -> Self {
        Self { strategy, joker }
    }

    /// Sets a seven cards hand.
    ///
    /// Returns an error if the hand has a duplicate card or more than one
    /// joker. Panics if the hand has no legal setting, which cannot happen
    /// for a hand dealt from a Pai Gow deck.
    pub fn resolve(&self, hand: [Card; 7], seat: Seat) -> Result<ArrangedHand, EvalError> {
        check_unique(&hand)?;

        let digest = HandDigest::with_rule(&hand, self.joker);
        let candidates = candidates(&hand, self.joker);
        let ctx = Context::new(&hand, &digest, &candidates, seat);
        trace!(
            "Hand {} candidates {} mask {}",
            format_cards(&hand),
            candidates.len(),
            ctx.mask
        );

        let selection = self.strategy.strategy().select(&ctx);
        let arranged = ArrangedHand::new(
            &hand,
            &candidates[selection.index],
            self.joker,
            selection.rule,
        );

        debug!(
            "{} {seat} hand {} set as {arranged} by {}",
            self.strategy,
            format_cards(&hand),
            selection.rule
        );

        Ok(arranged)
    }

    /// Sets a hand given as a slice, the slice must have seven cards.
    pub fn resolve_cards(&self, cards: &[Card], seat: Seat) -> Result<ArrangedHand, EvalError> {
        let hand = <[Card; 7]>::try_from(cards).map_err(|_| EvalError::CardCount {
            expected: "7",
            found: cards.len(),
        })?;

        self.resolve(hand, seat)
    }

    /// Scores a five cards high hand or a two cards low hand.
    pub fn classify(&self, cards: &[Card]) -> Result<PokerScore, EvalError> {
        if cards.len() != 5 && cards.len() != 2 {
            return Err(EvalError::CardCount {
                expected: "5 or 2",
                found: cards.len(),
            });
        }

        Ok(PokerScore::from_digest(&HandDigest::with_rule(
            cards, self.joker,
        )))
    }

    /// Checks a hand set by a player, returns an error if the hands don't have
    /// five and two cards, if a card is repeated, or if the hand is foul.
    pub fn validate_setting(&self, high: &[Card], low: &[Card]) -> Result<ArrangedHand, EvalError> {
        if high.len() != 5 {
            return Err(EvalError::CardCount {
                expected: "5",
                found: high.len(),
            });
        }

        if low.len() != 2 {
            return Err(EvalError::CardCount {
                expected: "2",
                found: low.len(),
            });
        }

        let mut cards = [Card::JOKER; 7];
        for (slot, card) in cards.iter_mut().zip(high.iter().chain(low)) {
            *slot = *card;
        }

        check_unique(&cards)?;

        let arranged = ArrangedHand::from_cards(cards, self.joker, PLAYER_RULE);
        if arranged.low_score() >= arranged.high_score() {
            return Err(EvalError::Foul {
                high: arranged.high_score(),
                low: arranged.low_score(),
            });
        }

        Ok(arranged)
    }
}

/// Sets a seven cards hand with the default house way.
pub fn resolve(hand: [Card; 7], is_banker: bool) -> Result<ArrangedHand, EvalError> {
    HouseWay::default().resolve(hand, Seat::from_banker(is_banker))
}

/// Scores a five cards high hand or a two cards low hand with a Pai Gow joker.
pub fn classify(cards: &[Card]) -> Result<PokerScore, EvalError> {
    HouseWay::default().classify(cards)
}

/// Checks a player setting with the default house way.
pub fn validate_setting(high: &[Card], low: &[Card]) -> Result<ArrangedHand, EvalError> {
    HouseWay::default().validate_setting(high, low)
}

/// Returns an error for a repeated card, a second joker is a repeated card.
fn check_unique(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Deck, Rank, Showdown, parse_cards};
    use rand::prelude::*;

    fn hand(s: &str) -> [Card; 7] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn resolve_hands() {
        let arranged = resolve(hand("3H 4H 5H jo 7H 8H 9H"), false).unwrap();
        assert_eq!(arranged.to_string(), "7H jo 5H 4H 3H | 9H 8H");
        assert_eq!(arranged.high_score().category(), Category::StraightFlush);

        let arranged = resolve(hand("KC KD 5H 5S AC 9D 3H"), true).unwrap();
        assert_eq!(arranged.to_string(), "AC KC KD 9D 3H | 5S 5H");
        assert_eq!(arranged.rule(), "two-pair");

        let arranged = resolve(hand("AC 3D 5H 2S 4C KD QH"), false).unwrap();
        assert!(arranged.high_score().is_ace_low());
        assert_eq!(arranged.to_string(), "5H 4C 3D 2S AC | KD QH");
    }

    #[test]
    fn simple_strategy() {
        let way = HouseWay::new(StrategyKind::Simple, JokerRule::Bug);
        let arranged = way
            .resolve(hand("3H 4H 5H jo 7H 8H 9H"), Seat::Player)
            .unwrap();

        // The joker plays as an ace in the low hand.
        assert_eq!(arranged.high_score().category(), Category::Flush);
        assert_eq!(arranged.to_string(), "8H 7H 5H 4H 3H | jo 9H");
    }

    #[test]
    fn wild_joker() {
        let way = HouseWay::new(StrategyKind::Wong, JokerRule::Wild);
        let score = way.classify(&parse_cards("KC KD KH 5S jo").unwrap()).unwrap();
        assert_eq!(score, PokerScore::four_of_a_kind(Rank::King, Some(Rank::Five)));

        let score = classify(&parse_cards("KC KD KH 5S jo").unwrap()).unwrap();
        assert_eq!(score.category(), Category::ThreeOfAKind);
    }

    #[test]
    fn classify_hands() {
        let score = classify(&parse_cards("ACADACASJO").unwrap()).unwrap();
        assert_eq!(score, PokerScore::five_of_a_kind(Rank::Ace));

        let score = classify(&parse_cards("2C3D4H5SJO").unwrap()).unwrap();
        assert_eq!(score, PokerScore::ace_low_straight());

        let score = classify(&parse_cards("2H3H4H5HJO").unwrap()).unwrap();
        assert_eq!(score, PokerScore::ace_low_straight_flush());

        let score = classify(&parse_cards("AS jo").unwrap()).unwrap();
        assert_eq!(score, PokerScore::pair(Rank::Ace, &[]));

        let err = classify(&parse_cards("AS KS QS").unwrap()).unwrap_err();
        assert_eq!(
            err,
            EvalError::CardCount {
                expected: "5 or 2",
                found: 3
            }
        );
    }

    #[test]
    fn invalid_hands() {
        let err = resolve(hand("AC AC 5H 2S 4C KD QH"), false).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard(parse_cards("AC").unwrap()[0]));

        let err = resolve(hand("jo jo 5H 2S 4C KD QH"), false).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard(Card::JOKER));

        let way = HouseWay::default();
        let cards = parse_cards("AC 5H 2S 4C KD QH").unwrap();
        let err = way.resolve_cards(&cards, Seat::Banker).unwrap_err();
        assert!(matches!(err, EvalError::CardCount { found: 6, .. }));
        assert_eq!(err.to_string(), "expected 7 cards, found 6");
    }

    #[test]
    fn validate_settings() {
        let high = parse_cards("KC KD 9H 7S 5C").unwrap();
        let low = parse_cards("AC 2D").unwrap();
        let arranged = validate_setting(&high, &low).unwrap();
        assert_eq!(arranged.rule(), PLAYER_RULE);
        assert_eq!(arranged.to_string(), "KC KD 9H 7S 5C | AC 2D");

        // A pair in the low hand over a high card.
        let high = parse_cards("AC KD 9H 7S 5C").unwrap();
        let low = parse_cards("2C 2D").unwrap();
        let err = validate_setting(&high, &low).unwrap_err();
        assert!(matches!(err, EvalError::Foul { .. }));

        let low = parse_cards("AC 2D").unwrap();
        let err = validate_setting(&high, &low).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard(parse_cards("AC").unwrap()[0]));

        let err = validate_setting(&high[..4], &low).unwrap_err();
        assert!(matches!(err, EvalError::CardCount { found: 4, .. }));
    }

    #[test]
    fn player_against_banker() {
        let banker = resolve(hand("KC KD 5H 5S AC 9D 3H"), true).unwrap();
        let player = validate_setting(
            &parse_cards("AH AS 8C 7C 2C").unwrap(),
            &parse_cards("6D 6H").unwrap(),
        )
        .unwrap();
        assert_eq!(player.showdown(&banker), Showdown::Win);
    }

    #[test]
    fn sampled_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        for way in [
            HouseWay::default(),
            HouseWay::new(StrategyKind::Simple, JokerRule::Bug),
            HouseWay::new(StrategyKind::Wong, JokerRule::Wild),
        ] {
            Deck::default().sample(&mut rng, 2_000, 7, |cards| {
                for seat in [Seat::Player, Seat::Banker] {
                    let arranged = way.resolve_cards(cards, seat).unwrap();
                    assert!(arranged.high_score() > arranged.low_score());

                    // Same cards, same scores as a player setting.
                    let player = way
                        .validate_setting(arranged.high(), arranged.low())
                        .unwrap();
                    assert_eq!(player.high_score(), arranged.high_score());
                    assert_eq!(player.low_score(), arranged.low_score());
                    assert_eq!(player.showdown(&arranged), Showdown::Lose);
                }
            });
        }
    }

    #[test]
    fn concurrent_resolutions() {
        let hands = [
            hand("3H 4H 5H jo 7H 8H 9H"),
            hand("KC KD 5H 5S AC 9D 3H"),
            hand("AC AD AH AS jo 9C 4D"),
            hand("7C 7D 7H 7S JC 9D 2H"),
        ];

        let expected = hands
            .iter()
            .map(|h| resolve(*h, false).unwrap())
            .collect::<Vec<_>>();

        std::thread::scope(|s| {
            let handles = hands
                .iter()
                .map(|h| s.spawn(move || resolve(*h, false).unwrap()))
                .collect::<Vec<_>>();

            for (handle, expected) in handles.into_iter().zip(&expected) {
                assert_eq!(&handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn default_config() {
        let way = HouseWay::default();
        assert_eq!(way.strategy, StrategyKind::Wong);
        assert_eq!(way.joker, JokerRule::Bug);
    }

    #[test]
    #[ignore]
    fn all_hands_resolve() {
        let way = HouseWay::default();
        Deck::default().for_each(7, |cards| {
            let arranged = way.resolve_cards(cards, Seat::Banker).unwrap();
            assert!(arranged.high_score() > arranged.low_score());
        });
    }
}
