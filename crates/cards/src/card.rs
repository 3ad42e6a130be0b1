// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pai Gow cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// The suit nibble reserved for the joker.
const JOKER_SUIT: u8 = 5;

/// A Pai Gow Poker card.
///
/// A card is encoded in a single byte that is also the format used for wire and
/// storage:
///
/// ```text
///   +----+----+
///   |ssss|rrrr|
///   +----+----+
///   r = rank (deuce=2,trey=3,...,king=13,ace=14), 0 for the joker
///   s = suit (diamonds=1,clubs=2,hearts=3,spades=4), 5 for the joker
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// The joker.
    pub const JOKER: Card = Card(JOKER_SUIT << 4);

    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card(((suit as u8) << 4) | rank as u8)
    }

    /// Decodes a card from its byte encoding, returns `None` for a nil card.
    pub const fn from_byte(byte: u8) -> Option<Card> {
        let (suit, rank) = (byte >> 4, byte & 0xf);
        if suit == JOKER_SUIT && rank == 0 {
            Some(Card::JOKER)
        } else if 1 <= suit && suit < JOKER_SUIT && 2 <= rank && rank <= 14 {
            Some(Card(byte))
        } else {
            None
        }
    }

    /// This card byte encoding.
    pub const fn byte(&self) -> u8 {
        self.0
    }

    /// Checks if this card is the joker.
    pub const fn is_joker(&self) -> bool {
        self.0 == Card::JOKER.0
    }

    /// Returns the card rank, `None` for the joker.
    pub fn rank(&self) -> Option<Rank> {
        Rank::from_value(self.0 & 0xf)
    }

    /// Returns the card suit, `None` for the joker.
    pub fn suit(&self) -> Option<Suit> {
        Suit::from_value(self.0 >> 4)
    }

    /// Returns the rank and suit of a natural card.
    pub fn decode(&self) -> Option<(Rank, Suit)> {
        self.rank().zip(self.suit())
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Card::from_byte(byte).ok_or(CardError::InvalidEncoding(byte))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some((rank, suit)) => write!(f, "{rank}{suit}"),
            None => write!(f, "jo"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Card::from_chars(r, s),
            _ => Err(CardError::Incomplete(s.to_string())),
        }
    }
}

impl Card {
    fn from_chars(r: char, s: char) -> Result<Card, CardError> {
        if r.eq_ignore_ascii_case(&'j') && s.eq_ignore_ascii_case(&'o') {
            return Ok(Card::JOKER);
        }

        let rank = Rank::from_char(r).ok_or(CardError::InvalidRank(r))?;
        let suit = Suit::from_char(s).ok_or(CardError::InvalidSuit(s))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards like `"ACADACASJO"` or `"AC AD jo"`.
///
/// Whitespace and commas between cards are ignored, ranks and suits are case
/// insensitive, and `jo` is the joker.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    chars
        .chunks(2)
        .map(|pair| match pair {
            [r, s] => Card::from_chars(*r, *s),
            _ => Err(CardError::Incomplete(pair.iter().collect())),
        })
        .collect()
}

/// Formats a list of cards separated by spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().nth(usize::from(value).checked_sub(2)?)
    }

    /// The rank numeric value with the ace as 14.
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank name used in hand descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name used in hand descriptions.
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Treys",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 1,
    /// Clubs suit.
    Clubs = 2,
    /// Hearts suit.
    Hearts = 3,
    /// Spades suit.
    Spades = 4,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Returns the suit for a value in 1..=4.
    pub fn from_value(value: u8) -> Option<Suit> {
        Suit::suits().nth(usize::from(value).checked_sub(1)?)
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut bytes = HashSet::default();

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.decode(), Some((rank, suit)));
                assert_eq!(card.byte() & 0xf, rank as u8);
                assert_eq!(card.byte() >> 4, suit as u8);
                assert_eq!(Card::from_byte(card.byte()), Some(card));
                assert!(!card.is_joker());
                bytes.insert(card.byte());
            }
        }

        assert_eq!(bytes.len(), 52);
        assert!(!bytes.contains(&Card::JOKER.byte()));

        assert_eq!(Card::JOKER.byte(), 0x50);
        assert!(Card::JOKER.is_joker());
        assert_eq!(Card::JOKER.decode(), None);
        assert_eq!(Card::from_byte(0x50), Some(Card::JOKER));

        assert_eq!(Card::new(Rank::Ace, Suit::Spades).byte(), 0x4e);
        assert_eq!(Card::new(Rank::Deuce, Suit::Diamonds).byte(), 0x12);
    }

    #[test]
    fn nil_cards() {
        for byte in [0x00, 0x01, 0x11, 0x1f, 0x0e, 0x5e, 0x60, 0xff] {
            assert_eq!(Card::from_byte(byte), None, "byte 0x{byte:02x}");
            assert_eq!(Card::try_from(byte), Err(CardError::InvalidEncoding(byte)));
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        assert_eq!(Card::JOKER.to_string(), "jo");
        assert_eq!(format!("{:?}", Card::JOKER), "Card(jo)");
    }

    #[test]
    fn parse_hand() {
        let cards = parse_cards("ACADACASJO").unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[1], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(cards[4], Card::JOKER);

        let cards = parse_cards("2c 3d, 4h 5s jo").unwrap();
        assert_eq!(format_cards(&cards), "2C 3D 4H 5S jo");

        assert_eq!("JC".parse::<Card>(), Ok(Card::new(Rank::Jack, Suit::Clubs)));
        assert_eq!("Jo".parse::<Card>(), Ok(Card::JOKER));

        assert_eq!(parse_cards("1C"), Err(CardError::InvalidRank('1')));
        assert_eq!(parse_cards("AX"), Err(CardError::InvalidSuit('X')));
        assert_eq!(parse_cards("ACK"), Err(CardError::Incomplete("K".to_string())));
        assert_eq!(
            "ACK".parse::<Card>(),
            Err(CardError::Incomplete("ACK".to_string()))
        );
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::from_value(2), Some(Rank::Deuce));
        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Six.plural(), "Sixes");
        assert_eq!(Rank::Deuce.plural(), "Deuces");
    }
}
