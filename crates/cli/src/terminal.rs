// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, StyledContent, Stylize},
};
use std::{fmt, io};

use paigow_eval::{ArrangedHand, Card, HandDigest, PokerScore, ScoredSetting, Showdown, Suit};

/// Prints hands to a terminal.
pub struct Terminal<W: io::Write> {
    w: W,
    color: bool,
}

impl<W: io::Write> Terminal<W> {
    /// Creates a terminal that writes to `w`, cards are colored by suit if
    /// `color` is set.
    pub fn new(w: W, color: bool) -> Self {
        Self { w, color }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.w
    }

    /// Prints a line of text.
    pub fn println(&mut self, text: impl fmt::Display) -> Result<()> {
        queue!(self.w, style::Print(format!("{text}\n")))?;
        self.w.flush()?;
        Ok(())
    }

    /// Prints a list of cards without a new line.
    pub fn print_cards(&mut self, cards: &[Card]) -> Result<()> {
        for (idx, card) in cards.iter().enumerate() {
            if idx > 0 {
                queue!(self.w, style::Print(" "))?;
            }

            let styled = self.styled(*card);
            queue!(self.w, style::PrintStyledContent(styled))?;
        }

        Ok(())
    }

    /// Prints an arranged hand with its scores and the rule that set it.
    pub fn print_arranged(&mut self, label: &str, hand: &ArrangedHand) -> Result<()> {
        queue!(self.w, style::Print(format!("{label:<8}")))?;
        self.print_cards(hand.high())?;
        queue!(self.w, style::Print(" | "))?;
        self.print_cards(hand.low())?;
        queue!(
            self.w,
            style::Print(format!(
                "  [{} / {}] ({})\n",
                hand.high_score(),
                hand.low_score(),
                hand.rule()
            ))
        )?;

        self.w.flush()?;
        Ok(())
    }

    /// Prints the settings of a hand marking the chosen one.
    pub fn print_settings(
        &mut self,
        settings: &[(ScoredSetting, ArrangedHand)],
        chosen: &ArrangedHand,
    ) -> Result<()> {
        for (scored, arranged) in settings {
            let mark = if arranged.cards() == chosen.cards() { "*" } else { " " };
            queue!(self.w, style::Print(format!("{mark} {:<8}", scored.setting)))?;
            self.print_cards(arranged.high())?;
            queue!(self.w, style::Print(" | "))?;
            self.print_cards(arranged.low())?;
            queue!(
                self.w,
                style::Print(format!("  [{} / {}]\n", scored.high, scored.low))
            )?;
        }

        self.w.flush()?;
        Ok(())
    }

    /// Prints a hand score.
    pub fn print_score(&mut self, cards: &[Card], score: &PokerScore) -> Result<()> {
        self.print_cards(cards)?;
        queue!(self.w, style::Print(format!("  {score}\n")))?;
        self.w.flush()?;
        Ok(())
    }

    /// Prints how the cards of a hand play.
    pub fn print_digest(&mut self, cards: &[Card], digest: &HandDigest) -> Result<()> {
        self.print_cards(cards)?;
        queue!(self.w, style::Print("\n"))?;

        let ranks = digest
            .ranks()
            .iter()
            .rev()
            .map(|r| r.to_string())
            .collect::<String>();
        self.println(format!("  ranks:     {ranks}"))?;

        let suits = digest
            .suits()
            .iter()
            .rev()
            .map(|s| s.to_string())
            .collect::<String>();
        self.println(format!("  suits:     {suits}"))?;

        for s in digest.substitutions() {
            let suit = s.suit.map(|s| s.to_string()).unwrap_or_default();
            self.println(format!("  joker:     {}{suit} at {}", s.rank, s.position))?;
        }

        if let Some(run) = digest.straight_flush() {
            self.println(format!("  s.flush:   {} high", run.high().name()))?;
        }

        if let Some(flush) = digest.flush() {
            self.println(format!("  flush:     {}", flush.suit()))?;
        }

        if let Some(run) = digest.straight() {
            let ace_low = if run.is_ace_low() { " (ace-low)" } else { "" };
            self.println(format!("  straight:  {} high{ace_low}", run.high().name()))?;
        }

        let tuples = [
            ("quints", digest.quint_count()),
            ("quads", digest.quad_count()),
            ("triples", digest.triple_count()),
            ("pairs", digest.pair_count()),
        ];

        let tuples = tuples
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(name, count)| format!("{count} {name}"))
            .collect::<Vec<_>>();
        if !tuples.is_empty() {
            self.println(format!("  tuples:    {}", tuples.join(", ")))?;
        }

        let skipped = digest.skipped();
        if !skipped.is_empty() {
            let cards = skipped.iter().map(|&p| cards[p]).collect::<Vec<_>>();
            queue!(self.w, style::Print("  skipped:   "))?;
            self.print_cards(&cards)?;
            queue!(self.w, style::Print("\n"))?;
        }

        self.println(format!("  score:     {}", PokerScore::from_digest(digest)))?;
        Ok(())
    }

    /// Prints a player hand against the house hand.
    pub fn print_showdown(&mut self, player: &ArrangedHand, house: &ArrangedHand) -> Result<()> {
        self.print_arranged("Player", player)?;
        self.print_arranged("House", house)?;

        let high = player.high_score().describe_against(&house.high_score());
        let low = player.low_score().describe_against(&house.low_score());
        self.println(format!("High:   {high}"))?;
        self.println(format!("Low:    {low}"))?;

        let outcome = player.showdown(house);
        let text = outcome.to_string();
        let text = if !self.color {
            style::style(text)
        } else {
            match outcome {
                Showdown::Win => style::style(text).green(),
                Showdown::Lose => style::style(text).red(),
                Showdown::Push => style::style(text).yellow(),
            }
        };

        queue!(
            self.w,
            style::Print("Result: "),
            style::PrintStyledContent(text),
            style::Print("\n")
        )?;

        self.w.flush()?;
        Ok(())
    }

    fn styled(&self, card: Card) -> StyledContent<String> {
        let text = style::style(card.to_string());
        if !self.color {
            return text;
        }

        match card.suit() {
            Some(Suit::Hearts | Suit::Diamonds) => text.red(),
            Some(Suit::Clubs | Suit::Spades) => text.bold(),
            None => text.yellow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paigow_eval::{JokerRule, classify, parse_cards, resolve};

    fn output(f: impl FnOnce(&mut Terminal<Vec<u8>>) -> Result<()>) -> String {
        let mut term = Terminal::new(Vec::new(), false);
        f(&mut term).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn plain_cards() {
        let cards = parse_cards("AS jo 2H").unwrap();
        let out = output(|t| t.print_cards(&cards));
        assert_eq!(out, "AS jo 2H");
    }

    #[test]
    fn arranged_hand() {
        let hand = parse_cards("3H 4H 5H jo 7H 8H 9H").unwrap();
        let arranged = resolve(hand.try_into().unwrap(), false).unwrap();
        let out = output(|t| t.print_arranged("House", &arranged));
        assert_eq!(
            out,
            "House   7H jo 5H 4H 3H | 9H 8H  [Straight Flush, Seven high / Nine High] (straight-or-flush)\n"
        );
    }

    #[test]
    fn score() {
        let cards = parse_cards("KC KD KH 5S jo").unwrap();
        let score = classify(&cards).unwrap();
        let out = output(|t| t.print_score(&cards, &score));
        assert_eq!(out, "KC KD KH 5S jo  Three Kings\n");
    }

    #[test]
    fn digest() {
        let cards = parse_cards("3H 4H 5H jo 7H").unwrap();
        let digest = HandDigest::with_rule(&cards, JokerRule::Bug);
        let out = output(|t| t.print_digest(&cards, &digest));
        assert!(out.contains("joker:     6H at 3"));
        assert!(out.contains("s.flush:   Seven high"));
        assert!(out.contains("flush:     H"));
        assert!(out.contains("suits:     HHHH"));
        assert!(out.contains("score:     Straight Flush, Seven high"));

        let cards = parse_cards("AS AD AH 2S 5S 9S jo").unwrap();
        let digest = HandDigest::with_rule(&cards, JokerRule::Bug);
        let out = output(|t| t.print_digest(&cards, &digest));
        assert!(out.contains("score:     Four Aces"));
    }

    #[test]
    fn showdown() {
        let cards = parse_cards("KC KD 5H 5S AC 9D 3H").unwrap();
        let house = resolve(cards.try_into().unwrap(), true).unwrap();
        let player = paigow_eval::validate_setting(
            &parse_cards("AH AS 8C 7C 2C").unwrap(),
            &parse_cards("6D 6H").unwrap(),
        )
        .unwrap();

        let out = output(|t| t.print_showdown(&player, &house));
        assert!(out.contains("Result: Win"));
        assert!(out.contains("High:   Pair of Aces"));
    }
}
