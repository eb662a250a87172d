//! Short card notation: a face token then a suit letter, e.g. `Ah`, `Td`,
//! `10c`. Hands are cards separated by whitespace or commas.

use crate::card::{Card, CardFace, CardSuit};
use crate::error::ParseError;
use crate::hand::Hand;
use std::str::FromStr;

fn face(s: &str) -> Option<CardFace> {
    let face = match s.to_ascii_uppercase().as_str() {
        "2" => CardFace::Two,
        "3" => CardFace::Three,
        "4" => CardFace::Four,
        "5" => CardFace::Five,
        "6" => CardFace::Six,
        "7" => CardFace::Seven,
        "8" => CardFace::Eight,
        "9" => CardFace::Nine,
        "T" | "10" => CardFace::Ten,
        "J" => CardFace::Jack,
        "Q" => CardFace::Queen,
        "K" => CardFace::King,
        "A" => CardFace::Ace,
        _ => return None,
    };
    Some(face)
}

fn suit(c: char) -> Option<CardSuit> {
    match c.to_ascii_lowercase() {
        'c' => Some(CardSuit::Clubs),
        'd' => Some(CardSuit::Diamonds),
        'h' => Some(CardSuit::Hearts),
        's' => Some(CardSuit::Spades),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, last) = s.char_indices().last().ok_or(ParseError::Empty)?;
        let suit = suit(last).ok_or_else(|| ParseError::Suit(s.to_string()))?;
        let face = face(&s[..split]).ok_or_else(|| ParseError::Face(s.to_string()))?;
        Ok(Card::new(face, suit))
    }
}

/// Cards stay in the order written, duplicates included.
impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<Card>)
            .collect()
    }
}
