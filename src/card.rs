use std::fmt::{Display, Formatter, Result};

pub const NUM_FACES: usize = 13;

pub const NUM_SUITS: usize = 4;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum CardFace {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl CardFace {
    pub const ALL: [CardFace; NUM_FACES] = [
        CardFace::Two,
        CardFace::Three,
        CardFace::Four,
        CardFace::Five,
        CardFace::Six,
        CardFace::Seven,
        CardFace::Eight,
        CardFace::Nine,
        CardFace::Ten,
        CardFace::Jack,
        CardFace::Queen,
        CardFace::King,
        CardFace::Ace,
    ];

    /// Rank used for ordering and runs. Ace is always high.
    pub const fn rank(self) -> u8 {
        match self {
            CardFace::Two => 2,
            CardFace::Three => 3,
            CardFace::Four => 4,
            CardFace::Five => 5,
            CardFace::Six => 6,
            CardFace::Seven => 7,
            CardFace::Eight => 8,
            CardFace::Nine => 9,
            CardFace::Ten => 10,
            CardFace::Jack => 11,
            CardFace::Queen => 12,
            CardFace::King => 13,
            CardFace::Ace => 14,
        }
    }

    /// Slot in a per-face table, Two at 0.
    pub const fn index(self) -> usize {
        (self.rank() - CardFace::Two.rank()) as usize
    }

    pub fn from_rank(rank: u8) -> Option<CardFace> {
        CardFace::ALL.into_iter().find(|f| f.rank() == rank)
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardFace::Two => "Two",
            CardFace::Three => "Three",
            CardFace::Four => "Four",
            CardFace::Five => "Five",
            CardFace::Six => "Six",
            CardFace::Seven => "Seven",
            CardFace::Eight => "Eight",
            CardFace::Nine => "Nine",
            CardFace::Ten => "Ten",
            CardFace::Jack => "Jack",
            CardFace::Queen => "Queen",
            CardFace::King => "King",
            CardFace::Ace => "Ace",
        }
    }
}

impl Display for CardFace {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.name())
    }
}

/// No ordering: suits are only ever compared for equality.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CardSuit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl CardSuit {
    pub const ALL: [CardSuit; NUM_SUITS] = [
        CardSuit::Clubs,
        CardSuit::Diamonds,
        CardSuit::Hearts,
        CardSuit::Spades,
    ];

    pub const fn index(self) -> usize {
        match self {
            CardSuit::Clubs => 0,
            CardSuit::Diamonds => 1,
            CardSuit::Hearts => 2,
            CardSuit::Spades => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardSuit::Clubs => "Clubs",
            CardSuit::Diamonds => "Diamonds",
            CardSuit::Hearts => "Hearts",
            CardSuit::Spades => "Spades",
        }
    }
}

impl Display for CardSuit {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    face: CardFace,
    suit: CardSuit,
}

impl Card {
    pub const fn new(face: CardFace, suit: CardSuit) -> Self {
        Self { face, suit }
    }
    pub const fn face(&self) -> CardFace {
        self.face
    }
    pub const fn suit(&self) -> CardSuit {
        self.suit
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}
