use crate::card::{Card, CardFace, NUM_FACES, NUM_SUITS};
use crate::hand::Hand;
use std::fmt::{Display, Formatter};

pub const HAND_SIZE: usize = 5;

type FaceCounts = [u8; NUM_FACES];

type SuitCounts = [u8; NUM_SUITS];

/// Face multiplicities of a valid hand, largest first.
type Shape = arrayvec::ArrayVec<u8, HAND_SIZE>;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    /// Same-suit Ten..Ace. Kept apart from straight flush and flush.
    RoyalFlush,
    StraightFlush,
    Flush,
    Straight,
    FourOfAKind,
    FullHouse,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

impl Category {
    /// Highest precedence first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::Flush,
        Category::Straight,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn face_counts(cards: &[Card]) -> FaceCounts {
    let mut ret = FaceCounts::default();
    for c in cards {
        ret[c.face().index()] += 1;
    }
    ret
}

fn suit_counts(cards: &[Card]) -> SuitCounts {
    let mut ret = SuitCounts::default();
    for c in cards {
        ret[c.suit().index()] += 1;
    }
    ret
}

fn shape(face_counts: &FaceCounts) -> Shape {
    let mut ret = face_counts
        .iter()
        .copied()
        .filter(|&c| c > 0)
        .take(HAND_SIZE)
        .collect::<Shape>();
    ret.sort_unstable_by(|a, b| b.cmp(a));
    ret
}

/// Top face of a run of `HAND_SIZE` consecutive faces, if any. Ace only
/// counts high, so A-2-3-4-5 is not a run.
fn run_top(face_counts: &FaceCounts) -> Option<CardFace> {
    let present = face_counts.map(|c| u8::from(c > 0));
    let mut window_sum = present.iter().take(HAND_SIZE).sum::<u8>();
    if window_sum as usize == HAND_SIZE {
        return Some(CardFace::ALL[HAND_SIZE - 1]);
    }
    for i in HAND_SIZE..present.len() {
        window_sum -= present[i - HAND_SIZE];
        window_sum += present[i];
        if window_sum as usize == HAND_SIZE {
            return Some(CardFace::ALL[i]);
        }
    }
    None
}

fn is_one_suit(cards: &[Card]) -> bool {
    suit_counts(cards)
        .iter()
        .any(|&c| c as usize == cards.len())
}

/// Exactly five cards, no two sharing both face and suit.
pub fn is_valid_hand(hand: &Hand) -> bool {
    let cards = hand.cards();
    cards.len() == HAND_SIZE
        && cards
            .iter()
            .enumerate()
            .all(|(i, c)| !cards[i + 1..].contains(c))
}

/// The single category of a valid hand, `None` for a malformed one.
pub fn classify(hand: &Hand) -> Option<Category> {
    if !is_valid_hand(hand) {
        log::debug!("not a valid hand: {hand}");
        return None;
    }
    let cards = hand.cards();
    let face_counts = face_counts(cards);
    let category = match (is_one_suit(cards), run_top(&face_counts)) {
        (true, Some(CardFace::Ace)) => Category::RoyalFlush,
        (true, Some(_)) => Category::StraightFlush,
        (true, None) => Category::Flush,
        (false, Some(_)) => Category::Straight,
        (false, None) => match shape(&face_counts).as_slice() {
            [4, ..] => Category::FourOfAKind,
            [3, 2] => Category::FullHouse,
            [3, ..] => Category::ThreeOfAKind,
            [2, 2, ..] => Category::TwoPair,
            [2, ..] => Category::OnePair,
            _ => Category::HighCard,
        },
    };
    log::debug!("{hand}: {category}");
    Some(category)
}

fn is(hand: &Hand, category: Category) -> bool {
    classify(hand) == Some(category)
}

pub fn is_royal_flush(hand: &Hand) -> bool {
    is(hand, Category::RoyalFlush)
}

/// Excludes the Ten..Ace run, which is [`Category::RoyalFlush`].
pub fn is_straight_flush(hand: &Hand) -> bool {
    is(hand, Category::StraightFlush)
}

pub fn is_flush(hand: &Hand) -> bool {
    is(hand, Category::Flush)
}

pub fn is_straight(hand: &Hand) -> bool {
    is(hand, Category::Straight)
}

pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    is(hand, Category::FourOfAKind)
}

pub fn is_full_house(hand: &Hand) -> bool {
    is(hand, Category::FullHouse)
}

pub fn is_three_of_a_kind(hand: &Hand) -> bool {
    is(hand, Category::ThreeOfAKind)
}

pub fn is_two_pair(hand: &Hand) -> bool {
    is(hand, Category::TwoPair)
}

pub fn is_one_pair(hand: &Hand) -> bool {
    is(hand, Category::OnePair)
}

pub fn is_high_card(hand: &Hand) -> bool {
    is(hand, Category::HighCard)
}
