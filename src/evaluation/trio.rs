use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use serde::Serialize;

/// A-2-3, the three-card wheel
const WHEEL: u16 = 0b1000000000011;

/// a three-card hand's value, ascending. this is the bonus game's
/// ladder: with three cards a straight outranks a flush and trips
/// outrank both, inverting the five-card order. ace-king-queen
/// suited is its own top category (the mini royal).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
pub enum TrioRanking {
    HighCard(Rank),
    Pair(Rank),
    Flush(Rank),
    Straight(Rank),
    ThreeOAK(Rank),
    StraightFlush(Rank),
    MiniRoyal,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
pub enum TrioCategory {
    HighCard = 0,
    Pair = 1,
    Flush = 2,
    Straight = 3,
    ThreeOAK = 4,
    StraightFlush = 5,
    MiniRoyal = 6,
}

impl TrioCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [TrioCategory; Self::COUNT] = [
        TrioCategory::HighCard,
        TrioCategory::Pair,
        TrioCategory::Flush,
        TrioCategory::Straight,
        TrioCategory::ThreeOAK,
        TrioCategory::StraightFlush,
        TrioCategory::MiniRoyal,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TrioRanking {
    pub fn category(&self) -> TrioCategory {
        match self {
            TrioRanking::HighCard(_) => TrioCategory::HighCard,
            TrioRanking::Pair(_) => TrioCategory::Pair,
            TrioRanking::Flush(_) => TrioCategory::Flush,
            TrioRanking::Straight(_) => TrioCategory::Straight,
            TrioRanking::ThreeOAK(_) => TrioCategory::ThreeOAK,
            TrioRanking::StraightFlush(_) => TrioCategory::StraightFlush,
            TrioRanking::MiniRoyal => TrioCategory::MiniRoyal,
        }
    }
}

/// evaluate exactly three cards into a TrioRanking. pure; wrong
/// card counts are contract violations.
pub fn evaluate_trio(cards: &[Card]) -> TrioRanking {
    assert!(
        cards.len() == 3,
        "three-card evaluator requires exactly 3 cards, got {}",
        cards.len()
    );
    assert!(
        Hand::from(cards).size() == 3,
        "duplicate cards in three-card hand"
    );
    let mask = u16::from(Hand::from(cards));
    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high(mask);
    match (flush, straight) {
        (true, Some(Rank::Ace)) => return TrioRanking::MiniRoyal,
        (true, Some(hi)) => return TrioRanking::StraightFlush(hi),
        _ => {}
    }
    if mask.count_ones() == 1 {
        return TrioRanking::ThreeOAK(Rank::from(mask));
    }
    if let Some(hi) = straight {
        return TrioRanking::Straight(hi);
    }
    if flush {
        return TrioRanking::Flush(Rank::from(mask));
    }
    if mask.count_ones() == 2 {
        let paired = cards
            .iter()
            .map(Card::rank)
            .find(|r| cards.iter().filter(|c| c.rank() == *r).count() == 2)
            .expect("two distinct ranks in three cards means a pair");
        return TrioRanking::Pair(paired);
    }
    TrioRanking::HighCard(Rank::from(mask))
}

/// high card of a three-card straight, with the wheel pinned at three
fn straight_high(mask: u16) -> Option<Rank> {
    if mask.count_ones() != 3 {
        None
    } else if mask >> mask.trailing_zeros() == 0b111 {
        Some(Rank::from(mask))
    } else if mask == WHEEL {
        Some(Rank::Three)
    } else {
        None
    }
}

impl std::fmt::Display for TrioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TrioCategory::HighCard => "High Card",
                TrioCategory::Pair => "Pair",
                TrioCategory::Flush => "Flush",
                TrioCategory::Straight => "Straight",
                TrioCategory::ThreeOAK => "Three of a Kind",
                TrioCategory::StraightFlush => "Straight Flush",
                TrioCategory::MiniRoyal => "Mini Royal",
            }
        )
    }
}
