use super::card::Card;
use super::suit::Suit;

/// an unordered set of cards, one bit per card in the 52 LSBs of a u64.
/// a single word regardless of size, no heap allocation, and set
/// operations become bitwise ones.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// all 52 cards
    pub fn full() -> Self {
        Self(Self::mask())
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }

    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }

    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    /// the sub-hand holding only cards of the given suit
    pub fn of(&self, suit: &Suit) -> Hand {
        let mut hand = Hand::empty();
        for card in *self {
            if card.suit() == *suit {
                hand.insert(card);
            }
        }
        hand
    }

    /// the i-th lowest card, if the hand holds that many
    pub fn nth(&self, i: usize) -> Option<Card> {
        Iterator::nth(&mut self.into_iter(), i)
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// cards come out low to high
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// one-way projection onto rank bits; the 13-bit mask the
/// straight and flush logic operates on
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        h.into_iter()
            .map(|card| u16::from(card.rank()))
            .fold(0, |acc, bit| acc | bit)
    }
}

/// Vec<Card> isomorphism (up to permutation; always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards
            .iter()
            .fold(Hand::empty(), |mut hand, card| {
                hand.insert(*card);
                hand
            })
    }
}

/// str isomorphism, whitespace separated, e.g. "As Kh Qd"
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        s.split_whitespace()
            .map(Card::from)
            .fold(Hand::empty(), |mut hand, card| {
                hand.insert(card);
                hand
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
