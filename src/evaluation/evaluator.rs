use super::kicks::Kickers;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;

/// A-2-3-4-5, the only straight where the ace plays low
const WHEEL: u16 = 0b1000000001111;

/// evaluate exactly five cards into a Strength. pure and
/// deterministic; wrong card counts and duplicates are contract
/// violations, never silently truncated.
pub fn evaluate(cards: &[Card]) -> Strength {
    Evaluator::from(cards).strength()
}

/// five-card hand evaluator working off per-rank counts and the
/// 13-bit rank mask. with only five cards there is no need for
/// anything cleverer than counting.
pub struct Evaluator {
    counts: [u8; Rank::COUNT],
    mask: u16,
    flush: bool,
}

impl From<&[Card]> for Evaluator {
    fn from(cards: &[Card]) -> Self {
        assert!(
            cards.len() == 5,
            "five-card evaluator requires exactly 5 cards, got {}",
            cards.len()
        );
        assert!(
            Hand::from(cards).size() == 5,
            "duplicate cards in five-card hand"
        );
        let mut counts = [0u8; Rank::COUNT];
        for card in cards {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let mask = u16::from(Hand::from(cards));
        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        Self {
            counts,
            mask,
            flush,
        }
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        let ranking = self.ranking();
        let kickers = self.kickers(&ranking);
        Strength::from((ranking, kickers))
    }

    pub fn ranking(&self) -> Ranking {
        let straight = self.straight_high();
        match (self.flush, straight) {
            (true, Some(Rank::Ace)) => return Ranking::RoyalFlush,
            (true, Some(hi)) => return Ranking::StraightFlush(hi),
            _ => {}
        }
        if let Some(quad) = self.rank_of_count(4) {
            return Ranking::FourOAK(quad);
        }
        if let Some(trip) = self.rank_of_count(3) {
            if let Some(pair) = self.rank_of_count(2) {
                return Ranking::FullHouse(trip, pair);
            }
        }
        if self.flush {
            return Ranking::Flush(Rank::from(self.mask));
        }
        if let Some(hi) = straight {
            return Ranking::Straight(hi);
        }
        if let Some(trip) = self.rank_of_count(3) {
            return Ranking::ThreeOAK(trip);
        }
        let pairs = self.ranks_of_count(2);
        match pairs.as_slice() {
            [hi, lo, ..] => Ranking::TwoPair(*hi, *lo),
            [pair] if pair.is_high() => Ranking::TensOrBetter(*pair),
            [pair] => Ranking::LowPair(*pair),
            [] => Ranking::HighCard(Rank::from(self.mask)),
        }
    }

    fn kickers(&self, ranking: &Ranking) -> Kickers {
        let singles = || self.ranks_of_count(1);
        match ranking {
            Ranking::HighCard(hi) => {
                Kickers::from(singles().into_iter().filter(|r| r != hi).collect::<Vec<_>>())
            }
            Ranking::LowPair(_) | Ranking::TensOrBetter(_) => Kickers::from(singles()),
            Ranking::ThreeOAK(_) => Kickers::from(singles()),
            Ranking::TwoPair(..) => Kickers::from(singles()),
            Ranking::FourOAK(_) => Kickers::from(singles()),
            _ => Kickers::default(),
        }
    }

    /// high card of a straight, with the wheel pinned at five
    fn straight_high(&self) -> Option<Rank> {
        let mask = self.mask;
        if mask.count_ones() != 5 {
            None
        } else if mask >> mask.trailing_zeros() == 0b11111 {
            Some(Rank::from(mask))
        } else if mask == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }

    fn rank_of_count(&self, n: u8) -> Option<Rank> {
        self.ranks_of_count(n).into_iter().next()
    }

    /// ranks appearing exactly n times, high to low
    fn ranks_of_count(&self, n: u8) -> Vec<Rank> {
        (0..Rank::COUNT as u8)
            .rev()
            .filter(|&i| self.counts[i as usize] == n)
            .map(Rank::from)
            .collect()
    }
}
