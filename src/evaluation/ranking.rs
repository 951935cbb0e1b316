use crate::cards::rank::Rank;
use serde::Serialize;

/// a five-card hand's value, ascending.
///
/// the pair categories are split at tens because only a pair of
/// tens or better pays in the main game; a low pair is worth no
/// more than a high card at settlement but the distinction still
/// matters to strategy and to the frequency tables. ace-high
/// straight flushes get their own royal category since the
/// paytable rewards them separately.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
pub enum Ranking {
    HighCard(Rank),
    LowPair(Rank),         // pair below tens, never pays
    TensOrBetter(Rank),    // qualifying pair
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
    RoyalFlush,
}

/// the payout category of a Ranking, stripped of tie-break ranks.
/// paytables and frequency tables are keyed by this.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    HighCard = 0,
    LowPair = 1,
    TensOrBetter = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const COUNT: usize = 11;

    pub const ALL: [Category; Self::COUNT] = [
        Category::HighCard,
        Category::LowPair,
        Category::TensOrBetter,
        Category::TwoPair,
        Category::ThreeOAK,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOAK,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Ranking {
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::LowPair(_) => Category::LowPair,
            Ranking::TensOrBetter(_) => Category::TensOrBetter,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }

    /// tens-or-better, the minimum that pays in the main game
    pub fn qualifies(&self) -> bool {
        self.category() >= Category::TensOrBetter
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::LowPair => "Low Pair",
                Category::TensOrBetter => "Tens or Better",
                Category::TwoPair => "Two Pair",
                Category::ThreeOAK => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOAK => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
                Category::RoyalFlush => "Royal Flush",
            }
        )
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::TwoPair(hi, lo) => write!(f, "{} {}{}", self.category(), hi, lo),
            Ranking::FullHouse(t, p) => write!(f, "{} {}{}", self.category(), t, p),
            Ranking::RoyalFlush => write!(f, "{}", self.category()),
            Ranking::HighCard(r)
            | Ranking::LowPair(r)
            | Ranking::TensOrBetter(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => write!(f, "{} {}", self.category(), r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_order() {
        assert!(Ranking::RoyalFlush > Ranking::StraightFlush(Rank::King));
        assert!(Ranking::TensOrBetter(Rank::Ten) > Ranking::LowPair(Rank::Nine));
        assert!(Ranking::LowPair(Rank::Nine) > Ranking::HighCard(Rank::Ace));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
    }

    #[test]
    fn qualification_boundary() {
        assert!(Ranking::TensOrBetter(Rank::Ten).qualifies());
        assert!(!Ranking::LowPair(Rank::Nine).qualifies());
        assert!(!Ranking::HighCard(Rank::Ace).qualifies());
        assert!(Ranking::RoyalFlush.qualifies());
    }

    #[test]
    fn category_indices_are_dense() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
