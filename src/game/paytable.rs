use crate::errors::ConfigError;
use crate::evaluation::ranking::Category;
use crate::evaluation::trio::TrioCategory;
use crate::Chips;
use serde::Serialize;

/// injected mapping from five-card category to payout ratio.
/// construction demands every category exactly once, so a missing
/// ratio is a configuration error at load time and lookups during
/// settlement are infallible. a zero ratio means the wager loses.
#[derive(Debug, Clone, Serialize)]
pub struct Paytable {
    ratios: [Chips; Category::COUNT],
}

impl Paytable {
    pub fn new(entries: &[(Category, Chips)]) -> Result<Self, ConfigError> {
        let mut ratios = [Chips::NAN; Category::COUNT];
        for (category, ratio) in entries {
            if *ratio < 0.0 {
                return Err(ConfigError::Negative {
                    field: "payout ratio",
                    value: *ratio,
                });
            }
            if !ratios[category.index()].is_nan() {
                return Err(ConfigError::DuplicatePayout(category.to_string()));
            }
            ratios[category.index()] = *ratio;
        }
        for category in Category::ALL {
            if ratios[category.index()].is_nan() {
                return Err(ConfigError::MissingPayout(category.to_string()));
            }
        }
        Ok(Self { ratios })
    }

    /// the widely published main-game table
    pub fn standard() -> Self {
        Self::new(&[
            (Category::RoyalFlush, 1000.0),
            (Category::StraightFlush, 200.0),
            (Category::FourOAK, 50.0),
            (Category::FullHouse, 11.0),
            (Category::Flush, 8.0),
            (Category::Straight, 5.0),
            (Category::ThreeOAK, 3.0),
            (Category::TwoPair, 2.0),
            (Category::TensOrBetter, 1.0),
            (Category::LowPair, 0.0),
            (Category::HighCard, 0.0),
        ])
        .expect("standard paytable is complete")
    }

    pub fn ratio(&self, category: Category) -> Chips {
        self.ratios[category.index()]
    }
}

/// the bonus side wager's table, keyed by three-card category
#[derive(Debug, Clone, Serialize)]
pub struct BonusPaytable {
    ratios: [Chips; TrioCategory::COUNT],
}

impl BonusPaytable {
    pub fn new(entries: &[(TrioCategory, Chips)]) -> Result<Self, ConfigError> {
        let mut ratios = [Chips::NAN; TrioCategory::COUNT];
        for (category, ratio) in entries {
            if *ratio < 0.0 {
                return Err(ConfigError::Negative {
                    field: "bonus payout ratio",
                    value: *ratio,
                });
            }
            if !ratios[category.index()].is_nan() {
                return Err(ConfigError::DuplicatePayout(category.to_string()));
            }
            ratios[category.index()] = *ratio;
        }
        for category in TrioCategory::ALL {
            if ratios[category.index()].is_nan() {
                return Err(ConfigError::MissingPayout(category.to_string()));
            }
        }
        Ok(Self { ratios })
    }

    /// the widely published three-card bonus table
    pub fn standard() -> Self {
        Self::new(&[
            (TrioCategory::MiniRoyal, 50.0),
            (TrioCategory::StraightFlush, 40.0),
            (TrioCategory::ThreeOAK, 30.0),
            (TrioCategory::Straight, 6.0),
            (TrioCategory::Flush, 3.0),
            (TrioCategory::Pair, 1.0),
            (TrioCategory::HighCard, 0.0),
        ])
        .expect("standard bonus paytable is complete")
    }

    pub fn ratio(&self, category: TrioCategory) -> Chips {
        self.ratios[category.index()]
    }
}
