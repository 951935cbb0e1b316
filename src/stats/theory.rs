use crate::evaluation::ranking::Category;
use crate::evaluation::trio::TrioCategory;
use crate::Probability;

/// C(52, 5)
pub const FIVE_CARD_TOTAL: u64 = 2_598_960;
/// C(52, 3)
pub const THREE_CARD_TOTAL: u64 = 22_100;

/// exact count of five-card hands landing in a category, with the
/// one-pair bucket split at tens
pub fn five_card_count(category: Category) -> u64 {
    match category {
        Category::HighCard => 1_302_540,
        Category::LowPair => 675_840,
        Category::TensOrBetter => 422_400,
        Category::TwoPair => 123_552,
        Category::ThreeOAK => 54_912,
        Category::Straight => 10_200,
        Category::Flush => 5_108,
        Category::FullHouse => 3_744,
        Category::FourOAK => 624,
        Category::StraightFlush => 36,
        Category::RoyalFlush => 4,
    }
}

/// exact count of three-card hands landing in a category. note
/// straights outrank flushes here.
pub fn three_card_count(category: TrioCategory) -> u64 {
    match category {
        TrioCategory::HighCard => 16_440,
        TrioCategory::Pair => 3_744,
        TrioCategory::Flush => 1_096,
        TrioCategory::Straight => 720,
        TrioCategory::ThreeOAK => 52,
        TrioCategory::StraightFlush => 44,
        TrioCategory::MiniRoyal => 4,
    }
}

pub fn five_card_probability(category: Category) -> Probability {
    five_card_count(category) as f64 / FIVE_CARD_TOTAL as f64
}

pub fn three_card_probability(category: TrioCategory) -> Probability {
    three_card_count(category) as f64 / THREE_CARD_TOTAL as f64
}

/// probabilities in `Category` index order, for goodness-of-fit
pub fn five_card_probabilities() -> [Probability; Category::COUNT] {
    let mut probabilities = [0.0; Category::COUNT];
    for category in Category::ALL {
        probabilities[category.index()] = five_card_probability(category);
    }
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_card_counts_cover_the_deck() {
        let total: u64 = Category::ALL.iter().map(|&c| five_card_count(c)).sum();
        assert_eq!(total, FIVE_CARD_TOTAL);
    }

    #[test]
    fn three_card_counts_cover_the_deck() {
        let total: u64 = TrioCategory::ALL.iter().map(|&c| three_card_count(c)).sum();
        assert_eq!(total, THREE_CARD_TOTAL);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let total: f64 = five_card_probabilities().iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
