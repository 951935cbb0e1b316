use crate::cards::rank::Rank;
use serde::Serialize;

/// tie-break ranks left over once a Ranking is fixed, high to low.
/// Let It Ride pays by category so kickers never decide a payout,
/// but they complete the evaluator's contract: category plus
/// kickers fully orders any two hands.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl From<Vec<Rank>> for Kickers {
    fn from(mut ranks: Vec<Rank>) -> Self {
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in &self.0 {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_high_to_low() {
        let kickers = Kickers::from(vec![Rank::Two, Rank::Ace, Rank::Nine]);
        assert_eq!(kickers.ranks(), &[Rank::Ace, Rank::Nine, Rank::Two]);
    }
}
