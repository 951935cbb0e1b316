use super::kicks::Kickers;
use super::ranking::Ranking;
use serde::Serialize;

/// full result of a five-card evaluation: the ranked category plus
/// whatever kickers are left to break ties within it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kickers
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.kickers.is_empty() {
            write!(f, "{}", self.ranking)
        } else {
            write!(f, "{} [{}]", self.ranking, self.kickers)
        }
    }
}
