use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;

/// A hand's full showdown value.
///
/// The Ranking carries the category and its defining ranks, the Kickers
/// carry whatever side cards still matter. Derived Ord compares ranking
/// first and kickers second, which is the entire comparison contract:
/// category beats category, then tie-break ranks left to right.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kicks
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl From<Evaluator<'_>> for Strength {
    fn from(evaluator: Evaluator<'_>) -> Self {
        let ranking = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(ranking);
        Self { ranking, kicks }
    }
}

impl From<&Hand> for Strength {
    fn from(hand: &Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.ranking, self.kicks)
    }
}
