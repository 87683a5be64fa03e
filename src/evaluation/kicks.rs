use crate::cards::rank::Rank;

/// A hand's kicker cards, highest first.
///
/// Ties within a Ranking fall through to these, compared rank by rank from
/// the left. Comparison is length-aware with no padding: when one run is a
/// prefix of the other, the shorter run loses, so a bare two-pair key is
/// beaten by the same two pairs with a kicker behind them. Derived Ord on
/// the inner Vec gives exactly that.
///
/// Ranks can repeat. A seat holding two identical cards keeps both, and
/// both count.
#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Vec<Rank> isomorphism
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}
