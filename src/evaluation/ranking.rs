use crate::cards::rank::Rank;

/// A hand's category and its defining ranks.
///
/// This is the coarse part of a hand's value and does not include kicker
/// cards. Variants are declared weakest to strongest so derived Ord is the
/// betting order; within a category the payload ranks break ties, and
/// whatever ties remain after that are the kickers' problem.
///
/// HighCard carries no payload: its entire identity lives in the kickers,
/// which also makes the empty hand representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard,              // 5 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    /// How many side cards participate in tie-breaks beyond the payload.
    /// Five cards total speak for any hand.
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard => 5,
            Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }
}

/// category strength, 0 through 8
impl From<&Ranking> for u8 {
    fn from(ranking: &Ranking) -> u8 {
        match ranking {
            Ranking::HighCard => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(_, _) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(_, _) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard      "),
            Ranking::OnePair(r) => write!(f, "OnePair       {}", r),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {} {}", r1, r2),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {}", r),
            Ranking::Straight(r) => write!(f, "Straight      {}", r),
            Ranking::Flush(r) => write!(f, "Flush         {}", r),
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {} {}", r1, r2),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {}", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {}", r),
        }
    }
}
