use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// ace plays low against the four lowest ranks, and nowhere else
const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's strength.
///
/// One pass over the cards builds rank counts, suit counts, and rank
/// bitmasks. Every detector reads those summaries with bitwise smears and
/// descending scans instead of re-walking the cards. Detectors never consult
/// each other, so each one answers for its own category in isolation and the
/// cascade in find_ranking is the only place precedence lives.
///
/// The card slice is borrowed sorted, high to low, which is what lets
/// find_kickers read side cards best-first with their multiplicity intact.
pub struct Evaluator<'a> {
    cards: &'a [Card],
    rank_counts: [u8; 13],
    suit_counts: [u8; 4],
    rank_mask: u16,
    suit_masks: [u16; 4],
}

impl<'a> From<&'a Hand> for Evaluator<'a> {
    fn from(hand: &'a Hand) -> Self {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut rank_mask = 0u16;
        let mut suit_masks = [0u16; 4];
        for card in hand.cards() {
            let r = u8::from(card.rank()) as usize;
            let s = u8::from(card.suit()) as usize;
            rank_counts[r] = rank_counts[r].saturating_add(1);
            suit_counts[s] = suit_counts[s].saturating_add(1);
            rank_mask |= u16::from(card.rank());
            suit_masks[s] |= u16::from(card.rank());
        }
        Self {
            cards: hand.cards(),
            rank_counts,
            suit_counts,
            rank_mask,
            suit_masks,
        }
    }
}

impl Evaluator<'_> {
    /// Strongest category this hand belongs to. Detectors are tried from
    /// strongest to weakest and the first hit wins; find_1_oak is total, so
    /// even an empty hand lands on HighCard.
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    /// Side cards for the given ranking, best first, never more than five
    /// cards of tie-break information in total. Flush kickers come from the
    /// flush suit alone; everything else reads the whole hand minus the
    /// ranks the category already spoke for.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => {
                Kickers::default()
            }
            Ranking::Flush(_) => match self.find_suit_of_flush() {
                Some(suit) => Kickers::from(
                    self.cards
                        .iter()
                        .filter(|c| c.suit() == suit)
                        .map(Card::rank)
                        .skip(1)
                        .take(ranking.n_kickers())
                        .collect::<Vec<_>>(),
                ),
                None => Kickers::default(),
            },
            Ranking::HighCard => self.find_kicker_ranks(&[], ranking.n_kickers()),
            Ranking::OnePair(r) | Ranking::ThreeOAK(r) | Ranking::FourOAK(r) => {
                self.find_kicker_ranks(&[r], ranking.n_kickers())
            }
            Ranking::TwoPair(hi, lo) => self.find_kicker_ranks(&[hi, lo], ranking.n_kickers()),
        }
    }

    pub fn find_straight_flush(&self) -> Option<Ranking> {
        Suit::all()
            .into_iter()
            .filter(|&s| self.suit_counts[u8::from(s) as usize] >= 5)
            .find_map(|s| {
                self.find_rank_of_straight(self.suit_masks[u8::from(s) as usize])
                    .map(Ranking::StraightFlush)
            })
    }
    pub fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    pub fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        // the triple wants exactly three of a rank. the pair leg takes an
        // exact pair or a second exact triple, whichever scans first from
        // the top, and may outrank the triple
        let mut triple = None;
        let mut paired = None;
        for (i, &count) in self.rank_counts.iter().enumerate().rev() {
            let rank = Rank::from(i as u8);
            match count {
                2 if paired.is_none() => paired = Some(rank),
                3 => match triple {
                    None => triple = Some(rank),
                    Some(_) if paired.is_none() => paired = Some(rank),
                    Some(_) => {}
                },
                _ => {}
            }
        }
        Some(Ranking::FullHouse(triple?, paired?))
    }
    pub fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Ranking::Flush(Rank::from(self.suit_masks[u8::from(suit) as usize])))
    }
    pub fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.rank_mask)
            .map(Ranking::Straight)
    }
    pub fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    pub fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        let hi = self.find_rank_of_pair(None)?;
        let lo = self.find_rank_of_pair(Some(hi))?;
        Some(Ranking::TwoPair(hi, lo))
    }
    pub fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair)
    }
    pub fn find_1_oak(&self) -> Ranking {
        Ranking::HighCard
    }

    /// first suit in canonical order holding five or more cards
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|&s| self.suit_counts[u8::from(s) as usize] >= 5)
    }
    /// smear the rank mask down four times; any surviving bit tops a
    /// five-long run. the wheel is the one straight the smear cannot see
    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// highest rank held at least n times
    fn find_rank_of_n_oak(&self, n: u8) -> Option<Rank> {
        self.rank_counts
            .iter()
            .rev()
            .position(|&count| count >= n)
            .map(|i| Rank::from((13 - i - 1) as u8))
    }
    /// highest rank held exactly twice, strictly below the given rank.
    /// exact counts matter here: trips are not a pair for two-pair purposes
    fn find_rank_of_pair(&self, below: Option<Rank>) -> Option<Rank> {
        let high = below.map(|r| u8::from(r) as usize).unwrap_or(13);
        self.rank_counts
            .iter()
            .take(high)
            .rev()
            .position(|&count| count == 2)
            .map(|i| Rank::from((high - i - 1) as u8))
    }
    /// ranks of the cards outside the skipped ranks, best first, with
    /// multiplicity, capped at n
    fn find_kicker_ranks(&self, skip: &[Rank], n: usize) -> Kickers {
        Kickers::from(
            self.cards
                .iter()
                .map(Card::rank)
                .filter(|r| !skip.contains(r))
                .take(n)
                .collect::<Vec<_>>(),
        )
    }
}
