/// Hand represents a multiset of Cards dealt to one seat. cards are kept
/// sorted by rank from high to low, ties keeping their arrival order, so
/// every downstream scan reads best-first without re-sorting. nothing bounds
/// the size. seven cards is typical at showdown but evaluation is defined for
/// any count, including zero and including repeated identical cards from a
/// careless dealer, which still count toward pairs and trips.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Decode a batch of card tokens, e.g. straight out of a JSON payload.
    pub fn parse<S>(tokens: &[S]) -> Result<Self, ParseCardError>
    where
        S: AsRef<str>,
    {
        tokens.iter().map(|t| Card::try_from(t.as_ref())).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Self(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// str isomorphism
/// whitespace-separated card tokens. an empty or all-whitespace string is a
/// legal empty hand.
impl TryFrom<&str> for Hand {
    type Error = ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace().map(Card::try_from).collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// the table service posts hands as arrays of card tokens
impl Serialize for Hand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}
impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Card>::deserialize(deserializer).map(Hand::from)
    }
}

use super::card::Card;
use super::error::ParseCardError;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
