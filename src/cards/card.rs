#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// 10s
/// 32
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism
/// the suit is the last character of the token, the rank marker is
/// everything before it. "As", "10d", "Td" all decode. unknown markers are
/// rejected rather than smuggled through as fake ranks or suits.
impl TryFrom<&str> for Card {
    type Error = ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let (rank, suit) = match token.char_indices().last() {
            None => return Err(ParseCardError::Empty),
            Some((i, _)) => token.split_at(i),
        };
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// cards cross the wire in token form, not as rank/suit structs
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

use super::error::ParseCardError;
use super::rank::Rank;
use super::suit::Suit;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
