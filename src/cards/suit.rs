use super::error::ParseCardError;

/// Card suit: spades, clubs, diamonds, hearts.
///
/// Suits never break ties between hands, but their declaration order is
/// load-bearing for the flush detectors: when more than one suit could
/// qualify, the scan walks [`Suit::all`] and the first hit wins. The s, c,
/// d, h order matches the wire format of the table service.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    S = 0,
    C = 1,
    D = 2,
    H = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::S, Suit::C, Suit::D, Suit::H]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::S,
            1 => Suit::C,
            2 => Suit::D,
            3 => Suit::H,
            _ => unreachable!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = ParseCardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "s" | "♠" => Ok(Suit::S),
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::S => write!(f, "s"),
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
        }
    }
}
