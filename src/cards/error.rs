use thiserror::Error;

/// Failure to decode a card token.
///
/// Tokens arrive as strings like "As", "10d", "7h". Anything that does not
/// split into a recognized rank marker followed by a recognized suit letter
/// is rejected with the offending fragment preserved for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card token")]
    Empty,
    #[error("invalid rank marker {0:?}")]
    Rank(String),
    #[error("invalid suit marker {0:?}")]
    Suit(String),
}
