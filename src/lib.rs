//! Poker hand evaluation and showdown ranking.
//!
//! This crate turns batches of card tokens, the kind a table service posts
//! in its JSON status payloads, into totally ordered hand strengths. Bigger
//! is better, equal splits the pot, and comparing two seats never needs
//! anything beyond `Ord`.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair, parsed from tokens like `"As"` or `"10d"`
//! - [`Hand`] — A multiset of cards, any size, kept sorted high to low
//! - [`Deck`] — A shuffled 52-card collection for dealing
//!
//! ## Evaluation
//!
//! - [`Evaluator`] — One-pass summary of a hand with per-category detectors
//! - [`Ranking`] — Hand category (high card through straight flush) with its defining ranks
//! - [`Strength`] — Ranking plus kickers, the full comparison key
//!
//! ```
//! use std::cmp::Ordering;
//!
//! let full_house = ["3s", "3d", "3h", "Kh", "Ks", "2c", "2d"];
//! let king_flush = ["3s", "Ks", "4s", "10s", "7s", "2c", "2d"];
//! assert_eq!(handrank::compare(&full_house, &king_flush), Ok(Ordering::Greater));
//! ```

pub mod cards;
pub mod evaluation;

pub use cards::Card;
pub use cards::Deck;
pub use cards::Hand;
pub use cards::ParseCardError;
pub use cards::Rank;
pub use cards::Suit;
pub use evaluation::Evaluator;
pub use evaluation::Kickers;
pub use evaluation::Ranking;
pub use evaluation::Strength;

use std::cmp::Ordering;

/// Evaluate a batch of card tokens into a [`Strength`].
///
/// The empty batch is a legal hand and evaluates to the weakest possible
/// strength. Any unrecognized token fails the whole batch.
pub fn evaluate<S>(tokens: &[S]) -> Result<Strength, ParseCardError>
where
    S: AsRef<str>,
{
    let hand = Hand::parse(tokens)?;
    let strength = Strength::from(&hand);
    log::debug!("{} -> {}", hand, strength);
    Ok(strength)
}

/// Compare two token batches at showdown.
pub fn compare<S>(ours: &[S], theirs: &[S]) -> Result<Ordering, ParseCardError>
where
    S: AsRef<str>,
{
    Ok(evaluate(ours)?.cmp(&evaluate(theirs)?))
}
