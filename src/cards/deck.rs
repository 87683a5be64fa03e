use super::card::Card;
use super::hand::Hand;
use rand::prelude::*;

/// A standard 52-card deck. Build shuffled with [`Deck::new`], then deal off
/// the top. Drawing from an empty deck is a caller bug and panics.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub const SIZE: usize = 52;

    /// Fresh shuffled deck.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.0.shuffle(rng);
        deck
    }

    /// remove the top card
    pub fn draw(&mut self) -> Card {
        assert!(self.size() > 0);
        self.0.pop().unwrap()
    }

    /// deal n cards off the top
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self((0..Self::SIZE as u8).map(Card::from).collect())
    }
}
