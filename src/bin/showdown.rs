//! Showdown ranking from the command line.
//!
//! Reads hands as whitespace-separated batches of card tokens, evaluates
//! each one, and prints the table strongest first. With --deal it ranks
//! freshly dealt seven-card hands instead, which is handy for eyeballing
//! the evaluator against a shuffled deck.

use anyhow::Result;
use clap::Parser;
use handrank::Deck;
use handrank::Hand;
use handrank::Strength;

#[derive(Debug, Parser)]
#[clap(about = "Evaluate poker hands and rank them at showdown")]
struct Args {
    /// Hands to rank, each one a quoted batch of card tokens,
    /// e.g. "As Kh 10d 10c 2s".
    hands: Vec<String>,
    /// Deal this many random seven-card hands instead of reading arguments.
    #[clap(long, short)]
    deal: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let hands = match args.deal {
        Some(seats) => {
            anyhow::ensure!(
                seats <= Deck::SIZE / 7,
                "cannot deal {} seven-card hands from one deck",
                seats
            );
            let mut deck = Deck::new(&mut rand::rng());
            (0..seats)
                .map(|_| deck.deal(7))
                .inspect(|hand| log::debug!("dealt {}", hand))
                .collect::<Vec<_>>()
        }
        None => args
            .hands
            .iter()
            .map(|tokens| Hand::try_from(tokens.as_str()))
            .collect::<Result<Vec<_>, _>>()?,
    };
    anyhow::ensure!(!hands.is_empty(), "nothing to rank: pass hands or --deal N");
    let mut table = hands
        .into_iter()
        .map(|hand| {
            let strength = Strength::from(&hand);
            (hand, strength)
        })
        .collect::<Vec<_>>();
    table.sort_by(|(_, a), (_, b)| b.cmp(a));
    for (seat, (hand, strength)) in table.iter().enumerate() {
        println!("{:>2}. {} {}", seat + 1, strength, hand);
    }
    Ok(())
}
