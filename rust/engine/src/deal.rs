use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ParseError;

/// A ten-card deal: the five dealt cards and the five replacement candidates.
/// The fixed-size arrays make the 5+5 shape impossible to violate after
/// parsing; neither half is ever mutated by evaluation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    hand: [Card; 5],
    pool: [Card; 5],
}

impl Deal {
    /// Cards in the dealt hand.
    pub const HAND_SIZE: usize = 5;
    /// Cards in the candidate pool.
    pub const POOL_SIZE: usize = 5;

    pub fn new(hand: [Card; 5], pool: [Card; 5]) -> Self {
        Self { hand, pool }
    }

    /// The five dealt cards, in deal order.
    pub fn hand(&self) -> &[Card; 5] {
        &self.hand
    }

    /// The five replacement candidates, in deal order.
    pub fn pool(&self) -> &[Card; 5] {
        &self.pool
    }
}

fn parse_five(tokens: &[&str]) -> Result<[Card; 5], ParseError> {
    Ok([
        tokens[0].parse()?,
        tokens[1].parse()?,
        tokens[2].parse()?,
        tokens[3].parse()?,
        tokens[4].parse()?,
    ])
}

impl FromStr for Deal {
    type Err = ParseError;

    /// Parses a ten-token line; the first five tokens are the hand, the
    /// last five the candidate pool.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let expected = Self::HAND_SIZE + Self::POOL_SIZE;
        if tokens.len() != expected {
            return Err(ParseError::WrongCardCount {
                expected,
                found: tokens.len(),
            });
        }
        Ok(Deal {
            hand: parse_five(&tokens[..Self::HAND_SIZE])?,
            pool: parse_five(&tokens[Self::HAND_SIZE..])?,
        })
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = |cards: &[Card; 5]| {
            cards
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "Hand: {} Deck: {}", tokens(&self.hand), tokens(&self.pool))
    }
}
