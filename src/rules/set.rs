//! Validated card triples.
//!
//! `CardSet` can only be constructed through its validating constructors,
//! so every `CardSet` that exists satisfies the set rule. The enumerator
//! relies on this: it attempts construction for every combination and
//! discards the failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validator::is_valid_set;
use crate::cards::Card;

/// Errors raised by `CardSet` construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    /// The three cards do not satisfy the set rule.
    #[error("cards do not form a valid set")]
    NotASet,

    /// A set holds exactly three cards.
    #[error("a set needs exactly 3 cards, got {0}")]
    WrongArity(usize),
}

/// A validated, immutable triple of cards.
///
/// ## Example
///
/// ```
/// use set_solver::cards::Card;
/// use set_solver::rules::CardSet;
///
/// let a = Card::from_code("gde1").unwrap();
/// let b = Card::from_code("pde1").unwrap();
/// let c = Card::from_code("rde1").unwrap();
///
/// let set = CardSet::new(a, b, c).unwrap();
/// assert!(set.contains(&b));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet {
    cards: [Card; 3],
}

impl CardSet {
    /// Build a set from three cards, rejecting invalid triples.
    pub fn new(a: Card, b: Card, c: Card) -> Result<Self, SetError> {
        if is_valid_set(&a, &b, &c) {
            Ok(Self { cards: [a, b, c] })
        } else {
            Err(SetError::NotASet)
        }
    }

    /// Build a set from a slice, rejecting any arity other than three.
    pub fn from_slice(cards: &[Card]) -> Result<Self, SetError> {
        match cards {
            [a, b, c] => Self::new(*a, *b, *c),
            _ => Err(SetError::WrongArity(cards.len())),
        }
    }

    /// The three member cards, in construction order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    /// Value-equality membership test.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CardSet({}, {}, {})",
            self.cards[0], self.cards[1], self.cards[2]
        )
    }
}
