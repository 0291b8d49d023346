//! Card values.
//!
//! A `Card` holds exactly one value per dimension and never changes after
//! construction. Equality is field-wise: two cards with the same four
//! values are the same card for membership tests, even when they sit at
//! different grid positions.

use serde::{Deserialize, Serialize};

use super::attribute::{Color, Count, Fill, ParseError, Shape};

/// A single card: one value per dimension.
///
/// ## Example
///
/// ```
/// use set_solver::cards::{Card, Color};
///
/// let card = Card::from_code("gde3").unwrap();
/// assert_eq!(card.color, Color::Green);
/// assert_eq!(card.code(), "gde3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card color.
    pub color: Color,
    /// Symbol shape.
    pub shape: Shape,
    /// Symbol fill style.
    pub fill: Fill,
    /// Number of symbols.
    pub count: Count,
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, fill: Fill, count: Count) -> Self {
        Self {
            color,
            shape,
            fill,
            count,
        }
    }

    /// Decode a compact 4-character code such as `gde3`.
    ///
    /// The characters encode color, shape, fill, and count in that order.
    /// Fails with `ParseError::InvalidCardCode` for any other length and
    /// `ParseError::InvalidAttributeCode` for a bad character.
    pub fn from_code(code: &str) -> Result<Self, ParseError> {
        let mut chars = code.chars();
        let (Some(color), Some(shape), Some(fill), Some(count), None) = (
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
        ) else {
            return Err(ParseError::InvalidCardCode {
                code: code.to_string(),
            });
        };

        Ok(Self {
            color: Color::from_code(color)?,
            shape: Shape::from_code(shape)?,
            fill: Fill::from_code(fill)?,
            count: Count::from_code(count)?,
        })
    }

    /// The canonical compact code for this card.
    #[must_use]
    pub fn code(&self) -> String {
        [
            self.color.code(),
            self.shape.code(),
            self.fill.code(),
            self.count.code(),
        ]
        .iter()
        .collect()
    }
}

impl std::str::FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
