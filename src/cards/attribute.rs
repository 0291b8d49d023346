//! Card attribute model: the four dimensions and their values.
//!
//! Every card is described by four independent dimensions - color, shape,
//! fill, and count - each with exactly three possible values. The value
//! sets are fixed; nothing here changes at runtime.
//!
//! ## Compact Codes
//!
//! Each value has a one-character code used by the textual grid format:
//! color `g`/`p`/`r`, shape `d`/`o`/`w`, fill `e`/`d`/`f`, count `1`-`3`.
//!
//! Values carry identity only. Presentation (glyphs, ANSI colors) lives
//! in the `render` module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four attribute dimensions of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Card color.
    Color,
    /// Symbol shape.
    Shape,
    /// Symbol fill style.
    Fill,
    /// Number of symbols.
    Count,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Color => "color",
            Dimension::Shape => "shape",
            Dimension::Fill => "fill",
            Dimension::Count => "count",
        };
        write!(f, "{name}")
    }
}

/// Errors raised when decoding compact card codes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The character is not a legal code for the dimension.
    #[error("invalid {dimension} code '{code}'")]
    InvalidAttributeCode {
        /// Dimension the code was decoded for.
        dimension: Dimension,
        /// The offending character.
        code: char,
    },

    /// A card code must be exactly four characters.
    #[error("invalid card code '{code}': expected 4 characters (color, shape, fill, count)")]
    InvalidCardCode {
        /// The offending code string.
        code: String,
    },
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Purple,
    Red,
}

impl Color {
    /// All legal values.
    pub const ALL: [Self; 3] = [Self::Green, Self::Purple, Self::Red];

    /// Decode a compact code character.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code {
            'g' => Ok(Self::Green),
            'p' => Ok(Self::Purple),
            'r' => Ok(Self::Red),
            _ => Err(ParseError::InvalidAttributeCode {
                dimension: Dimension::Color,
                code,
            }),
        }
    }

    /// The canonical compact code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Purple => 'p',
            Self::Red => 'r',
        }
    }
}

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Oval,
    Wiggle,
}

impl Shape {
    /// All legal values.
    pub const ALL: [Self; 3] = [Self::Diamond, Self::Oval, Self::Wiggle];

    /// Decode a compact code character.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code {
            'd' => Ok(Self::Diamond),
            'o' => Ok(Self::Oval),
            'w' => Ok(Self::Wiggle),
            _ => Err(ParseError::InvalidAttributeCode {
                dimension: Dimension::Shape,
                code,
            }),
        }
    }

    /// The canonical compact code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Diamond => 'd',
            Self::Oval => 'o',
            Self::Wiggle => 'w',
        }
    }
}

/// Symbol fill style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fill {
    Empty,
    Dashed,
    Filled,
}

impl Fill {
    /// All legal values.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Dashed, Self::Filled];

    /// Decode a compact code character.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code {
            'e' => Ok(Self::Empty),
            'd' => Ok(Self::Dashed),
            'f' => Ok(Self::Filled),
            _ => Err(ParseError::InvalidAttributeCode {
                dimension: Dimension::Fill,
                code,
            }),
        }
    }

    /// The canonical compact code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Empty => 'e',
            Self::Dashed => 'd',
            Self::Filled => 'f',
        }
    }
}

/// Number of symbols on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All legal values.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Decode a compact code character.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code {
            '1' => Ok(Self::One),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            _ => Err(ParseError::InvalidAttributeCode {
                dimension: Dimension::Count,
                code,
            }),
        }
    }

    /// The canonical compact code character.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
        }
    }

    /// Numeric symbol count.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}
