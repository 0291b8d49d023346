//! Card model: attribute dimensions and card values.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`, `Fill`, `Count`: the four dimensions, three values each
//! - `Dimension`: names a dimension, used in parse errors
//! - `Card`: one value per dimension, field-wise equality
//! - `ParseError`: invalid compact codes

pub mod attribute;
pub mod card;

pub use attribute::{Color, Count, Dimension, Fill, ParseError, Shape};
pub use card::Card;
