//! # set-solver
//!
//! Finds all valid Set card-game triples in a grid of cards and renders
//! the grid with matching triples highlighted.
//!
//! A card has four attribute dimensions - color, shape, fill, count -
//! with three values each. Three cards form a Set iff, for every
//! dimension, the three values are either all identical or pairwise all
//! distinct. The solver pools the grid's cards, walks every positional
//! 3-combination in lexicographic index order, and keeps the valid ones.
//!
//! ## Modules
//!
//! - `cards`: attribute dimensions, card values, compact-code parsing
//! - `rules`: the validity predicate and validated `CardSet` triples
//! - `table`: grid container, row-major pooling, highlight lookup
//! - `solver`: combination enumeration
//! - `render`: terminal output with per-set highlighting
//!
//! ## Example
//!
//! ```
//! use set_solver::Table;
//!
//! let table = Table::from_codes(&[
//!     vec!["gde1", "pwf1", "gde2"],
//!     vec!["roe1", "gde3"],
//! ]).unwrap();
//!
//! let sets = table.find_sets();
//! assert_eq!(sets.len(), 1);
//! assert!(sets[0].contains(&"gde2".parse().unwrap()));
//! ```

pub mod cards;
pub mod render;
pub mod rules;
pub mod solver;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Count, Dimension, Fill, ParseError, Shape};
pub use crate::rules::{is_valid_set, CardSet, SetError};
pub use crate::solver::find_all_sets;
pub use crate::table::{highlight_pool, Row, Table};
