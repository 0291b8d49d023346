//! The card table: rows for display, a flat pool for matching.
//!
//! Row structure is display layout only. Matching is positionless: the
//! solver runs over the row-major flattening of all cards, so a card's
//! row or column never affects which sets are found.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, ParseError};
use crate::rules::CardSet;
use crate::solver::find_all_sets;

/// One display row of cards. Rows hold a handful of cards, so they stay
/// inline up to eight.
pub type Row = SmallVec<[Card; 8]>;

/// A grid of cards.
///
/// Rows may be jagged. The table owns its cards and performs no validity
/// logic itself; it is a container plus a flattening view.
///
/// ## Example
///
/// ```
/// use set_solver::table::Table;
///
/// let table = Table::from_codes(&[
///     vec!["gde1", "gde2"],
///     vec!["gde3"],
/// ]).unwrap();
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.find_sets().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from already-parsed rows.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse a grid of compact card codes.
    ///
    /// Fails on the first malformed code, naming it in the error.
    pub fn from_codes<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, ParseError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|code| Card::from_code(code.as_ref()))
                    .collect::<Result<Row, ParseError>>()
            })
            .collect::<Result<Vec<Row>, ParseError>>()?;
        Ok(Self { rows })
    }

    /// The display rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row-major flattening of all cards - the search space for the solver.
    #[must_use]
    pub fn pool(&self) -> Vec<Card> {
        self.rows.iter().flat_map(|row| row.iter().copied()).collect()
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(SmallVec::len).sum()
    }

    /// Check if the table holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Find every valid Set on the table.
    #[must_use]
    pub fn find_sets(&self) -> Vec<CardSet> {
        find_all_sets(&self.pool())
    }
}

/// Collect the member cards of several sets into one highlight lookup.
///
/// The renderer uses this to mark cards that belong to any of the given
/// sets. Lookup is value equality, so an attribute-equal duplicate at
/// another position is marked too.
#[must_use]
pub fn highlight_pool(sets: &[CardSet]) -> FxHashSet<Card> {
    sets.iter()
        .flat_map(|set| set.cards().iter().copied())
        .collect()
}
