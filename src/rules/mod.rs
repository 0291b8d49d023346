//! Set rule: the validity predicate and validated triples.
//!
//! ## Key Types
//!
//! - `is_valid_set`: the per-dimension unanimous-or-all-distinct rule
//! - `CardSet`: a triple that passed the rule at construction
//! - `SetError`: rejection signal for invalid triples or wrong arity

pub mod set;
pub mod validator;

pub use set::{CardSet, SetError};
pub use validator::is_valid_set;
