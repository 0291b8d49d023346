//! Combination enumeration over a card pool.
//!
//! Walks every 3-combination of distinct *positions* in the pool, in
//! lexicographic index order, and keeps the ones that construct a valid
//! `CardSet`. Construction failure is the expected rejection signal for
//! non-sets; enumeration never aborts on it.
//!
//! Complexity is C(n,3) over the pool size. Pools are small (tens of
//! cards), so no pruning is done.

use log::debug;

use crate::cards::Card;
use crate::rules::CardSet;

/// Find every valid Set in the pool.
///
/// Combinations are positional: attribute-equal cards at different
/// positions are evaluated as distinct candidates, so a pool containing
/// duplicates can yield value-identical sets more than once. Output
/// order follows the lexicographic order of index triples and is stable
/// across calls.
///
/// ## Example
///
/// ```
/// use set_solver::cards::Card;
/// use set_solver::solver::find_all_sets;
///
/// let pool: Vec<Card> = ["gde1", "gde2", "pwf1", "gde3"]
///     .iter()
///     .map(|code| Card::from_code(code).unwrap())
///     .collect();
///
/// let sets = find_all_sets(&pool);
/// assert_eq!(sets.len(), 1);
/// ```
#[must_use]
pub fn find_all_sets(pool: &[Card]) -> Vec<CardSet> {
    let mut sets = Vec::new();

    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            for k in (j + 1)..pool.len() {
                if let Ok(set) = CardSet::new(pool[i], pool[j], pool[k]) {
                    sets.push(set);
                }
            }
        }
    }

    debug!("pool of {} cards yielded {} sets", pool.len(), sets.len());
    sets
}
