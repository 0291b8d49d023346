//! The set-validity predicate.
//!
//! A triple of cards is a valid Set iff, for each of the four dimensions
//! independently, the three values are either all identical or pairwise
//! all distinct. Equivalently, the number of distinct values per
//! dimension is 1 or 3 - a dimension where exactly two cards agree
//! always fails.

use crate::cards::Card;

/// Check one dimension: all equal or pairwise all distinct.
fn dimension_satisfied<T: Eq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && a != c && b != c)
}

/// Decide whether three cards form a valid Set.
///
/// The predicate is total over all card triples and symmetric in its
/// arguments. Only equality of attribute values is consulted; no
/// ordering between values exists.
///
/// ## Example
///
/// ```
/// use set_solver::cards::Card;
/// use set_solver::rules::is_valid_set;
///
/// let a = Card::from_code("gde1").unwrap();
/// let b = Card::from_code("gde2").unwrap();
/// let c = Card::from_code("gde3").unwrap();
/// assert!(is_valid_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    dimension_satisfied(a.color, b.color, c.color)
        && dimension_satisfied(a.shape, b.shape, c.shape)
        && dimension_satisfied(a.fill, b.fill, c.fill)
        && dimension_satisfied(a.count, b.count, c.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    #[test]
    fn test_all_dimensions_unanimous() {
        // Three identical cards: every dimension all-equal.
        let c = card("gde1");
        assert!(is_valid_set(&c, &c, &c));
    }

    #[test]
    fn test_one_dimension_all_distinct() {
        // Color/shape/fill unanimous, count all-distinct.
        assert!(is_valid_set(&card("gde1"), &card("gde2"), &card("gde3")));
    }

    #[test]
    fn test_all_dimensions_all_distinct() {
        assert!(is_valid_set(&card("gde1"), &card("pod2"), &card("rwf3")));
    }

    #[test]
    fn test_two_same_one_different_fails() {
        // Fill is all-distinct but count is two-same-one-different.
        assert!(!is_valid_set(&card("gde1"), &card("gdd1"), &card("gdf2")));
    }

    #[test]
    fn test_single_bad_dimension_fails() {
        // Only color violates the rule.
        assert!(!is_valid_set(&card("gde1"), &card("gde2"), &card("rde3")));
    }

    #[test]
    fn test_symmetric_in_arguments() {
        let a = card("gde1");
        let b = card("pde1");
        let c = card("rde1");

        assert!(is_valid_set(&a, &b, &c));
        assert!(is_valid_set(&a, &c, &b));
        assert!(is_valid_set(&b, &a, &c));
        assert!(is_valid_set(&b, &c, &a));
        assert!(is_valid_set(&c, &a, &b));
        assert!(is_valid_set(&c, &b, &a));
    }

    #[test]
    fn test_violation_symmetric_in_arguments() {
        let a = card("gde1");
        let b = card("gde2");
        let c = card("pde2");

        assert!(!is_valid_set(&a, &b, &c));
        assert!(!is_valid_set(&c, &a, &b));
        assert!(!is_valid_set(&b, &c, &a));
    }
}
