//! End-to-end solver scenarios.
//!
//! These tests exercise the full path from textual grid to found sets:
//! parsing, pooling, enumeration, and the membership queries the
//! renderer relies on.

use set_solver::{
    find_all_sets, highlight_pool, is_valid_set, Card, CardSet, Color, Count, Fill, SetError,
    Shape, Table,
};

fn card(code: &str) -> Card {
    Card::from_code(code).unwrap()
}

fn pool(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|code| card(code)).collect()
}

/// Color/shape/fill unanimous, count all-distinct: a valid set.
#[test]
fn test_unanimous_with_distinct_count() {
    let a = Card::new(Color::Green, Shape::Diamond, Fill::Empty, Count::One);
    let b = Card::new(Color::Green, Shape::Diamond, Fill::Empty, Count::Two);
    let c = Card::new(Color::Green, Shape::Diamond, Fill::Empty, Count::Three);

    assert!(is_valid_set(&a, &b, &c));
    assert!(CardSet::new(a, b, c).is_ok());
}

/// Fill is all-distinct but count is two-same-one-different: invalid.
#[test]
fn test_two_same_one_different_count() {
    let d = Card::new(Color::Green, Shape::Diamond, Fill::Empty, Count::One);
    let e = Card::new(Color::Green, Shape::Diamond, Fill::Dashed, Count::One);
    let f = Card::new(Color::Green, Shape::Diamond, Fill::Filled, Count::Two);

    assert!(!is_valid_set(&d, &e, &f));
    assert_eq!(CardSet::new(d, e, f), Err(SetError::NotASet));
}

/// A 15-card pool holding exactly one valid triple among 14 decoys.
///
/// The decoys are built so that every dimension rule fails for any
/// combination other than gde1/pod2/rwf3: same-group triples disagree
/// only on count (two values, never three), cross-group triples break
/// color or shape, and mixed triples with the real set's members break
/// fill.
#[test]
fn test_fifteen_card_pool_with_single_set() {
    let cards = pool(&[
        "gde1", // member
        "god1", "god1", "god2", "god2", // green ovals
        "gwd1", "gwd1", "gwd2", "gwd2", // green wiggles
        "pwd1", "pwd1", "pwd2", "pwd2", // purple wiggles
        "pod2", // member
        "rwf3", // member
    ]);
    assert_eq!(cards.len(), 15);

    let sets = find_all_sets(&cards);
    assert_eq!(sets.len(), 1);

    let members = sets[0].cards();
    assert_eq!(members[0], card("gde1"));
    assert_eq!(members[1], card("pod2"));
    assert_eq!(members[2], card("rwf3"));
}

/// Small pools cannot hold a set.
#[test]
fn test_undersized_pools() {
    assert!(find_all_sets(&[]).is_empty());
    assert!(find_all_sets(&pool(&["gde1"])).is_empty());
    assert!(find_all_sets(&pool(&["gde1", "gde2"])).is_empty());
}

/// Construction rejects wrong arity instead of coercing.
#[test]
fn test_set_construction_arity() {
    assert_eq!(
        CardSet::from_slice(&pool(&["gde1", "gde2"])),
        Err(SetError::WrongArity(2))
    );
    assert_eq!(
        CardSet::from_slice(&pool(&["gde1", "gde2", "gde3", "pde1"])),
        Err(SetError::WrongArity(4))
    );
}

/// Grid layout never changes what is found, only how it is displayed.
#[test]
fn test_layout_independence() {
    let flat = Table::from_codes(&[vec![
        "gde1", "pwf1", "gde2", "roe1", "gde3", "pod2",
    ]])
    .unwrap();
    let grid = Table::from_codes(&[
        vec!["gde1", "pwf1", "gde2"],
        vec!["roe1", "gde3", "pod2"],
    ])
    .unwrap();

    let flat_sets = flat.find_sets();
    assert_eq!(flat_sets, grid.find_sets());
    assert!(!flat_sets.is_empty());
}

/// Repeated invocations return sets in the same order.
#[test]
fn test_deterministic_order() {
    let table = Table::from_codes(&[
        vec!["gde3", "goe3", "pwe1", "roe1", "pof2"],
        vec!["pde3", "rdf1", "roe3", "gdf1", "poe1"],
        vec!["pod2", "gwd3", "gwf2", "rwf3", "rwe2"],
    ])
    .unwrap();

    let first = table.find_sets();
    let second = table.find_sets();
    assert_eq!(first, second);
}

/// The highlight lookup marks exactly the member cards of the found sets.
#[test]
fn test_highlight_lookup() {
    let table = Table::from_codes(&[vec!["gde1", "gde2", "pwf1", "gde3"]]).unwrap();
    let sets = table.find_sets();
    assert_eq!(sets.len(), 1);

    let marked = highlight_pool(&sets);
    assert!(marked.contains(&card("gde1")));
    assert!(marked.contains(&card("gde2")));
    assert!(marked.contains(&card("gde3")));
    assert!(!marked.contains(&card("pwf1")));
}
