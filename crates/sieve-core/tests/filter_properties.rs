//! Property tests for the filter engine and the logical combinators.
//!
//! Results are compared by identity (position in the input slice) rather
//! than by value.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use proptest::prelude::*;
use sieve_core::{
    Always, And, Catalog, Color, ColorSpec, Filter, Never, Not, Or, Product, Size, SizeSpec,
    SpecExpr, SpecFilter, Specification, SpecificationExt,
};

// =============================================================================
// STRATEGIES
// =============================================================================

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((color(), size()), 0..40).prop_map(|attrs| {
        attrs
            .into_iter()
            .enumerate()
            .map(|(i, (c, s))| Product::new(format!("p{i}"), c, s))
            .collect()
    })
}

/// Random specification trees of bounded depth.
fn expr() -> impl Strategy<Value = SpecExpr> {
    let leaf = prop_oneof![
        Just(SpecExpr::True),
        Just(SpecExpr::False),
        color().prop_map(SpecExpr::color),
        size().prop_map(SpecExpr::size),
    ];
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(|specs| SpecExpr::And { specs }),
            prop::collection::vec(inner.clone(), 0..3).prop_map(|specs| SpecExpr::Or { specs }),
            inner.prop_map(SpecExpr::negate),
        ]
    })
}

/// Indices (identities) of the products a specification selects.
fn selected<S: Specification<Product> + ?Sized>(items: &[Product], spec: &S) -> Vec<usize> {
    SpecFilter
        .filter(items, spec)
        .map(|p| {
            items
                .iter()
                .position(|q| std::ptr::eq(p, q))
                .unwrap()
        })
        .collect()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn filter_is_sound_complete_and_ordered(items in catalog(), spec in expr()) {
        let result = selected(&items, &spec);

        let expected: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, p)| spec.is_satisfied(*p))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(result, expected);
    }

    #[test]
    fn and_is_intersection(items in catalog(), a in expr(), b in expr()) {
        let left = selected(&items, &a);
        let right = selected(&items, &b);
        let both = selected(&items, &And::new(&a, &b));

        let intersection: Vec<usize> = left.into_iter().filter(|i| right.contains(i)).collect();
        prop_assert_eq!(both, intersection);
    }

    #[test]
    fn or_is_ordered_union_without_duplicates(items in catalog(), a in expr(), b in expr()) {
        let left = selected(&items, &a);
        let right = selected(&items, &b);
        let either = selected(&items, &Or::new(&a, &b));

        let mut union: Vec<usize> = left.into_iter().chain(right).collect();
        union.sort_unstable();
        union.dedup();
        prop_assert_eq!(either, union);
    }

    #[test]
    fn not_is_complement(items in catalog(), a in expr()) {
        let kept = selected(&items, &a);
        let rejected = selected(&items, &Not::new(&a));

        let complement: Vec<usize> = (0..items.len()).filter(|i| !kept.contains(i)).collect();
        prop_assert_eq!(rejected, complement);
    }

    #[test]
    fn always_keeps_everything_never_keeps_nothing(items in catalog()) {
        prop_assert_eq!(selected(&items, &Always), (0..items.len()).collect::<Vec<_>>());
        prop_assert!(selected(&items, &Never).is_empty());
    }

    #[test]
    fn empty_input_is_empty_output(spec in expr()) {
        let items: Vec<Product> = Vec::new();
        prop_assert!(selected(&items, &spec).is_empty());
    }

    #[test]
    fn evaluation_is_deterministic(items in catalog(), spec in expr()) {
        prop_assert_eq!(selected(&items, &spec), selected(&items, &spec));
    }

    #[test]
    fn expr_json_preserves_meaning(items in catalog(), spec in expr()) {
        let restored = spec.to_json().and_then(|json| SpecExpr::from_json(&json)).unwrap();
        prop_assert_eq!(selected(&items, &spec), selected(&items, &restored));
    }
}

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

#[test]
fn worked_example_from_the_catalog() {
    let catalog = Catalog::sample();
    let items = catalog.products();

    assert_eq!(selected(items, &ColorSpec(Color::Green)), vec![0, 2]);

    let red_and_large = ColorSpec(Color::Red).and(SizeSpec(Size::Large));
    assert_eq!(selected(items, &red_and_large), vec![1]);
}
