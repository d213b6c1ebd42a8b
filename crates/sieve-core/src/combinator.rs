//! # Combinator Module
//!
//! Logical composition of specifications.
//!
//! Every combinator is itself a [`Specification`] whenever its children are,
//! so composition is closed: `And<Or<A, B>, Not<C>>` is as valid as `A`.
//! Children are owned by value and never mutated after construction.

use crate::predicate::Specification;

// =============================================================================
// BINARY / UNARY COMBINATORS
// =============================================================================

/// Satisfied iff both children are satisfied. Short-circuits on the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    #[must_use]
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Split back into the two children.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }
}

/// Satisfied iff either child is satisfied. Short-circuits on the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    #[must_use]
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Split back into the two children.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) || self.right.is_satisfied(item)
    }
}

/// Satisfied iff the child is not satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    #[must_use]
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<T: ?Sized, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

// =============================================================================
// N-ARY COMBINATORS
// =============================================================================

/// Boxed child used by the n-ary combinators.
pub type BoxedSpec<T> = Box<dyn Specification<T> + Send + Sync>;

macro_rules! n_ary_spec {
    ($(#[$meta:meta])* $name:ident, $fold:ident) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized> {
            specs: Vec<BoxedSpec<T>>,
        }

        impl<T: ?Sized> $name<T> {
            #[must_use]
            pub fn new() -> Self {
                Self { specs: Vec::new() }
            }

            /// Append a child, builder style.
            #[must_use]
            pub fn with<S>(mut self, spec: S) -> Self
            where
                S: Specification<T> + Send + Sync + 'static,
            {
                self.specs.push(Box::new(spec));
                self
            }

            pub fn push(&mut self, spec: BoxedSpec<T>) {
                self.specs.push(spec);
            }

            #[must_use]
            pub fn len(&self) -> usize {
                self.specs.len()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.specs.is_empty()
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> FromIterator<BoxedSpec<T>> for $name<T> {
            fn from_iter<I: IntoIterator<Item = BoxedSpec<T>>>(iter: I) -> Self {
                Self {
                    specs: iter.into_iter().collect(),
                }
            }
        }

        impl<T: ?Sized> Specification<T> for $name<T> {
            fn is_satisfied(&self, item: &T) -> bool {
                self.specs.iter().$fold(|spec| spec.is_satisfied(item))
            }
        }

        impl<T: ?Sized> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("children", &self.specs.len())
                    .finish()
            }
        }
    };
}

n_ary_spec! {
    /// Satisfied iff every child is satisfied.
    ///
    /// With no children this is satisfied by every item (the identity of AND).
    AllOf, all
}

n_ary_spec! {
    /// Satisfied iff at least one child is satisfied.
    ///
    /// With no children this is satisfied by no item (the identity of OR).
    AnyOf, any
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Always, Never, SpecificationExt, from_fn};
    use std::cell::Cell;

    fn positive() -> impl Specification<i32> + Copy + Send + Sync + 'static {
        from_fn(|n: &i32| *n > 0)
    }

    fn even() -> impl Specification<i32> + Copy + Send + Sync + 'static {
        from_fn(|n: &i32| n % 2 == 0)
    }

    #[test]
    fn and_truth_table() {
        let spec = And::new(positive(), even());
        assert!(spec.is_satisfied(&2));
        assert!(!spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn or_truth_table() {
        let spec = Or::new(positive(), even());
        assert!(spec.is_satisfied(&2));
        assert!(spec.is_satisfied(&3));
        assert!(spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn not_inverts() {
        let spec = Not::new(positive());
        assert!(spec.is_satisfied(&-1));
        assert!(!spec.is_satisfied(&1));
    }

    #[test]
    fn double_negation_is_identity() {
        let spec = Not::new(Not::new(even()));
        for n in -5..5 {
            assert_eq!(spec.is_satisfied(&n), even().is_satisfied(&n));
        }
    }

    #[test]
    fn and_short_circuits() {
        let calls = Cell::new(0u32);
        let counting = from_fn(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        let spec = And::new(Never, counting);
        assert!(!spec.is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_short_circuits() {
        let calls = Cell::new(0u32);
        let counting = from_fn(|_: &i32| {
            calls.set(calls.get() + 1);
            false
        });

        let spec = Or::new(Always, counting);
        assert!(spec.is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn nested_tree_composes() {
        // (positive AND even) OR NOT positive
        let spec = positive().and(even()).or(positive().not());
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&3));
        assert!(spec.is_satisfied(&-3));
    }

    #[test]
    fn into_parts_returns_children() {
        let (left, right) = And::new(Always, Never).into_parts();
        assert_eq!(left, Always);
        assert_eq!(right, Never);
        assert_eq!(Not::new(Always).into_inner(), Always);
    }

    #[test]
    fn empty_all_of_is_satisfied() {
        let spec = AllOf::<i32>::new();
        assert!(spec.is_empty());
        assert!(spec.is_satisfied(&0));
    }

    #[test]
    fn empty_any_of_is_not_satisfied() {
        let spec = AnyOf::<i32>::new();
        assert!(spec.is_empty());
        assert!(!spec.is_satisfied(&0));
    }

    #[test]
    fn all_of_requires_every_child() {
        let spec = AllOf::<i32>::new().with(positive()).with(even());
        assert_eq!(spec.len(), 2);
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&3));
    }

    #[test]
    fn any_of_requires_one_child() {
        let spec = AnyOf::<i32>::new().with(positive()).with(even());
        assert!(spec.is_satisfied(&3));
        assert!(spec.is_satisfied(&-4));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn n_ary_push_adds_boxed_children() {
        let mut all = AllOf::<i32>::new();
        all.push(Box::new(positive()));
        all.push(Box::new(even()));
        assert_eq!(all.len(), 2);
        assert!(all.is_satisfied(&2));
        assert!(!all.is_satisfied(&1));

        let mut any = AnyOf::<i32>::default();
        assert!(!any.is_satisfied(&1));
        any.push(Box::new(positive()));
        assert!(any.is_satisfied(&1));
    }

    #[test]
    fn n_ary_debug_names_the_combinator() {
        let all = AllOf::<i32>::new().with(positive());
        assert_eq!(format!("{all:?}"), "AllOf { children: 1 }");
        assert_eq!(format!("{:?}", AnyOf::<i32>::new()), "AnyOf { children: 0 }");
    }

    #[test]
    fn n_ary_from_iterator() {
        let children: Vec<BoxedSpec<i32>> = vec![Box::new(positive()), Box::new(even())];
        let spec: AnyOf<i32> = children.into_iter().collect();
        assert_eq!(spec.len(), 2);
        assert!(spec.is_satisfied(&1));
    }
}
