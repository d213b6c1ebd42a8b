//! # Predicate Module
//!
//! The `Specification` capability and its leaf implementations.
//!
//! A specification answers one question about one item. It takes the item
//! by shared reference, so it cannot mutate it, and it must give the same
//! answer every time it is asked about the same item.

use crate::combinator::{And, Not, Or};

// =============================================================================
// SPECIFICATION TRAIT
// =============================================================================

/// A pure boolean test over a single item.
///
/// Implementations must terminate and must not have side effects. Any
/// composite built from specifications (see [`crate::combinator`]) is itself
/// a specification, so trees of arbitrary depth can be assembled without
/// modifying the leaves.
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

// =============================================================================
// COMPOSITION BUILDERS
// =============================================================================

/// Builder methods for composing specifications.
///
/// Blanket-implemented for every specification. Each method consumes its
/// operands and returns a new combinator; nothing is modified in place.
pub trait SpecificationExt<T: ?Sized>: Specification<T> {
    /// Satisfied iff both `self` and `other` are satisfied.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And::new(self, other)
    }

    /// Satisfied iff either `self` or `other` is satisfied.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or::new(self, other)
    }

    /// Satisfied iff `self` is not satisfied.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> SpecificationExt<T> for S {}

// =============================================================================
// LEAF SPECIFICATIONS
// =============================================================================

/// Satisfied by every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T: ?Sized> Specification<T> for Always {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Satisfied by no item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Never;

impl<T: ?Sized> Specification<T> for Never {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Field equality: satisfied iff `accessor(item) == expected`.
///
/// ```
/// use sieve_core::{FieldEq, Specification};
///
/// struct Employee { id: u32 }
///
/// let is_123 = FieldEq::new(|e: &Employee| &e.id, 123);
/// assert!(is_123.is_satisfied(&Employee { id: 123 }));
/// assert!(!is_123.is_satisfied(&Employee { id: 7 }));
/// ```
#[derive(Clone, Copy)]
pub struct FieldEq<F, V> {
    accessor: F,
    expected: V,
}

impl<F, V> FieldEq<F, V> {
    /// Create a field-equality specification.
    ///
    /// The item type is taken from the accessor's argument.
    #[must_use]
    pub fn new<T: ?Sized>(accessor: F, expected: V) -> Self
    where
        F: Fn(&T) -> &V,
    {
        Self { accessor, expected }
    }

    /// The value the field is compared against.
    #[must_use]
    pub fn expected(&self) -> &V {
        &self.expected
    }
}

impl<T: ?Sized, F, V> Specification<T> for FieldEq<F, V>
where
    F: Fn(&T) -> &V,
    V: PartialEq,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.accessor)(item) == &self.expected
    }
}

impl<F, V: std::fmt::Debug> std::fmt::Debug for FieldEq<F, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldEq")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// A specification backed by a closure. Build one with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSpec<F>(F);

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FnSpec<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<F> std::fmt::Debug for FnSpec<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnSpec(..)")
    }
}

/// Wrap a pure closure as a specification.
///
/// The closure must not have side effects.
pub fn from_fn<T: ?Sized, F: Fn(&T) -> bool>(f: F) -> FnSpec<F> {
    FnSpec(f)
}

// =============================================================================
// TESTS
// =============================================================================
