//! # Filter Engine
//!
//! Applies a specification to a collection and yields the matching items
//! lazily, in their original order.
//!
//! The engine is stateless and owns nothing: it borrows the items and the
//! specification for as long as the returned [`Filtered`] iterator lives.
//! New criteria never require a change here; they are new specifications.

use crate::predicate::Specification;
use std::iter::FusedIterator;

// =============================================================================
// FILTER TRAIT
// =============================================================================

/// A filter engine: selects the items of a collection that satisfy a
/// specification.
pub trait Filter {
    /// Lazily select the items of `items` that satisfy `spec`.
    ///
    /// The result preserves the relative order of `items`. An empty input or
    /// a specification nothing satisfies yields an empty sequence.
    fn filter<'a, 's, T, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized;
}

/// The stateless filter engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecFilter;

impl Filter for SpecFilter {
    fn filter<'a, 's, T, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
    {
        Filtered::new(items.into_iter(), spec)
    }
}

/// Free-function form of [`SpecFilter::filter`].
pub fn filter<'a, 's, T, I, S>(items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    SpecFilter.filter(items, spec)
}

// =============================================================================
// LAZY RESULT
// =============================================================================

/// Lazy, order-preserving sequence of the items that satisfy a specification.
///
/// Single pass: once exhausted it stays exhausted. Re-run the filter to
/// iterate again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'s, I, S: ?Sized> {
    iter: I,
    spec: &'s S,
}

impl<'s, I, S: ?Sized> Filtered<'s, I, S> {
    fn new(iter: I, spec: &'s S) -> Self {
        Self { iter, spec }
    }
}

impl<I: Clone, S: ?Sized> Clone for Filtered<'_, I, S> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            spec: self.spec,
        }
    }
}

impl<I: std::fmt::Debug, S: ?Sized> std::fmt::Debug for Filtered<'_, I, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtered")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

impl<'a, T, I, S> Iterator for Filtered<'_, I, S>
where
    T: 'a + ?Sized,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.iter.find(|item| spec.is_satisfied(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere from none to all of the remaining items may match.
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<'a, T, I, S> DoubleEndedIterator for Filtered<'_, I, S>
where
    T: 'a + ?Sized,
    I: DoubleEndedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.iter.rfind(|item| spec.is_satisfied(*item))
    }
}

impl<'a, T, I, S> FusedIterator for Filtered<'_, I, S>
where
    T: 'a + ?Sized,
    I: FusedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
}

// =============================================================================
// ITERATOR EXTENSION
// =============================================================================

/// Adapter so any iterator of borrowed items can be filtered in method-chain
/// style: `items.iter().satisfying(&spec)`.
pub trait SatisfyingExt<'a, T: 'a + ?Sized>: Iterator<Item = &'a T> + Sized {
    fn satisfying<'s, S>(self, spec: &'s S) -> Filtered<'s, Self, S>
    where
        S: Specification<T> + ?Sized,
    {
        Filtered::new(self, spec)
    }
}

impl<'a, T: 'a + ?Sized, I: Iterator<Item = &'a T>> SatisfyingExt<'a, T> for I {}

// =============================================================================
// TESTS
// =============================================================================
