//! # Sieve Core
//!
//! Specification-based filtering for arbitrary item types.
//!
//! The crate is built around one capability, [`Specification`], which answers
//! a single question about a single item. New filters are added by writing a
//! new specification or by composing existing ones with [`And`], [`Or`] and
//! [`Not`]. The [`SpecFilter`] engine never changes when a new criterion is
//! introduced.
//!
//! ```text
//! ┌──────────────┐   compose    ┌──────────────┐   apply    ┌──────────────┐
//! │ ColorSpec    │─────────────►│ And(.., ..)  │───────────►│ SpecFilter   │──► lazy matches
//! │ SizeSpec     │              │ Or / Not     │            │ (stateless)  │
//! └──────────────┘              └──────────────┘            └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sieve_core::{Catalog, Color, ColorSpec, Filter, Size, SizeSpec, SpecFilter, SpecificationExt};
//!
//! let catalog = Catalog::sample();
//! let red_and_large = ColorSpec(Color::Red).and(SizeSpec(Size::Large));
//!
//! let names: Vec<_> = SpecFilter
//!     .filter(catalog.products(), &red_and_large)
//!     .map(|p| p.name.as_str())
//!     .collect();
//!
//! assert_eq!(names, vec!["Shirt"]);
//! ```

pub mod catalog;
pub mod combinator;
pub mod error;
pub mod expr;
pub mod filter;
pub mod predicate;

pub use catalog::{Catalog, Color, ColorSpec, NameSpec, Product, Size, SizeSpec};
pub use combinator::{AllOf, And, AnyOf, Not, Or};
pub use error::{Result, SieveError};
pub use expr::{Mode, SpecExpr};
pub use filter::{Filter, Filtered, SatisfyingExt, SpecFilter};
pub use predicate::{Always, FieldEq, FnSpec, Never, Specification, SpecificationExt, from_fn};
