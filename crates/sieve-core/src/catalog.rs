//! # Catalog Module
//!
//! The product domain: colors, sizes, products, and the field-equality
//! specifications over them.
//!
//! A [`Catalog`] is an ordered list of products. It serializes as a plain
//! JSON array so catalogs can be written by hand:
//!
//! ```json
//! [
//!   {"name": "Apple", "color": "green", "size": "small"},
//!   {"name": "Shirt", "color": "red", "size": "large"}
//! ]
//! ```

use crate::error::{Result, SieveError};
use crate::filter::{Filter, Filtered, SpecFilter};
use crate::predicate::Specification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SieveError::UnknownValue {
                field: "color",
                value: s.to_string(),
            })
    }
}

/// Product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Mid,
    Large,
    ExtraLarge,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 4] = [Size::Small, Size::Mid, Size::Large, Size::ExtraLarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Mid => "mid",
            Size::Large => "large",
            Size::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SieveError;

    /// Accepts `extra-large` as well as `extra_large`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| SieveError::UnknownValue {
                field: "size",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

// =============================================================================
// PRODUCT SPECIFICATIONS
// =============================================================================

/// Satisfied by products of the given color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec(pub Color);

impl Specification<Product> for ColorSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

/// Satisfied by products of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec(pub Size);

impl Specification<Product> for SizeSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

/// Satisfied by products whose name matches, ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpec(pub String);

impl NameSpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Specification<Product> for NameSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name.eq_ignore_ascii_case(&self.0)
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// An ordered collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The three products used throughout the documentation:
    /// a green small Apple, a red large Shirt and a green extra-large Tree.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new("Apple", Color::Green, Size::Small),
                Product::new("Shirt", Color::Red, Size::Large),
                Product::new("Tree", Color::Green, Size::ExtraLarge),
            ],
        }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Lazily select the products that satisfy `spec`, in catalog order.
    pub fn filter<'s, S>(&self, spec: &'s S) -> Filtered<'s, std::slice::Iter<'_, Product>, S>
    where
        S: Specification<Product> + ?Sized,
    {
        SpecFilter.filter(&self.products, spec)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
