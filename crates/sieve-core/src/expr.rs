//! # Expression Module
//!
//! Declarative product specifications.
//!
//! [`SpecExpr`] is the data form of a specification tree. It can be parsed
//! from `field=value` terms, loaded from JSON, and evaluated directly since
//! it implements [`Specification<Product>`]. Leaves delegate to the typed
//! specifications in [`crate::catalog`].
//!
//! JSON shape:
//!
//! ```json
//! {"op": "and", "specs": [
//!   {"op": "color", "value": "red"},
//!   {"op": "not", "spec": {"op": "size", "value": "small"}}
//! ]}
//! ```

use crate::catalog::{Color, ColorSpec, NameSpec, Product, Size, SizeSpec};
use crate::error::{Result, SieveError};
use crate::predicate::Specification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How several parsed terms are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every term must hold (AND).
    #[default]
    All,
    /// At least one term must hold (OR).
    Any,
}

/// A specification tree over products, as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SpecExpr {
    True,
    False,
    Color { value: Color },
    Size { value: Size },
    Name { value: String },
    And { specs: Vec<SpecExpr> },
    Or { specs: Vec<SpecExpr> },
    Not { spec: Box<SpecExpr> },
}

impl SpecExpr {
    #[must_use]
    pub fn color(value: Color) -> Self {
        Self::Color { value }
    }

    #[must_use]
    pub fn size(value: Size) -> Self {
        Self::Size { value }
    }

    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not {
            spec: Box::new(self),
        }
    }

    /// Parse one `field=value` or `field!=value` term.
    ///
    /// Fields are `color`, `size` and `name`, matched case-insensitively.
    pub fn parse_term(term: &str) -> Result<Self> {
        // The operator is the first '=', optionally preceded by '!'. Anything
        // after it, including further '=' or "!=", belongs to the value.
        let Some((head, value)) = term.split_once('=') else {
            return Err(SieveError::MalformedTerm(term.to_string()));
        };
        let (field, negated) = match head.strip_suffix('!') {
            Some(field) => (field, true),
            None => (head, false),
        };

        let field = field.trim();
        let value = value.trim();
        if field.is_empty() || value.is_empty() {
            return Err(SieveError::MalformedTerm(term.to_string()));
        }

        let leaf = match field.to_ascii_lowercase().as_str() {
            "color" | "colour" => Self::color(value.parse()?),
            "size" => Self::size(value.parse()?),
            "name" => Self::name(value),
            _ => return Err(SieveError::UnknownField(field.to_string())),
        };

        Ok(if negated { leaf.negate() } else { leaf })
    }

    /// Parse several terms and combine them according to `mode`.
    ///
    /// No terms yields [`SpecExpr::True`]; a single term is returned as is.
    pub fn from_terms<I, S>(terms: I, mode: Mode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut specs = terms
            .into_iter()
            .map(|term| Self::parse_term(term.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(match (specs.len(), mode) {
            (0, _) => Self::True,
            (1, _) => specs.remove(0),
            (_, Mode::All) => Self::And { specs },
            (_, Mode::Any) => Self::Or { specs },
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::True | Self::False | Self::Color { .. } | Self::Size { .. } | Self::Name { .. } => 1,
            Self::And { specs } | Self::Or { specs } => {
                specs.iter().map(Self::node_count).sum::<usize>().saturating_add(1)
            }
            Self::Not { spec } => spec.node_count().saturating_add(1),
        }
    }
}

impl Specification<Product> for SpecExpr {
    fn is_satisfied(&self, item: &Product) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Color { value } => ColorSpec(*value).is_satisfied(item),
            Self::Size { value } => SizeSpec(*value).is_satisfied(item),
            Self::Name { value } => NameSpec::new(value.as_str()).is_satisfied(item),
            Self::And { specs } => specs.iter().all(|spec| spec.is_satisfied(item)),
            Self::Or { specs } => specs.iter().any(|spec| spec.is_satisfied(item)),
            Self::Not { spec } => !spec.is_satisfied(item),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, specs: &[SpecExpr], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, spec) in specs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{spec}")?;
    }
    f.write_str(")")
}

impl fmt::Display for SpecExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Color { value } => write!(f, "color={value}"),
            Self::Size { value } => write!(f, "size={value}"),
            Self::Name { value } => write!(f, "name={value}"),
            Self::And { specs } if specs.is_empty() => f.write_str("true"),
            Self::Or { specs } if specs.is_empty() => f.write_str("false"),
            Self::And { specs } => write_joined(f, specs, " AND "),
            Self::Or { specs } => write_joined(f, specs, " OR "),
            Self::Not { spec } => write!(f, "NOT {spec}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
