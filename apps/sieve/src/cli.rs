//! # CLI Commands
//!
//! Each `cmd_*` function backs one subcommand. They do the file I/O and
//! logging, then hand the pure work to `sieve_core`.

use crate::error::CliError;
use sieve_core::{
    Catalog, Color, ColorSpec, Filter, Mode, Product, Size, SizeSpec, SpecExpr, SpecFilter,
    Specification, SpecificationExt,
};
use std::path::Path;
use tracing::{debug, info, warn};

// =============================================================================
// LOADING
// =============================================================================

/// Read and parse a catalog file (a JSON array of products).
pub fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let catalog = Catalog::from_json(&text).map_err(|e| CliError::parse(path, e))?;
    info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Read and parse a JSON specification expression file.
pub fn load_expr(path: &Path) -> Result<SpecExpr, CliError> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let expr = SpecExpr::from_json(&text).map_err(|e| CliError::parse(path, e))?;
    debug!(path = %path.display(), nodes = expr.node_count(), "Loaded expression");
    Ok(expr)
}

/// Build the specification for `filter` from `--where` terms and an optional
/// expression file. When both are given, both must hold.
pub fn build_spec(
    terms: &[String],
    mode: Mode,
    expr: Option<&Path>,
) -> Result<SpecExpr, CliError> {
    let from_terms = SpecExpr::from_terms(terms, mode)?;

    let spec = match expr {
        None => from_terms,
        Some(path) => {
            let loaded = load_expr(path)?;
            if terms.is_empty() {
                loaded
            } else {
                SpecExpr::And {
                    specs: vec![from_terms, loaded],
                }
            }
        }
    };

    debug!(spec = %spec, "Built specification");
    Ok(spec)
}

// =============================================================================
// FILTER COMMAND
// =============================================================================

/// Filter a catalog file and print the matching products.
///
/// Returns the matches so callers can inspect them.
pub fn cmd_filter(
    catalog_path: &Path,
    terms: &[String],
    mode: Mode,
    expr: Option<&Path>,
    json_mode: bool,
) -> Result<Vec<Product>, CliError> {
    let catalog = load_catalog(catalog_path)?;
    let spec = build_spec(terms, mode, expr)?;

    let matches: Vec<Product> = catalog.filter(&spec).cloned().collect();
    if matches.is_empty() {
        warn!(spec = %spec, "No product matched");
    } else {
        info!(matches = matches.len(), total = catalog.len(), "Filter complete");
    }

    let rendered = render(&matches, json_mode)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(matches)
}

/// Format products as one line each, or as a JSON array.
///
/// Text mode renders no products as an empty string.
pub fn render(products: &[Product], json_mode: bool) -> Result<String, CliError> {
    if json_mode {
        let catalog: Catalog = products.iter().cloned().collect();
        Ok(catalog.to_json()?)
    } else {
        Ok(products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// One titled block of the demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSection {
    pub title: &'static str,
    pub names: Vec<String>,
}

fn section<S>(catalog: &Catalog, title: &'static str, spec: S) -> DemoSection
where
    S: Specification<Product>,
{
    DemoSection {
        title,
        names: SpecFilter
            .filter(catalog.products(), &spec)
            .map(|p| p.name.clone())
            .collect(),
    }
}

/// Run the product-filter demonstration over `catalog`: green products,
/// small-size products, then red-and-large products.
pub fn demo_sections(catalog: &Catalog) -> Vec<DemoSection> {
    vec![
        section(catalog, "Green", ColorSpec(Color::Green)),
        section(catalog, "Small Size", SizeSpec(Size::Small)),
        section(
            catalog,
            "Red and Large",
            ColorSpec(Color::Red).and(SizeSpec(Size::Large)),
        ),
    ]
}

/// Text form of the demonstration, one `"<title> Product <name>"` line per
/// match. A section without matches prints `"<title>: (none)"`.
pub fn demo_lines(sections: &[DemoSection]) -> Vec<String> {
    let mut lines = Vec::new();
    for s in sections {
        if s.names.is_empty() {
            lines.push(format!("{}: (none)", s.title));
        }
        for name in &s.names {
            lines.push(format!("{} Product {}", s.title, name));
        }
    }
    lines
}

/// Print the demonstration over the sample catalog.
pub fn cmd_demo(json_mode: bool) -> Result<(), CliError> {
    let catalog = Catalog::sample();
    let sections = demo_sections(&catalog);

    if json_mode {
        let value: serde_json::Map<String, serde_json::Value> = sections
            .iter()
            .map(|s| (s.title.to_string(), serde_json::json!(s.names)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&value).map_err(sieve_core::SieveError::from)?
        );
        return Ok(());
    }

    for line in demo_lines(&sections) {
        println!("{line}");
    }
    info!(sections = sections.len(), "Demo complete");
    Ok(())
}

// =============================================================================
// SAMPLE COMMAND
// =============================================================================

/// Write the sample catalog as JSON to `output`.
///
/// Fails if `output` exists, unless `force` is set.
pub fn cmd_sample(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::AlreadyExists(output.to_path_buf()));
    }

    let catalog = Catalog::sample();
    let json = catalog.to_json()?;
    std::fs::write(output, json).map_err(|e| CliError::io(output, e))?;

    info!(path = %output.display(), products = catalog.len(), "Wrote sample catalog");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_matches_expected_names() {
        let sections = demo_sections(&Catalog::sample());
        let names: Vec<(&str, Vec<String>)> =
            sections.into_iter().map(|s| (s.title, s.names)).collect();

        assert_eq!(
            names,
            vec![
                ("Green", vec!["Apple".to_string(), "Tree".to_string()]),
                ("Small Size", vec!["Apple".to_string()]),
                ("Red and Large", vec!["Shirt".to_string()]),
            ]
        );
    }

    #[test]
    fn render_text_is_one_line_per_product() {
        let products = Catalog::sample().products().to_vec();
        let text = render(&products, false).unwrap_or_default();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Apple (green, small)"));
    }

    #[test]
    fn render_text_of_nothing_is_empty() {
        assert_eq!(render(&[], false).ok().as_deref(), Some(""));
    }

    #[test]
    fn demo_text_lines() {
        let lines = demo_lines(&demo_sections(&Catalog::sample()));
        assert_eq!(
            lines,
            vec![
                "Green Product Apple",
                "Green Product Tree",
                "Small Size Product Apple",
                "Red and Large Product Shirt",
            ]
        );
    }

    #[test]
    fn demo_lines_mark_empty_sections() {
        let sections = demo_sections(&Catalog::new());
        assert_eq!(demo_lines(&sections)[0], "Green: (none)");
    }

    #[test]
    fn render_json_is_an_array() {
        let text = render(&[], true).unwrap_or_default();
        assert_eq!(text.trim(), "[]");
    }

    #[test]
    fn build_spec_without_input_matches_everything() {
        let spec = build_spec(&[], Mode::All, None).ok();
        assert_eq!(spec, Some(SpecExpr::True));
    }

    #[test]
    fn build_spec_reports_bad_term() {
        let terms = vec!["shade=red".to_string()];
        assert!(matches!(
            build_spec(&terms, Mode::All, None),
            Err(CliError::Spec(_))
        ));
    }
}
