//! Package catalog: the category → packages mapping read from a YAML file.
//!
//! A packages file looks like:
//!
//! ```yaml
//! basic:
//!   - vim
//!   - git
//! desktop:
//!   - firefox
//! ```
//!
//! Loading is split in two steps. [`load_yaml`] returns the mapping exactly as
//! written, and [`normalize`] validates and trims every package name. Use
//! [`get_packages`] to do both.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{HorneroError, Result};

/// Ordered mapping of category names to package names.
///
/// Categories keep the order in which they appear in the packages file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Vec<String>)>,
}

impl Catalog {
    /// Build a catalog from `(category, packages)` pairs.
    ///
    /// A repeated category name replaces the packages of the earlier entry
    /// while keeping its position.
    pub fn from_entries<I, C, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<P>)>,
        C: Into<String>,
        P: Into<String>,
    {
        let mut catalog = Self::default();
        for (category, packages) in entries {
            let category = category.into();
            let packages = packages.into_iter().map(Into::into).collect();
            match catalog.entries.iter_mut().find(|(name, _)| *name == category) {
                Some(entry) => entry.1 = packages,
                None => catalog.entries.push((category, packages)),
            }
        }
        catalog
    }

    /// Category names in file order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Packages of a single category, if it exists.
    pub fn packages(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, packages)| packages.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.packages(category).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, packages)| (name.as_str(), packages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of package entries across all categories.
    pub fn package_count(&self) -> usize {
        self.entries.iter().map(|(_, packages)| packages.len()).sum()
    }
}

/// Read a packages file without validating package names.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HorneroError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_yaml(&content, path)?;
    tracing::debug!(
        "Loaded {} categories ({} packages) from {}",
        catalog.len(),
        catalog.package_count(),
        path.display()
    );
    Ok(catalog)
}

/// Parse packages file content. `path` is only used in error messages.
pub fn parse_yaml(content: &str, path: &Path) -> Result<Catalog> {
    let parse_error = |message: String| HorneroError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let value: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    let Value::Mapping(mapping) = value else {
        return Err(parse_error(
            "expected a mapping of categories to package lists".to_string(),
        ));
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, packages) in mapping {
        let Some(category) = key.as_str().map(str::to_string) else {
            return Err(parse_error(format!(
                "category names must be strings, found {}",
                describe(&key)
            )));
        };
        let packages: Vec<String> = serde_yaml::from_value(packages).map_err(|e| {
            parse_error(format!(
                "category '{category}' must be a list of package names: {e}"
            ))
        })?;
        entries.push((category, packages));
    }

    Ok(Catalog::from_entries(entries))
}

fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "an unprintable key".to_string())
}

/// Validate and trim every package name.
///
/// A name must be exactly one whitespace-free word once surrounding
/// whitespace is ignored, so `"vim "` becomes `"vim"` while `"package one"`
/// and blank entries are rejected. Order and duplicates are preserved.
pub fn normalize(raw: &Catalog) -> Result<Catalog> {
    let mut entries = Vec::with_capacity(raw.len());
    for (category, packages) in raw.iter() {
        let mut normalized = Vec::with_capacity(packages.len());
        for package in packages {
            normalized.push(check_package(category, package)?);
        }
        entries.push((category.to_string(), normalized));
    }
    Ok(Catalog { entries })
}

/// Check a single package name, returning it trimmed.
pub fn check_package(category: &str, package: &str) -> Result<String> {
    let mut tokens = package.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(name), None) => Ok(name.to_string()),
        _ => Err(HorneroError::InvalidPackage {
            category: category.to_string(),
            package: package.to_string(),
        }),
    }
}

/// Load a packages file and normalize it.
pub fn get_packages(path: impl AsRef<Path>) -> Result<Catalog> {
    normalize(&load_yaml(path)?)
}

/// Fail if any requested category is missing from the catalog.
///
/// Every unknown name is reported in a single error, in request order.
pub fn validate_categories<S: AsRef<str>>(catalog: &Catalog, requested: &[S]) -> Result<()> {
    let unknown: Vec<String> = requested
        .iter()
        .map(AsRef::as_ref)
        .filter(|category| !catalog.contains(category))
        .map(str::to_string)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(HorneroError::UnknownCategories(unknown))
    }
}

/// Flatten the packages of `categories`, in the order given.
///
/// No deduplication is done.
///
/// # Panics
///
/// Panics if a category is not in the catalog. Run [`validate_categories`]
/// first.
pub fn select<S: AsRef<str>>(catalog: &Catalog, categories: &[S]) -> Vec<String> {
    let mut selection = Vec::new();
    for category in categories {
        let category = category.as_ref();
        match catalog.packages(category) {
            Some(packages) => selection.extend(packages.iter().cloned()),
            None => panic!("category '{category}' is not in the catalog"),
        }
    }
    selection
}

/// Render a selection as file content: one package per line.
pub fn render_selection(packages: &[String]) -> String {
    if packages.is_empty() {
        return String::new();
    }
    let mut content = packages.join("\n");
    content.push('\n');
    content
}

/// Write a selection to `path`, replacing any existing content.
pub fn write_selection(path: impl AsRef<Path>, packages: &[String]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_selection(packages)).map_err(|source| HorneroError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} packages to {}", packages.len(), path.display());
    Ok(())
}
