//! Property-based tests for catalog selection.
//!
//! These tests use proptest to generate random catalogs and verify
//! that core invariants hold.

use hornero::catalog::{self, Catalog};
use proptest::prelude::*;

/// Generate a package name without whitespace.
fn package_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9+._-]{0,15}"
}

/// Generate a catalog with distinct category names.
fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::btree_map(
        "[a-z]{1,8}",
        prop::collection::vec(package_strategy(), 0..6),
        0..6,
    )
    .prop_map(Catalog::from_entries)
}

/// Generate a catalog plus a request: any of its categories, in any order,
/// possibly repeated.
fn catalog_and_request_strategy() -> impl Strategy<Value = (Catalog, Vec<String>)> {
    catalog_strategy().prop_flat_map(|catalog| {
        let names: Vec<String> = catalog.categories().map(String::from).collect();
        let request = if names.is_empty() {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec(prop::sample::select(names), 0..10).boxed()
        };
        (Just(catalog), request)
    })
}

proptest! {
    #[test]
    fn select_concatenates_in_request_order(
        (catalog, request) in catalog_and_request_strategy()
    ) {
        let mut expected = Vec::new();
        for name in &request {
            expected.extend(catalog.packages(name).unwrap().iter().cloned());
        }
        prop_assert!(catalog::validate_categories(&catalog, &request).is_ok());
        prop_assert_eq!(catalog::select(&catalog, &request), expected);
    }

    #[test]
    fn select_of_subsequence_keeps_catalog_order(
        (catalog, picks) in catalog_strategy().prop_flat_map(|catalog| {
            let names: Vec<String> = catalog.categories().map(String::from).collect();
            let len = names.len();
            (Just(catalog), prop::sample::subsequence(names, 0..=len))
        })
    ) {
        let selection = catalog::select(&catalog, &picks);
        let expected: Vec<String> = catalog
            .iter()
            .filter(|(name, _)| picks.iter().any(|pick| pick == name))
            .flat_map(|(_, packages)| packages.iter().cloned())
            .collect();
        prop_assert_eq!(selection, expected);
    }

    #[test]
    fn select_all_counts_every_package(catalog in catalog_strategy()) {
        let names: Vec<&str> = catalog.categories().collect();
        prop_assert_eq!(catalog::select(&catalog, &names).len(), catalog.package_count());
    }

    #[test]
    fn normalize_is_idempotent(catalog in catalog_strategy()) {
        let once = catalog::normalize(&catalog).unwrap();
        let twice = catalog::normalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn padding_is_trimmed(name in package_strategy(), left in " {0,3}", right in " {0,3}") {
        let padded = format!("{left}{name}{right}");
        prop_assert_eq!(catalog::check_package("basic", &padded).unwrap(), name);
    }

    #[test]
    fn inner_whitespace_is_rejected(
        a in package_strategy(),
        b in package_strategy(),
        gap in "[ \t]{1,3}",
    ) {
        let package = format!("{a}{gap}{b}");
        prop_assert!(catalog::check_package("basic", &package).is_err());
    }

    #[test]
    fn rendered_selection_has_one_line_per_package(
        packages in prop::collection::vec(package_strategy(), 0..10)
    ) {
        let rendered = catalog::render_selection(&packages);
        prop_assert_eq!(rendered.lines().count(), packages.len());
        prop_assert!(packages.is_empty() || rendered.ends_with('\n'));
    }
}
