// ABOUTME: Category filtering over the recipe store
// ABOUTME: Exact label matching validated against the derived catalog
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Category Filtering
//!
//! Categories are enum-like tokens, not free text: matching is exact and
//! case-sensitive. The label is validated against the catalog derived at
//! load time, so an unknown label is rejected at the boundary and the
//! caller gets the full list of valid values back.

use crate::models::Recipe;
use crate::store::RecipeStore;

/// Outcome of filtering the store by category
#[derive(Debug)]
pub enum CategoryListing<'a> {
    /// The category exists; all its recipes in store order (never empty,
    /// since the catalog is derived from the data)
    Matched(Vec<&'a Recipe>),
    /// The label is not in the catalog
    UnknownCategory,
}

/// Select every recipe whose category equals `category` exactly.
#[must_use]
pub fn filter_by_category<'a>(store: &'a RecipeStore, category: &str) -> CategoryListing<'a> {
    if !store.categories().iter().any(|c| c == category) {
        return CategoryListing::UnknownCategory;
    }

    CategoryListing::Matched(
        store
            .recipes()
            .iter()
            .filter(|r| r.category == category)
            .collect(),
    )
}
