// ABOUTME: Multi-tier recipe name resolution over the store
// ABOUTME: Exact match, then name substring, then bounded name/description search
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Name Resolution
//!
//! Turns an imprecise user string into zero, one, or many recipes, in a
//! strict tie-break order:
//!
//! 1. exact name equality — first hit in store order wins
//! 2. case-insensitive substring of the name — first hit wins, returned in
//!    full like an exact match
//! 3. broad search over name OR description, capped at
//!    [`MAX_NAME_SUGGESTIONS`] candidates in store order
//!
//! Pure read; the same query against the same store always yields the same
//! result.

use crate::constants::limits::MAX_NAME_SUGGESTIONS;
use crate::models::Recipe;
use crate::store::RecipeStore;

/// Outcome of resolving a recipe name query
#[derive(Debug)]
pub enum NameResolution<'a> {
    /// A single recipe matched exactly or by name substring; callers get
    /// full detail
    Found(&'a Recipe),
    /// No direct hit, but the broad search produced candidates (at most
    /// [`MAX_NAME_SUGGESTIONS`], store order)
    Suggestions(Vec<&'a Recipe>),
    /// Nothing in the store contains the query
    NotFound,
}

/// Resolve a free-text query against the store.
///
/// The empty query is legal: it never matches tier 1 (no recipe has an
/// empty name), always matches tier 2 (every string contains ""), and so
/// resolves to the first recipe in store order. Callers that want to treat
/// "" specially must do so at their own boundary.
#[must_use]
pub fn resolve<'a>(store: &'a RecipeStore, query: &str) -> NameResolution<'a> {
    if let Some(hit) = store.recipes().iter().find(|r| r.name == query) {
        return NameResolution::Found(hit);
    }

    let needle = query.to_lowercase();
    if let Some(hit) = store
        .recipes()
        .iter()
        .find(|r| r.name.to_lowercase().contains(&needle))
    {
        return NameResolution::Found(hit);
    }

    let candidates: Vec<&Recipe> = store
        .recipes()
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .take(MAX_NAME_SUGGESTIONS)
        .collect();

    if candidates.is_empty() {
        NameResolution::NotFound
    } else {
        NameResolution::Suggestions(candidates)
    }
}
