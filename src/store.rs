// ABOUTME: The immutable, process-lifetime recipe store and its category catalog
// ABOUTME: Loads recipes once from bundled or external JSON; read-only afterwards
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Store
//!
//! The store owns the loaded recipe collection for the process lifetime.
//! It is built once in the binary, shared behind `Arc`, and only ever read;
//! every query component borrows through it.
//!
//! The category catalog is derived here, at load time, so the advertised
//! category set always matches the data actually loaded.

use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

/// Default dataset compiled into the binary
const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// The loaded recipe collection plus its derived category catalog
#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    categories: Vec<String>,
}

impl RecipeStore {
    fn new(recipes: Vec<Recipe>) -> Self {
        // Catalog keeps first-appearance order so listings stay stable
        // across runs for the same data file.
        let mut categories: Vec<String> = Vec::new();
        for recipe in &recipes {
            if !categories.contains(&recipe.category) {
                categories.push(recipe.category.clone());
            }
        }
        Self {
            recipes,
            categories,
        }
    }

    /// Build the store from the bundled default dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON fails to parse
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_RECIPES)
    }

    /// Build the store from a JSON document (an array of recipes)
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid recipe array
    pub fn from_json(json: &str) -> AppResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| AppError::invalid_format(format!("recipe data: {e}")).with_source(e))?;
        Ok(Self::new(recipes))
    }

    /// Build the store from a JSON file on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read recipe file {}: {e}", path.display()))
                .with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// All recipes in load order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct category labels in first-appearance order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of loaded recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
