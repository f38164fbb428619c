// ABOUTME: Recipe records and the reduced projections sent over the wire
// ABOUTME: Defines Recipe, its parts, dish plans, and recommendation payloads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Core data structures for the cookbook MCP server.
//!
//! ## Design Principles
//!
//! - **Immutable**: recipes are deserialized once at startup and never
//!   mutated afterwards
//! - **Serializable**: every model supports JSON for the MCP protocol
//! - **Reduced projections**: list-style responses carry purpose-built
//!   subsets of a recipe, never the full record

use serde::{Deserialize, Serialize};

use crate::constants::limits::MAX_MAIN_INGREDIENTS;

/// A single recipe as loaded from the data file.
///
/// `name` is unique by convention, not enforced. `category` is an open
/// string set; the catalog of valid values is derived from the loaded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name, e.g. 红烧肉
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// Category label, e.g. 荤菜 / 素菜 / 水产 / 汤 / 甜品
    pub category: String,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps
    pub steps: Vec<CookingStep>,
    /// Difficulty rating 1-5, untouched by the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    /// Suggested servings, untouched by the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u8>,
    /// Free-form tags, untouched by the core
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Quantity as free text, e.g. "500克"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_quantity: Option<String>,
    /// Preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One numbered cooking step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingStep {
    /// 1-based step number
    pub step: u32,
    /// What to do in this step
    pub description: String,
}

/// Name/description projection used by the full listing and menu dishes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Recipe name
    pub name: String,
    /// One-sentence description
    pub description: String,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
        }
    }
}

/// Candidate projection returned when name resolution falls back to
/// suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Recipe name
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// Category label
    pub category: String,
}

impl From<&Recipe> for RecipeCandidate {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            category: recipe.category.clone(),
        }
    }
}

/// Simplified projection for category listings: adds the main ingredient
/// names on top of the candidate fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedRecipe {
    /// Recipe name
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// Category label
    pub category: String,
    /// Ingredient names, capped at [`MAX_MAIN_INGREDIENTS`]
    #[serde(rename = "mainIngredients")]
    pub main_ingredients: Vec<String>,
}

impl From<&Recipe> for SimplifiedRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            category: recipe.category.clone(),
            main_ingredients: recipe
                .ingredients
                .iter()
                .take(MAX_MAIN_INGREDIENTS)
                .map(|ingredient| ingredient.name.clone())
                .collect(),
        }
    }
}

/// Request-scoped dish quota plan derived from the party size.
///
/// Invariant: `meat_count + vegetable_count == total_dishes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishSelectionPlan {
    /// Total dishes to recommend, always at least 2
    pub total_dishes: usize,
    /// Meat-pool quota, always at least 1
    pub meat_count: usize,
    /// Vegetable-pool quota
    pub vegetable_count: usize,
}

/// The response payload of the `what_to_eat` tool.
///
/// Counts always reflect what was actually selected, which may be less
/// than planned when a pool runs short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecommendation {
    /// Party size the menu was composed for
    #[serde(rename = "peopleCount")]
    pub people_count: u64,
    /// Meat dishes actually selected
    #[serde(rename = "meatDishCount")]
    pub meat_dish_count: usize,
    /// Vegetable dishes actually selected
    #[serde(rename = "vegetableDishCount")]
    pub vegetable_dish_count: usize,
    /// Selected dishes, meat first
    pub dishes: Vec<RecipeSummary>,
    /// Human-readable summary, e.g. 为4人推荐5道菜：3荤2素
    pub message: String,
}
