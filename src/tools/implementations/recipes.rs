// ABOUTME: Recipe query and recommendation tools
// ABOUTME: Implements get_all_recipes, get_recipe_by_id, get_recipes_by_category, what_to_eat
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Tools
//!
//! Bridges the core query logic to MCP tool outcomes:
//! - `get_all_recipes` — every recipe as a name/description pair
//! - `get_recipe_by_id` — multi-tier name resolution with suggestions
//! - `get_recipes_by_category` — one category, catalog-validated
//! - `what_to_eat` — randomized balanced menu for a party size
//!
//! Domain failures (no match, unknown category) come back as error-shaped
//! payloads with a suggestion, never as `Err`.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::category::{filter_by_category, CategoryListing};
use crate::constants::json_fields::{CATEGORY, NAME, PEOPLE_COUNT};
use crate::constants::tools::{
    GET_ALL_RECIPES, GET_RECIPES_BY_CATEGORY, GET_RECIPE_BY_ID, WHAT_TO_EAT,
};
use crate::errors::{AppError, AppResult};
use crate::mcp::schema::{
    create_get_all_recipes_tool, create_get_recipe_by_id_tool,
    create_get_recipes_by_category_tool, create_what_to_eat_tool, JsonSchema, ToolSchema,
};
use crate::menu;
use crate::models::{RecipeCandidate, RecipeSummary, SimplifiedRecipe};
use crate::resolver::{resolve, NameResolution};
use crate::tools::{McpTool, ToolCapabilities, ToolContext, ToolOutcome};

/// Lists every recipe as a name/description pair
pub struct GetAllRecipesTool {
    schema: ToolSchema,
}

impl GetAllRecipesTool {
    /// Create the tool
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: create_get_all_recipes_tool(),
        }
    }
}

impl Default for GetAllRecipesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for GetAllRecipesTool {
    fn name(&self) -> &'static str {
        GET_ALL_RECIPES
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn input_schema(&self) -> JsonSchema {
        self.schema.input_schema.clone()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(&self, _args: Value, context: &ToolContext) -> AppResult<ToolOutcome> {
        let summaries: Vec<RecipeSummary> = context
            .store
            .recipes()
            .iter()
            .map(RecipeSummary::from)
            .collect();
        Ok(ToolOutcome::from_serializable(&summaries)?)
    }
}

/// Resolves a free-text recipe name to full detail
pub struct GetRecipeByIdTool {
    schema: ToolSchema,
}

impl GetRecipeByIdTool {
    /// Create the tool
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: create_get_recipe_by_id_tool(),
        }
    }
}

impl Default for GetRecipeByIdTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for GetRecipeByIdTool {
    fn name(&self) -> &'static str {
        GET_RECIPE_BY_ID
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn input_schema(&self) -> JsonSchema {
        self.schema.input_schema.clone()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(&self, args: Value, context: &ToolContext) -> AppResult<ToolOutcome> {
        let query = args
            .get(NAME)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::missing_field(NAME))?;

        match resolve(&context.store, query) {
            // The only path that returns complete recipe detail
            NameResolution::Found(recipe) => Ok(ToolOutcome::from_serializable(recipe)?),
            NameResolution::Suggestions(candidates) => {
                let matches: Vec<RecipeCandidate> =
                    candidates.into_iter().map(RecipeCandidate::from).collect();
                Ok(ToolOutcome::ok(json!({
                    "message": format!("未找到\"{query}\"的精确匹配，以下是可能相关的菜谱："),
                    "possibleMatches": matches,
                })))
            }
            NameResolution::NotFound => Ok(ToolOutcome::error(json!({
                "error": format!("未找到名称包含\"{query}\"的菜谱"),
                "suggestion": "请检查菜谱名称是否正确，或尝试使用其他关键词",
            }))),
        }
    }
}

/// Lists the recipes of one category, validated against the catalog
pub struct GetRecipesByCategoryTool {
    schema: ToolSchema,
}

impl GetRecipesByCategoryTool {
    /// Create the tool against the loaded category catalog
    #[must_use]
    pub fn new(categories: &[String]) -> Self {
        Self {
            schema: create_get_recipes_by_category_tool(categories),
        }
    }
}

#[async_trait]
impl McpTool for GetRecipesByCategoryTool {
    fn name(&self) -> &'static str {
        GET_RECIPES_BY_CATEGORY
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn input_schema(&self) -> JsonSchema {
        self.schema.input_schema.clone()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(&self, args: Value, context: &ToolContext) -> AppResult<ToolOutcome> {
        let category = args
            .get(CATEGORY)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::missing_field(CATEGORY))?;

        match filter_by_category(&context.store, category) {
            CategoryListing::Matched(recipes) => {
                let simplified: Vec<SimplifiedRecipe> =
                    recipes.into_iter().map(SimplifiedRecipe::from).collect();
                Ok(ToolOutcome::ok(json!({
                    "category": category,
                    "count": simplified.len(),
                    "recipes": simplified,
                })))
            }
            CategoryListing::UnknownCategory => Ok(ToolOutcome::error(json!({
                "error": format!("未找到分类\"{category}\"的菜谱"),
                "availableCategories": context.store.categories(),
                "suggestion": "请使用上述可用分类之一",
            }))),
        }
    }
}

/// Recommends a randomized, balanced menu for a party size
pub struct WhatToEatTool {
    schema: ToolSchema,
}

impl WhatToEatTool {
    /// Create the tool
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: create_what_to_eat_tool(),
        }
    }
}

impl Default for WhatToEatTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for WhatToEatTool {
    fn name(&self) -> &'static str {
        WHAT_TO_EAT
    }

    fn description(&self) -> &str {
        &self.schema.description
    }

    fn input_schema(&self) -> JsonSchema {
        self.schema.input_schema.clone()
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::RANDOMIZED
    }

    async fn execute(&self, args: Value, context: &ToolContext) -> AppResult<ToolOutcome> {
        let people_count = args
            .get(PEOPLE_COUNT)
            .ok_or_else(|| AppError::missing_field(PEOPLE_COUNT))?
            .as_u64()
            .ok_or_else(|| {
                AppError::invalid_input("people_count must be a positive integer")
            })?;

        let recommendation = menu::recommend(&context.store, people_count)?;
        Ok(ToolOutcome::from_serializable(&recommendation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecipeStore;
    use std::sync::Arc;

    fn context() -> ToolContext {
        let store = RecipeStore::from_json(
            r#"[
                {"name": "红烧肉", "description": "经典家常菜", "category": "荤菜",
                 "ingredients": [{"name": "五花肉"}, {"name": "冰糖"}],
                 "steps": [{"step": 1, "description": "切块"}]},
                {"name": "番茄炒蛋", "description": "酸甜下饭", "category": "素菜",
                 "ingredients": [{"name": "番茄"}, {"name": "鸡蛋"}],
                 "steps": [{"step": 1, "description": "炒"}]},
                {"name": "清蒸鲈鱼", "description": "清淡鲜美", "category": "水产",
                 "ingredients": [{"name": "鲈鱼"}],
                 "steps": [{"step": 1, "description": "蒸"}]}
            ]"#,
        )
        .unwrap();
        ToolContext::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_get_all_recipes_returns_summaries_only() {
        let outcome = GetAllRecipesTool::new()
            .execute(json!({}), &context())
            .await
            .unwrap();
        assert!(!outcome.is_error);
        let list = outcome.content.as_array().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0]["name"], "红烧肉");
        // Summaries never leak the full record
        assert!(list[0].get("ingredients").is_none());
        assert!(list[0].get("category").is_none());
    }

    #[tokio::test]
    async fn test_get_recipe_by_id_exact_match_returns_full_detail() {
        let outcome = GetRecipeByIdTool::new()
            .execute(json!({"name": "红烧肉"}), &context())
            .await
            .unwrap();
        assert!(!outcome.is_error);
        assert_eq!(outcome.content["name"], "红烧肉");
        assert!(outcome.content["ingredients"].is_array());
        assert!(outcome.content["steps"].is_array());
    }

    #[tokio::test]
    async fn test_get_recipe_by_id_not_found_carries_suggestion() {
        let outcome = GetRecipeByIdTool::new()
            .execute(json!({"name": "佛跳墙"}), &context())
            .await
            .unwrap();
        assert!(outcome.is_error);
        assert!(outcome.content["error"]
            .as_str()
            .unwrap()
            .contains("佛跳墙"));
        assert!(outcome.content["suggestion"].is_string());
    }

    #[tokio::test]
    async fn test_get_recipe_by_id_requires_name() {
        let error = GetRecipeByIdTool::new()
            .execute(json!({}), &context())
            .await
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::MissingRequiredField);
    }

    #[tokio::test]
    async fn test_category_listing_counts_match() {
        let outcome = GetRecipesByCategoryTool::new(&["荤菜".into(), "素菜".into(), "水产".into()])
            .execute(json!({"category": "荤菜"}), &context())
            .await
            .unwrap();
        assert!(!outcome.is_error);
        assert_eq!(outcome.content["count"], 1);
        assert_eq!(
            outcome.content["count"].as_u64().unwrap() as usize,
            outcome.content["recipes"].as_array().unwrap().len()
        );
        assert!(outcome.content["recipes"][0]["mainIngredients"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_category_lists_the_catalog() {
        let outcome = GetRecipesByCategoryTool::new(&["荤菜".into()])
            .execute(json!({"category": "甜品"}), &context())
            .await
            .unwrap();
        assert!(outcome.is_error);
        let available = outcome.content["availableCategories"].as_array().unwrap();
        assert_eq!(available.len(), 3);
        assert_eq!(available[0], "荤菜");
    }

    #[tokio::test]
    async fn test_what_to_eat_rejects_out_of_range() {
        let error = WhatToEatTool::new()
            .execute(json!({"people_count": 11}), &context())
            .await
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ValueOutOfRange);
    }

    #[tokio::test]
    async fn test_what_to_eat_rejects_non_integer() {
        let error = WhatToEatTool::new()
            .execute(json!({"people_count": 2.5}), &context())
            .await
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_what_to_eat_counts_reflect_actual_selection() {
        let outcome = WhatToEatTool::new()
            .execute(json!({"people_count": 2}), &context())
            .await
            .unwrap();
        assert!(!outcome.is_error);
        let dishes = outcome.content["dishes"].as_array().unwrap();
        let meat = outcome.content["meatDishCount"].as_u64().unwrap() as usize;
        let veg = outcome.content["vegetableDishCount"].as_u64().unwrap() as usize;
        assert_eq!(meat + veg, dishes.len());
    }
}
