// ABOUTME: Application constants for protocol strings, tool names, and domain limits
// ABOUTME: Centralizes magic values so protocol and schema code stays literal-free
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Application constants.

/// Protocol-level constants
pub mod protocol {
    /// JSON-RPC protocol version string
    pub const JSONRPC_VERSION: &str = "2.0";

    /// MCP protocol version implemented by this server
    pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

    /// Server name advertised in the initialize response
    pub const SERVER_NAME: &str = "cookbook-mcp-server";

    /// Server version advertised in the initialize response
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Tool name constants
pub mod tools {
    /// List every recipe as a name/description pair
    pub const GET_ALL_RECIPES: &str = "get_all_recipes";

    /// Resolve a recipe name to full detail, with fuzzy fallback
    pub const GET_RECIPE_BY_ID: &str = "get_recipe_by_id";

    /// List the recipes of one category
    pub const GET_RECIPES_BY_CATEGORY: &str = "get_recipes_by_category";

    /// Recommend a balanced menu for a party size
    pub const WHAT_TO_EAT: &str = "what_to_eat";
}

/// JSON field names shared between schemas and argument parsing
pub mod json_fields {
    /// Recipe name argument
    pub const NAME: &str = "name";

    /// Category argument
    pub const CATEGORY: &str = "category";

    /// Party size argument
    pub const PEOPLE_COUNT: &str = "people_count";
}

/// Domain limits
pub mod limits {
    /// Maximum candidates returned by the broad name search
    pub const MAX_NAME_SUGGESTIONS: usize = 5;

    /// Smallest party size accepted by `what_to_eat`
    pub const MIN_PEOPLE_COUNT: u64 = 1;

    /// Largest party size accepted by `what_to_eat`
    pub const MAX_PEOPLE_COUNT: u64 = 10;

    /// Ingredient names listed in the simplified category projection
    pub const MAX_MAIN_INGREDIENTS: usize = 8;
}

/// Category labels with semantic meaning to the menu composer.
///
/// The full category set is derived from the loaded data; these constants
/// only name the labels the balanced-menu algorithm treats specially.
pub mod categories {
    /// Meat dishes
    pub const MEAT: &str = "荤菜";

    /// Aquatic/seafood dishes, pooled with meat for menu balance
    pub const AQUATIC: &str = "水产";

    /// Vegetable dishes
    pub const VEGETABLE: &str = "素菜";

    /// Soups, the first vegetable-pool fallback
    pub const SOUP: &str = "汤";

    /// Desserts, the second vegetable-pool fallback
    pub const DESSERT: &str = "甜品";
}
