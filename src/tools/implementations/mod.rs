// ABOUTME: Built-in tool implementations for the cookbook MCP server
// ABOUTME: Registers the four recipe tools with the registry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Built-in Tools
//!
//! The four recipe tools: full listing, name lookup, category listing, and
//! the balanced-menu recommendation.

use std::sync::Arc;

use super::registry::ToolRegistry;

/// Recipe query and recommendation tools
pub mod recipes;

pub use recipes::{
    GetAllRecipesTool, GetRecipeByIdTool, GetRecipesByCategoryTool, WhatToEatTool,
};

/// Register every built-in tool.
///
/// The category tool is constructed against the loaded catalog so its
/// advertised categories match the data.
pub fn register_builtin_tools(registry: &mut ToolRegistry, categories: &[String]) {
    registry.register(Arc::new(GetAllRecipesTool::new()));
    registry.register(Arc::new(GetRecipeByIdTool::new()));
    registry.register(Arc::new(GetRecipesByCategoryTool::new(categories)));
    registry.register(Arc::new(WhatToEatTool::new()));
}
