// ABOUTME: Shared server resource container built once at startup
// ABOUTME: Holds the recipe store and the tool registry behind one Arc
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server Resources
//!
//! One container for everything request handling needs: the read-only
//! recipe store and the registry of built-in tools. Constructed once in the
//! binary and `Arc`-shared into the transport; nothing here mutates after
//! construction.

use std::sync::Arc;

use crate::store::RecipeStore;
use crate::tools::implementations::register_builtin_tools;
use crate::tools::ToolRegistry;

/// Shared, read-only server state
pub struct ServerResources {
    /// The process-lifetime recipe store
    pub store: Arc<RecipeStore>,
    /// Registered tools, built against the store's catalog
    pub registry: ToolRegistry,
}

impl ServerResources {
    /// Build the resource container and register the built-in tools
    #[must_use]
    pub fn new(store: Arc<RecipeStore>) -> Self {
        let mut registry = ToolRegistry::new();
        register_builtin_tools(&mut registry, store.categories());
        Self { store, registry }
    }
}
