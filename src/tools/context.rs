// ABOUTME: Defines ToolContext which provides tools with access to shared resources
// ABOUTME: Replaces scattered parameter passing with one context object
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Tool Execution Context
//!
//! A unified context object for tool execution: the shared recipe store
//! plus request tracing information.

use std::sync::Arc;

use serde_json::Value;

use crate::store::RecipeStore;

/// Context provided to every tool execution.
///
/// `store` is `Arc`-shared: the store is read-only after startup, so clones
/// are cheap reference bumps and tools can execute concurrently.
#[derive(Clone)]
pub struct ToolContext {
    /// The process-lifetime recipe store
    pub store: Arc<RecipeStore>,
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
}

impl ToolContext {
    /// Create a new context
    #[must_use]
    pub const fn new(store: Arc<RecipeStore>) -> Self {
        Self {
            store,
            request_id: None,
        }
    }

    /// Attach the request ID for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<Value>) -> Self {
        self.request_id = request_id;
        self
    }
}
