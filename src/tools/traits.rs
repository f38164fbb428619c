// ABOUTME: Defines the McpTool trait and ToolCapabilities for the tools architecture
// ABOUTME: Tools implement this trait to be registered and executed via the registry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # MCP Tool Trait and Capabilities
//!
//! The core abstraction for MCP tools: metadata (name, description, input
//! schema), capability flags, and async execution against a context.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolContext;
use super::result::ToolOutcome;

bitflags! {
    /// Capabilities that tools declare for filtering and caching decisions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads recipe data
        const READS_DATA = 0b0000_0001;
        /// Tool output is randomized per call; results must not be cached
        const RANDOMIZED = 0b0000_0010;
    }
}

impl ToolCapabilities {
    /// Check if tool output is randomized (useful for caching decisions)
    #[must_use]
    pub const fn is_randomized(self) -> bool {
        self.contains(Self::RANDOMIZED)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if self.contains(Self::READS_DATA) {
            parts.push("reads_data");
        }
        if self.contains(Self::RANDOMIZED) {
            parts.push("randomized");
        }

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait all MCP tools implement.
///
/// Tools are `Send + Sync` for safe sharing across async tasks. `name()`
/// returns `&'static str` for zero-allocation lookup; `description()`
/// returns `&str` so tools may build their text against runtime data (the
/// category tool interpolates the loaded catalog).
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g. `get_recipe_by_id`)
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &str;

    /// JSON Schema for input parameters, returned in tools/list responses
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for argument-validation failures. Expected domain
    /// outcomes (no match, unknown category) are NOT errors — they come
    /// back as `ToolOutcome::error` payloads the client can act on.
    async fn execute(&self, args: Value, context: &ToolContext) -> AppResult<ToolOutcome>;
}
