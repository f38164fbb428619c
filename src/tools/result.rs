// ABOUTME: Defines ToolOutcome, the value returned by tool execution
// ABOUTME: Distinguishes success payloads from recoverable domain failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Tool Outcome
//!
//! The bridge between tool implementations and the MCP response format.
//! A domain failure (unknown category, nothing found) is an outcome with
//! `is_error: true`, not an `Err` — the request itself succeeded.

use serde::Serialize;
use serde_json::Value;

/// Result of a tool execution
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// The payload to return to the client
    pub content: Value,
    /// Whether this payload describes a domain failure
    pub is_error: bool,
}

impl ToolOutcome {
    /// Create a successful outcome
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create a domain-failure outcome
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Create a successful outcome from a serializable value
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the value cannot be converted
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }
}

impl Default for ToolOutcome {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
