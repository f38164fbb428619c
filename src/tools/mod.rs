// ABOUTME: Tool abstraction for the MCP server
// ABOUTME: Declares the trait, registry, context, result, and built-in tools
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Tools
//!
//! The pluggable tool layer: every MCP tool implements [`McpTool`] and is
//! registered with the [`registry::ToolRegistry`] at startup.

/// Execution context passed to every tool
pub mod context;

/// Built-in recipe tool implementations
pub mod implementations;

/// Tool registration and lookup
pub mod registry;

/// Tool execution outcome types
pub mod result;

/// The `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolContext;
pub use registry::ToolRegistry;
pub use result::ToolOutcome;
pub use traits::{McpTool, ToolCapabilities};
