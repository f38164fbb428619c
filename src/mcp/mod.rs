// ABOUTME: Model Context Protocol server implementation
// ABOUTME: Schema types, protocol handlers, request routing, and the stdio transport
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # MCP Protocol
//!
//! The protocol layer around the recipe tools: message schemas, the
//! core-method handlers, request routing, and the newline-delimited stdio
//! transport.

/// Request validation, routing, and tool dispatch
pub mod processor;

/// Handlers for the core protocol methods (initialize, ping, listings)
pub mod protocol;

/// Shared server resource container
pub mod resources;

/// Protocol schema types and tool declarations
pub mod schema;

/// Newline-delimited JSON-RPC transport over stdin/stdout
pub mod transport;
