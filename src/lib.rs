// ABOUTME: Main library entry point for the cookbook MCP server
// ABOUTME: Exposes recipe lookup and menu recommendation tools over the MCP protocol
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cookbook MCP Server
//!
//! A Model Context Protocol (MCP) server exposing a fixed collection of
//! Chinese home-cooking recipes to LLM clients. The server answers four
//! tools over a JSON-RPC 2.0 stdio transport:
//!
//! - `get_all_recipes`: browse every recipe as a name/description list
//! - `get_recipe_by_id`: resolve a free-text name to a full recipe, with
//!   fuzzy fallback and bounded suggestions
//! - `get_recipes_by_category`: list one category, validated against the
//!   catalog derived from the loaded data
//! - `what_to_eat`: a randomized, meat/vegetable-balanced menu for a party
//!
//! ## Architecture
//!
//! - **Store**: recipes loaded once at startup, read-only for the process
//!   lifetime, shared behind `Arc`
//! - **Core**: name resolution, category filtering, and menu composition are
//!   pure functions over the store
//! - **MCP**: protocol schema, request routing, and the stdio transport
//! - **Tools**: the registry and the four tool implementations bridging the
//!   core to the protocol

/// Category filtering over the recipe store
pub mod category;

/// Environment-driven server configuration
pub mod config;

/// Application constants: protocol strings, tool names, domain limits
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// JSON-RPC 2.0 request, response, and error types
pub mod jsonrpc;

/// Structured logging setup (stderr only; stdout carries the transport)
pub mod logging;

/// Model Context Protocol implementation: schema, routing, stdio transport
pub mod mcp;

/// Party-size menu planning and randomized dish selection
pub mod menu;

/// Recipe records and their reduced wire projections
pub mod models;

/// Multi-tier recipe name resolution
pub mod resolver;

/// The immutable, process-lifetime recipe store
pub mod store;

/// Tool trait, registry, and the built-in tool implementations
pub mod tools;
