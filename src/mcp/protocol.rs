// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Handles initialize, ping, tools/list, prompts/list, and resources/list
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # MCP Protocol Handlers
//!
//! Core protocol message handling for initialization and listings. Tool
//! execution lives in the processor; these handlers are pure functions of
//! the request and the shared resources.

use serde_json::Value;

use crate::constants::protocol::{MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::InitializeResponse;

/// MCP protocol handlers
pub struct ProtocolHandler;

/// Default ID for responses to requests that carried none
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: &JsonRpcRequest) -> JsonRpcResponse {
        let init_response = InitializeResponse::new(
            MCP_PROTOCOL_VERSION.into(),
            SERVER_NAME.into(),
            SERVER_VERSION.into(),
        );

        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        match serde_json::to_value(&init_response) {
            Ok(result) => JsonRpcResponse::success(Some(request_id), result),
            Err(_) => JsonRpcResponse::error(
                Some(request_id),
                error_codes::INTERNAL_ERROR,
                "Internal error",
            ),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({}))
    }

    /// Handle tools/list request.
    ///
    /// Tool schemas come from the registry, so the listing always matches
    /// what tools/call can execute.
    #[must_use]
    pub fn handle_tools_list(
        request: &JsonRpcRequest,
        resources: &ServerResources,
    ) -> JsonRpcResponse {
        let tools = resources.registry.schemas();
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({ "tools": tools }))
    }

    /// Handle prompts/list request (this server defines none)
    #[must_use]
    pub fn handle_prompts_list(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({ "prompts": [] }))
    }

    /// Handle resources/list request (this server defines none)
    #[must_use]
    pub fn handle_resources_list(request: &JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.clone().unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), serde_json::json!({ "resources": [] }))
    }
}
