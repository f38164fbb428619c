// ABOUTME: MCP request processing and protocol routing
// ABOUTME: Validates, routes, and executes MCP protocol requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # MCP Request Processor
//!
//! Validates incoming JSON-RPC requests, routes protocol methods to their
//! handlers, and dispatches tools/call to the registry. Notifications are
//! consumed without a response, per JSON-RPC 2.0.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::constants::protocol::JSONRPC_VERSION;
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{Content, ToolResponse};
use crate::tools::ToolContext;

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP request and return a response.
    ///
    /// Returns `None` for notifications, which must not be answered.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!("MCP request: method={}", request.method);

        if request.method.starts_with("notifications/") {
            debug!("Consumed notification: {}", request.method);
            return None;
        }

        let response = match self.process_request(&request).await {
            Ok(response) => response,
            Err(e) => Self::error_response(&request, &e),
        };

        Some(response)
    }

    async fn process_request(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        Self::validate_request(request)?;

        match request.method.as_str() {
            "initialize" => Ok(ProtocolHandler::handle_initialize(request)),
            "ping" => Ok(ProtocolHandler::handle_ping(request)),
            "tools/list" => Ok(ProtocolHandler::handle_tools_list(
                request,
                &self.resources,
            )),
            "tools/call" => self.handle_tools_call(request).await,
            "prompts/list" => Ok(ProtocolHandler::handle_prompts_list(request)),
            "resources/list" => Ok(ProtocolHandler::handle_resources_list(request)),
            other => {
                warn!("Unknown method: {}", other);
                Ok(JsonRpcResponse::error(
                    request.id.clone(),
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                ))
            }
        }
    }

    /// Validate JSON-RPC request format
    fn validate_request(request: &JsonRpcRequest) -> AppResult<()> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Err(AppError::invalid_input(format!(
                "Invalid JSON-RPC version: got '{}', expected '{}'",
                request.jsonrpc, JSONRPC_VERSION
            )));
        }

        if request.method.is_empty() {
            return Err(AppError::invalid_input("Missing method"));
        }

        Ok(())
    }

    /// Handle tools/call: look the tool up and execute it
    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("Missing parameters for tools/call"))?;

        let tool_name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::invalid_input("Missing tool name in tools/call"))?;

        let Some(tool) = self.resources.registry.get(tool_name) else {
            return Ok(JsonRpcResponse::error(
                request.id.clone(),
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {tool_name}"),
            ));
        };

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let context =
            ToolContext::new(Arc::clone(&self.resources.store)).with_request_id(request.id.clone());

        let outcome = tool.execute(arguments, &context).await?;

        // The text block mirrors the structured payload, pretty-printed for
        // clients that only render text content.
        let text = serde_json::to_string_pretty(&outcome.content)?;
        let tool_response = ToolResponse {
            content: vec![Content::Text { text }],
            is_error: outcome.is_error,
            structured_content: Some(outcome.content),
        };

        Ok(JsonRpcResponse::success(
            request.id.clone(),
            serde_json::to_value(&tool_response)?,
        ))
    }

    /// Map an application error onto the JSON-RPC error space
    fn error_response(request: &JsonRpcRequest, error: &AppError) -> JsonRpcResponse {
        error!(
            "Failed to process MCP request: {} | method={}, id={:?}",
            error, request.method, request.id
        );

        let code = if error.code.is_invalid_params() {
            error_codes::INVALID_PARAMS
        } else {
            error_codes::INTERNAL_ERROR
        };

        JsonRpcResponse::error(request.id.clone(), code, error.to_string())
    }
}
