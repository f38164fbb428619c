// ABOUTME: Newline-delimited JSON-RPC stdio transport for MCP communication
// ABOUTME: Reads requests from stdin, writes responses to stdout, logs to stderr
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Stdio Transport
//!
//! One JSON-RPC message per line on stdin, one response per line on stdout.
//! Invalid JSON is answered with a -32700 parse error; notifications
//! produce no output. The loop ends at EOF.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::jsonrpc::JsonRpcRequest;
use crate::mcp::processor::McpRequestProcessor;
use crate::mcp::resources::ServerResources;

/// Handles stdio transport for MCP communication
pub struct StdioTransport {
    resources: Arc<ServerResources>,
}

impl StdioTransport {
    /// Creates a new stdio transport instance
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Create a JSON-RPC parse error response
    fn parse_error_response() -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32700,
                "message": "Parse error"
            },
            "id": null
        })
    }

    /// Process a single decoded message and write any response to stdout
    async fn process_message(message: serde_json::Value, resources: Arc<ServerResources>) {
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => {
                let processor = McpRequestProcessor::new(resources);
                if let Some(response) = processor.handle_request(request).await {
                    if let Ok(json) = serde_json::to_string(&response) {
                        println!("{json}");
                    }
                }
            }
            Err(e) => {
                warn!("Failed to parse MCP request: {}", e);
                println!("{}", Self::parse_error_response());
            }
        }
    }

    /// Run the stdio transport until stdin reaches EOF
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("stdin read failed: {e}")))?
        {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<serde_json::Value>(&line) {
                Ok(message) => {
                    Self::process_message(message, Arc::clone(&self.resources)).await;
                }
                Err(e) => {
                    warn!("Invalid JSON-RPC message: {}", e);
                    println!("{}", Self::parse_error_response());
                }
            }
        }

        info!("stdin closed, stdio transport shutting down");
        Ok(())
    }
}
