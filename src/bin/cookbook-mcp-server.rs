// ABOUTME: Binary entry point for the cookbook MCP server
// ABOUTME: Loads recipes, builds shared resources, and runs the stdio transport
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Cookbook MCP Server Binary
//!
//! Starts the recipe MCP server on the stdio transport. Diagnostics go to
//! stderr; stdout carries the JSON-RPC stream.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cookbook_mcp_server::{
    config::ServerConfig, logging, mcp::resources::ServerResources, mcp::transport::StdioTransport,
    store::RecipeStore,
};

#[derive(Parser)]
#[command(name = "cookbook-mcp-server")]
#[command(about = "Cookbook MCP server - Chinese home-cooking recipe tools for LLMs")]
struct Args {
    /// Path to a recipe JSON file (overrides COOKBOOK_RECIPES_PATH and the
    /// bundled dataset)
    #[arg(short, long)]
    recipes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env();
    if let Some(path) = args.recipes {
        config.recipes_path = Some(path);
    }

    info!("Starting cookbook MCP server");
    info!("{}", config.summary());

    let store = match &config.recipes_path {
        Some(path) => RecipeStore::from_path(path)?,
        None => RecipeStore::bundled()?,
    };
    info!(
        "Loaded {} recipes across {} categories: {}",
        store.len(),
        store.categories().len(),
        store.categories().join("、")
    );

    let resources = Arc::new(ServerResources::new(Arc::new(store)));
    let transport = StdioTransport::new(resources);

    tokio::select! {
        result = transport.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
