// ABOUTME: Environment-driven server configuration
// ABOUTME: Resolves the recipe data source before the store is built
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Server configuration loaded from environment variables.
//!
//! Configuration is environment-only; the CLI may override individual
//! fields after `from_env`.

use std::env;
use std::path::PathBuf;

/// Environment variable naming an external recipe JSON file
pub const RECIPES_PATH_ENV: &str = "COOKBOOK_RECIPES_PATH";

/// Runtime configuration for the server
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Path to an external recipe JSON file; `None` uses the bundled dataset
    pub recipes_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            recipes_path: env::var_os(RECIPES_PATH_ENV).map(PathBuf::from),
        }
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.recipes_path {
            Some(path) => format!("recipe source: {}", path.display()),
            None => "recipe source: bundled dataset".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_names_bundled_source_by_default() {
        let config = ServerConfig::default();
        assert_eq!(config.summary(), "recipe source: bundled dataset");
    }

    #[test]
    fn test_summary_names_override_path() {
        let config = ServerConfig {
            recipes_path: Some(PathBuf::from("/tmp/recipes.json")),
        };
        assert!(config.summary().contains("/tmp/recipes.json"));
    }
}
