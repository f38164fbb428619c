// ABOUTME: MCP protocol schema definitions and tool declarations
// ABOUTME: Type-safe message shapes plus the input schemas of the four recipe tools
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and tool
//! schemas, so protocol compliance does not depend on hand-written JSON.
//!
//! Tool declarations are built against the loaded category catalog: the
//! `get_recipes_by_category` description advertises exactly the categories
//! present in the data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::json_fields::{CATEGORY, NAME, PEOPLE_COUNT};
use crate::constants::limits::{MAX_PEOPLE_COUNT, MIN_PEOPLE_COUNT};
use crate::constants::tools::{
    GET_ALL_RECIPES, GET_RECIPES_BY_CATEGORY, GET_RECIPE_BY_ID, WHAT_TO_EAT,
};

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Human-readable description for LLM consumption
    pub description: String,
    /// JSON schema of the tool arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type (always "object" for tool inputs)
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property schemas by argument name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Names of required arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inclusive lower bound for integer properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
    /// Inclusive upper bound for integer properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
}

impl PropertySchema {
    /// A string property with a description
    #[must_use]
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            property_type: "string".into(),
            description: Some(description.into()),
            minimum: None,
            maximum: None,
        }
    }

    /// A bounded integer property with a description
    #[must_use]
    pub fn bounded_integer(description: impl Into<String>, minimum: u64, maximum: u64) -> Self {
        Self {
            property_type: "integer".into(),
            description: Some(description.into()),
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }
}

/// Content types for MCP tool responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text payload
        text: String,
    },
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Response content blocks
    pub content: Vec<Content>,
    /// Whether the tool reported a domain failure
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// Machine-readable copy of the payload
    #[serde(rename = "structuredContent", skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change after initialize
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// MCP protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identity
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Declared capabilities
    pub capabilities: ServerCapabilities,
    /// Usage hints for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create a new initialize response with current server configuration
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            instructions: Some(
                "This server provides Chinese home-cooking recipe tools. Use \
                 `get_recipe_by_id` to look up one recipe, `get_recipes_by_category` \
                 to browse a category, and `what_to_eat` for a balanced menu \
                 recommendation by party size."
                    .into(),
            ),
        }
    }
}

/// Create the `get_all_recipes` tool schema
#[must_use]
pub fn create_get_all_recipes_tool() -> ToolSchema {
    ToolSchema {
        name: GET_ALL_RECIPES.into(),
        description: "获取所有菜谱列表。返回所有菜谱的名称和简介，适合浏览或搜索菜谱。\
                      注意：返回数据量较大，建议优先使用 get_recipes_by_category 按分类查询。"
            .into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(HashMap::new()),
            required: Some(vec![]),
        },
    }
}

/// Create the `get_recipe_by_id` tool schema
#[must_use]
pub fn create_get_recipe_by_id_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        NAME.into(),
        PropertySchema::string("菜谱名称，如\"红烧肉\"、\"番茄炒蛋\"等，支持模糊匹配"),
    );

    ToolSchema {
        name: GET_RECIPE_BY_ID.into(),
        description: "根据菜谱名称查询详细信息。返回菜谱的完整详情，包括食材清单、\
                      烹饪步骤等。支持模糊匹配菜名。"
            .into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![NAME.into()]),
        },
    }
}

/// Create the `get_recipes_by_category` tool schema.
///
/// The description interpolates the catalog derived from the loaded data,
/// so the advertised categories always match what the filter accepts.
#[must_use]
pub fn create_get_recipes_by_category_tool(categories: &[String]) -> ToolSchema {
    let catalog = categories.join("、");

    let mut properties = HashMap::new();
    properties.insert(
        CATEGORY.into(),
        PropertySchema::string(format!("菜谱分类名称，可选值：{catalog}")),
    );

    ToolSchema {
        name: GET_RECIPES_BY_CATEGORY.into(),
        description: format!("按分类查询菜谱。可用分类：{catalog}。返回该分类下所有菜谱的基本信息。"),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![CATEGORY.into()]),
        },
    }
}

/// Create the `what_to_eat` tool schema
#[must_use]
pub fn create_what_to_eat_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        PEOPLE_COUNT.into(),
        PropertySchema::bounded_integer(
            "用餐人数（1-10人），会根据人数推荐合适数量的菜品",
            MIN_PEOPLE_COUNT,
            MAX_PEOPLE_COUNT,
        ),
    );

    ToolSchema {
        name: WHAT_TO_EAT.into(),
        description: "今天吃什么？根据用餐人数随机推荐一顿饭的菜品组合，包含荤素搭配。\
                      适合不知道吃什么时使用。"
            .into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![PEOPLE_COUNT.into()]),
        },
    }
}
