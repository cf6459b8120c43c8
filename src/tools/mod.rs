//! Tool System - Presents Hubstaff endpoints as callable tools
//!
//! Information Hiding:
//! - Tool execution details hidden behind trait
//! - Parameter schemas derived from endpoint descriptors
//! - Registry implementation details hidden from consumers
//! - Call failures folded into `ToolResult`, never raised

pub mod endpoint;
pub mod registry;

use crate::core::{CallError, CallResult};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Tool parameter schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

/// Tool metadata - describes what the tool does and how to use it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ToolParameter>,
}

impl fmt::Display for ToolMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Result of a tool execution
///
/// `output` is the Hubstaff response body on success and the
/// `{ "error": ... }` object on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub output: Value,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ToolResult {
    pub fn success(output: Value) -> Self {
        Self {
            success: true,
            output,
            error: None,
            status: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            output: json!({ "error": error }),
            error: Some(error),
            status: None,
        }
    }

    pub fn from_error(err: &CallError) -> Self {
        Self {
            success: false,
            output: err.to_json(),
            error: Some(err.to_string()),
            status: err.status(),
        }
    }
}

impl From<CallResult> for ToolResult {
    fn from(result: CallResult) -> Self {
        match result {
            Ok(payload) => ToolResult::success(payload),
            Err(err) => ToolResult::from_error(&err),
        }
    }
}

/// Tool trait - All tools must implement this
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get tool metadata (name, description, parameters)
    fn metadata(&self) -> ToolMetadata;

    /// JSON schema of the arguments object
    fn input_schema(&self) -> Value {
        schema_from_metadata(&self.metadata())
    }

    /// Execute the tool with given arguments
    ///
    /// # Arguments
    /// * `args` - JSON object containing tool arguments
    ///
    /// # Returns
    /// * `ToolResult` - Success or failure with output/error
    async fn execute(&self, args: Value) -> Result<ToolResult>;

    /// Validate arguments before execution (optional)
    fn validate(&self, _args: &Value) -> Result<()> {
        Ok(())
    }
}

/// Build an object schema from a flat parameter list
pub fn schema_from_metadata(metadata: &ToolMetadata) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for param in &metadata.parameters {
        let mut prop = json!({
            "type": param.param_type,
            "description": param.description,
        });
        if param.param_type == "array" {
            prop["items"] = json!({ "type": "string" });
        }
        properties.insert(param.name.clone(), prop);

        if param.required {
            required.push(param.name.clone());
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}
