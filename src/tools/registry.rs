//! Tool Registry
//!
//! Information Hiding:
//! - Tool storage and lookup implementation hidden
//! - Registration order preserved for listing
//! - Registration and discovery mechanisms abstracted

use super::endpoint::EndpointTool;
use super::{Tool, ToolMetadata};
use crate::core::HubstaffClient;
use crate::endpoints::catalog;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Every catalog endpoint bound to `client`
    pub fn hubstaff(client: HubstaffClient) -> Self {
        let mut registry = Self::new();
        for descriptor in catalog::all() {
            registry.register(Arc::new(EndpointTool::new(descriptor, client.clone())));
        }
        registry
    }

    /// Register a new tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.metadata().name;
        tracing::debug!("Registering tool: {}", name);
        if self.tools.insert(name.clone(), tool).is_none() {
            self.order.push(name);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get all tool names in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Get all tool metadata
    pub fn list_tools(&self) -> Vec<ToolMetadata> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.metadata())
            .collect()
    }

    /// Tool definitions as a tool-calling host expects them
    pub fn definitions(&self) -> Vec<Value> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| {
                let metadata = tool.metadata();
                json!({
                    "name": metadata.name,
                    "description": metadata.description,
                    "inputSchema": tool.input_schema(),
                })
            })
            .collect()
    }

    /// Plain-text catalogue of every tool and its parameters
    pub fn tools_description(&self) -> String {
        self.list_tools()
            .iter()
            .map(|metadata| {
                let params = metadata
                    .parameters
                    .iter()
                    .map(|p| {
                        let required = if p.required { "required" } else { "optional" };
                        format!("  - {} ({}): {} [{}]", p.name, p.param_type, p.description, required)
                    })
                    .collect::<Vec<_>>()
                    .join("\n");

                format!(
                    "Tool: {}\nDescription: {}\nParameters:\n{}",
                    metadata.name, metadata.description, params
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
