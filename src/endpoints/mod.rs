//! Endpoint Descriptors
//!
//! Information Hiding:
//! - Each Hubstaff operation is plain data, not code
//! - Wire-format quirks (bracketed keys, list encoding) live on the parameter
//! - Tool schemas are derived from the descriptor so the two cannot drift

pub mod catalog;

use crate::tools::{ToolMetadata, ToolParameter};
use serde_json::{json, Map, Value};

/// JSON-schema type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    StringArray,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::StringArray => "array",
        }
    }
}

/// How a list-valued argument is put on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    /// `user_ids=1,2,3`
    CommaJoined,
    /// `user_ids[]=1&user_ids[]=2&user_ids[]=3`
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParam {
    pub name: &'static str,
    pub description: &'static str,
}

impl PathParam {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Argument name as seen by tool callers
    pub name: &'static str,
    /// Key sent in the query string
    pub wire_key: &'static str,
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
    pub array_style: ArrayStyle,
}

impl QueryParam {
    pub const fn new(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            wire_key: name,
            param_type,
            description,
            required: false,
            array_style: ArrayStyle::CommaJoined,
        }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::String, description)
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Integer, description)
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Boolean, description)
    }

    pub const fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::StringArray, description)
    }

    pub const fn wire(mut self, wire_key: &'static str) -> Self {
        self.wire_key = wire_key;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn repeated(mut self) -> Self {
        self.array_style = ArrayStyle::Repeated;
        self
    }
}

/// Static definition of one Hubstaff GET operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Path relative to the API base, with `{name}` placeholders
    pub path_template: &'static str,
    pub path_params: &'static [PathParam],
    /// Appended in this order
    pub query_params: &'static [QueryParam],
}

impl EndpointDescriptor {
    pub fn method(&self) -> reqwest::Method {
        reqwest::Method::GET
    }

    /// Names of every argument that must be present, path params first
    pub fn required_names(&self) -> Vec<&'static str> {
        self.path_params
            .iter()
            .map(|p| p.name)
            .chain(self.query_params.iter().filter(|q| q.required).map(|q| q.name))
            .collect()
    }

    pub fn query_param(&self, name: &str) -> Option<&QueryParam> {
        self.query_params.iter().find(|q| q.name == name)
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.path_params.iter().any(|p| p.name == name) || self.query_param(name).is_some()
    }

    /// Placeholder names in template order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path_template;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Parameter list for tool registration
    pub fn metadata(&self) -> ToolMetadata {
        let path = self.path_params.iter().map(|p| ToolParameter {
            name: p.name.to_string(),
            param_type: ParamType::String.as_str().to_string(),
            description: p.description.to_string(),
            required: true,
        });

        let query = self.query_params.iter().map(|q| ToolParameter {
            name: q.name.to_string(),
            param_type: q.param_type.as_str().to_string(),
            description: q.description.to_string(),
            required: q.required,
        });

        ToolMetadata {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters: path.chain(query).collect(),
        }
    }

    /// JSON schema of the tool's arguments object
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();

        for p in self.path_params {
            properties.insert(
                p.name.to_string(),
                json!({ "type": "string", "description": p.description }),
            );
        }

        for q in self.query_params {
            let mut prop = json!({
                "type": q.param_type.as_str(),
                "description": q.description,
            });
            if q.param_type == ParamType::StringArray {
                prop["items"] = json!({ "type": "string" });
            }
            properties.insert(q.name.to_string(), prop);
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_names(),
        })
    }
}
