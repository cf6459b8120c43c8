//! Request construction
//!
//! Turns a descriptor plus a JSON argument object into the final URL.
//! Nothing here touches the network, so every rule about which
//! parameters are sent, and how, is checked before a request exists.

use super::error::CallError;
use crate::endpoints::{ArrayStyle, EndpointDescriptor, QueryParam};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument object of one call
pub type Args = Map<String, Value>;

/// One invocation of a named tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    pub tool: String,
    #[serde(default)]
    pub args: Args,
}

impl CallRequest {
    pub fn new(tool: impl Into<String>, args: Args) -> Self {
        Self {
            tool: tool.into(),
            args,
        }
    }
}

/// Coerce a JSON value into an argument map, treating `null` as no arguments
pub fn args_from_value(value: Value) -> Result<Args, CallError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Args::new()),
        other => Err(CallError::Validation(format!(
            "arguments must be a JSON object, got {}",
            other
        ))),
    }
}

/// String form of a scalar argument; `None` means "not provided".
///
/// Empty strings count as absent. Zero and `false` are real values.
fn scalar_text(name: &str, value: &Value) -> Result<Option<String>, CallError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(CallError::invalid_parameter(name, "expected a single value, got a list")),
        Value::Object(_) => Err(CallError::invalid_parameter(name, "objects are not supported")),
    }
}

fn list_items(name: &str, items: &[Value]) -> Result<Vec<String>, CallError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if let Some(text) = scalar_text(name, item)? {
            out.push(text);
        }
    }
    Ok(out)
}

fn required_text(args: &Args, name: &str) -> Result<String, CallError> {
    match args.get(name) {
        Some(value) => scalar_text(name, value)?.ok_or_else(|| CallError::missing_parameter(name)),
        None => Err(CallError::missing_parameter(name)),
    }
}

/// A path value must stay one segment; the URL parser would resolve `.`
/// and `..` (even percent-encoded) and retarget the request
fn path_segment(args: &Args, name: &str) -> Result<String, CallError> {
    let value = required_text(args, name)?;
    if value == "." || value == ".." {
        return Err(CallError::invalid_parameter(name, "dot segments are not allowed"));
    }
    Ok(value)
}

/// Reject the call if any path parameter or required query parameter is
/// missing or empty
pub fn validate(descriptor: &EndpointDescriptor, args: &Args) -> Result<(), CallError> {
    for param in descriptor.path_params {
        path_segment(args, param.name)?;
    }

    for param in descriptor.query_params.iter().filter(|q| q.required) {
        if query_pairs_for(param, args.get(param.name))?.is_empty() {
            return Err(CallError::missing_parameter(param.name));
        }
    }

    Ok(())
}

/// Substitute `{name}` placeholders with percent-encoded argument values
pub fn render_path(descriptor: &EndpointDescriptor, args: &Args) -> Result<String, CallError> {
    let template = descriptor.path_template;
    let mut path = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            CallError::Validation(format!("malformed path template: {}", template))
        })?;

        let name = &after[..end];
        let value = path_segment(args, name)?;
        path.push_str(&urlencoding::encode(&value));
        rest = &after[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

fn query_pairs_for(param: &QueryParam, value: Option<&Value>) -> Result<Vec<(String, String)>, CallError> {
    let value = match value {
        Some(v) => v,
        None => return Ok(Vec::new()),
    };

    let pairs = match value {
        Value::Array(items) => {
            let items = list_items(param.name, items)?;
            if items.is_empty() {
                Vec::new()
            } else {
                match param.array_style {
                    ArrayStyle::CommaJoined => vec![(param.wire_key.to_string(), items.join(","))],
                    ArrayStyle::Repeated => {
                        let key = format!("{}[]", param.wire_key);
                        items.into_iter().map(|item| (key.clone(), item)).collect()
                    }
                }
            }
        }
        other => scalar_text(param.name, other)?
            .map(|text| vec![(param.wire_key.to_string(), text)])
            .unwrap_or_default(),
    };

    Ok(pairs)
}

/// Query pairs in the descriptor's declared order, empty values dropped
pub fn query_pairs(descriptor: &EndpointDescriptor, args: &Args) -> Result<Vec<(String, String)>, CallError> {
    let mut pairs = Vec::new();
    for param in descriptor.query_params {
        pairs.extend(query_pairs_for(param, args.get(param.name))?);
    }
    Ok(pairs)
}

/// Full request URL for `descriptor` against `base_url`
pub fn build_url(base_url: &str, descriptor: &EndpointDescriptor, args: &Args) -> Result<Url, CallError> {
    validate(descriptor, args)?;

    for key in args.keys().filter(|k| !descriptor.accepts(k)) {
        tracing::debug!("Ignoring unknown argument '{}' for tool {}", key, descriptor.name);
    }

    let path = render_path(descriptor, args)?;
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
        .map_err(|e| CallError::Validation(format!("invalid request URL: {}", e)))?;

    let pairs = query_pairs(descriptor, args)?;
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}
