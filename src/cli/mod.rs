mod commands;

pub use commands::{Cli, Commands};

use crate::core::request::{args_from_value, Args};
use anyhow::Result;
use serde_json::Value;

/// Merge `--args` JSON and `-p key=value` pairs into one argument object.
///
/// Booleans, `null`, lists and integers that print back exactly as typed
/// keep their JSON type; anything else (floats, oversized IDs, `1e3`,
/// `007`) is taken as the literal string.
pub fn parse_call_args(json: Option<&str>, params: &[String]) -> Result<Args> {
    let mut args = match json {
        Some(text) => args_from_value(serde_json::from_str(text)?)?,
        None => Args::new(),
    };

    for param in params {
        let (key, raw) = param
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE, got '{}'", param))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(anyhow::anyhow!("Empty parameter name in '{}'", param));
        }

        args.insert(key.to_string(), param_value(raw));
    }

    Ok(args)
}

fn param_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Null | Value::Array(_))) => value,
        Ok(Value::Number(n)) if (n.is_i64() || n.is_u64()) && n.to_string() == raw => Value::Number(n),
        _ => Value::String(raw.to_string()),
    }
}
