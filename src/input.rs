//! Tool-call events delivered by the host runtime.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing a host event.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Event raised before a tool runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeToolCallEvent {
    /// The tool being invoked (e.g., "exec", "browser").
    pub tool_name: String,

    /// The tool's parameters as raw JSON.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Event raised after a tool ran.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfterToolCallEvent {
    pub tool_name: String,

    #[serde(default)]
    pub params: serde_json::Value,

    /// Error message if the tool failed.
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Per-call context from the host. Informational only; guard state is not
/// scoped by it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookContext {
    #[serde(default)]
    pub agent_id: Option<String>,

    #[serde(default)]
    pub session_key: Option<String>,
}

impl BeforeToolCallEvent {
    pub fn new(tool_name: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            params,
        }
    }

    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extract the shell command this call would run, if any.
    ///
    /// - `exec` / `bash`: `params.command`, else `params.input`.
    /// - `nodes` with `action == "run"`: `params.rawCommand`, else a string
    ///   `params.command`, else an array `params.command` joined by spaces.
    ///
    /// Other tools carry no command. An empty command counts as none.
    pub fn command(&self) -> Option<String> {
        let params = &self.params;
        let command = match self.tool_name.as_str() {
            "exec" | "bash" => string_param(params, "command")
                .or_else(|| string_param(params, "input"))
                .map(String::from),
            "nodes" if params.get("action").and_then(|v| v.as_str()) == Some("run") => {
                string_param(params, "rawCommand")
                    .or_else(|| string_param(params, "command"))
                    .map(String::from)
                    .or_else(|| joined_array_param(params, "command"))
            }
            _ => None,
        };
        command.filter(|c| !c.is_empty())
    }
}

impl AfterToolCallEvent {
    pub fn new(tool_name: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            params,
            error: None,
            duration_ms: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn string_param<'a>(params: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn joined_array_param(params: &serde_json::Value, key: &str) -> Option<String> {
    let items = params.get(key)?.as_array()?;
    let parts: Vec<String> = items
        .iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect();
    Some(parts.join(" "))
}
