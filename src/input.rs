//! Input parsing for the PreToolUse hook payload
//!
//! Parses the JSON object the harness writes to stdin.

use serde::Deserialize;

use crate::error::Result;

/// Main input structure from the hook harness
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Edit")
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific input parameters
    #[serde(default)]
    pub tool_input: ToolInput,
}

/// Tool-specific input
///
/// Only the `command` string matters to the guard. Other fields, a
/// non-string `command`, or a `tool_input` that is not an object at all are
/// accepted and ignored.
#[derive(Debug, Clone, Default)]
pub struct ToolInput {
    /// Shell command text, when present and a string
    pub command: Option<String>,
}

impl<'de> Deserialize<'de> for ToolInput {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let command = value
            .as_object()
            .and_then(|obj| obj.get("command"))
            .and_then(|v| v.as_str())
            .map(String::from);

        Ok(ToolInput { command })
    }
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The command to inspect; empty when absent
    pub fn command(&self) -> &str {
        self.tool_input.command.as_deref().unwrap_or("")
    }
}
