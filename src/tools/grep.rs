use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrepInput {
    /// Regular expression to search for.
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File filter, e.g. `*.rs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(
        default,
        alias = "ignoreCase",
        skip_serializing_if = "Option::is_none"
    )]
    pub ignore_case: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(GrepInput, Grep);
