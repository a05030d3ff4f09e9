use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BashInput {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(
        default,
        alias = "runInBackground",
        skip_serializing_if = "Option::is_none"
    )]
    pub run_in_background: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(BashInput, Bash);
