use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Delegation of work to a subagent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    pub description: String,
    pub prompt: String,
    #[serde(
        default,
        alias = "subagentType",
        skip_serializing_if = "Option::is_none"
    )]
    pub subagent_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(TaskInput, Task);
