use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteInput {
    #[serde(alias = "filePath")]
    pub file_path: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(WriteInput, Write);
