use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String replacement in an existing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditInput {
    #[serde(alias = "filePath")]
    pub file_path: String,
    #[serde(alias = "oldString")]
    pub old_string: String,
    #[serde(alias = "newString")]
    pub new_string: String,
    /// Replace every occurrence instead of requiring a unique match.
    #[serde(default, alias = "replaceAll")]
    pub replace_all: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(EditInput, Edit);
