use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookEditInput {
    #[serde(alias = "notebookPath")]
    pub notebook_path: String,
    #[serde(default, alias = "cellId", skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    /// Edit mode as sent by the host (`replace`, `insert`, `delete`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(NotebookEditInput, NotebookEdit);
