use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSearchInput {
    pub query: String,
    /// Only return results newer than this many days.
    #[serde(
        default,
        alias = "recencyDays",
        skip_serializing_if = "Option::is_none"
    )]
    pub recency_days: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

builtin_tool!(WebSearchInput, WebSearch);
