use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubagentStartInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "agentId")]
    pub agent_id: String,
    #[serde(alias = "agentType")]
    pub agent_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubagentStartOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
