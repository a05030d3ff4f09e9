use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::Decision;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubagentStopInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// True when the subagent is already continuing because of a stop hook.
    #[serde(alias = "stopHookActive")]
    pub stop_hook_active: bool,
    #[serde(alias = "agentId")]
    pub agent_id: String,
    #[serde(alias = "agentType")]
    pub agent_type: String,
    #[serde(alias = "agentTranscriptPath")]
    pub agent_transcript_path: String,
    #[serde(default, alias = "lastAssistantMessage")]
    pub last_assistant_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubagentStopOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SubagentStopOutput {
    /// Keeps the subagent running; `reason` tells it what is left to do.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}
