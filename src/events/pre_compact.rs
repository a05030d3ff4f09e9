use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::PreCompactTrigger;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreCompactInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub trigger: String,
    /// Empty for automatic compaction.
    #[serde(alias = "customInstructions")]
    pub custom_instructions: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreCompactInput {
    pub fn known_trigger(&self) -> Option<PreCompactTrigger> {
        PreCompactTrigger::classify(&self.trigger)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreCompactOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
