use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::SessionEndReason;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionEndInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionEndInput {
    pub fn known_reason(&self) -> Option<SessionEndReason> {
        SessionEndReason::classify(&self.reason)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionEndOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
