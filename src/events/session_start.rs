use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{HookEvent, SessionStartSource};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionStartInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub source: String,
    pub model: String,
    #[serde(default, alias = "agentType")]
    pub agent_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionStartInput {
    pub fn known_source(&self) -> Option<SessionStartSource> {
        SessionStartSource::classify(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl Default for SessionStartSpecific {
    fn default() -> Self {
        Self {
            hook_event_name: HookEvent::SessionStart,
            additional_context: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStartOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<SessionStartSpecific>,
}

impl SessionStartOutput {
    /// Injects `context` into the new session.
    pub fn add_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: Some(SessionStartSpecific {
                additional_context: Some(context.into()),
                ..SessionStartSpecific::default()
            }),
            ..Self::default()
        }
    }
}
