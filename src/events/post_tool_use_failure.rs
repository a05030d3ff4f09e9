use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::HookEvent;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostToolUseFailureInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "toolName")]
    pub tool_name: String,
    #[serde(alias = "toolInput")]
    pub tool_input: Map<String, Value>,
    #[serde(alias = "toolUseId")]
    pub tool_use_id: String,
    pub error: String,
    /// Set when the user interrupted the tool rather than it failing.
    #[serde(default, alias = "isInterrupt")]
    pub is_interrupt: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostToolUseFailureSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl Default for PostToolUseFailureSpecific {
    fn default() -> Self {
        Self {
            hook_event_name: HookEvent::PostToolUseFailure,
            additional_context: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostToolUseFailureOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<PostToolUseFailureSpecific>,
}

impl PostToolUseFailureOutput {
    pub fn add_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: Some(PostToolUseFailureSpecific {
                additional_context: Some(context.into()),
                ..PostToolUseFailureSpecific::default()
            }),
            ..Self::default()
        }
    }
}
