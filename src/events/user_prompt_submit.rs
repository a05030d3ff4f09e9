use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{Decision, HookEvent};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPromptSubmitInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub prompt: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPromptSubmitSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl Default for UserPromptSubmitSpecific {
    fn default() -> Self {
        Self {
            hook_event_name: HookEvent::UserPromptSubmit,
            additional_context: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPromptSubmitOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<UserPromptSubmitSpecific>,
}

impl UserPromptSubmitOutput {
    /// Rejects the prompt before the model sees it.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Appends `context` to what the model sees alongside the prompt.
    pub fn add_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: Some(UserPromptSubmitSpecific {
                additional_context: Some(context.into()),
                ..UserPromptSubmitSpecific::default()
            }),
            ..Self::default()
        }
    }
}
