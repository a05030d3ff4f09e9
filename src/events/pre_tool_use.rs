use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{HookEvent, PermissionDecision};

/// Fired before a tool runs. The hook may allow, deny, ask, or rewrite the
/// tool input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreToolUseInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "toolName")]
    pub tool_name: String,
    #[serde(alias = "toolInput")]
    pub tool_input: Map<String, Value>,
    #[serde(alias = "toolUseId")]
    pub tool_use_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreToolUseSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<PermissionDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
    /// Replacement tool input; the host runs the tool with this instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_input: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl Default for PreToolUseSpecific {
    fn default() -> Self {
        Self {
            hook_event_name: HookEvent::PreToolUse,
            permission_decision: None,
            permission_decision_reason: None,
            updated_input: None,
            additional_context: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreToolUseOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<PreToolUseSpecific>,
}

impl PreToolUseOutput {
    fn specific(specific: PreToolUseSpecific) -> Self {
        Self {
            hook_specific_output: Some(specific),
            ..Self::default()
        }
    }

    fn decision(decision: PermissionDecision, reason: Option<String>) -> Self {
        Self::specific(PreToolUseSpecific {
            permission_decision: Some(decision),
            permission_decision_reason: reason,
            ..PreToolUseSpecific::default()
        })
    }

    /// Lets the tool run without prompting the user.
    pub fn allow() -> Self {
        Self::decision(PermissionDecision::Allow, None)
    }

    /// Blocks the tool call; `reason` is shown to the model.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::decision(PermissionDecision::Deny, Some(reason.into()))
    }

    /// Asks the user to confirm; `reason` is shown to the user.
    pub fn ask(reason: impl Into<String>) -> Self {
        Self::decision(PermissionDecision::Ask, Some(reason.into()))
    }

    /// Allows the tool call with `updated_input` in place of the original.
    pub fn modify(updated_input: Map<String, Value>, reason: Option<String>) -> Self {
        Self::specific(PreToolUseSpecific {
            permission_decision: Some(PermissionDecision::Allow),
            permission_decision_reason: reason,
            updated_input: Some(updated_input),
            ..PreToolUseSpecific::default()
        })
    }

    pub fn add_context(context: impl Into<String>) -> Self {
        Self::specific(PreToolUseSpecific {
            additional_context: Some(context.into()),
            ..PreToolUseSpecific::default()
        })
    }
}
