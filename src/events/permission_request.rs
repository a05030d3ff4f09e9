use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{HookEvent, PermissionDecision};

/// Fired when the host is about to show a permission dialog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PermissionRequestInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "toolName")]
    pub tool_name: String,
    #[serde(alias = "toolInput")]
    pub tool_input: Map<String, Value>,
    #[serde(default, alias = "permissionSuggestions")]
    pub permission_suggestions: Option<Vec<Map<String, Value>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequestDecision {
    pub behavior: PermissionDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_input: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequestSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<PermissionRequestDecision>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequestOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<PermissionRequestSpecific>,
}

impl PermissionRequestOutput {
    fn decide(decision: PermissionRequestDecision) -> Self {
        Self {
            hook_specific_output: Some(PermissionRequestSpecific {
                hook_event_name: HookEvent::PermissionRequest,
                decision: Some(decision),
            }),
            ..Self::default()
        }
    }

    fn behavior(behavior: PermissionDecision, message: Option<String>) -> Self {
        Self::decide(PermissionRequestDecision {
            behavior,
            message,
            updated_input: None,
        })
    }

    pub fn allow(message: Option<String>) -> Self {
        Self::behavior(PermissionDecision::Allow, message)
    }

    pub fn deny(message: Option<String>) -> Self {
        Self::behavior(PermissionDecision::Deny, message)
    }

    pub fn ask(message: Option<String>) -> Self {
        Self::behavior(PermissionDecision::Ask, message)
    }

    /// Approves the request with `updated_input` in place of the original.
    pub fn modify_and_allow(updated_input: Map<String, Value>, message: Option<String>) -> Self {
        Self::decide(PermissionRequestDecision {
            behavior: PermissionDecision::Allow,
            message,
            updated_input: Some(updated_input),
        })
    }
}
