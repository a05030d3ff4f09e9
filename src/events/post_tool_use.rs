use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{Decision, HookEvent};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostToolUseInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "toolName")]
    pub tool_name: String,
    #[serde(alias = "toolInput")]
    pub tool_input: Map<String, Value>,
    #[serde(alias = "toolResponse")]
    pub tool_response: Map<String, Value>,
    #[serde(alias = "toolUseId")]
    pub tool_use_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostToolUseSpecific {
    pub hook_event_name: HookEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    /// Replaces what an MCP tool returned before the model sees it.
    #[serde(
        rename = "updatedMCPToolOutput",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_mcp_tool_output: Option<Map<String, Value>>,
}

impl Default for PostToolUseSpecific {
    fn default() -> Self {
        Self {
            hook_event_name: HookEvent::PostToolUse,
            additional_context: None,
            updated_mcp_tool_output: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostToolUseOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<PostToolUseSpecific>,
}

impl PostToolUseOutput {
    /// Feeds `reason` back to the model as a problem with the tool result.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn add_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: Some(PostToolUseSpecific {
                additional_context: Some(context.into()),
                ..PostToolUseSpecific::default()
            }),
            ..Self::default()
        }
    }

    pub fn update_tool_output(updated_output: Map<String, Value>) -> Self {
        Self {
            hook_specific_output: Some(PostToolUseSpecific {
                updated_mcp_tool_output: Some(updated_output),
                ..PostToolUseSpecific::default()
            }),
            ..Self::default()
        }
    }
}
