use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::Decision;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "stopHookActive")]
    pub stop_hook_active: bool,
    #[serde(default, alias = "lastAssistantMessage")]
    pub last_assistant_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StopOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StopOutput {
    /// Prevents the model from stopping; `reason` is fed back as the next
    /// instruction.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::test_support::payload;
    use crate::events::EventInput;
    use serde_json::json;

    #[test]
    fn test_last_assistant_message_is_optional() {
        let input = StopInput::from_payload(payload("Stop", json!({"stop_hook_active": false})))
            .unwrap();
        assert!(!input.stop_hook_active);
        assert_eq!(input.last_assistant_message, None);
    }
}
