use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::{ConfigChangeSource, Decision};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigChangeInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub source: String,
    #[serde(default, alias = "filePath")]
    pub file_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigChangeInput {
    pub fn known_source(&self) -> Option<ConfigChangeSource> {
        ConfigChangeSource::classify(&self.source)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigChangeOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConfigChangeOutput {
    /// Rejects the configuration change.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}
