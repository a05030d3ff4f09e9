use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeammateIdleInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub teammate_name: String,
    pub team_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeammateIdleOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
