use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskCompletedInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(alias = "taskId")]
    pub task_id: String,
    #[serde(alias = "taskSubject")]
    pub task_subject: String,
    #[serde(default, alias = "taskDescription")]
    pub task_description: Option<String>,
    /// Unset when the task was not run by a team.
    #[serde(default, alias = "teammateName")]
    pub teammate_name: Option<String>,
    #[serde(default, alias = "teamName")]
    pub team_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskCompletedOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
