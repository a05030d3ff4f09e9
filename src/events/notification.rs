use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CommonOutput, Envelope};
use crate::enums::NotificationType;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationInput {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub message: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(alias = "notificationType")]
    pub notification_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationInput {
    pub fn known_notification_type(&self) -> Option<NotificationType> {
        NotificationType::classify(&self.notification_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationOutput {
    #[serde(flatten)]
    pub common: CommonOutput,
}
