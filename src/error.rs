use crate::enums::HookEvent;
use thiserror::Error;

/// Everything that makes a hook invocation exit with code 2.
#[derive(Debug, Error)]
pub enum HookError {
    /// The payload names an event this crate has no schema for.
    #[error("Unsupported hook event: {0}")]
    UnsupportedEvent(String),

    #[error("input does not name a hook event")]
    MissingEvent,

    /// The payload is for a different event than the hook was declared for.
    #[error("hook declared for {expected} received a {received} payload")]
    EventMismatch {
        expected: HookEvent,
        received: HookEvent,
    },

    #[error("invalid JSON input: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("invalid {event} input: {source}")]
    Validation {
        event: HookEvent,
        source: serde_json::Error,
    },

    #[error("{error:#}")]
    Handler {
        event: HookEvent,
        error: anyhow::Error,
    },

    /// The handler panicked instead of returning.
    #[error("handler panicked: {message}")]
    Panic { event: HookEvent, message: String },

    #[error("failed to serialize {event} output: {source}")]
    Encode {
        event: HookEvent,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Failure kind reported in the diagnostic line.
    pub fn kind(&self) -> &'static str {
        match self {
            HookError::UnsupportedEvent(_) => "UnsupportedEvent",
            HookError::EventMismatch { .. } => "EventMismatch",
            HookError::MissingEvent | HookError::InvalidJson(_) | HookError::Validation { .. } => {
                "ValidationError"
            }
            HookError::Handler { .. } | HookError::Panic { .. } => "HandlerError",
            HookError::Encode { .. } => "EncodeError",
            HookError::Io(_) => "IoError",
        }
    }

    /// The event the failure belongs to, when it got far enough to know.
    pub fn event_name(&self) -> Option<&str> {
        match self {
            HookError::UnsupportedEvent(name) => Some(name),
            HookError::EventMismatch { received, .. } => Some(received.as_str()),
            HookError::Validation { event, .. }
            | HookError::Handler { event, .. }
            | HookError::Panic { event, .. }
            | HookError::Encode { event, .. } => Some(event.as_str()),
            HookError::MissingEvent | HookError::InvalidJson(_) | HookError::Io(_) => None,
        }
    }
}
