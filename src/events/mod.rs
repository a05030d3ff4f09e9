//! Input and output schemas for every hook event.
//!
//! Inputs are open records: the shared [`Envelope`] is flattened in, the
//! event's own fields are typed, and everything else lands in an `extra` map.
//! Outputs are closed and built through named constructors; unset fields are
//! never serialized and every key uses the host's wire name.

use crate::enums::{BuiltinToolName, HookEvent, PermissionMode};
use crate::registry;
use crate::tools::{
    parse_as, AnyToolInput, BashInput, BuiltinToolInput, EditInput, GlobInput, GrepInput,
    NotebookEditInput, ReadInput, TaskInput, ToolInput, WebFetchInput, WebSearchInput, WriteInput,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

mod config_change;
mod notification;
mod permission_request;
mod post_tool_use;
mod post_tool_use_failure;
mod pre_compact;
mod pre_tool_use;
mod session_end;
mod session_start;
mod stop;
mod subagent_start;
mod subagent_stop;
mod task_completed;
mod teammate_idle;
mod user_prompt_submit;

pub use config_change::{ConfigChangeInput, ConfigChangeOutput};
pub use notification::{NotificationInput, NotificationOutput};
pub use permission_request::{
    PermissionRequestDecision, PermissionRequestInput, PermissionRequestOutput,
    PermissionRequestSpecific,
};
pub use post_tool_use::{PostToolUseInput, PostToolUseOutput, PostToolUseSpecific};
pub use post_tool_use_failure::{
    PostToolUseFailureInput, PostToolUseFailureOutput, PostToolUseFailureSpecific,
};
pub use pre_compact::{PreCompactInput, PreCompactOutput};
pub use pre_tool_use::{PreToolUseInput, PreToolUseOutput, PreToolUseSpecific};
pub use session_end::{SessionEndInput, SessionEndOutput};
pub use session_start::{SessionStartInput, SessionStartOutput, SessionStartSpecific};
pub use stop::{StopInput, StopOutput};
pub use subagent_start::{SubagentStartInput, SubagentStartOutput};
pub use subagent_stop::{SubagentStopInput, SubagentStopOutput};
pub use task_completed::{TaskCompletedInput, TaskCompletedOutput};
pub use teammate_idle::{TeammateIdleInput, TeammateIdleOutput};
pub use user_prompt_submit::{
    UserPromptSubmitInput, UserPromptSubmitOutput, UserPromptSubmitSpecific,
};

/// Fields common to every event input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(alias = "sessionId")]
    pub session_id: String,
    #[serde(alias = "transcriptPath")]
    pub transcript_path: String,
    pub cwd: String,
    /// Kept as a string; see [`Envelope::known_permission_mode`].
    #[serde(alias = "permissionMode")]
    pub permission_mode: String,
    /// Always the decoding schema's event, whatever the payload said.
    #[serde(default, alias = "hookEventName")]
    pub hook_event_name: String,
}

impl Envelope {
    pub fn known_permission_mode(&self) -> Option<PermissionMode> {
        PermissionMode::classify(&self.permission_mode)
    }
}

/// Optional control fields every output can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonOutput {
    /// `false` ends the session.
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
}

/// A typed event input.
pub trait EventInput: DeserializeOwned + fmt::Debug + 'static {
    const EVENT: HookEvent;
    type Output: EventOutput;

    fn envelope(&self) -> &Envelope;
    fn envelope_mut(&mut self) -> &mut Envelope;

    /// Top-level keys the schema does not declare, values untouched.
    fn extra(&self) -> &Map<String, Value>;

    /// Decodes a raw payload. The envelope's event name is pinned to
    /// [`Self::EVENT`].
    fn from_payload(payload: Value) -> serde_json::Result<Self> {
        let mut input: Self = serde_json::from_value(payload)?;
        input.envelope_mut().hook_event_name = Self::EVENT.as_str().to_string();
        Ok(input)
    }
}

/// A typed event output.
pub trait EventOutput: Serialize + Default + fmt::Debug {
    fn common(&self) -> &CommonOutput;
    fn common_mut(&mut self) -> &mut CommonOutput;

    /// Ends the session with `reason`.
    fn stop_session(reason: impl Into<String>) -> Self {
        let mut output = Self::default();
        let common = output.common_mut();
        common.continue_session = Some(false);
        common.stop_reason = Some(reason.into());
        output
    }

    fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.common_mut().system_message = Some(message.into());
        self
    }

    /// Hides the hook's stdout from the transcript.
    fn with_suppressed_output(mut self) -> Self {
        self.common_mut().suppress_output = Some(true);
        self
    }
}

/// Something a hook can be declared over: one event's input, or
/// [`HookInput`] for every event.
pub trait HookPayload: Sized + 'static {
    type Output: Serialize;

    /// The single event this payload type accepts, or `None` for any.
    fn declared_event() -> Option<HookEvent>;

    fn decode(event: HookEvent, payload: Value) -> serde_json::Result<Self>;
}

/// Inputs of events that carry a tool invocation.
pub trait ToolEvent {
    fn tool_name(&self) -> &str;
    fn tool_input(&self) -> &Map<String, Value>;

    fn builtin_tool(&self) -> Option<BuiltinToolName> {
        BuiltinToolName::classify(self.tool_name())
    }

    /// Reads the tool input as `T` regardless of the tool name.
    fn tool_input_as<T: ToolInput>(&self) -> Option<T> {
        parse_as(self.tool_input())
    }

    /// Reads the tool input as `T` only when the tool name is `T`'s tool.
    fn builtin_input<T: BuiltinToolInput>(&self) -> Option<T> {
        if self.tool_name() != T::TOOL.as_str() {
            return None;
        }
        self.tool_input_as()
    }

    /// Parses the tool input with whatever schema is registered for the
    /// tool name.
    fn registered_tool_input(&self) -> Option<Box<dyn AnyToolInput>> {
        registry::lookup(self.tool_name())?.parse(self.tool_input())
    }

    fn as_bash_input(&self) -> Option<BashInput> {
        self.builtin_input()
    }

    fn as_write_input(&self) -> Option<WriteInput> {
        self.builtin_input()
    }

    fn as_edit_input(&self) -> Option<EditInput> {
        self.builtin_input()
    }

    fn as_read_input(&self) -> Option<ReadInput> {
        self.builtin_input()
    }

    fn as_glob_input(&self) -> Option<GlobInput> {
        self.builtin_input()
    }

    fn as_grep_input(&self) -> Option<GrepInput> {
        self.builtin_input()
    }

    fn as_web_fetch_input(&self) -> Option<WebFetchInput> {
        self.builtin_input()
    }

    fn as_web_search_input(&self) -> Option<WebSearchInput> {
        self.builtin_input()
    }

    fn as_task_input(&self) -> Option<TaskInput> {
        self.builtin_input()
    }

    fn as_notebook_edit_input(&self) -> Option<NotebookEditInput> {
        self.builtin_input()
    }
}

macro_rules! tool_event {
    ($($input:ident),+) => {
        $(
            impl ToolEvent for $input {
                fn tool_name(&self) -> &str {
                    &self.tool_name
                }

                fn tool_input(&self) -> &Map<String, Value> {
                    &self.tool_input
                }
            }
        )+
    };
}

tool_event!(
    PreToolUseInput,
    PostToolUseInput,
    PostToolUseFailureInput,
    PermissionRequestInput
);

/// The dispatch table: one line per supported event.
macro_rules! hook_events {
    ($($event:ident => $input:ident, $output:ident;)+) => {
        /// A decoded input of any supported event.
        #[derive(Debug, Clone, PartialEq)]
        pub enum HookInput {
            $($event($input),)+
        }

        /// An output of any supported event. Serializes as the inner output.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum HookOutput {
            $($event($output),)+
        }

        impl HookInput {
            /// Decodes `payload` with the input schema registered for `event`.
            pub fn decode(event: HookEvent, payload: Value) -> serde_json::Result<Self> {
                match event {
                    $(HookEvent::$event => $input::from_payload(payload).map(HookInput::$event),)+
                }
            }

            pub fn event(&self) -> HookEvent {
                match self {
                    $(HookInput::$event(_) => HookEvent::$event,)+
                }
            }

            pub fn envelope(&self) -> &Envelope {
                match self {
                    $(HookInput::$event(input) => &input.envelope,)+
                }
            }

            pub fn extra(&self) -> &Map<String, Value> {
                match self {
                    $(HookInput::$event(input) => &input.extra,)+
                }
            }
        }

        impl HookOutput {
            pub fn event(&self) -> HookEvent {
                match self {
                    $(HookOutput::$event(_) => HookEvent::$event,)+
                }
            }
        }

        impl HookPayload for HookInput {
            type Output = HookOutput;

            fn declared_event() -> Option<HookEvent> {
                None
            }

            fn decode(event: HookEvent, payload: Value) -> serde_json::Result<Self> {
                HookInput::decode(event, payload)
            }
        }

        $(
            impl EventInput for $input {
                const EVENT: HookEvent = HookEvent::$event;
                type Output = $output;

                fn envelope(&self) -> &Envelope {
                    &self.envelope
                }

                fn envelope_mut(&mut self) -> &mut Envelope {
                    &mut self.envelope
                }

                fn extra(&self) -> &Map<String, Value> {
                    &self.extra
                }
            }

            impl HookPayload for $input {
                type Output = $output;

                fn declared_event() -> Option<HookEvent> {
                    Some(HookEvent::$event)
                }

                fn decode(_event: HookEvent, payload: Value) -> serde_json::Result<Self> {
                    Self::from_payload(payload)
                }
            }

            impl EventOutput for $output {
                fn common(&self) -> &CommonOutput {
                    &self.common
                }

                fn common_mut(&mut self) -> &mut CommonOutput {
                    &mut self.common
                }
            }

            impl $output {
                /// The neutral response; serializes to `{}`.
                pub fn ok() -> Self {
                    Self::default()
                }
            }

            impl From<$output> for HookOutput {
                fn from(output: $output) -> Self {
                    HookOutput::$event(output)
                }
            }
        )+
    };
}

hook_events! {
    SessionStart => SessionStartInput, SessionStartOutput;
    SessionEnd => SessionEndInput, SessionEndOutput;
    UserPromptSubmit => UserPromptSubmitInput, UserPromptSubmitOutput;
    PreToolUse => PreToolUseInput, PreToolUseOutput;
    PostToolUse => PostToolUseInput, PostToolUseOutput;
    PostToolUseFailure => PostToolUseFailureInput, PostToolUseFailureOutput;
    PermissionRequest => PermissionRequestInput, PermissionRequestOutput;
    Notification => NotificationInput, NotificationOutput;
    SubagentStart => SubagentStartInput, SubagentStartOutput;
    SubagentStop => SubagentStopInput, SubagentStopOutput;
    Stop => StopInput, StopOutput;
    TeammateIdle => TeammateIdleInput, TeammateIdleOutput;
    TaskCompleted => TaskCompletedInput, TaskCompletedOutput;
    ConfigChange => ConfigChangeInput, ConfigChangeOutput;
    PreCompact => PreCompactInput, PreCompactOutput;
}
