use serde::{Serialize, Serializer};
use std::fmt;

/// Declares a closed set of wire strings.
///
/// `classify` maps an arbitrary string onto the set and returns `None` for
/// anything else; the host is free to send values this crate has never seen.
macro_rules! known_values {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every known value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The exact string used on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Returns the known value matching `value`, or `None` if it is
            /// outside the set.
            pub fn classify(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

known_values! {
    /// Hook events the host can fire.
    HookEvent {
        SessionStart => "SessionStart",
        SessionEnd => "SessionEnd",
        UserPromptSubmit => "UserPromptSubmit",
        PreToolUse => "PreToolUse",
        PostToolUse => "PostToolUse",
        PostToolUseFailure => "PostToolUseFailure",
        PermissionRequest => "PermissionRequest",
        Notification => "Notification",
        SubagentStart => "SubagentStart",
        SubagentStop => "SubagentStop",
        Stop => "Stop",
        TeammateIdle => "TeammateIdle",
        TaskCompleted => "TaskCompleted",
        ConfigChange => "ConfigChange",
        PreCompact => "PreCompact",
    }
}

known_values! {
    /// Permission outcome for a tool call.
    PermissionDecision {
        Allow => "allow",
        Deny => "deny",
        Ask => "ask",
    }
}

known_values! {
    /// Top-level `decision` value on outputs that can veto.
    Decision {
        Block => "block",
    }
}

known_values! {
    PreCompactTrigger {
        Auto => "auto",
        Manual => "manual",
    }
}

known_values! {
    SessionStartSource {
        Startup => "startup",
        Resume => "resume",
        Clear => "clear",
        Compact => "compact",
    }
}

known_values! {
    SessionEndReason {
        Clear => "clear",
        Logout => "logout",
        PromptInputExit => "prompt_input_exit",
        Other => "other",
    }
}

known_values! {
    /// Permission mode reported in every envelope.
    PermissionMode {
        Default => "default",
        Plan => "plan",
        AcceptEdits => "acceptEdits",
        DontAsk => "dontAsk",
        BypassPermissions => "bypassPermissions",
    }
}

known_values! {
    /// Tools whose input has a typed schema out of the box.
    BuiltinToolName {
        Bash => "Bash",
        Write => "Write",
        Edit => "Edit",
        Read => "Read",
        Glob => "Glob",
        Grep => "Grep",
        WebFetch => "WebFetch",
        WebSearch => "WebSearch",
        Task => "Task",
        NotebookEdit => "NotebookEdit",
    }
}

known_values! {
    NotificationType {
        Info => "info",
        Warning => "warning",
        Error => "error",
        Success => "success",
    }
}

known_values! {
    ConfigChangeSource {
        User => "user",
        System => "system",
        Project => "project",
    }
}
