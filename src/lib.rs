//! Typed Claude Code hooks.
//!
//! A hook is a process the host spawns once per event: it writes one JSON
//! payload to stdin, reads at most one JSON object from stdout, and reads the
//! exit code. This crate decodes the payload into a typed input, runs a
//! handler, and encodes the handler's typed output.
//!
//! ```no_run
//! use cc_hooks::prelude::*;
//!
//! fn guard(input: PreToolUseInput) -> anyhow::Result<Option<PreToolUseOutput>> {
//!     match input.as_bash_input() {
//!         Some(bash) if bash.command.contains("rm -rf") => {
//!             Ok(Some(PreToolUseOutput::deny("Dangerous command blocked")))
//!         }
//!         _ => Ok(None),
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     Hook::sync(guard).run()
//! }
//! ```

pub mod enums;
pub mod error;
pub mod events;
pub mod logging;
pub mod registry;
pub mod runner;
pub mod tools;

pub use error::HookError;
pub use runner::{Hook, EXIT_FAILURE, EXIT_OK};

pub mod prelude {
    pub use crate::enums::{
        BuiltinToolName, ConfigChangeSource, Decision, HookEvent, NotificationType,
        PermissionDecision, PermissionMode, PreCompactTrigger, SessionEndReason,
        SessionStartSource,
    };
    pub use crate::error::HookError;
    pub use crate::events::*;
    pub use crate::registry::{register, register_tool};
    pub use crate::runner::Hook;
    pub use crate::tools::{
        AnyToolInput, BashInput, BuiltinToolInput, EditInput, GlobInput, GrepInput,
        NotebookEditInput, ReadInput, TaskInput, ToolInput, ToolSchema, WebFetchInput,
        WebSearchInput, WriteInput,
    };
}
