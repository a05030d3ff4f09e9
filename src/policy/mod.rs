//! The bundled policy hook: one handler for every event, driven by
//! `.cc-hooks.yaml`.

pub mod config;

use anyhow::{Context, Result};
use cc_hooks::enums::BuiltinToolName;
use cc_hooks::events::{
    HookInput, HookOutput, PermissionRequestOutput, PreToolUseOutput, SessionStartOutput,
    StopOutput, SubagentStopOutput, ToolEvent, UserPromptSubmitOutput,
};
use glob::Pattern;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use config::PolicyConfig;

pub fn handle(input: HookInput) -> Result<Option<HookOutput>> {
    let policy = Policy::load(Path::new(&input.envelope().cwd))?;
    policy.evaluate(input)
}

#[derive(Debug)]
pub struct Policy {
    config: PolicyConfig,
    protected: Vec<Pattern>,
}

impl Policy {
    pub fn new(config: PolicyConfig) -> Result<Self> {
        let protected = config
            .protected_paths
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid protected path glob: {p}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, protected })
    }

    pub fn load(cwd: &Path) -> Result<Self> {
        Self::new(config::load_for(cwd)?)
    }

    pub fn evaluate(&self, input: HookInput) -> Result<Option<HookOutput>> {
        let output: Option<HookOutput> = match input {
            HookInput::PreToolUse(input) => self
                .tool_violation(&input)
                .map(|reason| PreToolUseOutput::deny(reason).into()),
            HookInput::PermissionRequest(input) => self
                .tool_violation(&input)
                .map(|reason| PermissionRequestOutput::deny(Some(reason)).into()),
            HookInput::UserPromptSubmit(input) => self
                .prompt_violation(&input.prompt)
                .map(|reason| UserPromptSubmitOutput::block(reason).into()),
            HookInput::Stop(input) if !input.stop_hook_active => self
                .unresolved_keyword(input.last_assistant_message.as_deref())
                .map(|reason| StopOutput::block(reason).into()),
            HookInput::SubagentStop(input) if !input.stop_hook_active => self
                .unresolved_keyword(input.last_assistant_message.as_deref())
                .map(|reason| SubagentStopOutput::block(reason).into()),
            HookInput::SessionStart(_) => self
                .config
                .session_context
                .as_ref()
                .map(|context| SessionStartOutput::add_context(context.clone()).into()),
            HookInput::PostToolUse(input) => {
                if let Some(path) = &self.config.tool_log {
                    append_tool_log(path, &input.tool_name)?;
                }
                None
            }
            other => {
                tracing::debug!(event = %other.event(), "no policy for event");
                None
            }
        };
        Ok(output)
    }

    /// The deny reason for a tool call, if the policy forbids it.
    fn tool_violation(&self, input: &impl ToolEvent) -> Option<String> {
        let path = match input.builtin_tool()? {
            BuiltinToolName::Bash => {
                let command = input.as_bash_input()?.command;
                return self
                    .config
                    .deny_commands
                    .iter()
                    .any(|denied| command.contains(denied.as_str()))
                    .then(|| format!("Dangerous command blocked: {command}"));
            }
            BuiltinToolName::Write => input.as_write_input()?.file_path,
            BuiltinToolName::Edit => input.as_edit_input()?.file_path,
            BuiltinToolName::NotebookEdit => input.as_notebook_edit_input()?.notebook_path,
            _ => return None,
        };

        self.protected
            .iter()
            .any(|pattern| path_matches_pattern(&path, pattern))
            .then(|| format!("Protected path: {path}"))
    }

    fn prompt_violation(&self, prompt: &str) -> Option<String> {
        let max = self.config.max_prompt_chars?;
        (prompt.chars().count() > max).then(|| format!("Prompt too long (max {max} chars)"))
    }

    fn unresolved_keyword(&self, message: Option<&str>) -> Option<String> {
        let message = message?;
        self.config
            .stop_keywords
            .iter()
            .find(|keyword| message.contains(keyword.as_str()))
            .map(|keyword| format!("Please resolve {keyword} before stopping"))
    }
}

/// Matches the full path, or just the file name for simple patterns.
fn path_matches_pattern(path: &str, pattern: &Pattern) -> bool {
    if pattern.matches(path) {
        return true;
    }

    Path::new(path)
        .file_name()
        .is_some_and(|name| pattern.matches(name.to_string_lossy().as_ref()))
}

fn append_tool_log(path: &Path, tool_name: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open tool log: {}", path.display()))?;
    writeln!(file, "{tool_name}")
        .with_context(|| format!("Failed to write tool log: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_hooks::enums::HookEvent;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn input(event: HookEvent, fields: Value) -> HookInput {
        let mut payload = json!({
            "session_id": "sess_1",
            "transcript_path": "/tmp/t.jsonl",
            "cwd": "/tmp",
            "permission_mode": "default",
            "hook_event_name": event.as_str(),
        });
        if let (Some(base), Value::Object(fields)) = (payload.as_object_mut(), fields) {
            base.extend(fields);
        }
        HookInput::decode(event, payload).unwrap()
    }

    fn pre_tool_use(tool_name: &str, tool_input: Value) -> HookInput {
        input(
            HookEvent::PreToolUse,
            json!({"tool_name": tool_name, "tool_input": tool_input, "tool_use_id": "toolu_1"}),
        )
    }

    fn policy(config: PolicyConfig) -> Policy {
        Policy::new(config).unwrap()
    }

    fn evaluate(policy: &Policy, input: HookInput) -> Option<Value> {
        policy
            .evaluate(input)
            .unwrap()
            .map(|output| serde_json::to_value(output).unwrap())
    }

    #[test]
    fn test_denies_dangerous_bash_command() {
        let out = evaluate(
            &policy(PolicyConfig::default()),
            pre_tool_use("Bash", json!({"command": "rm -rf /tmp/demo"})),
        );
        assert_eq!(
            out,
            Some(json!({"hookSpecificOutput": {
                "hookEventName": "PreToolUse",
                "permissionDecision": "deny",
                "permissionDecisionReason": "Dangerous command blocked: rm -rf /tmp/demo",
            }}))
        );
    }

    #[test]
    fn test_allows_other_bash_commands() {
        let out = evaluate(
            &policy(PolicyConfig::default()),
            pre_tool_use("Bash", json!({"command": "ls -la"})),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_custom_tool_with_command_field_is_not_bash() {
        let out = evaluate(
            &policy(PolicyConfig::default()),
            pre_tool_use("mcp__shell__run", json!({"command": "rm -rf /"})),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_protected_path_by_file_name() {
        let policy = policy(PolicyConfig {
            protected_paths: vec![".env".to_string(), "secrets/**".to_string()],
            ..PolicyConfig::default()
        });

        let out = evaluate(
            &policy,
            pre_tool_use("Write", json!({"file_path": "/repo/app/.env", "content": "X=1"})),
        )
        .unwrap();
        assert_eq!(
            out["hookSpecificOutput"]["permissionDecisionReason"],
            "Protected path: /repo/app/.env"
        );

        let out = evaluate(
            &policy,
            pre_tool_use(
                "Edit",
                json!({"file_path": "secrets/prod.key", "old_string": "a", "new_string": "b"}),
            ),
        );
        assert!(out.is_some());

        let out = evaluate(
            &policy,
            pre_tool_use("Write", json!({"file_path": "/repo/src/main.rs", "content": ""})),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_protected_notebook() {
        let policy = policy(PolicyConfig {
            protected_paths: vec!["*.ipynb".to_string()],
            ..PolicyConfig::default()
        });
        let out = evaluate(
            &policy,
            pre_tool_use(
                "NotebookEdit",
                json!({"notebook_path": "/repo/analysis.ipynb", "new_source": "x"}),
            ),
        );
        assert!(out.is_some());
    }

    #[test]
    fn test_permission_request_deny() {
        let out = evaluate(
            &policy(PolicyConfig::default()),
            input(
                HookEvent::PermissionRequest,
                json!({"tool_name": "Bash", "tool_input": {"command": "sudo rm -rf /"}}),
            ),
        );
        assert_eq!(
            out,
            Some(json!({"hookSpecificOutput": {
                "hookEventName": "PermissionRequest",
                "decision": {"behavior": "deny", "message": "Dangerous command blocked: sudo rm -rf /"},
            }}))
        );
    }

    #[test]
    fn test_prompt_limit_counts_characters() {
        let policy = policy(PolicyConfig {
            max_prompt_chars: Some(3),
            ..PolicyConfig::default()
        });

        let out = evaluate(&policy, input(HookEvent::UserPromptSubmit, json!({"prompt": "héé"})));
        assert_eq!(out, None);

        let out = evaluate(&policy, input(HookEvent::UserPromptSubmit, json!({"prompt": "four"})));
        assert_eq!(
            out,
            Some(json!({"decision": "block", "reason": "Prompt too long (max 3 chars)"}))
        );
    }

    #[test]
    fn test_prompt_limit_disabled() {
        let policy = policy(PolicyConfig {
            max_prompt_chars: None,
            ..PolicyConfig::default()
        });
        let prompt = "x".repeat(20_000);
        assert_eq!(
            evaluate(&policy, input(HookEvent::UserPromptSubmit, json!({"prompt": prompt}))),
            None
        );
    }

    #[test]
    fn test_stop_blocked_on_keyword() {
        let policy = policy(PolicyConfig {
            stop_keywords: vec!["TODO".to_string()],
            ..PolicyConfig::default()
        });

        let out = evaluate(
            &policy,
            input(
                HookEvent::Stop,
                json!({"stop_hook_active": false, "last_assistant_message": "Done. TODO: tests"}),
            ),
        );
        assert_eq!(
            out,
            Some(json!({"decision": "block", "reason": "Please resolve TODO before stopping"}))
        );

        // Already continuing because of a stop hook: let it stop.
        let out = evaluate(
            &policy,
            input(
                HookEvent::Stop,
                json!({"stop_hook_active": true, "last_assistant_message": "TODO"}),
            ),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_subagent_stop_blocked_on_keyword() {
        let policy = policy(PolicyConfig {
            stop_keywords: vec!["FIXME".to_string()],
            ..PolicyConfig::default()
        });
        let out = evaluate(
            &policy,
            input(
                HookEvent::SubagentStop,
                json!({
                    "stop_hook_active": false,
                    "agent_id": "a1",
                    "agent_type": "explore",
                    "agent_transcript_path": "/tmp/a1.jsonl",
                    "last_assistant_message": "left a FIXME",
                }),
            ),
        )
        .unwrap();
        assert_eq!(out["decision"], "block");
    }

    #[test]
    fn test_session_context() {
        let policy = policy(PolicyConfig {
            session_context: Some("Use the staging cluster.".to_string()),
            ..PolicyConfig::default()
        });
        let out = evaluate(
            &policy,
            input(HookEvent::SessionStart, json!({"source": "startup", "model": "opus"})),
        );
        assert_eq!(
            out,
            Some(json!({"hookSpecificOutput": {
                "hookEventName": "SessionStart",
                "additionalContext": "Use the staging cluster.",
            }}))
        );
    }

    #[test]
    fn test_tool_log_appends_lines() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("tools.log");
        let policy = policy(PolicyConfig {
            tool_log: Some(log.clone()),
            ..PolicyConfig::default()
        });

        for tool in ["Read", "Bash"] {
            let out = evaluate(
                &policy,
                input(
                    HookEvent::PostToolUse,
                    json!({
                        "tool_name": tool,
                        "tool_input": {},
                        "tool_response": {},
                        "tool_use_id": "toolu_1",
                    }),
                ),
            );
            assert_eq!(out, None);
        }
        assert_eq!(fs::read_to_string(&log).unwrap(), "Read\nBash\n");
    }

    #[test]
    fn test_tool_log_unwritable_is_error() {
        let temp = TempDir::new().unwrap();
        let policy = policy(PolicyConfig {
            tool_log: Some(temp.path().join("missing-dir/tools.log")),
            ..PolicyConfig::default()
        });
        let err = policy
            .evaluate(input(
                HookEvent::PostToolUse,
                json!({"tool_name": "Read", "tool_input": {}, "tool_response": {}, "tool_use_id": "t"}),
            ))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open tool log"));
    }

    #[test]
    fn test_other_events_have_no_output() {
        let out = evaluate(
            &policy(PolicyConfig::default()),
            input(HookEvent::Notification, json!({"message": "hi", "notification_type": "info"})),
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_handle_loads_config_from_cwd() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".cc-hooks.yaml"), "stop_keywords: [WIP]\n").unwrap();
        let mut raw = json!({
            "session_id": "sess_1",
            "transcript_path": "/tmp/t.jsonl",
            "cwd": temp.path(),
            "permission_mode": "default",
            "stop_hook_active": false,
            "last_assistant_message": "WIP",
        });
        raw["hook_event_name"] = json!("Stop");
        let input = HookInput::decode(HookEvent::Stop, raw).unwrap();
        let out = handle(input).unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(out).unwrap()["reason"],
            "Please resolve WIP before stopping"
        );
    }
}
