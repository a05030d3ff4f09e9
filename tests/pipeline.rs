#![allow(clippy::expect_used, clippy::unwrap_used)]

use cc_hooks::prelude::*;
use cc_hooks::{EXIT_FAILURE, EXIT_OK};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

fn execute<I: cc_hooks::events::HookPayload>(hook: &Hook<I>, input: &str) -> (String, String, u8) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = hook.execute(&mut input.as_bytes(), &mut stdout, &mut stderr);
    (
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
        code,
    )
}

fn payload(event: &str, fields: Value) -> String {
    let mut payload = json!({
        "session_id": "sess_1",
        "transcript_path": "/tmp/t.jsonl",
        "cwd": "/tmp",
        "permission_mode": "default",
        "hook_event_name": event,
    });
    if let (Some(base), Value::Object(fields)) = (payload.as_object_mut(), fields) {
        base.extend(fields);
    }
    payload.to_string()
}

fn guard(input: PreToolUseInput) -> anyhow::Result<Option<PreToolUseOutput>> {
    match input.as_bash_input() {
        Some(bash) if bash.command.contains("rm -rf") => Ok(Some(PreToolUseOutput::deny(
            format!("Dangerous command blocked: {}", bash.command),
        ))),
        _ => Ok(None),
    }
}

async fn slow_approval(input: PermissionRequestInput) -> anyhow::Result<Option<PermissionRequestOutput>> {
    tokio::task::yield_now().await;
    Ok(Some(PermissionRequestOutput::allow(Some(format!(
        "approved {}",
        input.tool_name
    )))))
}

async fn relay(input: NotificationInput) -> anyhow::Result<Option<NotificationOutput>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let _client = tokio::net::TcpStream::connect(addr).await?;
    let (_server, peer) = listener.accept().await?;
    Ok(Some(NotificationOutput::ok().with_system_message(format!(
        "relayed {} via {}",
        input.message,
        if peer.ip().is_loopback() { "loopback" } else { "remote" }
    ))))
}

fn first_attachment(_input: NotificationInput) -> anyhow::Result<Option<NotificationOutput>> {
    let attachments: Vec<String> = Vec::new();
    let _ = &attachments[3];
    Ok(None)
}

fn notify(_input: NotificationInput) -> anyhow::Result<Option<NotificationOutput>> {
    anyhow::bail!("webhook unreachable")
}

#[test]
fn test_sync_handler_output() {
    let hook = Hook::sync(guard);
    let input = payload(
        "PreToolUse",
        json!({"tool_name": "Bash", "tool_input": {"command": "rm -rf /tmp/demo"}, "tool_use_id": "t1"}),
    );
    let (stdout, stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_OK);
    assert!(stderr.is_empty());
    assert_eq!(
        stdout,
        r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"deny","permissionDecisionReason":"Dangerous command blocked: rm -rf /tmp/demo"}}"#
    );
}

#[test]
fn test_no_output_writes_nothing() {
    let hook = Hook::sync(guard);
    let input = payload(
        "PreToolUse",
        json!({"tool_name": "Bash", "tool_input": {"command": "ls"}, "tool_use_id": "t1"}),
    );
    let (stdout, stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_OK);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn test_async_handler() {
    let hook = Hook::new(slow_approval);
    assert_eq!(hook.name(), "slow_approval");
    let input = payload(
        "PermissionRequest",
        json!({"tool_name": "WebFetch", "tool_input": {"url": "https://example.com"}}),
    );
    let (stdout, _stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_OK);
    assert_eq!(
        stdout,
        r#"{"hookSpecificOutput":{"hookEventName":"PermissionRequest","decision":{"behavior":"allow","message":"approved WebFetch"}}}"#
    );
}

#[test]
fn test_handler_error() {
    let hook = Hook::sync(notify);
    let input = payload(
        "Notification",
        json!({"message": "done", "notification_type": "info"}),
    );
    let (stdout, stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr,
        "HandlerError in event=Notification handler=notify: webhook unreachable\n"
    );
}

#[test]
fn test_async_handler_with_network_io() {
    let hook = Hook::new(relay);
    let input = payload(
        "Notification",
        json!({"message": "done", "notification_type": "idle_prompt"}),
    );
    let (stdout, stderr, code) = execute(&hook, &input);

    assert_eq!(stderr, "");
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, r#"{"systemMessage":"relayed done via loopback"}"#);
}

#[test]
fn test_handler_panic_is_reported() {
    let hook = Hook::sync(first_attachment);
    let input = payload(
        "Notification",
        json!({"message": "done", "notification_type": "info"}),
    );
    let (stdout, stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with(
        "HandlerError in event=Notification handler=first_attachment: handler panicked: index out of bounds"
    ));
}

#[test]
fn test_unsupported_event() {
    let hook = Hook::sync(|_: HookInput| Ok(None::<HookOutput>)).named("catch_all");
    let (stdout, stderr, code) = execute(&hook, &payload("FutureEvent", json!({})));

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with(
        "UnsupportedEvent in event=FutureEvent handler=catch_all: Unsupported hook event: FutureEvent"
    ));
}

#[test]
fn test_event_mismatch_is_rejected() {
    let hook = Hook::sync(guard);
    let (stdout, stderr, code) = execute(&hook, &payload("Stop", json!({"stop_hook_active": false})));

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("EventMismatch in event=Stop handler=guard:"));
}

#[test]
fn test_empty_input_uses_declared_event() {
    let hook = Hook::sync(|_: StopInput| Ok(Some(StopOutput::ok())));
    let (stdout, stderr, code) = execute(&hook, "");

    // `{}` lacks the envelope, so the declared event's schema rejects it.
    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("ValidationError in event=Stop handler="));
    assert!(stderr.contains("missing field"));
}

#[test]
fn test_event_name_may_be_omitted_for_typed_hook() {
    let hook = Hook::sync(|input: StopInput| {
        assert_eq!(input.envelope.hook_event_name, "Stop");
        Ok(Some(StopOutput::block("not yet")))
    });
    let mut raw: Value = serde_json::from_str(&payload("Stop", json!({"stop_hook_active": false}))).unwrap();
    raw.as_object_mut().unwrap().remove("hook_event_name");
    let (stdout, _stderr, code) = execute(&hook, &raw.to_string());

    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, r#"{"decision":"block","reason":"not yet"}"#);
}

#[test]
fn test_invalid_json() {
    let hook = Hook::sync(guard);
    let (stdout, stderr, code) = execute(&hook, "{\"session_id\": ");

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("ValidationError in event=PreToolUse handler=guard: invalid JSON input"));
}

#[test]
fn test_catch_all_hook_sees_every_event() {
    let hook = Hook::sync(|input: HookInput| {
        let output: HookOutput = match input {
            HookInput::SessionStart(_) => SessionStartOutput::add_context("hello").into(),
            other => {
                let event = other.event();
                return Err(anyhow::anyhow!("unexpected {event}"));
            }
        };
        Ok(Some(output))
    });
    let input = payload("SessionStart", json!({"source": "startup", "model": "opus"}));
    let (stdout, _stderr, code) = execute(&hook, &input);
    assert_eq!(code, EXIT_OK);
    assert_eq!(
        stdout,
        r#"{"hookSpecificOutput":{"hookEventName":"SessionStart","additionalContext":"hello"}}"#
    );

    let input = payload("SessionEnd", json!({"reason": "logout"}));
    let (_stdout, stderr, code) = execute(&hook, &input);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.contains("unexpected SessionEnd"));
}

#[test]
fn test_catch_all_without_event_name() {
    let hook = Hook::sync(|_: HookInput| Ok(None::<HookOutput>)).named("catch_all");
    let (_stdout, stderr, code) = execute(&hook, "{}");

    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.starts_with("ValidationError in event=unknown handler=catch_all:"));
}

#[test]
fn test_unknown_fields_reach_handler() {
    let hook = Hook::sync(|input: UserPromptSubmitInput| {
        let tag = input.extra["client_tag"].as_str().unwrap_or_default().to_string();
        Ok(Some(UserPromptSubmitOutput::add_context(tag)))
    });
    let input = payload(
        "UserPromptSubmit",
        json!({"prompt": "hi", "client_tag": "ide-42", "permission_mode": "future_mode"}),
    );
    let (stdout, _stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_OK);
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["hookSpecificOutput"]["additionalContext"], "ide-42");
}

#[derive(Debug, Serialize, Deserialize)]
struct QueryInput {
    sql: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ToolInput for QueryInput {
    fn extra(&self) -> Option<&Map<String, Value>> {
        Some(&self.extra)
    }
}

#[test]
fn test_registered_custom_tool() {
    register_tool::<QueryInput>("mcp__db__query");

    let hook = Hook::sync(|input: PreToolUseInput| {
        let parsed = input.registered_tool_input();
        let Some(query) = parsed.as_deref().and_then(|p| p.downcast_ref::<QueryInput>()) else {
            return Ok(None);
        };
        if query.sql.to_lowercase().starts_with("drop") {
            return Ok(Some(PreToolUseOutput::deny("destructive SQL")));
        }
        Ok(Some(PreToolUseOutput::allow()))
    });

    let input = payload(
        "PreToolUse",
        json!({
            "tool_name": "mcp__db__query",
            "tool_input": {"sql": "DROP TABLE users", "database": "prod"},
            "tool_use_id": "t9",
        }),
    );
    let (stdout, _stderr, code) = execute(&hook, &input);
    assert_eq!(code, EXIT_OK);
    assert_eq!(
        stdout,
        r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"deny","permissionDecisionReason":"destructive SQL"}}"#
    );

    // A mismatched shape is no schema rather than an error.
    let input = payload(
        "PreToolUse",
        json!({"tool_name": "mcp__db__query", "tool_input": {"statement": 1}, "tool_use_id": "t10"}),
    );
    let (stdout, _stderr, code) = execute(&hook, &input);
    assert_eq!(code, EXIT_OK);
    assert!(stdout.is_empty());
}

#[test]
fn test_common_output_fields() {
    let hook = Hook::sync(|_: PreCompactInput| {
        Ok(Some(
            PreCompactOutput::stop_session("context budget exhausted").with_system_message("bye"),
        ))
    });
    let input = payload(
        "PreCompact",
        json!({"trigger": "auto", "custom_instructions": ""}),
    );
    let (stdout, _stderr, code) = execute(&hook, &input);

    assert_eq!(code, EXIT_OK);
    assert_eq!(
        serde_json::from_str::<Value>(&stdout).unwrap(),
        json!({"continue": false, "stopReason": "context budget exhausted", "systemMessage": "bye"})
    );
}
