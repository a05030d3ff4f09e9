//! The execution pipeline: read stdin, decode, invoke the handler, encode,
//! exit.
//!
//! A [`Hook`] is only a declaration. Nothing reads stdin until a binary's
//! `main` calls [`Hook::run`].

use std::any::{type_name, Any};
use std::future::{ready, Future};
use std::io::{self, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::process::ExitCode;

use futures::FutureExt;
use serde_json::{Map, Value};

use crate::enums::HookEvent;
use crate::error::HookError;
use crate::events::HookPayload;
use crate::logging::{self, LogConfig};

/// Exit code for a completed invocation, with or without output.
pub const EXIT_OK: u8 = 0;

/// Exit code for every failure. The host treats it as a blocking error.
pub const EXIT_FAILURE: u8 = 2;

type HandlerFuture<O> = Pin<Box<dyn Future<Output = anyhow::Result<Option<O>>>>>;
type Handler<I> = Box<dyn Fn(I) -> HandlerFuture<<I as HookPayload>::Output>>;

/// A handler bound to the input type it accepts.
///
/// `I` is either one event's input (the hook accepts only that event) or
/// [`HookInput`](crate::events::HookInput) (the hook accepts every event).
pub struct Hook<I: HookPayload> {
    name: String,
    handler: Handler<I>,
}

impl<I: HookPayload> Hook<I> {
    /// Declares a hook over an async handler.
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(I) -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<Option<I::Output>>> + 'static,
    {
        Self {
            name: handler_name::<F>(),
            handler: Box::new(move |input| Box::pin(handler(input)) as HandlerFuture<I::Output>),
        }
    }

    /// Declares a hook over a plain function.
    pub fn sync<F>(handler: F) -> Self
    where
        F: Fn(I) -> anyhow::Result<Option<I::Output>> + 'static,
    {
        Self {
            name: handler_name::<F>(),
            handler: Box::new(move |input| {
                Box::pin(ready(handler(input))) as HandlerFuture<I::Output>
            }),
        }
    }

    /// Overrides the handler name used in diagnostics.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_event(&self) -> Option<HookEvent> {
        I::declared_event()
    }

    /// Runs the pipeline over `raw` and returns the serialized output, if
    /// the handler produced one.
    pub async fn dispatch(&self, raw: &str) -> Result<Option<String>, HookError> {
        let payload = parse_payload(raw)?;
        let event = resolve_event(&payload, I::declared_event())?;
        let input =
            I::decode(event, payload).map_err(|source| HookError::Validation { event, source })?;

        tracing::debug!(event = %event, handler = %self.name, "invoking handler");
        // Sync handlers run inside the call, async ones while polled.
        let output = match panic::catch_unwind(AssertUnwindSafe(|| (self.handler)(input))) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
            Err(payload) => Err(payload),
        }
        .map_err(|payload| HookError::Panic {
            event,
            message: panic_message(payload.as_ref()),
        })?
        .map_err(|error| HookError::Handler { event, error })?;

        match output {
            None => {
                tracing::debug!(event = %event, "handler returned no output");
                Ok(None)
            }
            Some(output) => serde_json::to_string(&output)
                .map(Some)
                .map_err(|source| HookError::Encode { event, source }),
        }
    }

    /// Runs the pipeline over the given streams and returns the exit code.
    ///
    /// Nothing is written to `stdout` unless the whole pipeline succeeds.
    pub fn execute(
        &self,
        stdin: &mut impl Read,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> u8 {
        match self.try_execute(stdin, stdout) {
            Ok(()) => EXIT_OK,
            Err(err) => {
                let line = self.diagnostic(&err);
                tracing::error!(kind = err.kind(), handler = %self.name, "{err}");
                let _ = writeln!(stderr, "{line}");
                let _ = stderr.flush();
                EXIT_FAILURE
            }
        }
    }

    /// Runs the pipeline over the process's standard streams.
    pub fn run(self) -> ExitCode {
        // A broken log file must not change the hook's outcome.
        let _ = logging::init(&LogConfig::from_env());
        // Panics surface as the diagnostic line; keep the default report off stderr.
        panic::set_hook(Box::new(|info| tracing::error!("{info}")));
        let code = self.execute(
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        );
        ExitCode::from(code)
    }

    /// The single stderr line reported for `err`.
    pub fn diagnostic(&self, err: &HookError) -> String {
        let event = err
            .event_name()
            .or(I::declared_event().map(HookEvent::as_str))
            .unwrap_or("unknown");
        let message = err.to_string();
        let message = message
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{} in event={} handler={}: {}",
            err.kind(),
            event,
            self.name,
            message
        )
    }

    fn try_execute(&self, stdin: &mut impl Read, stdout: &mut impl Write) -> Result<(), HookError> {
        let mut raw = String::new();
        stdin.read_to_string(&mut raw)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        if let Some(json) = runtime.block_on(self.dispatch(&raw))? {
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}

/// Last path segment of the handler's type name: `handle` for
/// `my_hooks::policy::handle`.
fn handler_name<F>() -> String {
    let full = type_name::<F>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::")
        .find(|segment| !segment.is_empty())
        .unwrap_or(full)
        .to_string()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn parse_payload(raw: &str) -> Result<Value, HookError> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(raw).map_err(HookError::InvalidJson)
}

/// Picks the event whose schema decodes `payload`.
fn resolve_event(payload: &Value, declared: Option<HookEvent>) -> Result<HookEvent, HookError> {
    let named = ["hook_event_name", "hookEventName"]
        .iter()
        .find_map(|key| payload.get(key)?.as_str());

    let Some(name) = named else {
        return declared.ok_or(HookError::MissingEvent);
    };
    let received =
        HookEvent::classify(name).ok_or_else(|| HookError::UnsupportedEvent(name.to_string()))?;
    match declared {
        Some(expected) if expected != received => {
            Err(HookError::EventMismatch { expected, received })
        }
        _ => Ok(received),
    }
}
