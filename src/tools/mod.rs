//! Typed inputs for the host's tools.
//!
//! Tool inputs arrive as open JSON objects keyed by an arbitrary tool name.
//! Each schema here is a flat record with a fixed set of typed fields plus an
//! `extra` map that keeps every key the schema does not declare, so a parsed
//! and re-serialized input loses nothing.

use crate::enums::BuiltinToolName;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::{type_name, Any, TypeId};
use std::fmt;

macro_rules! builtin_tool {
    ($ty:ident, $tool:ident) => {
        impl crate::tools::ToolInput for $ty {
            fn extra(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
                Some(&self.extra)
            }
        }

        impl crate::tools::BuiltinToolInput for $ty {
            const TOOL: crate::enums::BuiltinToolName = crate::enums::BuiltinToolName::$tool;
        }
    };
}

mod bash;
mod edit;
mod glob;
mod grep;
mod notebook_edit;
mod read;
mod task;
mod web_fetch;
mod web_search;
mod write;

pub use bash::BashInput;
pub use edit::EditInput;
pub use glob::GlobInput;
pub use grep::GrepInput;
pub use notebook_edit::NotebookEditInput;
pub use read::ReadInput;
pub use task::TaskInput;
pub use web_fetch::WebFetchInput;
pub use web_search::WebSearchInput;
pub use write::WriteInput;

/// A typed view of a tool's input object.
pub trait ToolInput: DeserializeOwned + Serialize + fmt::Debug + Send + Sync + 'static {
    /// Keys present on the wire that the schema does not declare.
    fn extra(&self) -> Option<&Map<String, Value>> {
        None
    }
}

/// A schema for one of the host's built-in tools.
pub trait BuiltinToolInput: ToolInput {
    const TOOL: BuiltinToolName;
}

/// Object-safe handle on a parsed tool input of any registered schema.
pub trait AnyToolInput: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Serializes back to the open JSON object, unknown keys included.
    fn to_json(&self) -> serde_json::Result<Value>;
}

impl<T: ToolInput> AnyToolInput for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl dyn AnyToolInput {
    pub fn downcast_ref<T: ToolInput>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: ToolInput>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// A tool-input schema that can be stored in the registry.
#[derive(Clone, Copy)]
pub struct ToolSchema {
    type_id: TypeId,
    type_name: &'static str,
    parse: fn(&Map<String, Value>) -> Option<Box<dyn AnyToolInput>>,
}

impl ToolSchema {
    pub fn of<T: ToolInput>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            parse: parse_boxed::<T>,
        }
    }

    /// Coerces `raw` into this schema. Returns `None` on any mismatch.
    pub fn parse(&self, raw: &Map<String, Value>) -> Option<Box<dyn AnyToolInput>> {
        (self.parse)(raw)
    }

    /// True when this schema was built from `T`.
    pub fn is<T: ToolInput>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ToolSchema {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ToolSchema {}

impl fmt::Debug for ToolSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ToolSchema").field(&self.type_name).finish()
    }
}

/// Attempts to read `raw` as a `T`.
///
/// Missing required fields or wrong primitive types yield `None` rather than
/// an error, so callers can use this as a probe.
pub fn parse_as<T: ToolInput>(raw: &Map<String, Value>) -> Option<T> {
    match serde_json::from_value(Value::Object(raw.clone())) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(schema = type_name::<T>(), error = %err, "tool input does not match schema");
            None
        }
    }
}

fn parse_boxed<T: ToolInput>(raw: &Map<String, Value>) -> Option<Box<dyn AnyToolInput>> {
    parse_as::<T>(raw).map(|parsed| Box::new(parsed) as Box<dyn AnyToolInput>)
}
