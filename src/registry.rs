//! Tool name → tool-input schema table.
//!
//! The process-wide table is seeded with the built-in tools on first use and
//! only grows: [`register`] inserts or overwrites, nothing removes. Embedding
//! code registers its own schemas (for MCP tools, say) in `main` before the
//! hook runs.

use crate::enums::BuiltinToolName;
use crate::tools::{
    BashInput, EditInput, GlobInput, GrepInput, NotebookEditInput, ReadInput, TaskInput,
    ToolInput, ToolSchema, WebFetchInput, WebSearchInput, WriteInput,
};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

static GLOBAL: LazyLock<RwLock<ToolRegistry>> =
    LazyLock::new(|| RwLock::new(ToolRegistry::with_builtins()));

/// A mapping from tool name to schema.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    schemas: HashMap<String, ToolSchema>,
}

impl ToolRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with one schema per [`BuiltinToolName`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for tool in BuiltinToolName::ALL {
            registry.register(tool.as_str(), builtin_schema(*tool));
        }
        registry
    }

    /// Inserts `schema` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, schema: ToolSchema) {
        let name = name.into();
        if let Some(previous) = self.schemas.insert(name.clone(), schema) {
            tracing::debug!(
                tool = %name,
                previous = previous.type_name(),
                schema = schema.type_name(),
                "replaced tool input schema"
            );
        }
    }

    pub fn lookup(&self, name: &str) -> Option<ToolSchema> {
        self.schemas.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn builtin_schema(tool: BuiltinToolName) -> ToolSchema {
    match tool {
        BuiltinToolName::Bash => ToolSchema::of::<BashInput>(),
        BuiltinToolName::Write => ToolSchema::of::<WriteInput>(),
        BuiltinToolName::Edit => ToolSchema::of::<EditInput>(),
        BuiltinToolName::Read => ToolSchema::of::<ReadInput>(),
        BuiltinToolName::Glob => ToolSchema::of::<GlobInput>(),
        BuiltinToolName::Grep => ToolSchema::of::<GrepInput>(),
        BuiltinToolName::WebFetch => ToolSchema::of::<WebFetchInput>(),
        BuiltinToolName::WebSearch => ToolSchema::of::<WebSearchInput>(),
        BuiltinToolName::Task => ToolSchema::of::<TaskInput>(),
        BuiltinToolName::NotebookEdit => ToolSchema::of::<NotebookEditInput>(),
    }
}

/// Registers `schema` for `name` in the process-wide table. Last write wins.
pub fn register(name: impl Into<String>, schema: ToolSchema) {
    // A panic while holding the lock cannot leave the map half-written.
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, schema);
}

/// Registers `T` as the input schema for `name`.
pub fn register_tool<T: ToolInput>(name: impl Into<String>) {
    register(name, ToolSchema::of::<T>());
}

/// Looks up the schema registered for `name` in the process-wide table.
pub fn lookup(name: &str) -> Option<ToolSchema> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .lookup(name)
}
