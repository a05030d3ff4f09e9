use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = ".cc-hooks.yaml";

/// Explicit config path; wins over discovery.
pub const CONFIG_ENV: &str = "CC_HOOKS_CONFIG";

/// Policy configuration (as parsed from YAML). Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Bash commands containing any of these substrings are denied
    pub deny_commands: Vec<String>,
    /// Globs for paths Write, Edit and NotebookEdit may not touch
    pub protected_paths: Vec<String>,
    /// Longest accepted prompt, in characters. `null` disables the limit.
    pub max_prompt_chars: Option<usize>,
    /// Stopping is blocked while the last assistant message mentions one of these
    pub stop_keywords: Vec<String>,
    /// Injected into every new session
    pub session_context: Option<String>,
    /// Each completed tool call appends its tool name here
    pub tool_log: Option<PathBuf>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            deny_commands: vec!["rm -rf".to_string()],
            protected_paths: Vec::new(),
            max_prompt_chars: Some(10_000),
            stop_keywords: Vec::new(),
            session_context: None,
            tool_log: None,
        }
    }
}

fn validate_config(config: &PolicyConfig, config_path: &Path) -> Result<()> {
    if config.deny_commands.iter().any(|c| c.trim().is_empty()) {
        bail!(
            "Invalid config at {}: 'deny_commands' contains an empty command",
            config_path.display()
        );
    }
    if config.max_prompt_chars == Some(0) {
        bail!(
            "Invalid config at {}: 'max_prompt_chars' must be greater than zero",
            config_path.display()
        );
    }
    for pattern in &config.protected_paths {
        glob::Pattern::new(pattern).with_context(|| {
            format!(
                "Invalid config at {}: bad glob in 'protected_paths': {}",
                config_path.display(),
                pattern
            )
        })?;
    }
    Ok(())
}

/// Loads and validates a policy file.
pub fn load_config(config_path: &Path) -> Result<PolicyConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    // An empty file is a valid, all-defaults config.
    let config: PolicyConfig = if content.trim().is_empty() {
        PolicyConfig::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
    };

    validate_config(&config, config_path)?;
    Ok(config)
}

/// Finds the config for a hook running in `cwd`: `$CC_HOOKS_CONFIG`, then the
/// nearest `.cc-hooks.yaml` walking up from `cwd`, then
/// `$XDG_CONFIG_HOME/cc-hooks/policy.yaml`.
pub fn find_config(cwd: &Path) -> Option<PathBuf> {
    find_config_with(cwd, |key| std::env::var(key).ok())
}

fn find_config_with(cwd: &Path, env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(explicit) = env(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }

    if let Some(nearest) = find_nearest_config(cwd) {
        return Some(nearest);
    }

    let user_config = user_config_path(&env);
    user_config.exists().then_some(user_config)
}

/// Walks up from `start_dir` to the filesystem root.
fn find_nearest_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn user_config_path(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    let xdg_config = env("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = env("HOME").unwrap_or_else(|| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    xdg_config.join("cc-hooks").join("policy.yaml")
}

/// The config that applies in `cwd`, or the defaults when there is none.
pub fn load_for(cwd: &Path) -> Result<PolicyConfig> {
    match find_config(cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading policy config");
            load_config(&path)
        }
        None => {
            tracing::debug!(cwd = %cwd.display(), "no policy config found, using defaults");
            Ok(PolicyConfig::default())
        }
    }
}
