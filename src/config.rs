//! Compiled-in configuration for command-guard
//!
//! The policy lives in `config/default.toml`, which is embedded into the
//! binary at build time. Nothing is read from disk or the environment.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::Result;

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// General configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Tool name whose invocations carry a shell command
    pub shell_tool: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            shell_tool: "Bash".to_string(),
        }
    }
}

/// Recursive delete policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RmConfig {
    /// Basenames that `rm -rf` may remove
    pub safe_targets: BTreeSet<String>,

    /// Top-level directories that may never be removed recursively
    pub system_dirs: Vec<String>,
}

impl Default for RmConfig {
    fn default() -> Self {
        let safe_targets = [
            "node_modules",
            "dist",
            "build",
            "out",
            "target",
            "coverage",
            ".next",
            ".nuxt",
            ".turbo",
            ".cache",
            ".parcel-cache",
            "__pycache__",
            ".pytest_cache",
            ".mypy_cache",
            ".ruff_cache",
            "tmp",
        ];
        let system_dirs = [
            "/bin", "/boot", "/dev", "/etc", "/home", "/lib", "/lib64", "/opt", "/proc", "/root",
            "/sbin", "/sys", "/usr", "/var",
        ];

        Self {
            safe_targets: safe_targets.iter().map(|s| s.to_string()).collect(),
            system_dirs: system_dirs.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub rm: RmConfig,
}

static BUILTIN: Lazy<Config> =
    Lazy::new(|| Config::from_toml(DEFAULT_CONFIG_TOML).unwrap_or_default());

impl Config {
    /// The process-wide compiled-in configuration, decoded once
    pub fn builtin() -> &'static Config {
        &BUILTIN
    }

    /// Decode a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check whether a tool name is the shell capability
    pub fn is_shell_tool(&self, tool_name: &str) -> bool {
        self.general.shell_tool == tool_name
    }

    /// Check whether a basename is an allowed `rm -rf` target
    pub fn is_safe_target(&self, basename: &str) -> bool {
        self.rm.safe_targets.contains(basename)
    }

    /// Safe targets joined for display, in sorted order
    pub fn safe_target_list(&self) -> String {
        self.rm
            .safe_targets
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
