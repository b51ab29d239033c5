//! command-guard - Global PreToolUse hook that blocks catastrophic commands
//!
//! A last line of defense for agent harnesses that run shell commands. It
//! only blocks a fixed catastrophic subset; project-level hooks can be
//! stricter.
//!
//! # Features
//!
//! - **Catastrophic rules**: disk wipes, disk formatting, fork bombs, and
//!   recursive deletion of `/`, `~`, `/*` or a top-level system directory
//! - **`rm -rf` audit**: recursive force deletes are allowed only when every
//!   target is a known build or cache directory (`node_modules`, `dist`, ...)
//! - **Fail-open input handling**: malformed payloads and non-shell tools pass
//!
//! # Example
//!
//! ```
//! use command_guard::{CommandGuard, HookInput};
//!
//! let guard = CommandGuard::builtin().unwrap();
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#;
//! let hook_input = HookInput::from_json(input).unwrap();
//!
//! let decision = guard.check(&hook_input);
//! assert!(decision.is_block());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::CommandGuard;
pub use error::{GuardError, Result};
pub use input::{HookInput, ToolInput};
pub use output::{Decision, HookOutput, EXIT_ALLOW, EXIT_BLOCK};
