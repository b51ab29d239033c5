//! Decision reporting for the hook harness
//!
//! The harness reads the exit status: 0 allows the command, 2 blocks it.
//! A block also writes a framed reason to stderr. Nothing goes to stdout.

use std::io::{self, Write};

/// Exit status that lets the command run
pub const EXIT_ALLOW: i32 = 0;

/// Exit status that blocks the command
pub const EXIT_BLOCK: i32 = 2;

const SEPARATOR_WIDTH: usize = 50;
const HEADLINE: &str = "GLOBAL SAFETY: BLOCKED";

/// Decision result from the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command
    Allow { reason: String },

    /// Block the command
    Block { rule_id: String, reason: String },
}

impl Decision {
    /// Create an allow decision
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
        }
    }

    /// Create a block decision
    pub fn block(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an allow decision
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    /// Check if this is a block decision
    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow { .. } => None,
            Decision::Block { rule_id, .. } => Some(rule_id),
        }
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { reason } => reason,
            Decision::Block { reason, .. } => reason,
        }
    }
}

/// What the process emits for a decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutput {
    /// Process exit status
    pub exit_code: i32,

    /// Report for stderr, only on block
    pub stderr: Option<String>,
}

impl HookOutput {
    /// Silent allow
    pub fn allow() -> Self {
        HookOutput {
            exit_code: EXIT_ALLOW,
            stderr: None,
        }
    }

    /// Block with a framed reason
    pub fn block(reason: &str) -> Self {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let report = format!("\n{separator}\n{HEADLINE}\nReason: {reason}\n{separator}\n");

        HookOutput {
            exit_code: EXIT_BLOCK,
            stderr: Some(report),
        }
    }

    /// Create output from a Decision
    pub fn from_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Allow { .. } => HookOutput::allow(),
            Decision::Block { reason, .. } => HookOutput::block(reason),
        }
    }

    /// Write the report, if any, to the given stream
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(report) = &self.stderr {
            out.write_all(report.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}
