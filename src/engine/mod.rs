//! Guard engine for command-guard
//!
//! Routes a hook invocation to the command checks: the catastrophic rule
//! table first, then the `rm -rf` target audit.

pub mod rm;

use crate::config::Config;
use crate::error::Result;
use crate::input::HookInput;
use crate::output::Decision;
use crate::rules::RuleSet;

/// The command guard
#[derive(Debug, Clone)]
pub struct CommandGuard {
    config: Config,
    rules: RuleSet,
}

impl CommandGuard {
    /// Create a guard for the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let rules = RuleSet::for_config(&config)?;
        Ok(Self { config, rules })
    }

    /// Create a guard from the compiled-in configuration
    pub fn builtin() -> Result<Self> {
        Self::new(Config::builtin().clone())
    }

    /// Main entry point: check an invocation and return a decision
    pub fn check(&self, input: &HookInput) -> Decision {
        if !self.config.is_shell_tool(&input.tool_name) {
            return Decision::allow("not a shell invocation - passing through");
        }

        self.check_command(input.command())
    }

    /// Check a raw shell command
    pub fn check_command(&self, command: &str) -> Decision {
        if let Some(rule) = self.rules.first_match(command) {
            return Decision::block(rule.id, rule.reason);
        }

        if let Some(decision) = rm::audit(command, &self.config) {
            return decision;
        }

        Decision::allow("passed all checks")
    }

    /// Get the compiled rules
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
