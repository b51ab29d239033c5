//! Blocking rules for command-guard
//!
//! Defines the catastrophic command patterns and compiles them into a
//! single `RegexSet`. Rule order is reporting priority: when several rules
//! match, the earliest one is reported.

pub mod catastrophic;

use regex::{Regex, RegexSet};

use crate::config::Config;
use crate::error::{GuardError, Result};

/// A blocking rule definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Regex pattern searched for anywhere in the command
    pub pattern: String,

    /// Human-readable reason for blocking
    pub reason: &'static str,
}

impl Rule {
    /// Create a new rule
    pub fn new(id: &'static str, pattern: impl Into<String>, reason: &'static str) -> Self {
        Self {
            id,
            pattern: pattern.into(),
            reason,
        }
    }
}

/// Rules compiled for matching
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    set: RegexSet,
}

impl RuleSet {
    /// Compile a list of rules, keeping their order
    pub fn compile(rules: Vec<Rule>) -> Result<Self> {
        // Compile one by one first so a bad pattern names its rule
        for rule in &rules {
            Regex::new(&rule.pattern).map_err(|source| GuardError::Pattern {
                id: rule.id.to_string(),
                source,
            })?;
        }

        let set = RegexSet::new(rules.iter().map(|r| r.pattern.as_str())).map_err(|source| {
            GuardError::Pattern {
                id: "<set>".to_string(),
                source,
            }
        })?;

        Ok(Self { rules, set })
    }

    /// Compile the catastrophic rules for a configuration
    pub fn for_config(config: &Config) -> Result<Self> {
        Self::compile(catastrophic::rules(&config.rm.system_dirs))
    }

    /// The first rule, in table order, that matches anywhere in the command
    pub fn first_match(&self, command: &str) -> Option<&Rule> {
        self.set
            .matches(command)
            .iter()
            .next()
            .and_then(|idx| self.rules.get(idx))
    }

    /// All rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
