//! Recursive force delete auditing
//!
//! `rm -rf` is routine in build scripts, so instead of blocking it outright
//! every target must be a known-safe artifact directory. Targets are found
//! by splitting on whitespace up to the next `&&`, `;` or `|`; quoting is not
//! interpreted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::output::Decision;

/// Rule ID reported when a target is not allowlisted
pub const RULE_ID: &str = "rm-unsafe-target";

/// An `rm` invocation: its option cluster, then its arguments up to a control operator
static RM_INVOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\brm((?:\s+-[a-zA-Z-]+)+)([^;&|]*)").unwrap());

/// Recursive and force flags seen in an option cluster
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Flags {
    recursive: bool,
    force: bool,
}

impl Flags {
    fn parse(cluster: &str) -> Self {
        let mut flags = Flags::default();

        for token in cluster.split_whitespace() {
            if let Some(long) = token.strip_prefix("--") {
                match long {
                    "recursive" => flags.recursive = true,
                    "force" => flags.force = true,
                    _ => {}
                }
            } else if let Some(short) = token.strip_prefix('-') {
                for c in short.chars() {
                    match c {
                        'r' | 'R' => flags.recursive = true,
                        'f' => flags.force = true,
                        _ => {}
                    }
                }
            }
        }

        flags
    }

    fn is_recursive_force(self) -> bool {
        self.recursive && self.force
    }
}

/// Final path component after dropping trailing separators
pub fn target_basename(target: &str) -> &str {
    let trimmed = target.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Targets of every recursive force delete in the command, in order
pub fn recursive_force_targets(command: &str) -> Vec<&str> {
    let mut targets = Vec::new();

    for caps in RM_INVOCATION.captures_iter(command) {
        let cluster = caps.get(1).map_or("", |m| m.as_str());
        if !Flags::parse(cluster).is_recursive_force() {
            continue;
        }

        let args = caps.get(2).map_or("", |m| m.as_str());
        targets.extend(args.split_whitespace().filter(|arg| !arg.starts_with('-')));
    }

    targets
}

/// Audit recursive force deletes against the safe-target set
///
/// Returns `None` when the command has no `rm -rf` or every target is safe.
pub fn audit(command: &str, config: &Config) -> Option<Decision> {
    let offending = recursive_force_targets(command)
        .into_iter()
        .find(|target| !config.is_safe_target(target_basename(target)))?;

    let basename = target_basename(offending);
    let shown = if basename.is_empty() { offending } else { basename };

    Some(Decision::block(
        RULE_ID,
        format!(
            "rm -rf target '{}' is not a known-safe directory (allowed: {})",
            shown,
            config.safe_target_list()
        ),
    ))
}
