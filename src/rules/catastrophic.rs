//! Catastrophic command rules
//!
//! Only irreversible, machine-destroying operations live here: disk wipes,
//! fork bombs, and recursive deletion of the root, home, or system
//! directories. Stricter project-level hooks cover everything else.

use crate::rules::Rule;

/// Raw block device: `/dev/` plus a SCSI/SATA (`sd`) or IDE (`hd`) disk prefix
const DISK_DEVICE: &str = r"/dev/[sh]d";

/// `rm` followed by option tokens, at least one of which is recursive
const RM_RECURSIVE: &str =
    r"\brm\s+(?:-\S+\s+)*(?:-[a-zA-Z]*[rR][a-zA-Z]*|--recursive)\s+(?:-\S+\s+)*";

/// End of the sole argument: trailing options, then end of text or a control operator
const SOLE_ARG_END: &str = r"(?:\s+-\S+)*\s*(?:$|[;&|])";

/// Build the rule table, in reporting order
pub fn rules(system_dirs: &[String]) -> Vec<Rule> {
    let mut rules = vec![
        // Disk/system destruction
        Rule::new(
            "dd-disk-device",
            format!(r"\bdd\s+.*of={DISK_DEVICE}"),
            "dd writing to disk device",
        ),
        Rule::new(
            "dd-disk-wipe",
            r"\bdd\s+.*if=/dev/zero.*of=/dev/",
            "dd disk wiping",
        ),
        Rule::new(
            "mkfs-disk-device",
            format!(r"\bmkfs(?:\.\w+)?\s[^;&|]*{DISK_DEVICE}"),
            "formatting disk",
        ),
        Rule::new(
            "redirect-disk-device",
            format!(r">\s*{DISK_DEVICE}"),
            "redirecting to disk device",
        ),
        // Fork bomb
        Rule::new(
            "fork-bomb",
            r":\(\)\s*\{\s*:\s*\|\s*:\s*&\s*\}",
            "fork bomb",
        ),
        // Root and home deletion
        Rule::new(
            "rm-root",
            format!(r"{RM_RECURSIVE}/{SOLE_ARG_END}"),
            "recursive delete of the root filesystem",
        ),
        Rule::new(
            "rm-home",
            format!(r"{RM_RECURSIVE}(?:~|\$HOME|\$\{{HOME\}})/?{SOLE_ARG_END}"),
            "recursive delete of the home directory",
        ),
        Rule::new(
            "rm-root-wildcard",
            format!(r"{RM_RECURSIVE}/\*{SOLE_ARG_END}"),
            "recursive delete of everything under /",
        ),
    ];
    rules.extend(system_dir_rule(system_dirs));
    rules
}

/// Recursive delete whose sole argument is one of the given top-level directories
fn system_dir_rule(system_dirs: &[String]) -> Option<Rule> {
    let dirs = system_dirs
        .iter()
        .map(|d| d.trim_end_matches('/'))
        .filter(|d| !d.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>();

    // An empty alternation would match every recursive rm
    if dirs.is_empty() {
        return None;
    }

    Some(Rule::new(
        "rm-system-dir",
        format!(r"{RM_RECURSIVE}(?:{})/?{SOLE_ARG_END}", dirs.join("|")),
        "recursive delete of a system directory",
    ))
}
