//! Integration tests for Bash command checks

use command_guard::{CommandGuard, HookInput};

fn engine() -> CommandGuard {
    CommandGuard::builtin().unwrap()
}

fn check_bash(command: &str) -> bool {
    let json = serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": command },
    });
    let input = HookInput::from_json(&json.to_string()).unwrap();
    engine().check(&input).is_allow()
}

fn blocked_by(command: &str) -> Option<String> {
    engine().check_command(command).rule_id().map(String::from)
}

// ============================================================================
// Disk destruction
// ============================================================================

#[test]
fn test_dd_disk_blocked() {
    assert!(!check_bash("dd if=/dev/zero of=/dev/sda"));
    assert!(!check_bash("dd if=/dev/urandom of=/dev/hda bs=1M"));
    assert!(!check_bash("dd if=/dev/zero of=/dev/nvme0n1"));
}

#[test]
fn test_dd_to_file_allowed() {
    assert!(check_bash("dd if=/dev/zero of=./disk.img bs=1M count=16"));
}

#[test]
fn test_mkfs_blocked() {
    assert!(!check_bash("mkfs /dev/sda1"));
    assert!(!check_bash("mkfs.ext4 /dev/sdb"));
}

#[test]
fn test_redirect_to_disk_blocked() {
    assert!(!check_bash("cat /dev/urandom > /dev/sda"));
    assert!(check_bash("make 2> /dev/null"));
}

// ============================================================================
// Fork bomb
// ============================================================================

#[test]
fn test_fork_bomb_blocked() {
    assert!(!check_bash(":(){ :|:& };:"));
    assert!(!check_bash(":() { :|:& };:"));
    assert_eq!(blocked_by(":(){ :|:& };:").as_deref(), Some("fork-bomb"));
}

// ============================================================================
// Root, home and system directory deletion
// ============================================================================

#[test]
fn test_rm_rf_root_blocked() {
    assert!(!check_bash("rm -rf /"));
    assert!(!check_bash("rm -fr /"));
    assert!(!check_bash("rm -r -f /"));
    assert!(!check_bash("sudo rm -rf / --no-preserve-root"));
    assert_eq!(blocked_by("rm -rf /").as_deref(), Some("rm-root"));
}

#[test]
fn test_rm_rf_home_blocked() {
    assert!(!check_bash("rm -rf ~"));
    assert!(!check_bash("rm -rf ~/"));
    assert_eq!(blocked_by("rm -rf ~").as_deref(), Some("rm-home"));
}

#[test]
fn test_rm_root_wildcard_blocked() {
    assert_eq!(blocked_by("rm -rf /*").as_deref(), Some("rm-root-wildcard"));
}

#[test]
fn test_rm_system_dirs_blocked() {
    for dir in ["/etc", "/usr", "/var", "/bin", "/boot"] {
        let command = format!("rm -rf {}", dir);
        assert_eq!(blocked_by(&command).as_deref(), Some("rm-system-dir"), "{}", command);
    }
    // Non-forced recursive delete is still caught by the rule table
    assert!(!check_bash("rm -r /etc"));
}

// ============================================================================
// rm -rf target audit
// ============================================================================

#[test]
fn test_rm_rf_safe_targets_allowed() {
    assert!(check_bash("rm -rf node_modules"));
    assert!(check_bash("rm -rf dist build"));
    assert!(check_bash("rm -rf ./node_modules/ ./.next"));
    assert!(check_bash("rm -Rf target"));
    assert!(check_bash("rm -r -f __pycache__"));
}

#[test]
fn test_rm_rf_unsafe_target_blocked() {
    assert!(!check_bash("rm -rf src"));
    assert!(!check_bash("rm -rf ~/projects"));
    assert!(!check_bash("rm -rf /tmp/build-output"));
    assert_eq!(blocked_by("rm -rf src").as_deref(), Some("rm-unsafe-target"));
}

#[test]
fn test_rm_rf_mixed_targets_blocked() {
    assert!(!check_bash("rm -rf node_modules /etc"));
    assert!(!check_bash("rm -rf dist src"));
}

#[test]
fn test_rm_without_force_not_audited() {
    assert!(check_bash("rm -r src"));
    assert!(check_bash("rm -f notes.txt"));
    assert!(check_bash("rm file.txt"));
}

#[test]
fn test_compound_commands() {
    assert!(check_bash("echo hello && rm -rf dist"));
    assert!(check_bash("rm -rf dist; npm run build"));
    assert!(!check_bash("echo hello && rm -rf /"));
    assert!(!check_bash("rm -rf dist && rm -rf src"));
    assert!(!check_bash("ls | rm -rf lib"));
}

// ============================================================================
// Pass-through
// ============================================================================

#[test]
fn test_common_commands_allowed() {
    for command in [
        "ls -la",
        "git status",
        "npm install",
        "cargo build --release",
        "cat /dev/sda1.log",
        "echo 'hello world'",
    ] {
        assert!(check_bash(command), "{}", command);
    }
}

#[test]
fn test_non_bash_tools_pass_through() {
    for tool in ["Read", "Write", "Edit", "bash", ""] {
        let json = serde_json::json!({
            "tool_name": tool,
            "tool_input": { "command": "rm -rf /" },
        });
        let input = HookInput::from_json(&json.to_string()).unwrap();
        assert!(engine().check(&input).is_allow(), "{}", tool);
    }
}

#[test]
fn test_missing_command_allowed() {
    let input = HookInput::from_json(r#"{"tool_name":"Bash","tool_input":{}}"#).unwrap();
    assert!(engine().check(&input).is_allow());

    let input = HookInput::from_json(r#"{"tool_name":"Bash"}"#).unwrap();
    assert!(engine().check(&input).is_allow());
}

#[test]
fn test_decision_is_stable() {
    let guard = engine();
    for command in ["rm -rf /", "rm -rf node_modules", "rm -rf node_modules /etc"] {
        assert_eq!(guard.check_command(command), guard.check_command(command));
    }
}
