//! command-guard - Global PreToolUse hook that blocks catastrophic commands
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads JSON from stdin, exit 2 = block, exit 0 = allow)
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | command-guard
//!
//! # Check a command directly
//! command-guard --check 'rm -rf node_modules'
//! ```

use std::env;
use std::io::{self, Read};
use std::panic;
use std::process;

use command_guard::{CommandGuard, Decision, HookInput, HookOutput, EXIT_ALLOW};

/// Print version information
fn print_version() {
    println!("command-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"command-guard - Global PreToolUse hook that blocks catastrophic commands

USAGE:
    command-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -l, --list-rules        List blocking rules and safe rm -rf targets
    -c, --check COMMAND     Check a command directly instead of reading stdin

EXIT STATUS:
    0   allow (also for malformed input and non-shell tools)
    2   block (reason is written to stderr)

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{ "type": "command", "command": "command-guard" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
#[derive(Debug, Default)]
struct Args {
    help: bool,
    version: bool,
    list_rules: bool,
    check: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-l" | "--list-rules" => result.list_rules = true,
                "-c" | "--check" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.check = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--check=") => {
                    result.check = Some(arg.trim_start_matches("--check=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// Print the rule table and the safe-target set
fn print_rules(guard: &CommandGuard) {
    println!("Blocking rules (first match is reported):");
    for rule in guard.rules().rules() {
        println!("    {:<22} {}", rule.id, rule.reason);
    }
    println!();
    println!("Safe rm -rf targets:");
    println!("    {}", guard.config().safe_target_list());
}

/// Read the whole hook payload and decide; anything unreadable is allowed
fn decide_from_stdin(guard: &CommandGuard) -> Decision {
    let mut input_json = String::new();
    if io::stdin().read_to_string(&mut input_json).is_err() {
        return Decision::allow("unreadable input");
    }

    match HookInput::from_json(&input_json) {
        Ok(input) => guard.check(&input),
        Err(_) => Decision::allow("malformed input - nothing to check"),
    }
}

fn run(args: &Args) -> i32 {
    if args.help {
        print_help();
        return EXIT_ALLOW;
    }

    if args.version {
        print_version();
        return EXIT_ALLOW;
    }

    let guard = match CommandGuard::builtin() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: command-guard is inactive: {}", e);
            return EXIT_ALLOW;
        }
    };

    if args.list_rules {
        print_rules(&guard);
        return EXIT_ALLOW;
    }

    let decision = match &args.check {
        Some(command) => guard.check_command(command),
        None => decide_from_stdin(&guard),
    };

    let output = HookOutput::from_decision(&decision);
    let _ = output.write_to(&mut io::stderr().lock());
    output.exit_code
}

fn main() {
    let args = Args::parse();

    // A fault inside the guard must still end in a definite exit status
    let code = panic::catch_unwind(|| run(&args)).unwrap_or(EXIT_ALLOW);
    process::exit(code);
}
