use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

// ---------------------------------------------------------------------------
// Functional Core
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckId {
    Fmt,
    Clippy,
    Test,
}

/// Ordered lint pipeline; the first failure stops the run.
const PIPELINE: [CheckId; 3] = [CheckId::Fmt, CheckId::Clippy, CheckId::Test];

fn should_skip(id: CheckId, args: &LintArgs) -> bool {
    match id {
        CheckId::Fmt => args.no_fmt,
        CheckId::Clippy => args.no_clippy,
        CheckId::Test => args.no_test,
    }
}

/// Cargo arguments for a check, honoring `--fix`.
fn cargo_args(id: CheckId, fix: bool) -> Vec<&'static str> {
    match (id, fix) {
        (CheckId::Fmt, false) => vec!["fmt", "--all", "--check"],
        (CheckId::Fmt, true) => vec!["fmt", "--all"],
        (CheckId::Clippy, false) => vec!["clippy", "--all-targets", "--", "-D", "warnings"],
        (CheckId::Clippy, true) => vec![
            "clippy",
            "--all-targets",
            "--fix",
            "--allow-dirty",
            "--",
            "-D",
            "warnings",
        ],
        (CheckId::Test, _) => vec!["test", "--all-targets"],
    }
}

fn display_name(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

// ---------------------------------------------------------------------------
// Imperative Shell
// ---------------------------------------------------------------------------

pub fn run(args: &LintArgs) -> Result<()> {
    for id in PIPELINE {
        if should_skip(id, args) {
            continue;
        }

        let cargo = cargo_args(id, args.fix);
        let name = display_name(&cargo);

        let output = cmd("cargo", &cargo)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            print!("{text}");
            return Err(eyre!("lint failed at: {name}"));
        }

        if args.verbose {
            print!("{text}");
        }
        println!("[ok] {name}");
    }

    Ok(())
}
