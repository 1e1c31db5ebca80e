use std::env;
use std::process::Command;

const ENV_PREFIX: &str = "CAMPAIGN_CALENDAR_BUILD";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let git_status = command_stdout("git", &["status", "--porcelain"])
        .map(|status| if status.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown")
        .to_string();
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".to_string());
    let rustc = command_stdout("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());

    for (key, value) in [
        ("HASH", git_hash),
        ("STATUS", git_status),
        ("TIMESTAMP", timestamp),
        ("TARGET", target),
        ("PROFILE", profile),
        ("RUSTC", rustc),
    ] {
        println!("cargo:rustc-env={ENV_PREFIX}_{key}={value}");
    }
}

/// Runs a command and returns its trimmed stdout when it succeeds.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
