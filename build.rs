use std::env;
use std::process::Command;

fn main() {
    // `--version` reads "0.1.0 (abc1234)" in a checkout, plain "0.1.0" elsewhere
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let long_version = match short_git_hash() {
        Some(hash) => format!("{version} ({hash})"),
        None => version,
    };

    println!("cargo:rustc-env=ANAGRIND_VERSION={long_version}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}
