use std::process::Command;

fn main() {
    // Priority: APP_VERSION env > git tag > Cargo.toml version
    let version = std::env::var("APP_VERSION")
        .ok()
        .map(|v| v.strip_prefix('v').unwrap_or(&v).to_string())
        .or_else(|| git(&["describe", "--tags", "--abbrev=0"]))
        .map(|v| v.strip_prefix('v').unwrap_or(&v).to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    let commit = std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    let build_date = std::env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());

    println!("cargo:rustc-env=APP_VERSION={}", version);
    println!("cargo:rustc-env=GIT_COMMIT={}", commit);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-env-changed=APP_VERSION");
    println!("cargo:rerun-if-env-changed=GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}
