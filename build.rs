use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // Release builds report the plain crate version; debug builds carry the commit
    let stamped = if profile == "debug" {
        let hash = git_stdout(&["rev-parse", "--short=8", "HEAD"])
            .unwrap_or_else(|| "unknown".to_string());
        let suffix = if worktree_dirty() { ".dirty" } else { "" };
        format!("{}-dev+{}{}", version, hash, suffix)
    } else {
        version
    };

    println!("cargo:rustc-env=AGENTSPACE_VERSION={}", stamped);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn git_stdout(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn worktree_dirty() -> bool {
    [&["diff", "--quiet"][..], &["diff", "--cached", "--quiet"][..]]
        .iter()
        .any(|args| {
            Command::new("git")
                .args(*args)
                .status()
                .map(|status| !status.success())
                .unwrap_or(false)
        })
}
