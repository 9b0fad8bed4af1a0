use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let is_dirty = git(&["status", "--porcelain"])
        .map(|out| !out.is_empty())
        .unwrap_or(false);

    // Release builds report the bare version; dev builds append the commit.
    let version = env!("CARGO_PKG_VERSION");
    let tag = format!("v{}", version);
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| tags.lines().any(|t| t == tag || t == version))
        .unwrap_or(false);

    let long_version = if hash.is_empty() || (tagged && !is_dirty) {
        version.to_string()
    } else {
        format!("{}-dev+{}", version, hash)
    };

    println!("cargo:rustc-env=PASTEBOX_LONG_VERSION={}", long_version);
}
