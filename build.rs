//! Build script for tc-client-generator.
//! Injects the git revision of the checkout as `TC_CLIENT_GENERATOR_REVISION`
//! so the version name can link to the exact commit.

use std::env;
use std::fs;
use std::process::Command;

const REVISION_VAR: &str = "TC_CLIENT_GENERATOR_REVISION";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", REVISION_VAR);

    // An explicitly provided revision (e.g. from a release pipeline) wins
    if let Ok(revision) = env::var(REVISION_VAR) {
        println!("cargo:rustc-env={}={}", REVISION_VAR, revision.trim());
        return;
    }

    if let Some(revision) = git_revision() {
        watch_git_head();
        println!("cargo:rustc-env={}={}", REVISION_VAR, revision);
    }
}

/// Reruns when HEAD moves: on checkout (`.git/HEAD`) and on commits to the
/// checked out branch (the ref HEAD points to, and the HEAD reflog).
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/logs/HEAD");

    if let Ok(head) = fs::read_to_string(".git/HEAD") {
        if let Some(reference) = head.trim().strip_prefix("ref: ") {
            println!("cargo:rerun-if-changed=.git/{}", reference);
        }
    }
}

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if revision.is_empty() {
        None
    } else {
        Some(revision)
    }
}
