//! Per-crate build checks.
//!
//! Each crate is checked on its own so a dependency that only compiles
//! because a sibling enables a feature is caught before release.

use std::process::Command;

/// Workspace crates, leaf first.
const CRATES: &[&str] = &["orion-domain", "orion-core", "orion-infra", "orion-app"];

pub fn check_each_crate() -> anyhow::Result<()> {
    println!("Checking {} workspace crates in isolation...", CRATES.len());

    let mut failures = Vec::new();
    for (index, name) in CRATES.iter().enumerate() {
        println!("\n[{}/{}] cargo check -p {name} --all-targets", index + 1, CRATES.len());

        let status = Command::new("cargo").args(["check", "-p", name, "--all-targets"]).status()?;
        if !status.success() {
            failures.push(*name);
        }
    }

    if failures.is_empty() {
        println!("\n✓ Every crate builds on its own");
        Ok(())
    } else {
        anyhow::bail!("crate checks failed: {}", failures.join(", "))
    }
}
