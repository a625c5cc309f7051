//! Blocking subprocess invocation
//!
//! Every invocation inherits stdio and blocks until the child exits;
//! there are no timeouts and no cancellation.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Run a user-supplied shell command in the working directory.
pub fn run_shell(command: &str) -> Result<()> {
    let status = Command::new("sh")
        .args(["-c", command])
        .status()
        .with_context(|| format!("Failed to spawn shell for `{command}`"))?;

    if !status.success() {
        bail!("Command `{command}` exited with {status}");
    }
    Ok(())
}

/// Run a resolved tool with arguments, optionally in a working directory.
pub fn run_tool(program: &Path, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to spawn {}", program.display()))?;

    if !status.success() {
        bail!("{} exited with {status}", program.display());
    }
    Ok(())
}
