//! External build tool discovery

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use thiserror::Error;

/// Apple's tool runner; hosts `safari-web-extension-converter`.
pub const XCRUN: &str = "xcrun";

/// Xcode's command line project builder.
pub const XCODEBUILD: &str = "xcodebuild";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("required tool not found on PATH: {0}")]
    NotFound(String),
}

/// Resolve a named executable to an absolute path by scanning `PATH`.
pub fn find_executable(name: &str) -> Result<PathBuf, ToolError> {
    let path = env::var_os("PATH").unwrap_or_default();
    find_in_path(&path, name)
}

fn find_in_path(path: &OsStr, name: &str) -> Result<PathBuf, ToolError> {
    for dir in env::split_paths(path) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ToolError::NotFound(name.to_string()))
}
