//! Pre-build sanity checks
//!
//! Each check gates the pipeline: the first failure stops the run before
//! any external process is invoked.

use crate::models::Config;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref APP_NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9\s]+$").unwrap();
    // Unanchored: any run of ten consecutive alphanumerics qualifies.
    static ref TEAM_ID_RE: Regex = Regex::new(r"[A-Za-z0-9]{10}").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("Could not find srcDir: {0}")]
    MissingSourceDir(String),
    #[error("Could not find {0}")]
    MissingManifest(String),
    #[error("Invalid app name: {0}")]
    InvalidAppName(String),
    #[error("Invalid team: {0}")]
    InvalidTeam(String),
}

/// Run all sanity checks in order, stopping at the first failure:
/// source directory, manifest file, app name shape, team identifier.
pub fn check_preconditions(config: &Config) -> Result<(), CheckError> {
    let src_dir = config.src_dir_path();
    if !src_dir.exists() {
        return Err(CheckError::MissingSourceDir(config.src_dir.clone()));
    }

    let manifest = config.manifest_path();
    if !manifest.exists() {
        return Err(CheckError::MissingManifest(manifest.display().to_string()));
    }

    if !APP_NAME_RE.is_match(&config.app_name) {
        return Err(CheckError::InvalidAppName(config.app_name.clone()));
    }

    match config.team.as_deref() {
        Some(team) if TEAM_ID_RE.is_match(team) => Ok(()),
        other => Err(CheckError::InvalidTeam(
            other.unwrap_or("unset").to_string(),
        )),
    }
}
