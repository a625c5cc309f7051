//! Team identifier lookup from the environment

use crate::models::TEAM_ENV_VAR;
use std::env;

/// Read the team identifier, loading a local `.env` file first if one
/// exists. A missing `.env` is not an error.
pub fn team_from_env() -> Option<String> {
    let _ = dotenvy::dotenv();
    env::var(TEAM_ENV_VAR).ok()
}
