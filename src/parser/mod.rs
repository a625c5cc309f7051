//! Configuration and environment input parsing

pub mod config;
pub mod env_file;

pub use config::{load_config, parse_config, write_default_config};
pub use env_file::team_from_env;
