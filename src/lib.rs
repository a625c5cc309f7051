//! Web Extension to Safari App Extension Builder
//!
//! Drives Apple's `safari-web-extension-converter` and `xcodebuild` over a
//! web extension source tree, then flattens the Xcode Release output into
//! the configured build directory. The whole program is one linear,
//! synchronous pipeline: precondition checks, external tool invocations,
//! filesystem moves, each step gating the next.

pub mod cli;
pub mod models;
pub mod packager;
pub mod parser;
pub mod process;
pub mod tools;
pub mod validator;

pub use models::{Config, CONFIG_FILE, TEAM_ENV_VAR};
pub use tools::ToolError;
pub use validator::CheckError;
