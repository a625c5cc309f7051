//! Build configuration record

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed relative path of the configuration file.
pub const CONFIG_FILE: &str = "ext2safari.json";

/// Environment variable supplying the code-signing team identifier.
pub const TEAM_ENV_VAR: &str = "DEVELOPMENT_TEAM";

/// Per-run build configuration, loaded once and read-only afterwards.
///
/// Field names follow the on-disk JSON shape. The team identifier is
/// merged from [`TEAM_ENV_VAR`] after load and never written back to
/// the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension source directory.
    #[serde(rename = "srcDir")]
    pub src_dir: String,

    /// Output directory, recreated from scratch on every run.
    #[serde(rename = "buildDir")]
    pub build_dir: String,

    /// Application display name. Letters, digits and whitespace only.
    #[serde(rename = "appName")]
    pub app_name: String,

    /// Optional shell command run before conversion.
    #[serde(rename = "buildCommand")]
    pub build_command: Option<String>,

    /// Code-signing team identifier from the environment.
    #[serde(skip)]
    pub team: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: "./src".to_string(),
            build_dir: "build".to_string(),
            app_name: "My App".to_string(),
            build_command: None,
            team: None,
        }
    }
}

impl Config {
    pub fn src_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.src_dir)
    }

    pub fn build_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.build_dir)
    }

    /// `manifest.json` inside the source directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.src_dir_path().join("manifest.json")
    }

    /// The Xcode project directory the converter creates, named after
    /// the application.
    pub fn project_dir(&self) -> PathBuf {
        self.build_dir_path().join(&self.app_name)
    }

    /// Where `xcodebuild` leaves the Release output.
    pub fn release_dir(&self) -> PathBuf {
        self.project_dir().join("build").join("Release")
    }

    /// The compiled application bundle expected after a native build.
    pub fn app_bundle_path(&self) -> PathBuf {
        self.release_dir().join(format!("{}.app", self.app_name))
    }

    /// The `xcodebuild` target name for the macOS app.
    pub fn macos_target(&self) -> String {
        format!("{} (macOS)", self.app_name)
    }
}
