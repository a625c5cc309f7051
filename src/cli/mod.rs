//! Pipeline driver
//!
//! Resolves the run configuration and executes the fixed build step
//! sequence, reporting each step on the terminal. Configuration and
//! sanity failures terminate the process directly with exit code 1;
//! tool and subprocess failures propagate to `main` as raw errors.

pub mod output;

use crate::models::{Config, CONFIG_FILE, TEAM_ENV_VAR};
use crate::{packager, parser, process, tools, validator};
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::process::exit;

/// Resolve the run configuration.
///
/// First run: writes the default config file and exits 1 so the user
/// can edit it. Subsequent runs: loads the file and merges the team
/// identifier from the environment, exiting 1 when the variable is
/// absent.
pub fn resolve_config() -> Result<Config> {
    let config_path = Path::new(CONFIG_FILE);
    if !config_path.exists() {
        parser::write_default_config(config_path)?;
        output::notice_box(&[
            "No config detected".to_string(),
            "Generating default config".to_string(),
            format!("Please see {}", CONFIG_FILE.blue()),
        ]);
        exit(1);
    }

    let mut config = parser::load_config(config_path)?;
    match parser::team_from_env() {
        Some(team) => config.team = Some(team),
        None => {
            println!(
                "{}",
                format!(
                    "No {TEAM_ENV_VAR} environment variable found; please set this \
                     variable or use .env to do so and try again"
                )
                .red()
            );
            exit(1);
        }
    }

    let mut dump =
        serde_json::to_value(&config).context("Failed to serialize configuration")?;
    dump["team"] = serde_json::Value::String(config.team.clone().unwrap_or_default());
    let mut lines = vec!["Configuration found!".to_string()];
    lines.extend(
        serde_json::to_string_pretty(&dump)
            .context("Failed to serialize configuration")?
            .lines()
            .map(str::to_string),
    );
    output::notice_box(&lines);

    Ok(config)
}

/// Execute the build pipeline with a resolved configuration.
pub fn run(config: &Config) -> Result<()> {
    let spinner = output::step_spinner("Doing sanity checks");
    if let Err(err) = validator::check_preconditions(config) {
        output::fail(&spinner, &err.to_string());
        exit(1);
    }
    output::succeed(&spinner, "Sanity checks passed");

    if config.build_dir_path().exists() {
        let spinner = output::step_spinner("Cleaning build dir");
        packager::clean_build_dir(&config.build_dir_path())?;
        output::succeed(&spinner, "Build dir cleaned");
    }

    if let Some(command) = &config.build_command {
        let spinner = output::step_spinner("Building base extension");
        process::run_shell(command)?;
        output::succeed(&spinner, "Built base extension");
    }

    let spinner = output::step_spinner("Finding XCRun");
    let xcrun = tools::find_executable(tools::XCRUN)?;
    output::succeed(&spinner, &format!("XCRun: {}", xcrun.display()));

    let spinner = output::step_spinner("Finding XCodeBuild");
    let xcodebuild = tools::find_executable(tools::XCODEBUILD)?;
    output::succeed(&spinner, &format!("XCodeBuild: {}", xcodebuild.display()));

    let spinner = output::step_spinner("Converting extension");
    process::run_tool(
        &xcrun,
        &[
            "safari-web-extension-converter",
            "--project-location",
            &config.build_dir,
            "--app-name",
            &config.app_name,
            "--no-prompt",
            "--force",
            "--no-open",
            &config.src_dir,
        ],
        None,
    )?;
    output::succeed(&spinner, "Extension converted");

    let spinner = output::step_spinner("Building extension");
    let target = config.macos_target();
    let team_setting = format!(
        "{TEAM_ENV_VAR}={}",
        config.team.as_deref().unwrap_or_default()
    );
    process::run_tool(
        &xcodebuild,
        &["-target", &target, &team_setting],
        Some(&config.project_dir()),
    )?;

    if config.app_bundle_path().exists() {
        output::succeed(&spinner, "Extension built");
        let spinner = output::step_spinner("Cleaning up after build");
        packager::flatten_release(config)?;
        output::succeed(&spinner, "All done!");
    } else {
        // Reported but deliberately not fatal; the closing notice and
        // the zero exit code still follow.
        output::fail(&spinner, "Failed to build extension");
    }

    output::notice_box(&[
        format!("{}: The app will still be tied to this directory", "NOTE".blue()),
        "Any changes made to this directory will be reflected in Safari immediately"
            .to_string(),
    ]);

    Ok(())
}
