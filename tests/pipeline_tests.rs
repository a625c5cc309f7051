//! Scenario tests for the build pipeline's filesystem behavior
//!
//! These cover everything short of invoking the Apple toolchain: config
//! generation, sanity gating, build dir cleaning and the final flatten
//! of the Xcode Release output.

use ext2safari::packager::{clean_build_dir, flatten_release};
use ext2safari::parser::{load_config, write_default_config};
use ext2safari::validator::{check_preconditions, CheckError};
use ext2safari::Config;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Config rooted in a temp dir, with the documented scenario values.
fn demo_config(dir: &TempDir) -> Config {
    Config {
        src_dir: dir.path().join("src").to_string_lossy().into_owned(),
        build_dir: dir.path().join("build").to_string_lossy().into_owned(),
        app_name: "Demo App".to_string(),
        build_command: None,
        team: Some("ABCDEFGHIJ".to_string()),
    }
}

/// Lay down a minimal extension source tree.
fn create_extension_source(config: &Config) {
    fs::create_dir_all(config.src_dir_path()).unwrap();
    fs::write(config.manifest_path(), r#"{"manifest_version": 3}"#).unwrap();
}

/// Lay down the tree xcodebuild leaves behind on success.
fn create_xcode_output(config: &Config, with_app_bundle: bool) {
    let release = config.release_dir();
    fs::create_dir_all(&release).unwrap();
    fs::write(release.join("extra.txt"), "resource").unwrap();
    if with_app_bundle {
        let contents = config.app_bundle_path().join("Contents");
        fs::create_dir_all(&contents).unwrap();
        fs::write(contents.join("Info.plist"), "<plist/>").unwrap();
    }
    // Project-level files that must disappear with the intermediate dir.
    fs::write(
        config.project_dir().join("project.pbxproj"),
        "// project",
    )
    .unwrap();
}

#[test]
fn documented_scenario_passes_sanity_checks() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(&dir);
    create_extension_source(&config);

    assert_eq!(check_preconditions(&config), Ok(()));
}

#[test]
fn short_team_fails_sanity_checks() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        team: Some("ABC123".to_string()),
        ..demo_config(&dir)
    };
    create_extension_source(&config);

    assert_eq!(
        check_preconditions(&config),
        Err(CheckError::InvalidTeam("ABC123".to_string()))
    );
}

#[test]
fn punctuated_app_name_fails_sanity_checks() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        app_name: "Demo/App".to_string(),
        ..demo_config(&dir)
    };
    create_extension_source(&config);

    assert_eq!(
        check_preconditions(&config),
        Err(CheckError::InvalidAppName("Demo/App".to_string()))
    );
}

#[test]
fn stale_build_dir_is_removed_before_prebuild() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(&dir);
    fs::create_dir_all(config.build_dir_path().join("old")).unwrap();
    fs::write(config.build_dir_path().join("old/artifact"), "stale").unwrap();

    assert!(clean_build_dir(&config.build_dir_path()).unwrap());
    assert!(!config.build_dir_path().exists());
}

#[test]
fn successful_build_flattens_release_into_build_dir() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(&dir);
    create_xcode_output(&config, true);
    assert!(config.app_bundle_path().exists());

    flatten_release(&config).unwrap();

    let build_dir = config.build_dir_path();
    assert_eq!(
        fs::read_to_string(build_dir.join("Demo App.app/Contents/Info.plist")).unwrap(),
        "<plist/>"
    );
    assert_eq!(
        fs::read_to_string(build_dir.join("extra.txt")).unwrap(),
        "resource"
    );
    assert!(!config.project_dir().exists());
}

#[test]
fn missing_app_bundle_leaves_intermediate_tree_in_place() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(&dir);
    create_xcode_output(&config, false);

    // The driver only flattens when the bundle exists; with it missing
    // the intermediate tree stays as xcodebuild left it.
    assert!(!config.app_bundle_path().exists());
    assert!(config.release_dir().join("extra.txt").exists());
    assert!(config.project_dir().join("project.pbxproj").exists());
}

#[test]
fn generated_default_config_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ext2safari.json");

    write_default_config(&path).unwrap();
    let config = load_config(&path).unwrap();

    assert_eq!(config.src_dir, "./src");
    assert_eq!(config.build_dir, "build");
    assert_eq!(config.app_name, "My App");
    assert_eq!(config.build_command, None);
    assert_eq!(config.team, None);
}

#[test]
fn expected_bundle_path_follows_app_name() {
    let dir = TempDir::new().unwrap();
    let config = demo_config(&dir);

    let expected = Path::new(&config.build_dir)
        .join("Demo App")
        .join("build")
        .join("Release")
        .join("Demo App.app");
    assert_eq!(config.app_bundle_path(), expected);
}
