//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use treecheck::config::{local_config_path, Settings, LOCAL_CONFIG_FILE};

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_local_config_with_graph_file_when_load_then_overrides_only_graph() {
    // Arrange
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        r#"graph_file = "data/edges.txt""#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.graph_file, PathBuf::from("data/edges.txt"));
    assert_eq!(settings.tree_file, PathBuf::from("tree.txt"));
}

#[test]
fn given_local_config_with_home_variable_when_load_then_expands() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "tree_file = \"$HOME/trees/candidate.txt\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    let home = std::env::var("HOME").expect("HOME should be set");
    assert_eq!(
        settings.tree_file,
        PathBuf::from(format!("{home}/trees/candidate.txt"))
    );
}

#[test]
fn given_invalid_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG_FILE), "graph_file = [").unwrap();

    let err = Settings::load(Some(dir.path())).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"), "{err}");
}

#[test]
fn given_directory_when_local_config_path_then_joins_file_name() {
    let path = local_config_path(std::path::Path::new("/work"));
    assert_eq!(path, PathBuf::from("/work/.treecheck.toml"));
}
