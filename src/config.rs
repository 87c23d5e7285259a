//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treecheck/treecheck.toml`
//! 3. Local config: `<dir>/.treecheck.toml` (working directory)
//! 4. Environment variables: `TREECHECK_*` prefix
//! 5. Command line arguments (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Default reference graph file name.
pub const DEFAULT_GRAPH_FILE: &str = "graph.txt";

/// Default candidate tree file name.
pub const DEFAULT_TREE_FILE: &str = "tree.txt";

/// Name of the local config file.
pub const LOCAL_CONFIG_FILE: &str = ".treecheck.toml";

/// Unified configuration for treecheck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reference graph edge list (default: graph.txt)
    pub graph_file: PathBuf,
    /// Candidate tree edge list (default: tree.txt)
    pub tree_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graph_file: PathBuf::from(DEFAULT_GRAPH_FILE),
            tree_file: PathBuf::from(DEFAULT_TREE_FILE),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub graph_file: Option<PathBuf>,
    pub tree_file: Option<PathBuf>,
}

/// Get the XDG config directory for treecheck.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treecheck").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treecheck.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path fields.
    fn expand_paths(&mut self) {
        self.graph_file = PathBuf::from(expand_env_vars(&self.graph_file.to_string_lossy()));
        self.tree_file = PathBuf::from(expand_env_vars(&self.tree_file.to_string_lossy()));
    }

    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            graph_file: overlay
                .graph_file
                .clone()
                .unwrap_or_else(|| self.graph_file.clone()),
            tree_file: overlay
                .tree_file
                .clone()
                .unwrap_or_else(|| self.tree_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treecheck.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply TREECHECK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREECHECK").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("graph_file") {
            settings.graph_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("tree_file") {
            settings.tree_file = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treecheck configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treecheck/treecheck.toml
#   Local:  ./.treecheck.toml
#   Env:    TREECHECK_GRAPH_FILE, TREECHECK_TREE_FILE
#   CLI:    --graph, --tree
#
# Relative paths are resolved against the working directory.

# Reference graph: one undirected edge "u v" per line
# graph_file = "graph.txt"

# Candidate tree: one "parent child" edge per line, blank lines ignored
# tree_file = "tree.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
