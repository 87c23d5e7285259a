//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Validate candidate parent/child edge lists against an undirected reference graph
#[derive(Parser, Debug)]
#[command(name = "treecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    /// Working directory for local config and relative inputs (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Input file overrides shared by several commands.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Reference graph edge list
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub graph: Option<PathBuf>,

    /// Candidate tree edge list
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub tree: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the candidate tree against the reference graph
    Validate {
        #[command(flatten)]
        inputs: InputArgs,
        /// No output on success, exit code only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show reference graph size
    Graph {
        /// Reference graph edge list
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        graph: Option<PathBuf>,
        /// List every vertex with its degree
        #[arg(long)]
        degrees: bool,
    },

    /// List neighbors of a vertex in the reference graph
    Neighbors {
        /// Vertex identifier
        vertex: String,
        /// Reference graph edge list
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        graph: Option<PathBuf>,
    },

    /// Show the candidate tree as a hierarchy (no validation)
    Tree {
        /// Candidate tree edge list
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        tree: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
