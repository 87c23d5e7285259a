//! Tests for CLI parsing and command execution

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;
use tempfile::TempDir;

use treecheck::cli::args::ConfigCommands;
use treecheck::cli::{execute_command, Cli, CliError, Commands};
use treecheck::exitcode;

fn project(graph: &str, tree: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("graph.txt"), graph).unwrap();
    fs::write(dir.path().join("tree.txt"), tree).unwrap();
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> Result<(), CliError> {
    let mut argv = vec!["treecheck", "-C", dir.path().to_str().unwrap()];
    argv.extend_from_slice(args);
    execute_command(&Cli::parse_from(argv))
}

// ============================================================
// Parsing
// ============================================================

#[test]
fn given_no_subcommand_when_parsing_then_command_is_none() {
    let cli = Cli::parse_from(["treecheck"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.debug, 0);
}

#[test]
fn given_repeated_debug_flag_when_parsing_then_counts() {
    let cli = Cli::parse_from(["treecheck", "-ddd", "validate"]);
    assert_eq!(cli.debug, 3);
}

#[test]
fn given_validate_with_inputs_when_parsing_then_paths_set() {
    let cli = Cli::parse_from(["treecheck", "validate", "-g", "g.txt", "--tree", "t.txt", "-q"]);

    match cli.command {
        Some(Commands::Validate { inputs, quiet }) => {
            assert_eq!(inputs.graph, Some(PathBuf::from("g.txt")));
            assert_eq!(inputs.tree, Some(PathBuf::from("t.txt")));
            assert!(quiet);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_config_init_global_when_parsing_then_flag_set() {
    let cli = Cli::parse_from(["treecheck", "config", "init", "--global"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Init { global: true }
        })
    ));
}

// ============================================================
// Execution
// ============================================================

#[rstest]
#[case::explicit(&["validate"])]
#[case::implicit(&[])]
#[case::quiet(&["validate", "--quiet"])]
fn given_valid_project_when_validating_then_ok(#[case] args: &[&str]) {
    let dir = project("A B\nB C\nC D\n", "A B\nB C\nC D\n");

    assert!(run(&dir, args).is_ok());
}

#[rstest]
#[case::duplicate_child("A B\nA C\n", "A B\nA C\nB C\n")]
#[case::self_loop("A B\n", "X X\n")]
#[case::unknown_edge("A B\n", "A C\n")]
#[case::malformed_tree("A B\n", "A B\nC\n")]
#[case::malformed_graph("A\n", "A B\n")]
fn given_invalid_input_when_validating_then_data_error(#[case] graph: &str, #[case] tree: &str) {
    let dir = project(graph, tree);

    let err = run(&dir, &["validate"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR, "{err}");
}

#[test]
fn given_missing_tree_when_validating_then_noinput() {
    let dir = project("A B\n", "");
    fs::remove_file(dir.path().join("tree.txt")).unwrap();

    let err = run(&dir, &["validate"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_local_config_when_validating_then_configured_files_used() {
    let dir = project("A B\n", "A C\n");
    fs::write(dir.path().join("edges.txt"), "A B\nA C\n").unwrap();
    fs::write(dir.path().join(".treecheck.toml"), "graph_file = \"edges.txt\"\n").unwrap();

    assert!(run(&dir, &["validate"]).is_ok());
}

#[test]
fn given_explicit_graph_arg_when_validating_then_overrides_config() {
    let dir = project("A B\n", "A C\n");
    fs::write(dir.path().join("other.txt"), "C A\n").unwrap();

    assert!(run(&dir, &["validate", "--graph", "other.txt"]).is_ok());
}

#[test]
fn given_empty_vertex_when_querying_neighbors_then_usage_error() {
    let dir = project("A B\n", "A B\n");

    let err = run(&dir, &["neighbors", " "]).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_inspection_commands_when_running_then_ok() {
    let dir = project("A B\nB C\n", "A B\nB C\n");

    assert!(run(&dir, &["graph", "--degrees"]).is_ok());
    assert!(run(&dir, &["neighbors", "B"]).is_ok());
    assert!(run(&dir, &["neighbors", "Z"]).is_ok());
    assert!(run(&dir, &["tree"]).is_ok());
}

#[test]
fn given_deep_chain_when_rendering_tree_then_ok() {
    let chain: String = (0..100_000).map(|i| format!("v{} v{}\n", i, i + 1)).collect();
    let dir = project("v0 v1\n", &chain);

    assert!(run(&dir, &["tree"]).is_ok());
}

#[test]
fn given_no_local_config_when_config_init_then_writes_template_once() {
    let dir = project("A B\n", "A B\n");

    run(&dir, &["config", "init"]).unwrap();
    let written = fs::read_to_string(dir.path().join(".treecheck.toml")).unwrap();
    assert!(written.contains("# graph_file = \"graph.txt\""));

    let err = run(&dir, &["config", "init"]).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
}

#[test]
fn given_missing_project_dir_when_running_then_invalid_args() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let cli = Cli::parse_from(["treecheck", "-C", missing.to_str().unwrap(), "validate"]);
    let err = execute_command(&cli).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
}
