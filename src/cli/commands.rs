//! Command dispatch: resolve settings, call services, print results

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the command selected on the command line.
///
/// Without a subcommand the configured graph and tree are validated.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let project_dir = cli.project_dir.as_deref();
    if let Some(dir) = project_dir {
        if !dir.is_dir() {
            return Err(CliError::InvalidArgs(format!(
                "not a directory: {}",
                dir.display()
            )));
        }
    }

    let settings = Settings::load(Some(project_dir.unwrap_or(Path::new("."))))?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Validate { inputs, quiet }) => {
            cmd_validate(&container, project_dir, inputs, *quiet)
        }
        Some(Commands::Graph { graph, degrees }) => {
            cmd_graph(&container, project_dir, graph.as_deref(), *degrees)
        }
        Some(Commands::Neighbors { vertex, graph }) => {
            cmd_neighbors(&container, project_dir, vertex, graph.as_deref())
        }
        Some(Commands::Tree { tree }) => cmd_tree(&container, project_dir, tree.as_deref()),
        Some(Commands::Config { command }) => cmd_config(&container, project_dir, command),
        Some(Commands::Completion { .. }) => Ok(()),
        None => cmd_validate(&container, project_dir, &InputArgs::default(), false),
    }
}

/// Relative inputs are taken relative to `--project-dir` when given.
fn resolve(project_dir: Option<&Path>, path: &Path) -> PathBuf {
    match project_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn graph_path(container: &ServiceContainer, project_dir: Option<&Path>, arg: Option<&Path>) -> PathBuf {
    resolve(project_dir, arg.unwrap_or(&container.settings.graph_file))
}

fn tree_path(container: &ServiceContainer, project_dir: Option<&Path>, arg: Option<&Path>) -> PathBuf {
    resolve(project_dir, arg.unwrap_or(&container.settings.tree_file))
}

#[instrument(skip(container))]
fn cmd_validate(
    container: &ServiceContainer,
    project_dir: Option<&Path>,
    inputs: &InputArgs,
    quiet: bool,
) -> CliResult<()> {
    let graph_file = graph_path(container, project_dir, inputs.graph.as_deref());
    let tree_file = tree_path(container, project_dir, inputs.tree.as_deref());

    let report = container.validation.validate(&graph_file, &tree_file)?;
    if !quiet {
        output::success(&format!(
            "The tree is valid. ({} edges checked against {} vertices)",
            report.edges_checked, report.graph_vertices
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_graph(
    container: &ServiceContainer,
    project_dir: Option<&Path>,
    graph: Option<&Path>,
    degrees: bool,
) -> CliResult<()> {
    let graph_file = graph_path(container, project_dir, graph);
    let summary = container.validation.summarize_graph(&graph_file)?;

    output::header(&graph_file.display());
    output::detail(&format!("vertices: {}", summary.vertex_count));
    output::detail(&format!("edges:    {}", summary.edge_count));
    if degrees {
        for (vertex, degree) in &summary.degrees {
            output::detail(&format!("{vertex}\t{degree}"));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_neighbors(
    container: &ServiceContainer,
    project_dir: Option<&Path>,
    vertex: &str,
    graph: Option<&Path>,
) -> CliResult<()> {
    if vertex.trim().is_empty() {
        return Err(CliError::InvalidArgs("vertex must not be empty".to_string()));
    }
    let graph_file = graph_path(container, project_dir, graph);
    let neighbors = container.validation.neighbors(&graph_file, vertex)?;

    if neighbors.is_empty() {
        output::warning(&format!(
            "vertex {} not in graph {}",
            vertex,
            graph_file.display()
        ));
    } else {
        output::info(&neighbors.iter().join(" "));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, project_dir: Option<&Path>, tree: Option<&Path>) -> CliResult<()> {
    let tree_file = tree_path(container, project_dir, tree);
    let forest = container.validation.render_tree(&tree_file)?;

    if forest.is_empty() {
        output::warning(&format!("no edges in {}", tree_file.display()));
    }
    for tree in &forest {
        output::block(tree);
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    project_dir: Option<&Path>,
    command: &ConfigCommands,
) -> CliResult<()> {
    let local_path = local_config_path(project_dir.unwrap_or(Path::new(".")));
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &describe(container, &path)),
                None => output::action("global", "(unavailable)"),
            }
            output::action("local", &describe(container, &local_path));
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let target = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_path
            };
            if container.fs.exists(&target) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    target.display()
                )));
            }
            container
                .fs
                .ensure_parent(&target)
                .map_err(|e| InfraError::io(format!("create parent of {}", target.display()), e))?;
            container
                .fs
                .write(&target, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", target.display()), e))?;
            output::action("Created", &target.display());
            Ok(())
        }
    }
}

fn describe(container: &ServiceContainer, path: &Path) -> String {
    if container.fs.exists(path) {
        path.display().to_string()
    } else {
        format!("{} (not found)", path.display())
    }
}
