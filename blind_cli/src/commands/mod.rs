//! Command handler modules for the CLI.
//!
//! Handlers return the text to print so `main` owns stdout.

mod compute;
mod project;

use crate::cli::{Commands, OutputFormat, ProjectCommands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(format: OutputFormat, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Layout { frame } => compute::cmd_layout(format, &frame),
        Commands::Pieces { frame } => compute::cmd_pieces(format, &frame),
        Commands::CutList { frame, stock_length } => compute::cmd_cut_list(format, &frame, stock_length),
        Commands::Plan { frame, stock_length } => compute::cmd_plan(format, &frame, stock_length),
        Commands::Project { command } => match command {
            ProjectCommands::New {
                path,
                name,
                stock_length,
                force,
            } => project::cmd_new(&path, &name, stock_length, force),
            ProjectCommands::Add { path, name, frame } => project::cmd_add(&path, &name, &frame),
            ProjectCommands::List { path } => project::cmd_list(format, &path),
            ProjectCommands::Show {
                path,
                name,
                stock_length,
            } => project::cmd_show(format, &path, &name, stock_length),
            ProjectCommands::Remove { path, name } => project::cmd_remove(&path, &name),
        },
    }
}
