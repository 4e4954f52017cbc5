//! Blindframe CLI - command-line interface for the frame layout engine
//!
//! Computes support layouts, piece lists and cutting plans for wooden blind
//! frames, and manages named frames stored in `.blind` project files.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match commands::dispatch(cli.format, cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Install the log subscriber. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
