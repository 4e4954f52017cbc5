//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use blind_core::frame::CoveringMaterial;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Blindframe command-line interface for frame layouts and cutting plans
#[derive(Parser)]
#[command(name = "blind_cli")]
#[command(author, version, about = "Blindframe command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print supports, covering bays and division marks
    Layout {
        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Print the piece list for a frame (boards and covering)
    Pieces {
        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Print the cutting plan for the frame boards
    #[command(name = "cut-list")]
    CutList {
        #[command(flatten)]
        frame: FrameArgs,

        /// Length of the stock boards
        #[arg(long)]
        stock_length: Option<f64>,
    },

    /// Print layout, pieces and cutting plan together
    Plan {
        #[command(flatten)]
        frame: FrameArgs,

        /// Length of the stock boards
        #[arg(long)]
        stock_length: Option<f64>,
    },

    /// Manage frames stored in a project file
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create an empty project file
    New {
        /// Path of the .blind file to create
        path: PathBuf,

        /// Project name
        #[arg(short, long)]
        name: String,

        /// Length of the stock boards used for this project
        #[arg(long)]
        stock_length: Option<f64>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add a named frame to a project
    Add {
        /// Path of the .blind file
        path: PathBuf,

        /// Frame name (unique within the project, ignoring case)
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        frame: FrameArgs,
    },

    /// List the frames in a project, most recently modified first
    List {
        /// Path of the .blind file
        path: PathBuf,
    },

    /// Compute and print the plan for a stored frame
    Show {
        /// Path of the .blind file
        path: PathBuf,

        /// Frame name
        name: String,

        /// Override the project's stock board length
        #[arg(long)]
        stock_length: Option<f64>,
    },

    /// Remove a frame from a project
    Remove {
        /// Path of the .blind file
        path: PathBuf,

        /// Frame name
        name: String,
    },
}

/// Frame parameters from flags, a JSON file, or both.
///
/// Flags override values read from `--frame`; anything left unset falls
/// back to `FrameParameters::default()`.
#[derive(Args, Clone, Debug, Default)]
pub struct FrameArgs {
    /// Read FrameParameters from a JSON file
    #[arg(long, value_name = "FILE")]
    pub frame: Option<PathBuf>,

    /// Outer frame width
    #[arg(long)]
    pub width: Option<f64>,

    /// Outer frame height
    #[arg(long)]
    pub height: Option<f64>,

    /// Slat face width
    #[arg(long)]
    pub slat_height: Option<f64>,

    /// Slat thickness
    #[arg(long)]
    pub slat_depth: Option<f64>,

    /// Target distance between horizontal supports
    #[arg(long)]
    pub support_spacing: Option<f64>,

    /// Covering material
    #[arg(long, value_enum)]
    pub covering: Option<CoveringArg>,

    /// Plywood sheet thickness
    #[arg(long)]
    pub plywood_thickness: Option<f64>,

    /// Interval of the division marks along the height
    #[arg(long)]
    pub division_size: Option<f64>,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Covering material options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CoveringArg {
    None,
    Fabric,
    Plywood,
}

impl From<CoveringArg> for CoveringMaterial {
    fn from(arg: CoveringArg) -> Self {
        match arg {
            CoveringArg::None => CoveringMaterial::None,
            CoveringArg::Fabric => CoveringMaterial::Fabric,
            CoveringArg::Plywood => CoveringMaterial::Plywood,
        }
    }
}
