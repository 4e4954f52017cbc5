//! Shared utility functions used across command modules.

use std::path::Path;

use blind_core::frame::FrameParameters;
use blind_core::project::Project;

use crate::cli::FrameArgs;
use crate::error::CliError;

/// Build frame parameters from the command-line arguments.
///
/// Starts from `--frame` when given, otherwise from the defaults, then
/// applies each flag that was set. The result is not validated here.
pub fn resolve_frame(args: &FrameArgs) -> Result<FrameParameters, CliError> {
    let mut params = match &args.frame {
        Some(path) => read_frame_file(path)?,
        None => FrameParameters::default(),
    };

    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(slat_height) = args.slat_height {
        params.slat_height = slat_height;
    }
    if let Some(slat_depth) = args.slat_depth {
        params.slat_depth = slat_depth;
    }
    if let Some(spacing) = args.support_spacing {
        params.support_spacing = spacing;
    }
    if let Some(covering) = args.covering {
        params.covering_material = covering.into();
    }
    if let Some(thickness) = args.plywood_thickness {
        params.plywood_thickness = thickness;
    }
    if args.division_size.is_some() {
        params.division_size = args.division_size;
    }

    tracing::debug!(?params, "Resolved frame parameters");
    Ok(params)
}

fn read_frame_file(path: &Path) -> Result<FrameParameters, CliError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Name recorded in lock files for this process
pub fn lock_owner() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "blind_cli".to_string())
}

/// Stock length from the command line, or the project's setting
pub fn stock_length_for(project: &Project, flag: Option<f64>) -> f64 {
    flag.unwrap_or(project.settings.stock_length)
}
