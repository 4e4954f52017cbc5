//! Layout, piece list and cutting plan commands.

use blind_core::covering::covering;
use blind_core::frame::DEFAULT_STOCK_LENGTH;
use blind_core::layout::{layout, SupportOverrides};
use blind_core::pieces::board_pieces;
use blind_core::plan::plan_frame;

use crate::cli::{FrameArgs, OutputFormat};
use crate::error::CliError;
use crate::format::{format_cutting_plan, format_json, format_layout, format_pieces, format_plan};
use crate::util::resolve_frame;

/// Layout command handler
pub fn cmd_layout(format: OutputFormat, frame: &FrameArgs) -> Result<String, CliError> {
    let params = resolve_frame(frame)?;
    let result = layout(&params, &SupportOverrides::new())?;

    match format {
        OutputFormat::Text => Ok(format_layout(&result)),
        OutputFormat::Json => format_json(&result),
    }
}

/// Pieces command handler
pub fn cmd_pieces(format: OutputFormat, frame: &FrameArgs) -> Result<String, CliError> {
    let params = resolve_frame(frame)?;
    let result = layout(&params, &SupportOverrides::new())?;

    let mut pieces = board_pieces(&params, &result);
    pieces.extend(covering(&params, &result)?);

    match format {
        OutputFormat::Text => Ok(format_pieces(&pieces)),
        OutputFormat::Json => format_json(&pieces),
    }
}

/// Cut-list command handler
pub fn cmd_cut_list(format: OutputFormat, frame: &FrameArgs, stock_length: Option<f64>) -> Result<String, CliError> {
    let params = resolve_frame(frame)?;
    let plan = plan_frame(
        &params,
        &SupportOverrides::new(),
        stock_length.unwrap_or(DEFAULT_STOCK_LENGTH),
    )?;

    match format {
        OutputFormat::Text => Ok(format_cutting_plan(&plan.cutting_plan)),
        OutputFormat::Json => format_json(&plan.cutting_plan),
    }
}

/// Plan command handler
pub fn cmd_plan(format: OutputFormat, frame: &FrameArgs, stock_length: Option<f64>) -> Result<String, CliError> {
    let params = resolve_frame(frame)?;
    let plan = plan_frame(
        &params,
        &SupportOverrides::new(),
        stock_length.unwrap_or(DEFAULT_STOCK_LENGTH),
    )?;

    match format {
        OutputFormat::Text => Ok(format_plan(&plan)),
        OutputFormat::Json => format_json(&plan),
    }
}
