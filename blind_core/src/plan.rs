//! # Frame Plan
//!
//! Runs the whole pipeline for one frame: layout, board pieces, covering
//! pieces and the cutting plan for the boards.
//!
//! ```text
//! FrameParameters + SupportOverrides
//!         │
//!         ▼
//!   layout() ──▶ StructuralLayout ──┬──▶ board_pieces() ─┐
//!                                   └──▶ covering() ─────┤
//!                                                        ▼
//!                                      pieces ──▶ pack() ──▶ CuttingPlan
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blind_core::frame::{CoveringMaterial, FrameParameters, DEFAULT_STOCK_LENGTH};
//! use blind_core::layout::SupportOverrides;
//! use blind_core::plan::plan_frame;
//!
//! let params = FrameParameters::default().with_covering(CoveringMaterial::Fabric);
//! let plan = plan_frame(&params, &SupportOverrides::new(), DEFAULT_STOCK_LENGTH).unwrap();
//!
//! assert_eq!(plan.layout.supports.len(), 3);
//! assert!(plan.cutting_plan.board_count() >= 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::covering::covering;
use crate::cut_list::{pack, CuttingPlan};
use crate::errors::FrameResult;
use crate::frame::FrameParameters;
use crate::layout::{layout, StructuralLayout, SupportOverrides};
use crate::pieces::{board_pieces, total_board_length, Piece};

/// Everything derived from one set of frame parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePlan {
    pub parameters: FrameParameters,
    pub layout: StructuralLayout,
    /// Board pieces followed by covering pieces
    pub pieces: Vec<Piece>,
    pub cutting_plan: CuttingPlan,
    pub summary: PlanSummary,
}

/// Headline numbers for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Outer frame area
    pub area: f64,
    /// Total length of board pieces
    pub board_length: f64,
    /// Stock boards needed
    pub stock_boards: usize,
    /// Leftover stock length
    pub waste: f64,
    /// Fraction of purchased stock used (0.0 - 1.0)
    pub efficiency: f64,
}

/// Compute layout, pieces and cutting plan for a frame.
///
/// # Errors
///
/// * `FrameError::InvalidInput` - invalid parameters or stock length
/// * `FrameError::UnsatisfiablePiece` - a board is longer than the stock
pub fn plan_frame(
    params: &FrameParameters,
    overrides: &SupportOverrides,
    stock_length: f64,
) -> FrameResult<FramePlan> {
    let layout = layout(params, overrides)?;

    let mut pieces = board_pieces(params, &layout);
    pieces.extend(covering(params, &layout)?);

    let cutting_plan = pack(&pieces, stock_length)?;

    let summary = PlanSummary {
        area: params.area(),
        board_length: total_board_length(&pieces),
        stock_boards: cutting_plan.board_count(),
        waste: cutting_plan.total_waste(),
        efficiency: cutting_plan.efficiency(),
    };

    Ok(FramePlan {
        parameters: *params,
        layout,
        pieces,
        cutting_plan,
        summary,
    })
}
