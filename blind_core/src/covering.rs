//! # Covering Calculator
//!
//! Derives the covering pieces (fabric panels or plywood sheets) for a frame
//! from its parameters and computed layout.
//!
//! ## Plywood strategy
//!
//! Plywood comes in `1220 x 2440` plates. A frame narrower than one plate is
//! covered by full-width plates stacked vertically, with one remainder plate.
//! A frame at least one plate wide is covered bay by bay instead, one sheet
//! per panel between supports, each `effective_spacing - slat_depth` long
//! and never longer than the usable height.
//!
//! Validated parameters always give positive piece lengths; a piece that
//! would come out empty is reported as invalid input, never dropped.

use tracing::debug;

use crate::errors::{FrameError, FrameResult};
use crate::frame::{CoveringMaterial, FrameParameters, PLATE_HEIGHT, PLATE_WIDTH};
use crate::layout::StructuralLayout;
use crate::pieces::{Piece, PieceKind};

/// Covering pieces for a frame.
///
/// # Errors
///
/// * `FrameError::InvalidInput` - if `params` fail validation, or `layout`
///   has a bay too short to cover
pub fn covering(params: &FrameParameters, layout: &StructuralLayout) -> FrameResult<Vec<Piece>> {
    params.validate()?;

    let pieces = match params.covering_material {
        CoveringMaterial::None => Vec::new(),
        CoveringMaterial::Fabric => fabric_panels(params, layout)?,
        CoveringMaterial::Plywood if params.width < PLATE_WIDTH => stacked_plates(params),
        CoveringMaterial::Plywood => bay_sheets(params, layout)?,
    };

    debug!(
        material = %params.covering_material,
        entries = pieces.len(),
        "computed covering pieces"
    );
    Ok(pieces)
}

fn fabric_panels(params: &FrameParameters, layout: &StructuralLayout) -> FrameResult<Vec<Piece>> {
    let face_width = params.usable_width();
    layout
        .panels
        .iter()
        .map(|panel| -> FrameResult<Piece> {
            let length = coverable("panel_extent", panel.extent - params.slat_depth)?;
            Ok(Piece::new(PieceKind::FabricPanel, length, face_width, None, 1))
        })
        .collect()
}

fn stacked_plates(params: &FrameParameters) -> Vec<Piece> {
    let thickness = Some(params.plywood_thickness);
    let full_plates = (params.height / PLATE_HEIGHT).floor() as usize;
    let remainder = params.height % PLATE_HEIGHT;

    let mut pieces = Vec::with_capacity(2);
    if full_plates > 0 {
        pieces.push(Piece::new(
            PieceKind::PlywoodSheet,
            PLATE_HEIGHT,
            params.width,
            thickness,
            full_plates,
        ));
    }
    if remainder > 0.0 {
        pieces.push(Piece::new(PieceKind::PlywoodSheet, remainder, params.width, thickness, 1));
    }
    pieces
}

fn bay_sheets(params: &FrameParameters, layout: &StructuralLayout) -> FrameResult<Vec<Piece>> {
    let length = (layout.effective_spacing - params.slat_depth).min(params.usable_height());
    let length = coverable("support_spacing", length)?;
    Ok(layout
        .panels
        .iter()
        .map(|_| {
            Piece::new(
                PieceKind::PlywoodSheet,
                length,
                params.width,
                Some(params.plywood_thickness),
                1,
            )
        })
        .collect())
}

fn coverable(field: &str, length: f64) -> FrameResult<f64> {
    if length > 0.0 {
        return Ok(length);
    }
    Err(FrameError::invalid_input(
        field,
        length.to_string(),
        "Covering piece would have no length; bays must be taller than the slat depth",
    ))
}
