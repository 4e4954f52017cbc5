//! # Pieces
//!
//! A [`Piece`] describes one category of board or sheet a frame needs. Board
//! pieces (stiles, rails, supports) are linear stock and go through the
//! cut-list optimizer; covering pieces are sheet goods and are only listed.
//!
//! ## Frame boards
//!
//! ```text
//!  ┌──┬────────────────┬──┐   stiles:   length = height,               qty 2
//!  │  │      rail      │  │   rails:    length = width - 2 * depth,    qty 2
//!  │  ├────────────────┤  │   supports: length = width - 2 * depth,    qty n
//!  │  │     support    │  │
//!  │  ├────────────────┤  │
//!  │  │      rail      │  │
//!  └──┴────────────────┴──┘
//! ```

use serde::{Deserialize, Serialize};

use crate::frame::FrameParameters;
use crate::layout::StructuralLayout;

/// What a piece is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Vertical frame side
    Stile,
    /// Horizontal frame top or bottom
    Rail,
    /// Horizontal support between the stiles
    Support,
    /// Fabric covering for one bay
    FabricPanel,
    /// Plywood covering sheet
    PlywoodSheet,
}

impl PieceKind {
    /// Whether this piece is cut from linear board stock
    pub fn is_board(&self) -> bool {
        matches!(self, PieceKind::Stile | PieceKind::Rail | PieceKind::Support)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PieceKind::Stile => "Stile",
            PieceKind::Rail => "Rail",
            PieceKind::Support => "Support",
            PieceKind::FabricPanel => "Fabric panel",
            PieceKind::PlywoodSheet => "Plywood sheet",
        }
    }
}

/// One category of required material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    /// Length along the cut direction
    pub length: f64,
    /// Face dimension across the cut
    pub face_width: f64,
    /// Thickness; `None` for fabric
    pub depth: Option<f64>,
    pub quantity: usize,
}

impl Piece {
    pub fn new(kind: PieceKind, length: f64, face_width: f64, depth: Option<f64>, quantity: usize) -> Self {
        Piece {
            kind,
            length,
            face_width,
            depth,
            quantity,
        }
    }

    /// Total length of all pieces in this entry
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }
}

/// Board pieces for the frame itself and its supports.
///
/// Assumes `params` already validated (the layout it came with proves that).
pub fn board_pieces(params: &FrameParameters, layout: &StructuralLayout) -> Vec<Piece> {
    let face = params.slat_height;
    let depth = Some(params.slat_depth);
    let inner_width = params.usable_width();

    let mut pieces = vec![
        Piece::new(PieceKind::Stile, params.height, face, depth, 2),
        Piece::new(PieceKind::Rail, inner_width, face, depth, 2),
    ];
    if layout.additional_supports > 0 {
        pieces.push(Piece::new(
            PieceKind::Support,
            inner_width,
            face,
            depth,
            layout.additional_supports,
        ));
    }
    pieces
}

/// Sum of lengths of every board piece in a list
pub fn total_board_length(pieces: &[Piece]) -> f64 {
    pieces
        .iter()
        .filter(|p| p.kind.is_board())
        .map(Piece::total_length)
        .sum()
}
