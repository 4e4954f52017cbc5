//! # Cut-List Optimizer
//!
//! Packs required board lengths onto standard-length stock boards with a
//! first-fit, largest-piece-first heuristic.
//!
//! ## Algorithm
//!
//! 1. Expand every `{length, quantity}` entry into individual lengths.
//! 2. Stable sort, longest first.
//! 3. Open a board. Sweep the pending lengths in order, cutting each one that
//!    still fits; repeat sweeps until one places nothing. Close the board
//!    with the leftover as waste and open the next while lengths remain.
//!
//! The result is deterministic and easy to follow on the shop floor, not
//! optimal. Which board a given piece lands on is part of the contract.
//!
//! ## Example
//!
//! ```rust
//! use blind_core::cut_list::{pack_lengths, CutRequest};
//!
//! let plan = pack_lengths(
//!     &[CutRequest::new(1980.0, 2), CutRequest::new(460.0, 3)],
//!     6000.0,
//! ).unwrap();
//!
//! assert_eq!(plan.board_count(), 1);
//! assert_eq!(plan.assignments[0].cuts, vec![1980.0, 1980.0, 460.0, 460.0, 460.0]);
//! assert_eq!(plan.assignments[0].waste, 660.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FrameError, FrameResult};
use crate::pieces::Piece;

/// A length to cut, `quantity` times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    pub length: f64,
    pub quantity: usize,
}

impl CutRequest {
    pub fn new(length: f64, quantity: usize) -> Self {
        CutRequest { length, quantity }
    }
}

impl From<&Piece> for CutRequest {
    fn from(piece: &Piece) -> Self {
        CutRequest::new(piece.length, piece.quantity)
    }
}

/// The cuts taken from one stock board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAssignment {
    pub stock_length: f64,
    /// Cut lengths in the order they were placed
    pub cuts: Vec<f64>,
    /// Leftover length
    pub waste: f64,
}

impl StockAssignment {
    /// Total length cut from this board
    pub fn used_length(&self) -> f64 {
        self.stock_length - self.waste
    }

    /// Fraction of the board that ends up in pieces (0.0 - 1.0)
    pub fn efficiency(&self) -> f64 {
        self.used_length() / self.stock_length
    }
}

/// Ordered list of stock boards and their cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    pub stock_length: f64,
    pub assignments: Vec<StockAssignment>,
}

impl CuttingPlan {
    /// Number of stock boards to buy
    pub fn board_count(&self) -> usize {
        self.assignments.len()
    }

    /// Total number of cuts across all boards
    pub fn cut_count(&self) -> usize {
        self.assignments.iter().map(|a| a.cuts.len()).sum()
    }

    pub fn total_waste(&self) -> f64 {
        self.assignments.iter().map(|a| a.waste).sum()
    }

    /// Fraction of purchased stock that ends up in pieces. An empty plan
    /// wastes nothing and reports 1.0.
    pub fn efficiency(&self) -> f64 {
        if self.assignments.is_empty() {
            return 1.0;
        }
        let purchased = self.stock_length * self.assignments.len() as f64;
        (purchased - self.total_waste()) / purchased
    }
}

/// Pack the board pieces of a piece list; sheet goods are skipped.
pub fn pack(pieces: &[Piece], stock_length: f64) -> FrameResult<CuttingPlan> {
    let requests: Vec<CutRequest> = pieces
        .iter()
        .filter(|p| p.kind.is_board())
        .map(CutRequest::from)
        .collect();
    pack_lengths(&requests, stock_length)
}

/// Pack raw `{length, quantity}` requests onto stock boards.
///
/// # Errors
///
/// * `FrameError::InvalidInput` - `stock_length` or any length is not a
///   positive finite number
/// * `FrameError::UnsatisfiablePiece` - a length exceeds `stock_length`
pub fn pack_lengths(requests: &[CutRequest], stock_length: f64) -> FrameResult<CuttingPlan> {
    if !stock_length.is_finite() || stock_length <= 0.0 {
        return Err(FrameError::invalid_input(
            "stock_length",
            stock_length.to_string(),
            "Stock length must be a positive finite number",
        ));
    }
    for request in requests {
        if !request.length.is_finite() || request.length <= 0.0 {
            return Err(FrameError::invalid_input(
                "length",
                request.length.to_string(),
                "Piece length must be a positive finite number",
            ));
        }
        if request.quantity > 0 && request.length > stock_length {
            return Err(FrameError::unsatisfiable_piece(request.length, stock_length));
        }
    }

    let mut pending: Vec<f64> = requests
        .iter()
        .flat_map(|r| std::iter::repeat(r.length).take(r.quantity))
        .collect();
    // sort_by is stable; equal lengths keep their input order
    pending.sort_by(|a, b| b.total_cmp(a));

    let mut assignments = Vec::new();
    while !pending.is_empty() {
        let mut remaining = stock_length;
        let mut cuts = Vec::new();

        loop {
            let mut placed = false;
            let mut k = 0;
            while k < pending.len() {
                if pending[k] <= remaining {
                    let length = pending.remove(k);
                    remaining -= length;
                    cuts.push(length);
                    placed = true;
                } else {
                    k += 1;
                }
            }
            if !placed {
                break;
            }
        }

        // every pending length is <= stock_length, so a fresh board always
        // takes at least one cut
        if cuts.is_empty() {
            return Err(FrameError::Internal {
                message: "stock board closed without cuts".to_string(),
            });
        }
        assignments.push(StockAssignment {
            stock_length,
            cuts,
            waste: remaining,
        });
    }

    let plan = CuttingPlan {
        stock_length,
        assignments,
    };
    debug!(
        boards = plan.board_count(),
        cuts = plan.cut_count(),
        waste = plan.total_waste(),
        "packed cutting plan"
    );
    Ok(plan)
}
