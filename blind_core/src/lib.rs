//! # blind_core - Frame Layout Engine and Cut-List Optimizer
//!
//! `blind_core` is the computational heart of Blindframe. It turns the
//! physical parameters of a wooden blind frame into a structural layout
//! (frame sides, horizontal supports, covering bays, division marks), the
//! list of pieces to cut, and a cutting plan on standard stock boards.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from parameters to results; callers
//!   re-run them whenever an input changes
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use blind_core::frame::{CoveringMaterial, FrameParameters, DEFAULT_STOCK_LENGTH};
//! use blind_core::layout::SupportOverrides;
//! use blind_core::plan::plan_frame;
//!
//! let params = FrameParameters {
//!     width: 1300.0,
//!     ..FrameParameters::default()
//! }
//! .with_covering(CoveringMaterial::Plywood);
//!
//! let plan = plan_frame(&params, &SupportOverrides::new(), DEFAULT_STOCK_LENGTH).unwrap();
//! println!("{} stock boards, {:.0}% used", plan.summary.stock_boards, plan.summary.efficiency * 100.0);
//! ```
//!
//! ## Modules
//!
//! - [`frame`] - Frame parameters, covering materials, validation
//! - [`layout`] - Support placement, covering bays, division marks
//! - [`covering`] - Fabric panels and plywood sheets
//! - [`pieces`] - Piece descriptions and frame board geometry
//! - [`cut_list`] - Stock board packing
//! - [`drag`] - Pointer gestures to support overrides
//! - [`plan`] - The whole pipeline in one call
//! - [`project`] - Named frames and project settings
//! - [`errors`] - Structured error types
//! - `file_io` - Project files with atomic saves and locking (native only)

pub mod covering;
pub mod cut_list;
pub mod drag;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod frame;
pub mod layout;
pub mod pieces;
pub mod plan;
pub mod project;

// Re-export commonly used types at crate root for convenience
pub use cut_list::{CuttingPlan, StockAssignment};
pub use errors::{FrameError, FrameResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, FileLock};
pub use frame::{CoveringMaterial, FrameParameters};
pub use layout::{layout, StructuralLayout, SupportOverrides};
pub use plan::{plan_frame, FramePlan};
pub use project::{FrameRecord, Project, ProjectSettings};
