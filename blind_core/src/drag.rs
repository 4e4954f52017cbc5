//! # Support Drag Controller
//!
//! Translates pointer gestures on the frame preview into manual support
//! overrides. Pointer coordinates are layout coordinates; converting from
//! screen pixels is the renderer's job.
//!
//! ## States
//!
//! ```text
//!            down on support            move (button held)
//!   Idle ─────────────────────▶ Selected ───────────────────▶ Dragging
//!    ▲  ◀──── down on nothing ────┘  ▲                           │ move
//!    │                               └── up (click only)         ▼
//!    └─────────────────────── up / leave / reset ─────────── Dragging
//! ```
//!
//! A drag moves every support by the same delta, so relative spacing is
//! kept while the whole set slides. Each override is clamped inside the
//! rails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::FrameResult;
use crate::frame::FrameParameters;
use crate::layout::{self, clamp_position, Point, StructuralLayout, SupportOverrides};

/// Gesture state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Nothing selected
    #[default]
    Idle,
    /// Support highlighted; `press_origin` is set while the button is held
    Selected {
        index: usize,
        press_origin: Option<f64>,
    },
    /// Support set being dragged
    Dragging {
        index: usize,
        start_pointer: f64,
        snapshot: BTreeMap<usize, f64>,
    },
}

/// Owns the override map for one frame and the current gesture.
#[derive(Debug, Clone, Default)]
pub struct SupportDragController {
    state: DragState,
    overrides: SupportOverrides,
}

impl SupportDragController {
    pub fn new() -> Self {
        SupportDragController::default()
    }

    /// Start from an existing override map.
    pub fn with_overrides(overrides: SupportOverrides) -> Self {
        SupportDragController {
            state: DragState::Idle,
            overrides,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn overrides(&self) -> &SupportOverrides {
        &self.overrides
    }

    /// Index of the highlighted support, if any
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Selected { index, .. } | DragState::Dragging { index, .. } => Some(index),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Layout with the current overrides and selection applied.
    pub fn layout(&self, params: &FrameParameters) -> FrameResult<StructuralLayout> {
        let mut result = layout::layout(params, &self.overrides)?;
        result.mark_selected(self.selected());
        Ok(result)
    }

    /// Pointer pressed at `point`. Returns the support now selected.
    pub fn pointer_down(&mut self, params: &FrameParameters, point: Point) -> FrameResult<Option<usize>> {
        if self.is_dragging() {
            self.end_gesture();
        }

        let current = layout::layout(params, &self.overrides)?;
        self.state = match current.hit_test(point) {
            Some(index) => DragState::Selected {
                index,
                press_origin: Some(point.y),
            },
            None => DragState::Idle,
        };
        Ok(self.selected())
    }

    /// Pointer moved to `point`. Returns true when overrides changed.
    pub fn pointer_move(&mut self, params: &FrameParameters, point: Point) -> FrameResult<bool> {
        if let DragState::Selected {
            index,
            press_origin: Some(origin),
        } = self.state
        {
            let current = layout::layout(params, &self.overrides)?;
            self.state = DragState::Dragging {
                index,
                start_pointer: origin,
                snapshot: current.support_positions(),
            };
            debug!(index, "support drag started");
        }

        let DragState::Dragging {
            start_pointer,
            ref snapshot,
            ..
        } = self.state
        else {
            return Ok(false);
        };

        let delta = point.y - start_pointer;
        for (&index, &position) in snapshot {
            self.overrides.set(index, clamp_position(params, position + delta));
        }
        Ok(true)
    }

    /// Pointer released. A drag ends; a plain click keeps the selection.
    pub fn pointer_up(&mut self) {
        match self.state {
            DragState::Dragging { .. } => self.end_gesture(),
            DragState::Selected { index, .. } => {
                self.state = DragState::Selected {
                    index,
                    press_origin: None,
                };
            }
            DragState::Idle => {}
        }
    }

    /// Pointer left the preview surface.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Clear every override and return all supports to nominal positions.
    pub fn reset(&mut self) {
        self.overrides.clear();
        self.state = DragState::Idle;
    }

    /// Reconcile with edited parameters.
    ///
    /// Height or spacing changes invalidate the override space and clear it.
    /// Any other change only drops overrides whose support no longer exists.
    /// Returns true when overrides were cleared or trimmed.
    pub fn parameters_changed(&mut self, previous: &FrameParameters, next: &FrameParameters) -> bool {
        if previous.invalidates_overrides(next) {
            let had_overrides = !self.overrides.is_empty();
            self.reset();
            return had_overrides;
        }

        let support_count = layout::additional_supports(next);
        let removed = self.overrides.retain_valid(support_count);
        if removed > 0 {
            warn!(removed, support_count, "discarded overrides for missing supports");
        }
        if self.selected().is_some_and(|index| index > support_count) {
            self.state = DragState::Idle;
        }
        removed > 0
    }

    fn end_gesture(&mut self) {
        if let DragState::Dragging { index, .. } = self.state {
            debug!(index, overrides = self.overrides.len(), "support drag ended");
        }
        self.state = DragState::Idle;
    }
}
