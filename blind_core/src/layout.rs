//! # Frame Layout Engine
//!
//! Turns [`FrameParameters`] plus sparse manual [`SupportOverrides`] into a
//! [`StructuralLayout`]: the four frame sides, the horizontal supports, the
//! covering bays between them and the informational division marks.
//!
//! ## Coordinates
//!
//! All positions are absolute distances from the frame's top outer edge,
//! measured along the height axis. Supports and panels are indexed from 1,
//! counting from the top. The usable span runs from `slat_depth` to
//! `height - slat_depth`.
//!
//! ## Support placement
//!
//! ```text
//! n        = floor(usable / spacing)      (covered frames taller than spacing)
//! spacing' = usable / (n + 1)             (fabric: even bays)
//!          = spacing                      (plywood: fixed bays)
//! p(i)     = slat_depth + i * spacing'    (+ i * slat_depth for plywood
//!                                          wider than one plate, i > 1)
//! ```
//!
//! Every support position, nominal or overridden, is clamped into
//! `[slat_depth + b, height - slat_depth - b]` and kept at least `b` apart,
//! where `b` is the [`minimum_bay`]. Every bay is therefore taller than a
//! slat, so a covering piece cut to `extent - slat_depth` is never empty.
//!
//! ## Example
//!
//! ```rust
//! use blind_core::frame::{CoveringMaterial, FrameParameters};
//! use blind_core::layout::{layout, SupportOverrides};
//!
//! let params = FrameParameters::default().with_covering(CoveringMaterial::Plywood);
//! let result = layout(&params, &SupportOverrides::new()).unwrap();
//!
//! assert_eq!(result.supports.len(), 3);
//! assert_eq!(result.panels.len(), 4);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::FrameResult;
use crate::frame::{CoveringMaterial, FrameParameters, SUPPORT_MARGIN};

// ============================================================================
// Geometry primitives
// ============================================================================

/// A point in layout coordinates (`x` across the width, `y` down the height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Which side of the outer frame a rectangle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameSide {
    Left,
    Top,
    Right,
    Bottom,
}

/// One of the four outer frame boards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSideRect {
    pub side: FrameSide,
    pub rect: Rect,
}

// ============================================================================
// Overrides
// ============================================================================

/// Sparse map from support index (1-based, from the top) to a manually
/// chosen absolute position.
///
/// Overrides are owned by the caller and only become stale when the frame
/// height or support spacing changes; see
/// [`FrameParameters::invalidates_overrides`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportOverrides {
    positions: BTreeMap<usize, f64>,
}

impl SupportOverrides {
    pub fn new() -> Self {
        SupportOverrides::default()
    }

    /// Set the manual position of support `index`.
    pub fn set(&mut self, index: usize, position: f64) {
        self.positions.insert(index, position);
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.positions.get(&index).copied()
    }

    pub fn remove(&mut self, index: usize) -> Option<f64> {
        self.positions.remove(&index)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Iterate `(index, position)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.positions.iter().map(|(i, p)| (*i, *p))
    }

    /// Drop overrides that no longer name an existing support.
    ///
    /// Returns the number of entries removed.
    pub fn retain_valid(&mut self, support_count: usize) -> usize {
        let before = self.positions.len();
        self.positions
            .retain(|index, position| (1..=support_count).contains(index) && position.is_finite());
        before - self.positions.len()
    }
}

// ============================================================================
// Layout output
// ============================================================================

/// A horizontal support as placed in the layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportDescriptor {
    /// 1-based index from the top
    pub index: usize,
    /// Absolute position from the top outer edge
    pub position: f64,
    /// True when the position comes from a manual override
    pub is_custom: bool,
    /// True when the support is highlighted by the drag controller
    pub is_selected: bool,
}

/// A covering bay between two consecutive boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// 1-based index from the top
    pub index: usize,
    /// Absolute start position
    pub start: f64,
    /// Length along the height axis
    pub extent: f64,
}

impl PanelDescriptor {
    pub fn end(&self) -> f64 {
        self.start + self.extent
    }
}

/// Informational tick mark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionMark {
    pub position: f64,
}

/// Result of one layout computation.
///
/// Values carry no identity beyond the call that produced them; recompute
/// whenever parameters or overrides change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralLayout {
    /// Outer width the layout was computed for
    pub width: f64,
    /// Outer height the layout was computed for
    pub height: f64,
    /// Board thickness the layout was computed for
    pub slat_depth: f64,
    /// Left, top, right and bottom frame boards
    pub sides: Vec<FrameSideRect>,
    /// Number of horizontal supports
    pub additional_supports: usize,
    /// Spacing actually used between nominal supports
    pub effective_spacing: f64,
    pub supports: Vec<SupportDescriptor>,
    pub panels: Vec<PanelDescriptor>,
    pub division_marks: Vec<DivisionMark>,
}

impl StructuralLayout {
    /// Start of the usable span (inner edge of the top rail)
    pub fn usable_start(&self) -> f64 {
        self.slat_depth
    }

    /// End of the usable span (inner edge of the bottom rail)
    pub fn usable_end(&self) -> f64 {
        self.height - self.slat_depth
    }

    pub fn support(&self, index: usize) -> Option<&SupportDescriptor> {
        self.supports.iter().find(|s| s.index == index)
    }

    /// Current position of every support, keyed by index
    pub fn support_positions(&self) -> BTreeMap<usize, f64> {
        self.supports.iter().map(|s| (s.index, s.position)).collect()
    }

    /// Drawing / hit-test rectangle for a support, centred on its position
    /// and spanning the inner width.
    pub fn support_rect(&self, support: &SupportDescriptor) -> Rect {
        Rect::new(
            self.slat_depth,
            support.position - self.slat_depth / 2.0,
            self.width - 2.0 * self.slat_depth,
            self.slat_depth,
        )
    }

    /// Index of the support under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.supports
            .iter()
            .find(|s| self.support_rect(s).contains(point))
            .map(|s| s.index)
    }

    /// Flag exactly one support (or none) as selected.
    pub fn mark_selected(&mut self, selected: Option<usize>) {
        for support in &mut self.supports {
            support.is_selected = Some(support.index) == selected;
        }
    }

    /// Sum of all panel extents
    pub fn total_panel_extent(&self) -> f64 {
        self.panels.iter().map(|p| p.extent).sum()
    }
}

// ============================================================================
// Shared support geometry
// ============================================================================

/// Number of horizontal supports for a frame.
///
/// Bare frames get none; covered frames get one per full spacing that fits
/// in the usable height, provided the frame is taller than one spacing.
pub fn additional_supports(params: &FrameParameters) -> usize {
    if !params.covering_material.is_covered() || params.height <= params.support_spacing {
        return 0;
    }
    let usable = params.usable_height();
    if usable <= 0.0 {
        return 0;
    }
    (usable / params.support_spacing).floor() as usize
}

/// Spacing used between nominal supports.
pub fn effective_spacing(params: &FrameParameters, support_count: usize) -> f64 {
    if params.covering_material == CoveringMaterial::Fabric && support_count > 0 {
        params.usable_height() / (support_count + 1) as f64
    } else {
        params.support_spacing
    }
}

/// Nominal position of support `index` before clamping.
///
/// Wide plywood frames stack an extra seam per support, each one consuming a
/// board depth; supports after the first are pushed down accordingly.
pub fn nominal_position(params: &FrameParameters, index: usize, effective_spacing: f64) -> f64 {
    let mut position = params.slat_depth + index as f64 * effective_spacing;
    if params.covering_material == CoveringMaterial::Plywood && params.exceeds_plate_width() && index > 1 {
        position += index as f64 * params.slat_depth;
    }
    position
}

/// Smallest bay the engine leaves between two supports, or between a
/// support and a rail.
///
/// One slat depth plus [`SUPPORT_MARGIN`]. On dense frames the margin
/// shrinks to half the gap between the slat depth and the even bay height.
pub fn minimum_bay(params: &FrameParameters) -> f64 {
    let even_bay = params.usable_height() / (additional_supports(params) + 1) as f64;
    params.slat_depth + SUPPORT_MARGIN.min((even_bay - params.slat_depth) / 2.0)
}

/// Allowed range for any support position.
pub fn position_bounds(params: &FrameParameters) -> (f64, f64) {
    let bay = minimum_bay(params);
    (params.slat_depth + bay, params.height - params.slat_depth - bay)
}

/// Clamp a support position into [`position_bounds`].
pub fn clamp_position(params: &FrameParameters, position: f64) -> f64 {
    let (lo, hi) = position_bounds(params);
    if hi <= lo {
        return params.height / 2.0;
    }
    position.clamp(lo, hi)
}

/// Clamp positions into `[lo, hi]` and keep them at least `gap` apart.
///
/// Requires `hi - lo >= (positions.len() - 1) * gap`, which validated
/// parameters guarantee.
fn settle_positions(positions: &mut [f64], lo: f64, hi: f64, gap: f64) {
    let count = positions.len();
    if count == 0 {
        return;
    }

    for position in positions.iter_mut() {
        *position = position.clamp(lo, hi);
    }
    for j in 1..count {
        if positions[j] < positions[j - 1] + gap {
            positions[j] = positions[j - 1] + gap;
        }
    }
    if positions[count - 1] > hi {
        positions[count - 1] = hi;
    }
    for j in (0..count - 1).rev() {
        if positions[j] > positions[j + 1] - gap {
            positions[j] = positions[j + 1] - gap;
        }
    }
}

fn frame_sides(params: &FrameParameters) -> Vec<FrameSideRect> {
    let d = params.slat_depth;
    let inner_width = params.usable_width();
    vec![
        FrameSideRect {
            side: FrameSide::Left,
            rect: Rect::new(0.0, 0.0, d, params.height),
        },
        FrameSideRect {
            side: FrameSide::Top,
            rect: Rect::new(d, 0.0, inner_width, d),
        },
        FrameSideRect {
            side: FrameSide::Right,
            rect: Rect::new(params.width - d, 0.0, d, params.height),
        },
        FrameSideRect {
            side: FrameSide::Bottom,
            rect: Rect::new(d, params.height - d, inner_width, d),
        },
    ]
}

fn division_marks(params: &FrameParameters) -> Vec<DivisionMark> {
    let Some(size) = params.division_size else {
        return Vec::new();
    };
    let count = (params.height / size).floor() as usize;
    (1..=count)
        .map(|k| k as f64 * size)
        .filter(|position| *position <= params.height)
        .map(|position| DivisionMark { position })
        .collect()
}

// ============================================================================
// Engine
// ============================================================================

/// Compute the structural layout of a frame.
///
/// Pure and deterministic. `overrides` is only read; entries for indices that
/// do not exist in this layout are ignored.
///
/// # Errors
///
/// * `FrameError::InvalidInput` - parameters fail validation
pub fn layout(params: &FrameParameters, overrides: &SupportOverrides) -> FrameResult<StructuralLayout> {
    params.validate()?;

    let count = additional_supports(params);
    let spacing = effective_spacing(params, count);

    let mut positions = Vec::with_capacity(count);
    let mut custom = Vec::with_capacity(count);
    for index in 1..=count {
        match overrides.get(index).filter(|p| p.is_finite()) {
            Some(position) => {
                positions.push(position);
                custom.push(true);
            }
            None => {
                positions.push(nominal_position(params, index, spacing));
                custom.push(false);
            }
        }
    }

    let ignored = overrides.iter().filter(|(i, _)| *i == 0 || *i > count).count();
    if ignored > 0 {
        debug!(ignored, support_count = count, "ignoring overrides for missing supports");
    }

    let (lo, hi) = position_bounds(params);
    settle_positions(&mut positions, lo, hi, minimum_bay(params));

    let supports: Vec<SupportDescriptor> = positions
        .iter()
        .zip(&custom)
        .enumerate()
        .map(|(k, (position, is_custom))| SupportDescriptor {
            index: k + 1,
            position: *position,
            is_custom: *is_custom,
            is_selected: false,
        })
        .collect();

    let mut boundaries = Vec::with_capacity(count + 2);
    boundaries.push(params.slat_depth);
    boundaries.extend_from_slice(&positions);
    boundaries.push(params.height - params.slat_depth);

    let panels = boundaries
        .windows(2)
        .enumerate()
        .map(|(k, pair)| PanelDescriptor {
            index: k + 1,
            start: pair[0],
            extent: pair[1] - pair[0],
        })
        .collect();

    let result = StructuralLayout {
        width: params.width,
        height: params.height,
        slat_depth: params.slat_depth,
        sides: frame_sides(params),
        additional_supports: count,
        effective_spacing: spacing,
        supports,
        panels,
        division_marks: division_marks(params),
    };

    debug!(
        supports = result.additional_supports,
        effective_spacing = result.effective_spacing,
        custom = custom.iter().filter(|c| **c).count(),
        "computed frame layout"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plywood(width: f64) -> FrameParameters {
        FrameParameters {
            width,
            height: 2000.0,
            slat_depth: 20.0,
            support_spacing: 500.0,
            covering_material: CoveringMaterial::Plywood,
            ..FrameParameters::default()
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_support_count_plywood() {
        // usable = 1960, floor(1960 / 500) = 3
        let result = layout(&plywood(1000.0), &SupportOverrides::new()).unwrap();
        assert_eq!(result.additional_supports, 3);
        assert_eq!(result.supports.len(), 3);
        assert_eq!(result.panels.len(), 4);
        assert_close(result.effective_spacing, 500.0);
    }

    #[test]
    fn test_no_supports_without_covering() {
        let params = FrameParameters {
            support_spacing: 100.0,
            ..FrameParameters::default()
        };
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        assert_eq!(result.additional_supports, 0);
        assert_eq!(result.panels.len(), 1);
        assert_close(result.panels[0].extent, params.usable_height());
    }

    #[test]
    fn test_no_supports_when_spacing_exceeds_height() {
        let params = FrameParameters {
            support_spacing: 2500.0,
            ..plywood(1000.0)
        };
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        assert_eq!(result.additional_supports, 0);
        assert_close(result.effective_spacing, 2500.0);
    }

    #[test]
    fn test_fabric_distributes_evenly() {
        let params = plywood(1000.0).with_covering(CoveringMaterial::Fabric);
        let result = layout(&params, &SupportOverrides::new()).unwrap();

        assert_eq!(result.additional_supports, 3);
        assert_close(result.effective_spacing, 490.0);
        for panel in &result.panels {
            assert_close(panel.extent, 490.0);
        }
        assert_close(result.supports[0].position, 510.0);
    }

    #[test]
    fn test_plywood_positions_narrow() {
        let result = layout(&plywood(1000.0), &SupportOverrides::new()).unwrap();
        let positions: Vec<f64> = result.supports.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![520.0, 1020.0, 1520.0]);
    }

    #[test]
    fn test_plywood_wide_seam_correction() {
        // index 1 untouched, index 2 +40, index 3 +60
        let result = layout(&plywood(1300.0), &SupportOverrides::new()).unwrap();
        let positions: Vec<f64> = result.supports.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![520.0, 1060.0, 1580.0]);
    }

    #[test]
    fn test_plate_width_boundary_not_corrected() {
        let result = layout(&plywood(1220.0), &SupportOverrides::new()).unwrap();
        assert_close(result.supports[1].position, 1020.0);
    }

    #[test]
    fn test_panels_partition_usable_span() {
        let result = layout(&plywood(1300.0), &SupportOverrides::new()).unwrap();
        assert_close(result.panels[0].start, 20.0);
        for pair in result.panels.windows(2) {
            assert_close(pair[0].end(), pair[1].start);
        }
        assert_close(result.panels.last().unwrap().end(), 1980.0);
        assert_close(result.total_panel_extent(), 1960.0);
    }

    #[test]
    fn test_override_applied_and_flagged() {
        let mut overrides = SupportOverrides::new();
        overrides.set(2, 900.0);
        let result = layout(&plywood(1000.0), &overrides).unwrap();

        let support = result.support(2).unwrap();
        assert_close(support.position, 900.0);
        assert!(support.is_custom);
        assert!(!result.support(1).unwrap().is_custom);
        assert_close(result.total_panel_extent(), 1960.0);
    }

    #[test]
    fn test_override_clamped_inside_rails() {
        let mut overrides = SupportOverrides::new();
        overrides.set(3, 5000.0);
        let result = layout(&plywood(1000.0), &overrides).unwrap();
        // bottom rail 20 plus a minimum bay of 20 + 10
        assert_close(minimum_bay(&plywood(1000.0)), 20.0 + SUPPORT_MARGIN);
        assert_close(result.support(3).unwrap().position, 1950.0);
    }

    #[test]
    fn test_crowded_overrides_keep_bays_taller_than_slat() {
        let params = plywood(1000.0).with_covering(CoveringMaterial::Fabric);
        let mut overrides = SupportOverrides::new();
        overrides.set(1, 1000.0);
        overrides.set(2, 1000.0);
        let result = layout(&params, &overrides).unwrap();

        let extents: Vec<f64> = result.panels.iter().map(|p| p.extent).collect();
        assert_eq!(extents.len(), 4);
        for extent in &extents {
            assert!(*extent > params.slat_depth, "bay {} under slat", extent);
        }
        assert_close(extents[1], minimum_bay(&params));
        assert_close(result.total_panel_extent(), 1960.0);
    }

    #[test]
    fn test_dense_frame_shrinks_minimum_bay() {
        // 1960 / 25 -> 78 supports, even bays of 24.81
        let params = FrameParameters {
            support_spacing: 25.0,
            ..plywood(1000.0)
        }
        .with_covering(CoveringMaterial::Fabric);
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        let bay = minimum_bay(&params);

        assert!(bay > 20.0 && bay < result.effective_spacing);
        for panel in &result.panels {
            assert!(panel.extent > params.slat_depth);
        }
    }

    #[test]
    fn test_stale_override_ignored_not_mutated() {
        let mut overrides = SupportOverrides::new();
        overrides.set(7, 300.0);
        let snapshot = overrides.clone();

        let result = layout(&plywood(1000.0), &overrides).unwrap();
        assert!(result.supports.iter().all(|s| !s.is_custom));
        assert_eq!(overrides, snapshot);
    }

    #[test]
    fn test_positions_stay_ordered_when_overridden_out_of_order() {
        let mut overrides = SupportOverrides::new();
        overrides.set(1, 1500.0);
        overrides.set(2, 400.0);
        let result = layout(&plywood(1000.0), &overrides).unwrap();

        for pair in result.supports.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
        assert_close(result.total_panel_extent(), 1960.0);
    }

    #[test]
    fn test_overflowing_supports_settle_inside_bounds() {
        // usable 2000 divides evenly; the last wide-plywood support would land
        // past the bottom rail
        let params = FrameParameters {
            height: 2040.0,
            ..plywood(1300.0)
        };
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        assert_eq!(result.additional_supports, 4);
        let (lo, hi) = position_bounds(&params);
        for support in &result.supports {
            assert!(support.position >= lo && support.position <= hi);
        }
        for pair in result.supports.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn test_division_marks_independent_of_supports() {
        let params = FrameParameters {
            division_size: Some(300.0),
            ..plywood(1000.0)
        };
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        let marks: Vec<f64> = result.division_marks.iter().map(|m| m.position).collect();
        assert_eq!(marks, vec![300.0, 600.0, 900.0, 1200.0, 1500.0, 1800.0]);
    }

    #[test]
    fn test_division_mark_on_height() {
        let params = FrameParameters {
            division_size: Some(500.0),
            ..FrameParameters::default()
        };
        let result = layout(&params, &SupportOverrides::new()).unwrap();
        assert_eq!(result.division_marks.len(), 4);
        assert_close(result.division_marks[3].position, 2000.0);
    }

    #[test]
    fn test_frame_sides() {
        let result = layout(&plywood(1000.0), &SupportOverrides::new()).unwrap();
        assert_eq!(result.sides.len(), 4);
        assert_eq!(result.sides[2].side, FrameSide::Right);
        assert_eq!(result.sides[2].rect, Rect::new(980.0, 0.0, 20.0, 2000.0));
        assert_eq!(result.sides[3].rect, Rect::new(20.0, 1980.0, 960.0, 20.0));
    }

    #[test]
    fn test_hit_test_uses_layout_positions() {
        let result = layout(&plywood(1300.0), &SupportOverrides::new()).unwrap();
        assert_eq!(result.hit_test(Point::new(600.0, 1060.0)), Some(2));
        assert_eq!(result.hit_test(Point::new(600.0, 1069.0)), Some(2));
        assert_eq!(result.hit_test(Point::new(600.0, 1020.0)), None);
        assert_eq!(result.hit_test(Point::new(5.0, 1060.0)), None);
    }

    #[test]
    fn test_degenerate_frame_rejected() {
        let params = FrameParameters {
            width: 40.0,
            ..plywood(1000.0)
        };
        assert!(layout(&params, &SupportOverrides::new()).is_err());
    }

    #[test]
    fn test_absurd_spacing_rejected() {
        let params = FrameParameters {
            support_spacing: 0.01,
            ..plywood(1000.0)
        };
        let err = layout(&params, &SupportOverrides::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_retain_valid() {
        let mut overrides = SupportOverrides::new();
        overrides.set(0, 100.0);
        overrides.set(1, 200.0);
        overrides.set(4, 900.0);
        overrides.set(2, f64::NAN);
        assert_eq!(overrides.retain_valid(3), 3);
        assert_eq!(overrides.iter().collect::<Vec<_>>(), vec![(1, 200.0)]);
    }

    #[test]
    fn test_mark_selected() {
        let mut result = layout(&plywood(1000.0), &SupportOverrides::new()).unwrap();
        result.mark_selected(Some(2));
        assert!(result.support(2).unwrap().is_selected);
        assert_eq!(result.supports.iter().filter(|s| s.is_selected).count(), 1);

        result.mark_selected(None);
        assert!(result.supports.iter().all(|s| !s.is_selected));
    }

    #[test]
    fn test_overrides_serialize_as_map() {
        let mut overrides = SupportOverrides::new();
        overrides.set(1, 250.0);
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, "{\"1\":250.0}");
        let roundtrip: SupportOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, overrides);
    }
}
