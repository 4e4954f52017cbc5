//! # Frame Parameters
//!
//! The physical inputs of a blind frame. This is the only configuration that
//! gets persisted; layouts, piece lists and cutting plans are always derived
//! from it.
//!
//! All lengths share one abstract linear unit. The core never converts to
//! display units.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "width": 1300.0,
//!   "height": 2000.0,
//!   "slat_height": 45.0,
//!   "slat_depth": 20.0,
//!   "support_spacing": 500.0,
//!   "covering_material": "plywood",
//!   "plywood_thickness": 12.0,
//!   "division_size": null
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{FrameError, FrameResult};
use crate::layout::additional_supports;

/// Standard plywood plate width. Frames wider than this need more than one
/// plate across and switch covering strategy.
pub const PLATE_WIDTH: f64 = 1220.0;

/// Standard plywood plate height.
pub const PLATE_HEIGHT: f64 = 2440.0;

/// Standard stock board length used by the cut-list optimizer.
pub const DEFAULT_STOCK_LENGTH: f64 = 6000.0;

/// Clearance added to one slat depth to get the smallest bay between
/// supports and rails.
pub const SUPPORT_MARGIN: f64 = 10.0;

/// Most supports a single frame may carry.
pub const MAX_SUPPORTS: usize = 1_000;

/// Most division marks a single frame may carry.
pub const MAX_DIVISION_MARKS: usize = 10_000;

/// Covering applied over the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveringMaterial {
    /// Bare frame, no horizontal supports
    #[default]
    None,
    /// Stretched fabric, supports distributed evenly
    Fabric,
    /// Plywood sheets, supports at fixed spacing
    Plywood,
}

impl CoveringMaterial {
    /// All materials, in UI order
    pub const ALL: [CoveringMaterial; 3] = [
        CoveringMaterial::None,
        CoveringMaterial::Fabric,
        CoveringMaterial::Plywood,
    ];

    /// Short lowercase identifier (matches the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            CoveringMaterial::None => "none",
            CoveringMaterial::Fabric => "fabric",
            CoveringMaterial::Plywood => "plywood",
        }
    }

    /// Whether this material needs horizontal supports behind it
    pub fn is_covered(&self) -> bool {
        !matches!(self, CoveringMaterial::None)
    }
}

impl std::fmt::Display for CoveringMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CoveringMaterial {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(CoveringMaterial::None),
            "fabric" => Ok(CoveringMaterial::Fabric),
            "plywood" => Ok(CoveringMaterial::Plywood),
            other => Err(FrameError::invalid_input(
                "covering_material",
                other,
                "Expected one of: none, fabric, plywood",
            )),
        }
    }
}

/// Physical parameters of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParameters {
    /// Outer frame width
    pub width: f64,

    /// Outer frame height
    pub height: f64,

    /// Board face dimension
    pub slat_height: f64,

    /// Board thickness
    pub slat_depth: f64,

    /// Target spacing between horizontal supports
    pub support_spacing: f64,

    /// Covering material
    #[serde(default)]
    pub covering_material: CoveringMaterial,

    /// Plywood sheet thickness (only read for plywood coverings)
    pub plywood_thickness: f64,

    /// Spacing of informational division marks
    #[serde(default)]
    pub division_size: Option<f64>,
}

impl Default for FrameParameters {
    fn default() -> Self {
        FrameParameters {
            width: 1000.0,
            height: 2000.0,
            slat_height: 45.0,
            slat_depth: 20.0,
            support_spacing: 500.0,
            covering_material: CoveringMaterial::None,
            plywood_thickness: 12.0,
            division_size: None,
        }
    }
}

impl FrameParameters {
    /// Builder-style covering setter.
    pub fn with_covering(mut self, material: CoveringMaterial) -> Self {
        self.covering_material = material;
        self
    }

    /// Validate input parameters.
    ///
    /// Every computation in the crate calls this first; degenerate frames
    /// are rejected rather than producing negative lengths. Besides the
    /// positivity checks this enforces:
    ///
    /// * width and height exceed twice the slat depth
    /// * covered frames: at most [`MAX_SUPPORTS`] supports, and evenly spaced
    ///   bays taller than the slat depth
    /// * at most [`MAX_DIVISION_MARKS`] division marks
    pub fn validate(&self) -> FrameResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("slat_height", self.slat_height)?;
        positive("slat_depth", self.slat_depth)?;
        positive("support_spacing", self.support_spacing)?;

        if self.covering_material == CoveringMaterial::Plywood {
            positive("plywood_thickness", self.plywood_thickness)?;
        }
        if let Some(size) = self.division_size {
            positive("division_size", size)?;
            if (self.height / size).floor() > MAX_DIVISION_MARKS as f64 {
                return Err(FrameError::invalid_input(
                    "division_size",
                    size.to_string(),
                    format!("Division size yields more than {} marks", MAX_DIVISION_MARKS),
                ));
            }
        }

        if self.width <= 2.0 * self.slat_depth {
            return Err(FrameError::invalid_input(
                "width",
                self.width.to_string(),
                format!("Width must exceed twice the slat depth ({})", 2.0 * self.slat_depth),
            ));
        }
        if self.height <= 2.0 * self.slat_depth {
            return Err(FrameError::invalid_input(
                "height",
                self.height.to_string(),
                format!("Height must exceed twice the slat depth ({})", 2.0 * self.slat_depth),
            ));
        }
        if self.covering_material.is_covered() {
            self.validate_bays()?;
        }
        Ok(())
    }

    /// Covering is cut per bay, net of one slat depth, so every bay of an
    /// evenly spaced layout must be taller than a slat.
    fn validate_bays(&self) -> FrameResult<()> {
        let supports = additional_supports(self);
        if supports > MAX_SUPPORTS {
            return Err(FrameError::invalid_input(
                "support_spacing",
                self.support_spacing.to_string(),
                format!(
                    "Spacing yields {} supports; a frame carries at most {}",
                    supports, MAX_SUPPORTS
                ),
            ));
        }

        let bay = self.usable_height() / (supports + 1) as f64;
        if bay <= self.slat_depth {
            let (field, value) = if supports > 0 {
                ("support_spacing", self.support_spacing)
            } else {
                ("height", self.height)
            };
            return Err(FrameError::invalid_input(
                field,
                value.to_string(),
                format!(
                    "Covering bays would be {:.1} tall; they must exceed the slat depth ({})",
                    bay, self.slat_depth
                ),
            ));
        }
        Ok(())
    }

    /// Inner usable height between top and bottom rails
    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.slat_depth
    }

    /// Inner usable width between the two stiles
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.slat_depth
    }

    /// Outer frame area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the frame is wider than one plywood plate
    pub fn exceeds_plate_width(&self) -> bool {
        self.width > PLATE_WIDTH
    }

    /// True when switching from `self` to `next` invalidates manual support
    /// overrides (support indices no longer map to the same boards).
    pub fn invalidates_overrides(&self, next: &FrameParameters) -> bool {
        self.height != next.height || self.support_spacing != next.support_spacing
    }
}

fn positive(field: &str, value: f64) -> FrameResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FrameError::invalid_input(
            field,
            value.to_string(),
            "Value must be a positive finite number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FrameParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_usable_width_rejected() {
        let params = FrameParameters {
            width: 40.0,
            slat_depth: 20.0,
            ..FrameParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FrameError::InvalidInput { ref field, .. } if field == "width"));
    }

    #[test]
    fn test_non_positive_spacing_rejected() {
        let params = FrameParameters {
            support_spacing: 0.0,
            ..FrameParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_bays_thinner_than_slat_rejected() {
        // 1960 / 15 -> 130 supports, bays of 14.96 under a 20 slat
        let params = FrameParameters {
            width: 1300.0,
            support_spacing: 15.0,
            ..FrameParameters::default()
        }
        .with_covering(CoveringMaterial::Plywood);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FrameError::InvalidInput { ref field, .. } if field == "support_spacing"));

        let bare = FrameParameters {
            covering_material: CoveringMaterial::None,
            ..params
        };
        assert!(bare.validate().is_ok());
    }

    #[test]
    fn test_short_covered_frame_without_supports_rejected() {
        // usable 10 with no supports: one bay under the 20 slat
        let params = FrameParameters {
            height: 50.0,
            ..FrameParameters::default()
        }
        .with_covering(CoveringMaterial::Fabric);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FrameError::InvalidInput { ref field, .. } if field == "height"));
    }

    #[test]
    fn test_support_limit_is_reported() {
        let params = FrameParameters {
            height: 100_000.0,
            support_spacing: 50.0,
            ..FrameParameters::default()
        }
        .with_covering(CoveringMaterial::Fabric);
        let err = params.validate().unwrap_err();
        let FrameError::InvalidInput { field, reason, .. } = err else {
            panic!("expected invalid input");
        };
        assert_eq!(field, "support_spacing");
        assert!(reason.contains("at most 1000"));
    }

    #[test]
    fn test_division_mark_limit() {
        let params = FrameParameters {
            division_size: Some(0.1),
            ..FrameParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_division_size_must_be_positive() {
        let params = FrameParameters {
            division_size: Some(-10.0),
            ..FrameParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_plywood_thickness_only_checked_for_plywood() {
        let mut params = FrameParameters {
            plywood_thickness: 0.0,
            ..FrameParameters::default()
        };
        assert!(params.validate().is_ok());

        params.covering_material = CoveringMaterial::Plywood;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let params = FrameParameters {
            height: f64::NAN,
            ..FrameParameters::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_invalidates_overrides() {
        let base = FrameParameters::default();
        let wider = FrameParameters { width: 1200.0, ..base };
        let taller = FrameParameters { height: 2100.0, ..base };
        let denser = FrameParameters { support_spacing: 400.0, ..base };

        assert!(!base.invalidates_overrides(&wider));
        assert!(base.invalidates_overrides(&taller));
        assert!(base.invalidates_overrides(&denser));
    }

    #[test]
    fn test_material_parse_and_serialize() {
        assert_eq!("Plywood".parse::<CoveringMaterial>().unwrap(), CoveringMaterial::Plywood);
        assert!("cardboard".parse::<CoveringMaterial>().is_err());

        let json = serde_json::to_string(&CoveringMaterial::Fabric).unwrap();
        assert_eq!(json, "\"fabric\"");
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = r#"{
            "width": 800.0,
            "height": 1500.0,
            "slat_height": 45.0,
            "slat_depth": 18.0,
            "support_spacing": 400.0,
            "plywood_thickness": 9.0
        }"#;
        let params: FrameParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.covering_material, CoveringMaterial::None);
        assert_eq!(params.division_size, None);
    }
}
