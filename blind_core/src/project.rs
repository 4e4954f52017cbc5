//! # Project Data Structures
//!
//! The `Project` struct is the root container for saved frames. Projects
//! serialize to `.blind` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (schema version, name, timestamps)
//! ├── settings: ProjectSettings (stock board length)
//! └── frames: Vec<FrameRecord> (named FrameParameters)
//! ```
//!
//! Only parameters are stored. Layouts, piece lists and cutting plans are
//! recomputed on load, and manual support overrides are never persisted.
//!
//! ## Example
//!
//! ```rust
//! use blind_core::frame::FrameParameters;
//! use blind_core::project::Project;
//!
//! let mut project = Project::new("Living room").unwrap();
//! let id = project.add_frame("Left window", FrameParameters::default()).unwrap();
//!
//! assert_eq!(project.frame_by_id(&id).unwrap().name, "Left window");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Left window"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{FrameError, FrameResult};
use crate::frame::{FrameParameters, DEFAULT_STOCK_LENGTH};

/// Current schema version for .blind files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Longest accepted project or frame name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Trim and check a display name.
pub fn validate_name(field: &str, name: &str) -> FrameResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FrameError::invalid_input(field, name, "Name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(FrameError::invalid_input(
            field,
            trimmed,
            format!("Name must be at most {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(trimmed.to_string())
}

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, name, timestamps)
    pub meta: ProjectMetadata,

    /// Project-wide settings
    #[serde(default)]
    pub settings: ProjectSettings,

    /// Saved frames in creation order
    #[serde(default)]
    pub frames: Vec<FrameRecord>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(name: &str) -> FrameResult<Self> {
        let now = Utc::now();
        Ok(Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: validate_name("project_name", name)?,
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            frames: Vec::new(),
        })
    }

    pub fn rename(&mut self, name: &str) -> FrameResult<()> {
        self.meta.name = validate_name("project_name", name)?;
        self.touch();
        Ok(())
    }

    /// Add a named frame. Names are unique per project, ignoring case, and
    /// the parameters must pass validation.
    ///
    /// Returns the id assigned to the frame.
    pub fn add_frame(&mut self, name: &str, parameters: FrameParameters) -> FrameResult<Uuid> {
        let name = validate_name("frame_name", name)?;
        self.ensure_unique(&name, None)?;
        parameters.validate()?;

        let record = FrameRecord::new(name, parameters);
        let id = record.id;
        self.frames.push(record);
        self.touch();
        Ok(id)
    }

    pub fn rename_frame(&mut self, id: &Uuid, name: &str) -> FrameResult<()> {
        let name = validate_name("frame_name", name)?;
        self.ensure_unique(&name, Some(id))?;

        let record = self.frame_mut(id)?;
        record.name = name;
        record.modified = Utc::now();
        self.touch();
        Ok(())
    }

    /// Replace a frame's parameters.
    ///
    /// Returns true when the change invalidates manual support overrides the
    /// caller may be holding for this frame.
    pub fn update_frame(&mut self, id: &Uuid, parameters: FrameParameters) -> FrameResult<bool> {
        parameters.validate()?;
        let record = self.frame_mut(id)?;
        let invalidated = record.parameters.invalidates_overrides(&parameters);
        record.parameters = parameters;
        record.modified = Utc::now();
        self.touch();
        Ok(invalidated)
    }

    /// Remove a frame by id, returning it if it existed.
    pub fn remove_frame(&mut self, id: &Uuid) -> Option<FrameRecord> {
        let position = self.frames.iter().position(|f| f.id == *id)?;
        let removed = self.frames.remove(position);
        self.touch();
        Some(removed)
    }

    pub fn frame_by_id(&self, id: &Uuid) -> Option<&FrameRecord> {
        self.frames.iter().find(|f| f.id == *id)
    }

    /// Case-insensitive lookup by trimmed name
    pub fn frame_by_name(&self, name: &str) -> Option<&FrameRecord> {
        let wanted = name.trim().to_lowercase();
        self.frames.iter().find(|f| f.name.to_lowercase() == wanted)
    }

    /// Frames, most recently modified first
    pub fn frames_by_recency(&self) -> Vec<&FrameRecord> {
        let mut frames: Vec<&FrameRecord> = self.frames.iter().collect();
        frames.sort_by(|a, b| b.modified.cmp(&a.modified));
        frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    fn frame_mut(&mut self, id: &Uuid) -> FrameResult<&mut FrameRecord> {
        self.frames
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or_else(|| FrameError::not_found("Frame", id.to_string()))
    }

    fn ensure_unique(&self, name: &str, except: Option<&Uuid>) -> FrameResult<()> {
        let clash = self
            .frame_by_name(name)
            .is_some_and(|existing| Some(&existing.id) != except);
        if clash {
            return Err(FrameError::invalid_input(
                "frame_name",
                name,
                "A frame with this name already exists",
            ));
        }
        Ok(())
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Display name
    pub name: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Length of the stock boards frames are cut from
    pub stock_length: f64,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            stock_length: DEFAULT_STOCK_LENGTH,
        }
    }
}

/// A saved frame: parameters plus a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub id: Uuid,
    pub name: String,
    pub parameters: FrameParameters,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl FrameRecord {
    fn new(name: String, parameters: FrameParameters) -> Self {
        let now = Utc::now();
        FrameRecord {
            id: Uuid::new_v4(),
            name,
            parameters,
            created: now,
            modified: now,
        }
    }
}
