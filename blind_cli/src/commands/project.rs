//! Project file commands.

use std::path::Path;

use blind_core::errors::FrameError;
use blind_core::file_io::{load_project, save_project, FileLock};
use blind_core::layout::SupportOverrides;
use blind_core::plan::plan_frame;
use blind_core::project::Project;

use crate::cli::{FrameArgs, OutputFormat};
use crate::error::CliError;
use crate::format::{format_frames, format_json, format_plan};
use crate::util::{lock_owner, resolve_frame, stock_length_for};

/// Create a new project file
pub fn cmd_new(path: &Path, name: &str, stock_length: Option<f64>, force: bool) -> Result<String, CliError> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut project = Project::new(name)?;
    if let Some(length) = stock_length {
        if !length.is_finite() || length <= 0.0 {
            return Err(FrameError::invalid_input(
                "stock_length",
                length.to_string(),
                "Stock length must be a positive number",
            )
            .into());
        }
        project.settings.stock_length = length;
    }

    let _lock = FileLock::acquire(path, lock_owner())?;
    save_project(&project, path)?;
    Ok(format!("Created project '{}' at {}", project.meta.name, path.display()))
}

/// Add a frame to a project
pub fn cmd_add(path: &Path, name: &str, frame: &FrameArgs) -> Result<String, CliError> {
    let params = resolve_frame(frame)?;

    let _lock = FileLock::acquire(path, lock_owner())?;
    let mut project = load_project(path)?;
    project.add_frame(name, params)?;
    save_project(&project, path)?;

    Ok(format!("Added frame '{}' ({} frames)", name.trim(), project.frame_count()))
}

/// List the frames in a project
pub fn cmd_list(format: OutputFormat, path: &Path) -> Result<String, CliError> {
    let project = load_project(path)?;
    let frames = project.frames_by_recency();

    match format {
        OutputFormat::Text => Ok(format_frames(&frames)),
        OutputFormat::Json => format_json(&frames),
    }
}

/// Compute the plan for a stored frame
pub fn cmd_show(format: OutputFormat, path: &Path, name: &str, stock_length: Option<f64>) -> Result<String, CliError> {
    let project = load_project(path)?;
    let record = project
        .frame_by_name(name)
        .ok_or_else(|| FrameError::not_found("Frame", name.trim()))?;

    let plan = plan_frame(
        &record.parameters,
        &SupportOverrides::new(),
        stock_length_for(&project, stock_length),
    )?;

    match format {
        OutputFormat::Text => Ok(format!("{}\n\n{}", record.name, format_plan(&plan))),
        OutputFormat::Json => format_json(&plan),
    }
}

/// Remove a frame from a project
pub fn cmd_remove(path: &Path, name: &str) -> Result<String, CliError> {
    let _lock = FileLock::acquire(path, lock_owner())?;
    let mut project = load_project(path)?;

    let id = project
        .frame_by_name(name)
        .map(|record| record.id)
        .ok_or_else(|| FrameError::not_found("Frame", name.trim()))?;
    let removed = project
        .remove_frame(&id)
        .ok_or_else(|| FrameError::not_found("Frame", name.trim()))?;
    save_project(&project, path)?;

    Ok(format!("Removed frame '{}'", removed.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CoveringArg;
    use crate::error::exit_codes;

    fn new_project(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("house.blind");
        cmd_new(&path, "House", Some(4000.0), false).unwrap();
        path
    }

    #[test]
    fn test_new_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = new_project(&dir);

        let err = cmd_new(&path, "Other", None, false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        cmd_new(&path, "Other", None, true).unwrap();
        assert_eq!(load_project(&path).unwrap().meta.name, "Other");
    }

    #[test]
    fn test_new_rejects_bad_stock_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.blind");
        let err = cmd_new(&path, "Bad", Some(-1.0), false).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(!path.exists());
    }

    #[test]
    fn test_add_list_show_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = new_project(&dir);

        let frame = FrameArgs {
            covering: Some(CoveringArg::Fabric),
            ..FrameArgs::default()
        };
        cmd_add(&path, "Kitchen", &frame).unwrap();
        cmd_add(&path, "Bedroom", &FrameArgs::default()).unwrap();

        let listing = cmd_list(OutputFormat::Text, &path).unwrap();
        assert!(listing.contains("Kitchen"));
        assert!(listing.contains("Bedroom"));

        let json = cmd_show(OutputFormat::Json, &path, "kitchen", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cutting_plan"]["stock_length"], 4000.0);
        assert_eq!(value["parameters"]["covering_material"], "fabric");

        let message = cmd_remove(&path, "KITCHEN").unwrap();
        assert_eq!(message, "Removed frame 'Kitchen'");
        let project = load_project(&path).unwrap();
        assert_eq!(project.frame_count(), 1);
        assert!(!path.with_extension("blind.lock").exists());
    }

    #[test]
    fn test_add_duplicate_and_invalid_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = new_project(&dir);
        cmd_add(&path, "Door", &FrameArgs::default()).unwrap();

        let err = cmd_add(&path, " door ", &FrameArgs::default()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);

        let tiny = FrameArgs {
            height: Some(10.0),
            ..FrameArgs::default()
        };
        assert!(cmd_add(&path, "Tiny", &tiny).is_err());
        assert_eq!(load_project(&path).unwrap().frame_count(), 1);
    }

    #[test]
    fn test_show_missing_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = new_project(&dir);
        let err = cmd_show(OutputFormat::Text, &path, "Ghost", None).unwrap_err();
        assert!(matches!(err, CliError::Frame(FrameError::NotFound { .. })));
        assert!(cmd_remove(&path, "Ghost").is_err());
    }

    #[test]
    fn test_locked_project_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = new_project(&dir);
        let _held = FileLock::acquire(&path, "someone-else").unwrap();

        let err = cmd_add(&path, "Door", &FrameArgs::default()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::LOCKED);
    }
}
