//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: write to `.tmp`, fsync, rename over the target
//! - **File locking**: `.blind.lock` sidecar plus an OS lock, so two people
//!   on a shared drive do not overwrite each other's frames
//! - **Version validation**: refuse files from a newer schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use blind_core::file_io::{save_project, load_project, FileLock};
//! use blind_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Cabin").unwrap();
//! let path = Path::new("cabin.blind");
//!
//! let lock = FileLock::acquire(path, "maker@example.com").unwrap();
//! save_project(&project, path).unwrap();
//! drop(lock);
//!
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.name, "Cabin");
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{FrameError, FrameResult};
use crate::project::{Project, SCHEMA_VERSION};

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "blind";

/// Locks older than this are considered abandoned
const STALE_LOCK_HOURS: i64 = 24;

/// Metadata written into the lock sidecar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was taken
    pub machine: String,
    /// Process holding the lock
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// Whether the holder is gone or the lock has simply aged out
    pub fn is_stale(&self) -> bool {
        if Utc::now() - self.locked_at > chrono::Duration::hours(STALE_LOCK_HOURS) {
            return true;
        }
        hostname().is_some_and(|ours| ours == self.machine) && !process_alive(self.pid)
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{}", pid)).exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive lock on a project file, released on drop.
#[derive(Debug)]
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS-level lock alive
    _handle: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// # Errors
    ///
    /// * `FrameError::FileLocked` - someone else holds a live lock
    /// * `FrameError::FileError` - the sidecar could not be written
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> FrameResult<Self> {
        let lock_path = lock_path_for(path);

        if let Ok(existing) = read_lock_info(&lock_path) {
            if !existing.is_stale() {
                return Err(FrameError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ));
            }
            warn!(
                path = %path.display(),
                holder = %existing.user_id,
                "taking over stale project lock"
            );
        }

        let mut handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| FrameError::file_error("create lock", lock_path.display().to_string(), e.to_string()))?;

        handle.try_lock_exclusive().map_err(|_| {
            FrameError::file_locked(path.display().to_string(), "another process", "unknown")
        })?;

        let info = LockInfo::new(user_id);
        let json = serde_json::to_string_pretty(&info).map_err(FrameError::serialization)?;
        let written = handle.write_all(json.as_bytes()).and_then(|()| handle.sync_all());
        written.map_err(|e| FrameError::file_error("write lock", lock_path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), user = %info.user_id, "project lock acquired");
        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _handle: handle,
            info,
        })
    }

    /// Current live lock on `path`, if any, without taking it.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path))
            .ok()
            .filter(|info| !info.is_stale())
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `cabin.blind` -> `cabin.blind.lock`
fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> FrameResult<LockInfo> {
    let contents = fs::read_to_string(lock_path)
        .map_err(|e| FrameError::file_error("read lock", lock_path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(FrameError::serialization)
}

/// Save a project with atomic write semantics.
pub fn save_project(project: &Project, path: &Path) -> FrameResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(FrameError::serialization)?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));
    let write_tmp = || -> std::io::Result<()> {
        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(json.as_bytes())?;
        tmp.sync_all()
    };
    write_tmp().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FrameError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FrameError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), frames = project.frame_count(), "project saved");
    Ok(())
}

/// Load a project and check its schema version.
///
/// # Errors
///
/// * `FrameError::FileError` - unreadable file
/// * `FrameError::SerializationError` - invalid JSON
/// * `FrameError::VersionMismatch` - written by an incompatible schema
pub fn load_project(path: &Path) -> FrameResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FrameError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents)
        .map_err(|e| FrameError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&project.meta.version)?;

    info!(path = %path.display(), frames = project.frame_count(), "project loaded");
    Ok(project)
}

/// Load a project together with any live lock someone else holds on it.
pub fn load_project_with_lock_check(path: &Path) -> FrameResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

/// Same major version required; during 0.x the file's minor may not be newer.
fn validate_version(file_version: &str) -> FrameResult<()> {
    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file = parse(file_version);
    let current = parse(SCHEMA_VERSION);

    let mismatch = || FrameError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    match (file.as_slice(), current.as_slice()) {
        ([file_major, ..], [major, ..]) if file_major != major => Err(mismatch()),
        ([0, file_minor, ..], [0, minor, ..]) if file_minor > minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{CoveringMaterial, FrameParameters};

    fn project_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(format!("{}.{}", name, PROJECT_EXTENSION))
    }

    #[test]
    fn test_lock_path_generation() {
        let lock_path = lock_path_for(Path::new("/path/to/cabin.blind"));
        assert_eq!(lock_path, Path::new("/path/to/cabin.blind.lock"));
    }

    #[test]
    fn test_lock_info_creation() {
        let info = LockInfo::new("maker@example.com");
        assert_eq!(info.user_id, "maker@example.com");
        assert!(info.pid > 0);
        assert!(!info.is_stale());
    }

    #[test]
    fn test_old_lock_is_stale() {
        let mut info = LockInfo::new("maker@example.com");
        info.locked_at = Utc::now() - chrono::Duration::hours(STALE_LOCK_HOURS + 1);
        assert!(info.is_stale());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "roundtrip");

        let mut project = Project::new("Cabin").unwrap();
        let params = FrameParameters::default().with_covering(CoveringMaterial::Fabric);
        project.add_frame("Bedroom", params).unwrap();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.name, "Cabin");
        assert_eq!(loaded.frames.len(), 1);
        assert_eq!(loaded.frames[0].parameters, params);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "atomic");

        save_project(&Project::new("Cabin").unwrap(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("blind.tmp").exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(&project_path(&dir, "missing")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "garbage");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_project(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_file_lock_acquire_and_release() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "locked");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "maker@example.com").unwrap();
        let lock_path = lock_path_for(&path);
        assert!(lock_path.exists());
        assert_eq!(lock.project_path(), path.as_path());

        drop(lock);
        assert!(!lock_path.exists());
    }

    #[test]
    fn test_second_lock_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "contended");
        File::create(&path).unwrap();

        let _lock = FileLock::acquire(&path, "first@example.com").unwrap();
        let err = FileLock::acquire(&path, "second@example.com").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_with_lock_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_path(&dir, "check");
        save_project(&Project::new("Cabin").unwrap(), &path).unwrap();

        let (loaded, lock_info) = load_project_with_lock_check(&path).unwrap();
        assert_eq!(loaded.meta.name, "Cabin");
        assert!(lock_info.is_none());
    }
}
