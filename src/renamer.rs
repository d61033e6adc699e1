//! Batch renaming of image directories.
//!
//! Implements the one-shot normalization pass over a local image directory:
//! every image file is first copied to a `backup_<name>` sibling and then
//! renamed into a sequential `image<i>.jpg` slot, in sorted filename order.
//! Backups from a previous run match the extension filter and are picked up
//! again on the next pass.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions the renamer considers image files.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Errors that can occur during a rename pass.
#[derive(Debug, Error)]
pub enum RenamerError {
    /// Path is not a directory
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to read the directory
    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed { path: PathBuf, source: io::Error },

    /// Failed to copy a file to its backup
    #[error("Failed to back up {path}: {source}")]
    BackupFailed { path: PathBuf, source: io::Error },

    /// Failed to rename a file into its slot
    #[error("Failed to rename {path}: {source}")]
    RenameFailed { path: PathBuf, source: io::Error },
}

/// A single planned backup-and-rename step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    /// The image file as it currently exists
    pub source: PathBuf,
    /// Where the backup copy goes (`backup_<name>` in the same directory)
    pub backup: PathBuf,
    /// The sequential slot the file is renamed to (`image<i>.jpg`)
    pub destination: PathBuf,
}

/// Progress event emitted while executing a rename plan.
#[derive(Debug, Clone)]
pub enum RenameEvent {
    /// A file was backed up and moved into its slot
    Renamed { from: String, to: String },
}

/// Plans the rename pass for a directory without touching the filesystem.
///
/// Image files directly inside the directory are collected (subdirectories
/// are not descended into), sorted by filename, and assigned their backup
/// path and sequential destination. Files whose names are not valid UTF-8
/// are skipped.
pub fn plan_renames(directory: &Path) -> Result<Vec<PlannedRename>, RenamerError> {
    if !directory.is_dir() {
        return Err(RenamerError::NotADirectory(directory.to_path_buf()));
    }

    let entries =
        fs::read_dir(directory).map_err(|e| RenamerError::ReadDirectoryFailed {
            path: directory.to_path_buf(),
            source: e,
        })?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RenamerError::ReadDirectoryFailed {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    // Sort to ensure consistent ordering
    names.sort();

    Ok(names
        .iter()
        .enumerate()
        .map(|(index, name)| PlannedRename {
            source: directory.join(name),
            backup: directory.join(format!("backup_{name}")),
            destination: directory.join(format!("image{}.jpg", index + 1)),
        })
        .collect())
}

/// Executes a rename plan, emitting a progress event per renamed file.
///
/// Each file is copied to its backup path before being renamed into its
/// slot. The pass stops at the first failing operation.
pub fn execute_renames<F>(operations: &[PlannedRename], mut progress: F) -> Result<(), RenamerError>
where
    F: FnMut(RenameEvent),
{
    for operation in operations {
        fs::copy(&operation.source, &operation.backup).map_err(|e| {
            RenamerError::BackupFailed {
                path: operation.source.clone(),
                source: e,
            }
        })?;

        fs::rename(&operation.source, &operation.destination).map_err(|e| {
            RenamerError::RenameFailed {
                path: operation.source.clone(),
                source: e,
            }
        })?;

        progress(RenameEvent::Renamed {
            from: file_name_of(&operation.source),
            to: file_name_of(&operation.destination),
        });
    }

    Ok(())
}

/// Plans and executes a rename pass over a directory.
///
/// # Arguments
///
/// * `directory` - The directory containing the image files
/// * `progress` - Closure called with progress events (can be empty for
///   silent operation)
///
/// # Returns
///
/// The number of files renamed.
pub fn rename_images<F>(directory: &Path, progress: F) -> Result<usize, RenamerError>
where
    F: FnMut(RenameEvent),
{
    let plan = plan_renames(directory)?;
    execute_renames(&plan, progress)?;
    Ok(plan.len())
}

/// Checks whether a path carries one of the recognized image extensions.
fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Extracts the final path component for display in progress events.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
