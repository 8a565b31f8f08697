//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as preparing the report directories and inspecting result folders.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如准备报告目录和检查结果文件夹。

use std::fs;
use std::path::Path;

use crate::error::{Result, RunnerError};

/// Creates every directory in `dirs`, including missing parents.
/// Directories that already exist are left alone, so calling this twice is a no-op.
///
/// # Arguments
/// * `dirs` - Directories to create, in order
///
/// # Errors
/// Stops at the first directory that cannot be created and reports it as
/// `RunnerError::DirectoryCreation`.
pub fn prepare_directories<P: AsRef<Path>>(dirs: &[P]) -> Result<()> {
    for dir in dirs {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| RunnerError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!("Ensured directory {}", dir.display());
    }
    Ok(())
}

/// Checks whether `path` is a directory with at least one entry.
/// An unreadable directory counts as empty.
pub fn is_non_empty_dir(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
