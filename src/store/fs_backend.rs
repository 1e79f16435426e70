use super::backend::StorageBackend;
use crate::error::{ProdzError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed catalog document.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ProdzError::Io)?;
            }
        }
        Ok(())
    }

    /// Temp file sibling of the target, so the rename stays on one
    /// filesystem.
    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("catalog");
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()))
    }
}

impl StorageBackend for FsBackend {
    fn read_document(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(ProdzError::Io)?;
        Ok(Some(contents))
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents).map_err(ProdzError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(ProdzError::Io)?;

        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        self.path.clone()
    }
}
