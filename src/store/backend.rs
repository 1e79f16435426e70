use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ProductStore handles the "what" (ids, validation, uniqueness).
pub trait StorageBackend {
    /// Read the raw catalog document.
    /// Returns Ok(None) if the document has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_document(&self) -> Result<Option<String>>;

    /// Replace the full catalog document.
    /// MUST be atomic (e.g. write to tmp then rename) so a reader never
    /// observes a partially written document.
    fn write_document(&self, contents: &str) -> Result<()>;

    /// The "file path" of the document.
    /// For FsBackend, the real path. For MemBackend, a virtual path.
    fn document_path(&self) -> PathBuf;
}
