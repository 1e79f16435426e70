use super::backend::StorageBackend;
use crate::error::{ProdzError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since prodz is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    document: RefCell<Option<String>>,
    simulate_read_error: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            document: RefCell::new(None),
            simulate_read_error: RefCell::new(false),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: replace the raw document (e.g. with corrupt JSON).
    pub fn set_document(&self, contents: impl Into<String>) {
        *self.document.borrow_mut() = Some(contents.into());
    }

    /// Test helper: inspect the raw document as last written.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_document(&self) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(ProdzError::Store("Simulated read error".to_string()));
        }
        Ok(self.document.borrow().clone())
    }

    fn write_document(&self, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ProdzError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn document_path(&self) -> PathBuf {
        PathBuf::from("memory://catalog.json")
    }
}
