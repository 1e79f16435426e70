//! # Storage Layer
//!
//! This module holds the persistence machinery for prodz. The
//! [`StorageBackend`] trait allows the store to work with different
//! document backends.
//!
//! ## Whole-Document Rewrite Architecture
//!
//! The entire catalog lives in **one JSON document**: an array of product
//! records, pretty-printed with two-space indentation. Every operation is
//! a bare read-modify-write cycle:
//!
//! 1. Read the full document from the backend.
//! 2. Mutate the in-memory record sequence.
//! 3. (Mutations only) write the full document back.
//!
//! ### Philosophy
//! - **The document is truth**: no record cache survives between calls.
//!   Whatever the last successful write left in the document is the
//!   catalog. The only state a [`ProductStore`] carries across calls is
//!   its id counter.
//! - **Atomic replacement**: writes land in a temp file and are renamed
//!   over the target, so a reader never sees a half-written array.
//! - **Simple over fast**: every operation is O(n) over the record set.
//!   That is the intended trade at this scale; there are no secondary
//!   indexes to maintain or corrupt.
//!
//! ## Id Assignment
//!
//! Ids are assigned by the store, strictly increasing, and never handed
//! out twice by a live instance. The counter is seeded from the highest
//! id in the document when the store opens, so a fresh instance over an
//! existing catalog continues the sequence instead of restarting it.
//!
//! ## Consistency Rules
//!
//! - A missing document reads as an empty catalog (first write creates it).
//! - A document that fails to parse as a product array is an error at the
//!   read boundary; nothing downstream ever sees a malformed record.
//! - Rejected creates (validation, duplicate `code`) write nothing and
//!   consume no id.
//! - Failed lookups (get, update, delete on an unknown id) write nothing.
//!
//! ## Implementations
//!
//! - [`FsBackend`]: production backend over a real file path.
//! - [`MemBackend`]: for testing logic without filesystem I/O, with
//!   read/write failure injection.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod product_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use product_store::ProductStore;
