//! # Prodz Architecture
//!
//! Prodz is a **minimal persistent product catalog**: CRUD over a record
//! collection backed by a single JSON file, with store-assigned
//! auto-incrementing ids and a uniqueness constraint on the business key
//! `code`. It is a library; it owns no terminal, no network, no process
//! exit codes.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/product_store.rs)                       │
//! │  - The CRUD operations and their rules                      │
//! │  - Id assignment, field validation, code uniqueness         │
//! │  - Whole-document read-modify-write per operation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend Layer (store/backend.rs)                           │
//! │  - Raw document I/O behind the StorageBackend trait         │
//! │  - FsBackend (production, atomic writes)                    │
//! │  - MemBackend (testing, failure injection)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Document Is Truth
//!
//! Between operations, the source of truth is the persisted document,
//! never an in-memory copy. Each call re-reads the full record set and
//! each mutation rewrites it wholesale. The one piece of state a store
//! instance keeps is its id counter, seeded from the document at open.
//!
//! ## Error Reporting
//!
//! Nothing fails silently. Invalid drafts and duplicate codes come back
//! as typed errors instead of log-only rejections, and storage failures
//! are logged where they happen and then returned to the caller. See
//! [`error::ProdzError`].
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Product`, `ProductDraft`, `ProductPatch`)
//! - [`store`]: Storage abstraction and the catalog store itself
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```no_run
//! use prodz::{FsBackend, ProductDraft, ProductStore};
//!
//! # fn main() -> prodz::Result<()> {
//! let mut store = ProductStore::with_backend(FsBackend::new("products.json"))?;
//! let product = store.add_product(ProductDraft {
//!     title: "producto prueba".into(),
//!     description: "Este es un producto prueba".into(),
//!     price: 200.0,
//!     img: "Sin imagen".into(),
//!     code: "abc123".into(),
//!     stock: 25,
//! })?;
//! assert_eq!(product.id, 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use error::{ProdzError, Result};
pub use model::{Product, ProductDraft, ProductId, ProductPatch};
pub use store::{FsBackend, MemBackend, ProductStore, StorageBackend};
