use log::{debug, error, warn};

use super::backend::StorageBackend;
use crate::error::{ProdzError, Result};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use std::path::PathBuf;

/// The catalog store: CRUD over the product collection persisted in a
/// single backend document.
///
/// Every operation re-reads the full record set from the backend, and
/// mutations rewrite the whole document. Between operations the document
/// is the source of truth; the only in-memory state carried across calls
/// is the id counter.
pub struct ProductStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    /// Highest id handed out so far. Seeded from the document on open,
    /// advanced only after a successful persist.
    last_id: ProductId,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Open a store over the given backend, seeding the id counter from
    /// the highest id already present in the document (0 when the
    /// document is absent or empty).
    pub fn with_backend(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            last_id: 0,
        };
        store.last_id = store
            .load_products()?
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0);
        Ok(store)
    }

    /// Override the seeded counter so the next assigned id is `next_id`.
    /// Intended for callers that manage the id sequence themselves.
    pub fn with_next_id(mut self, next_id: ProductId) -> Self {
        self.last_id = next_id.saturating_sub(1);
        self
    }

    /// Add a new product to the catalog.
    ///
    /// The draft is validated (every field required, non-empty/non-zero)
    /// and its `code` checked for uniqueness against the current record
    /// set. On success the store assigns the next id, persists the full
    /// set and returns the stored record. A rejected draft adds no record
    /// and consumes no id.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        if let Err(e) = draft.validate() {
            warn!("product rejected: {}", e);
            return Err(e);
        }

        let mut products = self.load_products()?;
        if products.iter().any(|p| p.code == draft.code) {
            warn!("product rejected, code already in use: {}", draft.code);
            return Err(ProdzError::DuplicateCode(draft.code));
        }

        let product = draft.into_product(self.last_id + 1);
        products.push(product.clone());
        self.save_products(&products)?;

        // Advance only after the write landed, so the counter never runs
        // ahead of the on-disk maximum.
        self.last_id = product.id;
        debug!("product added: id={} code={}", product.id, product.code);
        Ok(product)
    }

    /// List all products, in document order.
    ///
    /// A document that has never been written is an empty catalog.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.load_products()
    }

    /// Get a single product by id.
    pub fn get_product(&self, id: ProductId) -> Result<Product> {
        let products = self.load_products()?;
        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| {
                warn!("get failed, no product with id {}", id);
                ProdzError::ProductNotFound(id)
            })
    }

    /// Merge a partial update onto the product with the given id and
    /// persist the full set. Returns the updated record.
    ///
    /// Patched fields are taken as-is; validation runs at creation only.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        let mut products = self.load_products()?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!("update failed, no product with id {}", id);
            return Err(ProdzError::ProductNotFound(id));
        };

        patch.apply(product);
        let updated = product.clone();
        self.save_products(&products)?;
        debug!("product updated: id={}", id);
        Ok(updated)
    }

    /// Remove the product with the given id and persist the full set.
    ///
    /// Deleting an id twice fails the second time: the filtered set did
    /// not shrink, so nothing is written.
    pub fn delete_product(&mut self, id: ProductId) -> Result<()> {
        let mut products = self.load_products()?;
        let len_before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == len_before {
            warn!("delete failed, no product with id {}", id);
            return Err(ProdzError::ProductNotFound(id));
        }

        self.save_products(&products)?;
        debug!("product deleted: id={}", id);
        Ok(())
    }

    /// The backing document path (real or virtual, backend-dependent).
    pub fn document_path(&self) -> PathBuf {
        self.backend.document_path()
    }

    fn load_products(&self) -> Result<Vec<Product>> {
        let raw = match self.backend.read_document() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                error!("failed to read catalog document: {}", e);
                return Err(e);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(products) => Ok(products),
            Err(e) => {
                error!("catalog document is not a valid product array: {}", e);
                Err(ProdzError::Serialization(e))
            }
        }
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        let contents = serde_json::to_string_pretty(products).map_err(ProdzError::Serialization)?;
        if let Err(e) = self.backend.write_document(&contents) {
            error!("failed to write catalog document: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
