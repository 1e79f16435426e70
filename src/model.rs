//! # Domain Model: Products, Drafts and Patches
//!
//! This module defines the core data structures of prodz: [`Product`],
//! [`ProductDraft`], and [`ProductPatch`]. It also owns field validation,
//! which runs once, at creation time.
//!
//! ## The Shapes
//!
//! A product moves through three shapes over its lifecycle:
//!
//! 1. **Draft**: what the caller hands in. All business fields, no `id`:
//!    the store assigns identity, never the caller.
//! 2. **Product**: a stored record. Draft fields plus the assigned `id`.
//! 3. **Patch**: a partial update. Every field optional, and no `id` slot
//!    at all, so an update can never reassign identity.
//!
//! ## Validation
//!
//! Every draft field is required and must be non-empty (strings) or
//! non-zero (numbers). The check is uniform across fields: the first
//! failing field aborts creation. Validation is *not* re-applied when a
//! patch is merged; updates take the provided values as-is.
//!
//! ## Edge Cases
//!
//! - **Whitespace-only strings**: accepted. Only truly empty strings are
//!   rejected, matching the uniform emptiness rule.
//! - **Zero price / zero stock**: rejected at creation.
//! - **Empty patch**: legal; merging it is a no-op that still rewrites
//!   the record unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{ProdzError, Result};

/// Store-assigned product identifier. Strictly increasing, never reused
/// while a store instance lives.
pub type ProductId = u64;

/// A stored product record, exactly as persisted in the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub img: String,
    pub code: String,
    pub stock: u32,
}

/// The create payload: a product minus its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub img: String,
    pub code: String,
    pub stock: u32,
}

impl ProductDraft {
    /// Check that every required field carries a value.
    ///
    /// Strings must be non-empty, numbers non-zero. Returns the first
    /// offending field name.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ProdzError::MissingField("title"));
        }
        if self.description.is_empty() {
            return Err(ProdzError::MissingField("description"));
        }
        if self.price == 0.0 {
            return Err(ProdzError::MissingField("price"));
        }
        if self.img.is_empty() {
            return Err(ProdzError::MissingField("img"));
        }
        if self.code.is_empty() {
            return Err(ProdzError::MissingField("code"));
        }
        if self.stock == 0 {
            return Err(ProdzError::MissingField("stock"));
        }
        Ok(())
    }

    /// Promote the draft to a full record under the given id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            img: self.img,
            code: self.code,
            stock: self.stock,
        }
    }
}

/// A partial update. Fields left as `None` keep their current value.
///
/// There is intentionally no `id` field here: record identity is assigned
/// by the store and cannot be rewritten through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub img: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    /// Shallow-merge this patch onto an existing record.
    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(img) = &self.img {
            product.img = img.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }

    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.img.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }
}
