use thiserror::Error;

use crate::model::ProductId;

#[derive(Error, Debug)]
pub enum ProdzError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Duplicate product code: {0}")]
    DuplicateCode(String),

    #[error("Required field missing or empty: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ProdzError>;
