use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },

    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),

    #[error("failed to parse fixture {name}: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
