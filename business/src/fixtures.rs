//! Static fixture lists the catalog is built from.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};

const USERS_FILE: &str = "users.json";
const CATEGORIES_FILE: &str = "categories.json";
const PRODUCTS_FILE: &str = "products.json";

const EMBEDDED_USERS: &str = include_str!("../fixtures/users.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../fixtures/categories.json");
const EMBEDDED_PRODUCTS: &str = include_str!("../fixtures/products.json");

#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Fixtures {
    /// Fixtures compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_USERS, EMBEDDED_CATEGORIES, EMBEDDED_PRODUCTS)
    }

    /// Reads `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading fixtures from {}", dir.display());

        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        Self::from_json(
            &read(USERS_FILE)?,
            &read(CATEGORIES_FILE)?,
            &read(PRODUCTS_FILE)?,
        )
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
        let fixtures = Self {
            users: parse(USERS_FILE, users)?,
            categories: parse(CATEGORIES_FILE, categories)?,
            products: parse(PRODUCTS_FILE, products)?,
        };

        info!(
            "Loaded {} users, {} categories, {} products",
            fixtures.users.len(),
            fixtures.categories.len(),
            fixtures.products.len()
        );

        Ok(fixtures)
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::Fixture { name, source })
}
