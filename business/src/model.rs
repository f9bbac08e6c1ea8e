//! Fixture records and the denormalized product row.
//!
//! Fixture files use camelCase keys (`ownerId`, `categoryId`), so every record
//! here deserializes with `rename_all = "camelCase"`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub owner_id: u32,
}

impl Category {
    /// Label shown in the category column, e.g. `🍞 - Grocery`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

/// A product with its category and the category's owner resolved.
///
/// Built once by [`crate::Catalog::join`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    pub fn new(product: Product, category: Category, user: User) -> Self {
        let Product {
            id,
            name,
            category_id,
        } = product;

        Self {
            id,
            name,
            category_id,
            category,
            user,
        }
    }
}
