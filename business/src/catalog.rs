use log::info;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::filter::prepare_products;
use crate::fixtures::Fixtures;
use crate::model::{Category, EnrichedProduct, Product, User};
use crate::selection::Selection;
use crate::sort::Comparators;

/// The loaded catalog: fixture users and categories plus the joined products.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// Loads fixtures according to `config` and joins them.
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let fixtures = match config.fixtures_dir() {
            Some(dir) => Fixtures::from_dir(dir)?,
            None => Fixtures::embedded()?,
        };
        Self::join(fixtures)
    }

    /// Resolves every product's category and that category's owner.
    ///
    /// Product order is preserved. Fails on the first unresolved reference.
    pub fn join(fixtures: Fixtures) -> Result<Self> {
        let Fixtures {
            users,
            categories,
            products,
        } = fixtures;

        let products = products
            .into_iter()
            .map(|product| enrich(product, &categories, &users))
            .collect::<Result<Vec<_>>>()?;

        info!("Catalog joined: {} products", products.len());

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Rows visible under `selection`. Pass `None` to skip sorting entirely.
    pub fn visible(
        &self,
        selection: &Selection,
        comparators: Option<&Comparators>,
    ) -> Vec<&EnrichedProduct> {
        prepare_products(&self.products, selection, comparators)
    }
}

fn enrich(product: Product, categories: &[Category], users: &[User]) -> Result<EnrichedProduct> {
    let category = categories
        .iter()
        .find(|category| category.id == product.category_id)
        .ok_or(CatalogError::UnknownCategory {
            product_id: product.id,
            category_id: product.category_id,
        })?;

    let user = users
        .iter()
        .find(|user| user.id == category.owner_id)
        .ok_or(CatalogError::UnknownOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })?;

    Ok(EnrichedProduct::new(product, category.clone(), user.clone()))
}
