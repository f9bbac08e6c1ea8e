//! Product catalog business logic: fixture loading, the product join, and the
//! filter/sort pipeline driven by the viewer's [`Selection`].

mod catalog;
mod config;
mod error;
mod filter;
mod fixtures;
mod model;
mod selection;
pub mod sort;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use filter::{matches_categories, matches_query, matches_user, prepare_products};
pub use fixtures::Fixtures;
pub use model::{Category, EnrichedProduct, Product, Sex, User};
pub use selection::{ALL_USERS, Selection, SelectionAction};
pub use sort::{Comparator, Comparators, SortDirection, SortField, SortState};
