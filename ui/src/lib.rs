#![warn(clippy::all, rust_2018_idioms)]

//! egui front end for the product catalog.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use app::CatalogApp;
