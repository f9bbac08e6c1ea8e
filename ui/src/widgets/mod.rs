pub mod filters;
pub mod table;

pub use filters::filter_panel;
pub use table::product_table;
