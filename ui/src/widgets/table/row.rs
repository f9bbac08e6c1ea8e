use catalog_business::EnrichedProduct;
use egui_extras::TableRow;

use super::cells::{render_category_cell, render_id_cell, render_name_cell, render_user_cell};

/// Renders one product row.
#[inline]
pub fn render_product_row(row: &mut TableRow<'_, '_>, product: &EnrichedProduct) {
    row.col(|ui| render_id_cell(ui, product.id));
    row.col(|ui| render_name_cell(ui, &product.name));
    row.col(|ui| render_category_cell(ui, &product.category));
    row.col(|ui| render_user_cell(ui, &product.user));
}
