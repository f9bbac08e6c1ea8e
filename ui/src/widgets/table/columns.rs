//! Column definitions for the product table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 70.0;
pub const USER_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Columns in order: ID (fixed), Product and Category (flexible), User (fixed).
#[inline]
pub fn table_columns() -> [Column; 4] {
    [
        Column::exact(ID_WIDTH),
        Column::remainder().at_least(120.0),
        Column::remainder().at_least(140.0),
        Column::exact(USER_WIDTH),
    ]
}
