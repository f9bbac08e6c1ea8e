//! Product table.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row with sort buttons
//! - `row`: one product row
//! - `cells`: cell rendering per column

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use catalog_business::SelectionAction;
use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;

use crate::state::State;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_product_row;

pub const EMPTY_MESSAGE: &str = "No products matching selected criteria";

/// Displays the visible products, or the empty-state message when none match.
///
/// Returns a sort toggle when a header sort button was clicked.
pub fn product_table(state: &State, ui: &mut Ui) -> Option<SelectionAction> {
    let rows = state.visible_products();
    if rows.is_empty() {
        ui.label(EMPTY_MESSAGE);
        return None;
    }

    let sort = state
        .config
        .sorting()
        .then_some(&state.selection.sort);
    let mut clicked = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, sort);
        })
        .body(|mut body| {
            for product in &rows {
                body.row(ROW_HEIGHT, |mut row| render_product_row(&mut row, product));
            }
        });

    clicked.map(SelectionAction::ToggleSort)
}
