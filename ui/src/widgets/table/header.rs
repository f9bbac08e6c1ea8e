//! Table header with optional sort buttons.

use catalog_business::{SortDirection, SortField, SortState};
use egui::Ui;
use egui_extras::TableRow;

pub const ICON_UNSORTED: &str = "↕";
pub const ICON_ASCENDING: &str = "⬆";
pub const ICON_DESCENDING: &str = "⬇";

/// Icon for a column's sort button.
#[inline]
pub fn sort_icon(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => ICON_UNSORTED,
        SortDirection::Ascending => ICON_ASCENDING,
        SortDirection::Descending => ICON_DESCENDING,
    }
}

/// Renders the header row. Returns the column whose sort button was clicked.
///
/// With `sort` set to `None` the headers are plain labels.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: Option<&SortState>,
) -> Option<SortField> {
    let mut clicked = None;

    for field in SortField::ALL {
        header.col(|ui| {
            if render_header_cell(ui, field, sort) {
                clicked = Some(field);
            }
        });
    }

    clicked
}

fn render_header_cell(ui: &mut Ui, field: SortField, sort: Option<&SortState>) -> bool {
    ui.horizontal(|ui| {
        ui.strong(field.title());

        let Some(sort) = sort else {
            return false;
        };
        ui.small_button(sort_icon(sort.direction_of(field)))
            .on_hover_text(format!("Sort by {}", field.title()))
            .clicked()
    })
    .inner
}
