//! Cell rendering functions for the product table.

use catalog_business::{Category, User};
use egui::{RichText, Ui};

use crate::utils::colors::user_color;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u32) {
    ui.label(RichText::new(id.to_string()).strong().monospace());
}

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// Renders `icon - title`, with the title as hover text.
#[inline]
pub fn render_category_cell(ui: &mut Ui, category: &Category) {
    ui.label(category.label()).on_hover_text(category.title.as_str());
}

/// Renders the owner's name colored by sex.
#[inline]
pub fn render_user_cell(ui: &mut Ui, user: &User) {
    ui.label(RichText::new(user.name.as_str()).color(user_color(user.sex)));
}
