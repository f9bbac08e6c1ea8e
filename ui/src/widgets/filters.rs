//! Filter panel: owner tabs, name search, category toggles and reset.
//!
//! Every function here only reads [`State`] and returns the actions the
//! viewer triggered; the app applies them after the frame is laid out.

use catalog_business::{ALL_USERS, SelectionAction};
use egui::{Button, Frame, Margin, RichText, Stroke, TextEdit, Ui};

use crate::state::State;
use crate::utils::colors::{COLOR_INFO, COLOR_SUCCESS};

pub const SEARCH_HINT: &str = "Search";
pub const CLEAR_SEARCH_LABEL: &str = "✖";
pub const RESET_ALL_LABEL: &str = "Reset all filters";
pub const ALL_LABEL: &str = "All";

const SEARCH_WIDTH: f32 = 240.0;

/// Displays the whole filter panel inside a bordered frame.
pub fn filter_panel(state: &State, ui: &mut Ui) -> Vec<SelectionAction> {
    let mut actions = Vec::new();
    let border = ui.visuals().widgets.noninteractive.bg_stroke.color;

    Frame::NONE
        .stroke(Stroke::new(1.0, border))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Filters").strong().size(16.0));
            ui.add_space(4.0);

            actions.extend(user_tabs(state, ui));
            ui.separator();
            actions.extend(search_field(state, ui));
            ui.separator();
            actions.extend(category_buttons(state, ui));
            ui.separator();

            if ui
                .add_sized([ui.available_width(), 24.0], Button::new(RESET_ALL_LABEL))
                .clicked()
            {
                actions.push(SelectionAction::ResetFilters);
            }
        });

    actions
}

/// "All" plus one tab per user; the active tab is highlighted.
pub fn user_tabs(state: &State, ui: &mut Ui) -> Option<SelectionAction> {
    let selection = &state.selection;
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .selectable_label(selection.is_user_active(ALL_USERS), ALL_LABEL)
            .clicked()
        {
            action = Some(SelectionAction::SelectUser(ALL_USERS));
        }

        for user in state.catalog.users() {
            if ui
                .selectable_label(selection.is_user_active(user.id), user.name.as_str())
                .clicked()
            {
                action = Some(SelectionAction::SelectUser(user.id));
            }
        }
    });

    action
}

/// Search box with a clear button shown only while the query is non-empty.
pub fn search_field(state: &State, ui: &mut Ui) -> Option<SelectionAction> {
    let mut query = state.selection.query.clone();
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("🔍");
        let response = ui.add(
            TextEdit::singleline(&mut query)
                .hint_text(SEARCH_HINT)
                .desired_width(SEARCH_WIDTH),
        );
        if response.changed() {
            action = Some(SelectionAction::SetQuery(query.clone()));
        }

        if state.selection.has_query()
            && ui
                .small_button(CLEAR_SEARCH_LABEL)
                .on_hover_text("Clear search")
                .clicked()
        {
            action = Some(SelectionAction::ClearQuery);
        }
    });

    action
}

/// "All" clears the category set; each category button toggles membership.
pub fn category_buttons(state: &State, ui: &mut Ui) -> Option<SelectionAction> {
    let selection = &state.selection;
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        let mut all = Button::new(ALL_LABEL);
        if selection.category_ids.is_empty() {
            all = all.fill(COLOR_SUCCESS);
        }
        if ui.add(all).clicked() {
            action = Some(SelectionAction::ClearCategories);
        }

        ui.add_space(16.0);

        for category in state.catalog.categories() {
            let mut button = Button::new(category.title.as_str());
            if selection.is_category_active(category.id) {
                button = button.fill(COLOR_INFO);
            }
            if ui.add(button).clicked() {
                action = Some(SelectionAction::ToggleCategory(category.id));
            }
        }
    });

    action
}
