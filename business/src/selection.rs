//! Viewer selection: which rows are visible and how they are ordered.
//!
//! Widgets never mutate a [`Selection`] directly; they return
//! [`SelectionAction`]s and the app applies them once per frame.

use log::debug;

use crate::sort::{SortField, SortState};

/// User id meaning "every owner".
pub const ALL_USERS: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Show only products owned by this user; [`ALL_USERS`] clears the filter.
    SelectUser(u32),
    SetQuery(String),
    ClearQuery,
    /// Adds the category to the active set, or removes it if already active.
    ToggleCategory(u32),
    ClearCategories,
    /// Clears user, query and category filters. Sorting is kept.
    ResetFilters,
    ToggleSort(SortField),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub user_id: u32,
    pub query: String,
    /// Active categories in the order they were toggled on.
    pub category_ids: Vec<u32>,
    pub sort: SortState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortState) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: SelectionAction) {
        debug!("Applying selection action: {action:?}");

        match action {
            SelectionAction::SelectUser(user_id) => self.user_id = user_id,
            SelectionAction::SetQuery(query) => self.query = query,
            SelectionAction::ClearQuery => self.query.clear(),
            SelectionAction::ToggleCategory(category_id) => self.toggle_category(category_id),
            SelectionAction::ClearCategories => self.category_ids.clear(),
            SelectionAction::ResetFilters => self.reset_filters(),
            SelectionAction::ToggleSort(field) => self.sort.toggle(field),
        }
    }

    pub fn is_user_active(&self, user_id: u32) -> bool {
        self.user_id == user_id
    }

    pub fn is_category_active(&self, category_id: u32) -> bool {
        self.category_ids.contains(&category_id)
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether any filter narrows the product list.
    pub fn is_filtering(&self) -> bool {
        self.user_id != ALL_USERS || self.has_query() || !self.category_ids.is_empty()
    }

    fn toggle_category(&mut self, category_id: u32) {
        if let Some(pos) = self.category_ids.iter().position(|id| *id == category_id) {
            self.category_ids.remove(pos);
        } else {
            self.category_ids.push(category_id);
        }
    }

    fn reset_filters(&mut self) {
        self.user_id = ALL_USERS;
        self.query.clear();
        self.category_ids.clear();
    }
}
