//! Single-column sorting for the product table.
//!
//! Sorting is optional: the filter pipeline only consults a [`Comparators`]
//! table when one is supplied and the [`SortState`] has a non-neutral
//! direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use log::error;

use crate::error::CatalogError;
use crate::model::EnrichedProduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Product,
    Category,
    User,
}

impl SortField {
    /// Columns in table order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Product => "product",
            Self::Category => "category",
            Self::User => "user",
        }
    }

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Id => 0,
            Self::Product => 1,
            Self::Category => 2,
            Self::User => 3,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CatalogError::UnknownSortField(s.to_owned()))
    }
}

/// Tri-state direction of a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// neutral -> ascending -> descending -> neutral
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The column currently sorted, if any, and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    field: Option<SortField>,
    direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    pub fn field(&self) -> Option<SortField> {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction shown for `field`'s header; neutral for every other column.
    pub fn direction_of(&self, field: SortField) -> SortDirection {
        if self.field == Some(field) {
            self.direction
        } else {
            SortDirection::None
        }
    }

    /// Header click: advances the active column, or starts another one ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.next();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }

    /// The active column, unless the direction is neutral.
    pub fn active(&self) -> Option<(SortField, SortDirection)> {
        match (self.field, self.direction) {
            (Some(field), direction) if direction != SortDirection::None => Some((field, direction)),
            _ => None,
        }
    }
}

pub type Comparator = fn(&EnrichedProduct, &EnrichedProduct) -> Ordering;

/// Ascending comparators keyed by column. Entries can be swapped per column.
#[derive(Clone, Copy)]
pub struct Comparators {
    table: [Comparator; 4],
}

impl Comparators {
    pub fn get(&self, field: SortField) -> Comparator {
        self.table[field.index()]
    }

    #[must_use]
    pub fn with(mut self, field: SortField, comparator: Comparator) -> Self {
        self.table[field.index()] = comparator;
        self
    }

    /// Stable in-place sort of `rows`. Neutral state leaves the order untouched.
    pub fn sort(&self, rows: &mut [&EnrichedProduct], state: &SortState) {
        let Some((field, direction)) = state.active() else {
            return;
        };
        let compare = self.get(field);
        rows.sort_by(|a, b| direction.apply(compare(a, b)));
    }
}

impl Default for Comparators {
    fn default() -> Self {
        Self {
            table: [by_id, by_product_name, by_category_title, by_user_name],
        }
    }
}

impl fmt::Debug for Comparators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparators").finish_non_exhaustive()
    }
}

pub fn by_id(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    a.id.cmp(&b.id)
}

pub fn by_product_name(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_text(&a.name, &b.name)
}

pub fn by_category_title(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_text(&a.category.title, &b.category.title)
}

pub fn by_user_name(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_text(&a.user.name, &b.user.name)
}

thread_local! {
    /// Root-locale collator at tertiary strength: accents and case only break
    /// ties, lowercase first.
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options)
            .inspect_err(|err| error!("Failed to build collator, using codepoint order: {err}"))
            .ok()
    };
}

/// Locale-aware text order used by the string columns.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
    })
}
