//! The filter/sort pipeline over the joined product list.

use crate::model::EnrichedProduct;
use crate::selection::{ALL_USERS, Selection};
use crate::sort::Comparators;

pub fn matches_user(product: &EnrichedProduct, user_id: u32) -> bool {
    user_id == ALL_USERS || product.user.id == user_id
}

/// Case-insensitive substring match on the product name. Empty query matches.
pub fn matches_query(product: &EnrichedProduct, query: &str) -> bool {
    query.is_empty() || product.name.to_lowercase().contains(&query.to_lowercase())
}

pub fn matches_categories(product: &EnrichedProduct, category_ids: &[u32]) -> bool {
    category_ids.is_empty() || category_ids.contains(&product.category.id)
}

/// Narrows `products` by user, then query, then category, and sorts the rest
/// when `comparators` is given and a sort is active.
pub fn prepare_products<'a>(
    products: &'a [EnrichedProduct],
    selection: &Selection,
    comparators: Option<&Comparators>,
) -> Vec<&'a EnrichedProduct> {
    let mut rows: Vec<&EnrichedProduct> = products
        .iter()
        .filter(|product| matches_user(product, selection.user_id))
        .filter(|product| matches_query(product, &selection.query))
        .filter(|product| matches_categories(product, &selection.category_ids))
        .collect();

    if let Some(comparators) = comparators {
        comparators.sort(&mut rows, &selection.sort);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use crate::fixtures::Fixtures;
    use crate::selection::SelectionAction;
    use crate::sort::{SortDirection, SortField, SortState};

    fn catalog() -> Catalog {
        Catalog::join(Fixtures::embedded().expect("fixtures")).expect("join")
    }

    fn names(rows: &[&EnrichedProduct]) -> Vec<String> {
        rows.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let catalog = catalog();
        let rows = prepare_products(catalog.products(), &Selection::new(), None);

        let ids: Vec<u32> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.apply(SelectionAction::SetQuery("CrE".to_owned()));

        let rows = prepare_products(catalog.products(), &selection, None);
        assert_eq!(names(&rows), vec!["Ice cream"]);
    }

    #[test]
    fn test_filters_compose() {
        let catalog = catalog();
        let mut selection = Selection::new();
        // Anna owns Grocery (1) and Fruits (3).
        selection.apply(SelectionAction::SelectUser(2));
        selection.apply(SelectionAction::ToggleCategory(3));

        let rows = prepare_products(catalog.products(), &selection, None);
        assert_eq!(names(&rows), vec!["Apple"]);

        selection.apply(SelectionAction::SetQuery("x".to_owned()));
        assert!(prepare_products(catalog.products(), &selection, None).is_empty());
    }

    #[test]
    fn test_user_without_categories_sees_nothing() {
        let catalog = catalog();
        let mut selection = Selection::new();
        selection.apply(SelectionAction::SelectUser(4));

        assert!(prepare_products(catalog.products(), &selection, None).is_empty());
    }

    #[test]
    fn test_sort_skipped_without_comparators() {
        let catalog = catalog();
        let selection = Selection::with_sort(SortState::new(SortField::Id, SortDirection::Descending));

        let unsorted = prepare_products(catalog.products(), &selection, None);
        assert_eq!(unsorted.first().map(|p| p.id), Some(1));

        let sorted = prepare_products(catalog.products(), &selection, Some(&Comparators::default()));
        assert_eq!(sorted.first().map(|p| p.id), Some(9));
    }

    #[test]
    fn test_sort_by_category_title() {
        let catalog = catalog();
        let selection =
            Selection::with_sort(SortState::new(SortField::Category, SortDirection::Ascending));

        let rows = prepare_products(catalog.products(), &selection, Some(&Comparators::default()));
        let titles: Vec<&str> = rows.iter().map(|p| p.category.title.as_str()).collect();

        let mut expected = titles.clone();
        expected.sort_unstable();
        assert_eq!(titles, expected);
        // Stable: Grocery rows keep fixture order.
        let grocery: Vec<u32> = rows
            .iter()
            .filter(|p| p.category.id == 1)
            .map(|p| p.id)
            .collect();
        assert_eq!(grocery, vec![2, 3, 5, 7]);
    }
}
