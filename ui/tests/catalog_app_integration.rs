//! Integration tests for the full catalog app.
//!
//! Buttons in the filter panel are clicked through the harness. Sort buttons
//! live inside an `egui_extras` table, where kittest clicks do not reliably
//! reach the widget, so sorting is driven through the app state and the
//! rendered header icons are asserted instead.

use catalog_business::{CatalogConfig, SelectionAction, SortField};
use catalog_ui::app::TITLE;
use catalog_ui::widgets::filters::RESET_ALL_LABEL;
use catalog_ui::widgets::table::EMPTY_MESSAGE;
use catalog_ui::widgets::table::header::{ICON_ASCENDING, ICON_DESCENDING, ICON_UNSORTED};
use kittest::Queryable;

use crate::common::TestCtx;

mod common;

#[test]
fn test_initial_render_shows_all_products() {
    let mut ctx = TestCtx::new_app();
    ctx.settle();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label(TITLE).is_some(), "title missing");
    assert!(harness.query_by_label(EMPTY_MESSAGE).is_none());
    assert!(harness.query_by_label("Ice cream").is_some());

    assert_eq!(ctx.visible_ids(), (1..=9).collect::<Vec<_>>());
}

#[test]
fn test_category_click_narrows_table() {
    let mut ctx = TestCtx::new_app();
    ctx.settle();

    ctx.harness_mut().get_by_label("Clothes").click();
    ctx.settle();

    assert_eq!(ctx.visible_ids(), vec![4, 6]);
    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Jacket").is_some());
    assert!(
        harness.query_by_label("Milk").is_none(),
        "Milk is not in Clothes"
    );
}

#[test]
fn test_owner_without_products_shows_empty_message() {
    let mut ctx = TestCtx::new_app();
    ctx.settle();

    // John owns no category.
    ctx.harness_mut()
        .state_mut()
        .state
        .apply([SelectionAction::SelectUser(4)]);
    ctx.settle();

    assert!(ctx.visible_ids().is_empty());
    assert!(
        ctx.harness_mut().query_by_label(EMPTY_MESSAGE).is_some(),
        "empty message should be rendered"
    );
}

#[test]
fn test_reset_button_restores_full_list() {
    let mut ctx = TestCtx::new_app();
    ctx.harness_mut().state_mut().state.apply([
        SelectionAction::SelectUser(1),
        SelectionAction::SetQuery("zzz".to_owned()),
    ]);
    ctx.settle();
    assert!(ctx.visible_ids().is_empty());

    ctx.harness_mut().get_by_label(RESET_ALL_LABEL).click();
    ctx.settle();

    assert_eq!(ctx.visible_ids(), (1..=9).collect::<Vec<_>>());
    assert!(ctx.harness_mut().query_by_label("Milk").is_some());
}

#[test]
fn test_sort_cycle_updates_rows_and_icons() {
    let mut ctx = TestCtx::new_app();
    ctx.settle();

    let toggle = |ctx: &mut TestCtx<'_>| {
        ctx.harness_mut()
            .state_mut()
            .state
            .apply([SelectionAction::ToggleSort(SortField::Id)]);
        ctx.settle();
    };

    toggle(&mut ctx);
    assert_eq!(ctx.visible_ids(), (1..=9).collect::<Vec<_>>());
    assert_eq!(ctx.harness_mut().query_all_by_label(ICON_ASCENDING).count(), 1);

    toggle(&mut ctx);
    assert_eq!(ctx.visible_ids(), (1..=9).rev().collect::<Vec<_>>());
    assert_eq!(ctx.harness_mut().query_all_by_label(ICON_DESCENDING).count(), 1);

    toggle(&mut ctx);
    assert_eq!(ctx.visible_ids(), (1..=9).collect::<Vec<_>>());
    assert_eq!(ctx.harness_mut().query_all_by_label(ICON_UNSORTED).count(), 4);
}

#[test]
fn test_sorting_disabled_ignores_sort_state() {
    let mut ctx = TestCtx::new_app_with_config(CatalogConfig::default().with_sorting(false));
    ctx.harness_mut()
        .state_mut()
        .state
        .apply([SelectionAction::ToggleSort(SortField::Product)]);
    ctx.settle();

    assert_eq!(ctx.visible_ids(), (1..=9).collect::<Vec<_>>());
    assert_eq!(ctx.harness_mut().query_all_by_label(ICON_UNSORTED).count(), 0);
}
