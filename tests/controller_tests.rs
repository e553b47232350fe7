// tests/controller_tests.rs - Page actions: form reset, prompts, notice timers

mod common;

use std::time::Duration;

use common::{draft, fresh_store, ScriptedPrompt};
use cosmetics_inventory::fixtures::{CosmeticsCatalog, TestCatalog};
use cosmetics_inventory::web_app::config::InventoryConfig;
use cosmetics_inventory::web_app::controller::InventoryController;
use cosmetics_inventory::web_app::model::NoticeKind;
use cosmetics_inventory::web_app::store::{ConfirmRequest, MemoryStorage, ProductStore};

fn controller() -> InventoryController<MemoryStorage> {
    InventoryController::new(fresh_store())
}

fn stocked() -> InventoryController<MemoryStorage> {
    InventoryController::new(ProductStore::load(
        CosmeticsCatalog::storage(),
        InventoryConfig::default(),
    ))
}

#[test]
fn test_successful_add_resets_form() {
    let mut ctl = controller();
    let outcome = ctl.submit(&draft("Lipstick", "9.99", "10"));

    assert!(outcome.reset_form);
    assert_eq!(ctl.notice().map(|n| n.text.as_str()), Some("Product added successfully!"));
    assert_eq!(ctl.table().total_items, 1);
}

#[test]
fn test_rejected_add_keeps_form() {
    let mut ctl = controller();
    let cases = [
        (draft("", "1", "1"), "Please fill in all fields correctly."),
        (draft("Blush", "-2", "1"), "Price cannot be negative."),
        (draft("Blush", "2", "0"), "Quantity must be greater than zero."),
    ];

    for (input, message) in cases {
        let outcome = ctl.submit(&input);
        assert!(!outcome.reset_form, "draft {:?}", input);
        let notice = ctl.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, message);
    }
    assert!(ctl.store().is_empty());
}

#[test]
fn test_notice_expires_after_configured_lifetime() {
    let config = InventoryConfig {
        notice_lifetime_ms: 1500,
        ..InventoryConfig::default()
    };
    let mut ctl = InventoryController::new(ProductStore::load(MemoryStorage::new(), config));

    let outcome = ctl.submit(&draft("Lipstick", "9.99", "10"));
    assert_eq!(outcome.shown.lifetime, Duration::from_millis(1500));

    assert!(ctl.dismiss(outcome.shown.ticket));
    assert!(ctl.notice().is_none());
}

#[test]
fn test_earlier_timer_leaves_newer_notice() {
    let mut ctl = controller();
    let first = ctl.submit(&draft("Lipstick", "9.99", "10")).shown;
    let second = ctl.submit(&draft("Gloss", "", "3")).shown;

    assert!(!ctl.dismiss(first.ticket));
    assert_eq!(ctl.notice().map(|n| n.kind), Some(NoticeKind::Error));
    assert!(ctl.dismiss(second.ticket));
}

#[test]
fn test_declined_delete_shows_no_notice() {
    let mut ctl = stocked();
    let id = CosmeticsCatalog::products()[1].id;
    let prompt = ScriptedPrompt::declining();

    assert_eq!(ctl.delete(id, &prompt), None);
    assert_eq!(prompt.asked(), vec![ConfirmRequest::DeleteOne(id)]);
    assert!(ctl.notice().is_none());
    assert_eq!(ctl.table().total_items, 5);
}

#[test]
fn test_confirmed_delete_shows_notice() {
    let mut ctl = stocked();
    let id = CosmeticsCatalog::products()[1].id;

    let shown = ctl.delete(id, &ScriptedPrompt::accepting());

    assert!(shown.is_some());
    assert_eq!(ctl.notice().map(|n| n.text.as_str()), Some("Product deleted."));
    assert_eq!(ctl.table().total_items, 4);
}

#[test]
fn test_clear_on_empty_list_never_prompts() {
    let mut ctl = controller();
    let prompt = ScriptedPrompt::accepting();

    assert_eq!(ctl.clear(&prompt), None);
    assert!(prompt.asked().is_empty());
    assert!(ctl.notice().is_none());
}

#[test]
fn test_confirmed_clear_empties_table() {
    let mut ctl = stocked();
    let prompt = ScriptedPrompt::accepting();

    assert!(ctl.clear(&prompt).is_some());
    assert_eq!(prompt.asked(), vec![ConfirmRequest::ClearAll]);
    assert!(ctl.table().is_empty());
    assert_eq!(ctl.notice().map(|n| n.text.as_str()), Some("All products cleared."));
}

#[test]
fn test_reload_picks_up_saved_list() {
    let mut ctl = InventoryController::new(ProductStore::empty(
        CosmeticsCatalog::storage(),
        InventoryConfig::default(),
    ));
    assert!(ctl.table().is_empty());

    ctl.reload();

    assert_eq!(ctl.table().total_items, 5);
}
