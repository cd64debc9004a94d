//! Catalog identity across calls and characters.

use storyteller_domain::{StatPath, StoryError};

use super::{story_error, E2ETestContext};

#[test]
fn test_resolving_same_path_returns_same_definition() {
    let ctx = E2ETestContext::setup();
    let catalog = &ctx.app.entities.catalog;

    let first = catalog
        .resolve_or_create(["Crafts", "Blacksmithing"], None)
        .expect("First resolve should succeed");
    let count = ctx.store.definition_count();
    let second = catalog
        .resolve_or_create(["  crafts ", "BLACKSMITHING"], None)
        .expect("Second resolve should succeed");

    assert_eq!(first.id, second.id);
    assert_eq!(second.path.to_string(), "Crafts/Blacksmithing");
    assert_eq!(ctx.store.definition_count(), count, "No duplicate row");
}

#[test]
fn test_player_coined_rows_are_shared_between_characters() {
    let ctx = E2ETestContext::setup();
    let first = ctx.create_character("Harmonious Jade", None);
    let second = ctx.create_character("Swan", None);

    ctx.app
        .entities
        .crafts
        .set(first.id(), "blacksmithing", "2")
        .expect("Craft should be set");
    let count = ctx.store.definition_count();
    ctx.app
        .entities
        .crafts
        .set(second.id(), "Blacksmithing", "4")
        .expect("Craft should be set");
    assert_eq!(ctx.store.definition_count(), count);

    let path = StatPath::new(["Crafts", "Blacksmithing"]).unwrap();
    let definition = ctx
        .app
        .entities
        .catalog
        .find(&path)
        .unwrap()
        .expect("Definition should exist");
    assert_eq!(definition.creator, Some(first.id()), "First author keeps credit");
}

#[test]
fn test_removing_a_craft_keeps_the_catalog_row() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", None);
    let crafts = &ctx.app.entities.crafts;

    crafts.set(sheet.id(), "Cooking", "3").unwrap();
    let count = ctx.store.definition_count();
    crafts.set(sheet.id(), "cook", "0").expect("Removal should succeed");

    assert_eq!(ctx.store.definition_count(), count);
    assert!(crafts.all(sheet.id()).unwrap().is_empty());
}

#[test]
fn test_path_deeper_than_four_segments_is_rejected() {
    let ctx = E2ETestContext::setup();
    let before = ctx.store.definition_count();
    let err = story_error(
        ctx.app
            .entities
            .catalog
            .resolve_or_create(["Charms", "Solar", "Melee", "Excellent Strike", "Extra"], None),
    );
    assert!(matches!(err, StoryError::InvalidPath(_)));
    assert_eq!(ctx.store.definition_count(), before);
}
