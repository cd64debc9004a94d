//! Sheets survive a snapshot round trip through a file.

use std::sync::Arc;

use super::{fixed_clock, E2ETestContext};
use crate::api::Editor;
use crate::infrastructure::memory::MemoryStore;

#[test]
fn test_sheet_survives_save_and_load() {
    let ctx = E2ETestContext::setup();
    let mut editor = Editor::open(ctx.app.clone(), "Harmonious Jade", Some("solar/dawn")).unwrap();
    for line in [
        "mode abilities",
        "caste melee",
        "craft cooking=4",
        "specialty melee/swords=2",
        "mode charms",
        "add melee=Excellent Strike",
    ] {
        assert!(!editor.handle(line).starts_with("ERROR"), "{line}");
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheets.json");
    ctx.store.save_to(&path).expect("Save should succeed");

    let loaded = MemoryStore::load_from(&path, fixed_clock()).expect("Load should succeed");
    assert_eq!(loaded.export_snapshot(), ctx.store.export_snapshot());

    let restored = E2ETestContext::with_store(Arc::new(loaded));
    let mut editor = Editor::open(restored.app.clone(), "Harmonious Jade", None).unwrap();
    editor.handle("mode abilities");
    let sheet = editor.handle("show");
    assert!(sheet.contains("Melee: 0 [Caste]"), "{sheet}");
    assert!(sheet.contains("Craft: 4"), "{sheet}");
    assert!(sheet.contains("Melee/Swords: 2"), "{sheet}");

    let charms = &restored.app.entities.charms;
    assert_eq!(charms.total_count(editor.character()).unwrap(), 1);
}

#[test]
fn test_restored_catalog_stays_idempotent() {
    let ctx = E2ETestContext::setup();
    let original = ctx
        .app
        .entities
        .catalog
        .resolve_or_create(["Crafts", "Weaving"], None)
        .unwrap();

    let restored = E2ETestContext::with_store(Arc::new(MemoryStore::new(fixed_clock())));
    restored
        .store
        .import_snapshot(ctx.store.export_snapshot())
        .unwrap();
    let again = restored
        .app
        .entities
        .catalog
        .resolve_or_create(["crafts", "weaving"], None)
        .unwrap();
    assert_eq!(original.id, again.id);
    assert_eq!(restored.store.definition_count(), ctx.store.definition_count());
}
