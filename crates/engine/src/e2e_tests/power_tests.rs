//! Charms, Spells, and Evocations.

use storyteller_domain::StoryError;

use super::{story_error, E2ETestContext};

#[test]
fn test_repurchase_counts_then_removal_deletes() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", Some("solar"));
    let charms = &ctx.app.entities.charms;
    let add = || {
        charms.add(
            sheet.id(),
            &sheet.template,
            "Athletics",
            "Seven Shadow Evasion",
            Some("Solar"),
        )
    };
    let remove = || {
        charms.remove(
            sheet.id(),
            &sheet.template,
            "Athletics",
            "Seven Shadow Evasion",
            Some("Solar"),
        )
    };

    assert_eq!(add().unwrap().count, 1);
    assert_eq!(add().unwrap().count, 2);

    let grouped = charms.all_grouped_by_category(sheet.id()).unwrap();
    let athletics = &grouped["Solar"]["Athletics"];
    assert_eq!(athletics.len(), 1, "Repurchase must not add a row");
    assert_eq!(athletics[0].count, 2);
    assert_eq!(charms.total_count(sheet.id()).unwrap(), 2);

    assert_eq!(remove().unwrap().count, 1);
    assert_eq!(remove().unwrap().count, 0);
    assert!(charms.all_grouped_by_category(sheet.id()).unwrap().is_empty());
    assert!(story_error(remove()).is_not_found());
}

#[test]
fn test_charm_category_defaults_to_template() {
    let ctx = E2ETestContext::setup();
    let lunar = ctx.create_character("Silver Fang", Some("lunar"));
    let change = ctx
        .app
        .entities
        .charms
        .add(lunar.id(), &lunar.template, "str", "Relentless Lunar Fury", None)
        .unwrap();
    assert_eq!(
        change.path.to_string(),
        "Charms/Lunar/Strength/Relentless Lunar Fury"
    );

    let mortal = ctx.create_character("Swan", None);
    let err = story_error(ctx.app.entities.charms.add(
        mortal.id(),
        &mortal.template,
        "Athletics",
        "Anything",
        None,
    ));
    assert!(matches!(err, StoryError::NotEligible(_)));
}

#[test]
fn test_charm_sub_category_must_be_allowed() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", Some("solar"));
    let err = story_error(ctx.app.entities.charms.add(
        sheet.id(),
        &sheet.template,
        "Blessings",
        "Wrong Place",
        Some("Solar"),
    ));
    assert!(err.is_not_found());

    ctx.app
        .entities
        .charms
        .add(sheet.id(), &sheet.template, "blessings", "Right Place", Some("spirit"))
        .expect("Spirit Charms take Spirit sub-categories");
}

#[test]
fn test_spells_default_to_sorcery() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", Some("solar"));
    let spells = &ctx.app.entities.spells;

    let change = spells
        .add(sheet.id(), &sheet.template, "terr", "Death of Obsidian Butterflies", None)
        .unwrap();
    assert_eq!(
        change.path.to_string(),
        "Spells/Sorcery/Terrestrial/Death of Obsidian Butterflies"
    );

    spells
        .add(sheet.id(), &sheet.template, "ivory", "Bone Shield", Some("necro"))
        .unwrap();
    let grouped = spells.all_grouped_by_category(sheet.id()).unwrap();
    assert_eq!(
        grouped.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Necromancy", "Sorcery"]
    );
}

#[test]
fn test_evocation_artifact_is_player_coined() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", Some("solar"));
    let change = ctx
        .app
        .entities
        .evocations
        .add(sheet.id(), &sheet.template, "volcano cutter", "Flame Edge", None)
        .unwrap();
    assert_eq!(change.path.to_string(), "Evocations/Evocations/Volcano Cutter/Flame Edge");

    let definition = ctx
        .app
        .entities
        .catalog
        .find(&change.path)
        .unwrap()
        .unwrap();
    assert_eq!(definition.creator, Some(sheet.id()));
}

#[test]
fn test_starting_charm_allowance_is_advisory() {
    let ctx = E2ETestContext::setup();
    let sheet = ctx.create_character("Harmonious Jade", Some("solar"));
    let charms = &ctx.app.entities.charms;
    let allowance = sheet.template.starting_charms;

    for n in 0..=allowance {
        charms
            .add(sheet.id(), &sheet.template, "Melee", &format!("Strike {n}"), None)
            .expect("Adding past the allowance is allowed");
    }
    assert_eq!(charms.total_count(sheet.id()).unwrap(), allowance + 1);
}
