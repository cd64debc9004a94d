//! Whole editor sessions driven line by line.

use super::E2ETestContext;
use crate::api::{Editor, EditorMode};

fn run(editor: &mut Editor, lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| editor.handle(line)).collect()
}

#[test]
fn test_solar_build_session() {
    let ctx = E2ETestContext::setup();
    let mut editor = Editor::open(ctx.app.clone(), "Harmonious Jade", None).unwrap();

    let replies = run(
        &mut editor,
        &[
            "template solar/dawn",
            "field limit=Cruelty to the weak",
            "mode abilities",
            "set melee=5",
            "caste melee",
            "supernal melee",
            "favor lore",
            "craft weaving=2",
            "style tiger=3",
            "specialty melee/swords=1",
        ],
    );
    assert_eq!(replies[0], "Harmonious Jade is now Solar (Dawn).");
    assert_eq!(replies[1], "Limit Trigger set to Cruelty to the weak.");
    assert_eq!(editor.mode(), EditorMode::Abilities);
    assert_eq!(replies[3], "Melee set to 5.");
    assert_eq!(replies[4], "Melee is now Caste.");
    assert_eq!(replies[5], "Melee is now Supernal.");
    assert_eq!(replies[6], "Lore is now Favored.");
    assert_eq!(replies[7], "Craft Weaving set to 2.");
    assert_eq!(replies[8], "Tiger Style set to 3.");
    assert_eq!(replies[9], "Melee Specialty Swords set to 1.");

    let sheet = editor.handle("show");
    assert!(sheet.contains("Melee: 5 [Caste, Supernal]"), "{sheet}");
    assert!(sheet.contains("Lore: 0 [Favored]"), "{sheet}");
    assert!(sheet.contains("Craft: 2"), "{sheet}");
    assert!(sheet.contains("Martial Arts: 3"), "{sheet}");
    assert!(sheet.contains("Melee/Swords: 1"), "{sheet}");
}

#[test]
fn test_rejections_do_not_change_the_sheet() {
    let ctx = E2ETestContext::setup();
    let mut editor = Editor::open(ctx.app.clone(), "Harmonious Jade", Some("solar/dawn")).unwrap();
    editor.handle("mode abilities");

    let replies = run(
        &mut editor,
        &["favor melee", "caste melee", "supernal lore", "set craft=3", "s melee"],
    );
    assert_eq!(replies[0], "Melee is now Favored.");
    assert!(replies[1].starts_with("ERROR: Melee is already Favored."), "{}", replies[1]);
    assert!(replies[2].starts_with("ERROR: "));
    assert!(replies[3].starts_with("ERROR: Craft is calculated"), "{}", replies[3]);
    assert!(replies[4].starts_with("ERROR: 's' is ambiguous"), "{}", replies[4]);

    let abilities = &ctx.app.entities.abilities;
    assert!(!abilities.is_caste(editor.character(), "melee").unwrap());
}

#[test]
fn test_merit_and_power_modes() {
    let ctx = E2ETestContext::setup();
    let mut editor = Editor::open(ctx.app.clone(), "Harmonious Jade", Some("solar")).unwrap();

    let replies = run(
        &mut editor,
        &[
            "mode merits",
            "set resources=3",
            "set lang/old realm=1",
            "mode spells",
            "add cel=Stormwind Rider",
            "add necro/ivory=Bone Shield",
            "mode charms",
            "add melee=Excellent Strike",
            "add melee=Excellent Strike",
            "remove melee=Excellent Strike",
        ],
    );
    assert_eq!(replies[1], "General Merit Resources set to 3.");
    assert_eq!(replies[2], "Language Merit Old Realm set to 1.");
    assert_eq!(replies[4], "Spell Stormwind Rider added under Sorcery/Celestial (x1).");
    assert_eq!(replies[5], "Spell Bone Shield added under Necromancy/Ivory (x1).");
    assert_eq!(replies[8], "Charm Excellent Strike added under Solar/Melee (x2).");
    assert_eq!(replies[9], "Charm Excellent Strike reduced to x1.");

    let sheet = editor.handle("show");
    assert!(sheet.contains("Excellent Strike"), "{sheet}");
    assert!(sheet.contains("Charms purchased: 1 (starting allowance 15)"), "{sheet}");
}

#[test]
fn test_help_lists_mode_verbs() {
    let ctx = E2ETestContext::setup();
    let mut editor = Editor::open(ctx.app.clone(), "Cathak Meral", Some("dragon/air")).unwrap();
    editor.handle("mode abil");
    let help = editor.handle("help");
    assert!(help.contains("specialty <ability>/<name>=<value>"));
    assert!(help.contains("aspect <stat>"));
}

#[test]
fn test_reopening_finds_existing_character() {
    let ctx = E2ETestContext::setup();
    let first = Editor::open(ctx.app.clone(), "Harmonious Jade", Some("solar")).unwrap();
    let again = Editor::open(ctx.app.clone(), "harmonious jade", None).unwrap();
    assert_eq!(first.character(), again.character());
    assert_eq!(ctx.sheet(again.character()).template.kind, "Solar");
}
