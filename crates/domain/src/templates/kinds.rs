//! Built-in character kinds.

use super::definition::{ExtraField, FlagBudget, KindDef, PoolFormula, SubCasteDef};
use crate::stats::names::{
    ATTRIBUTES, ESSENCE, MENTAL_ATTRIBUTES, PHYSICAL_ATTRIBUTES, SOCIAL_ATTRIBUTES, WILLPOWER,
};

const MORTAL_ADVANTAGES: [(&str, u32); 2] = [(ESSENCE, 1), (WILLPOWER, 3)];
const EXALTED_ADVANTAGES: [(&str, u32); 2] = [(ESSENCE, 1), (WILLPOWER, 5)];

// Solar / Abyssal caste abilities. Martial Arts follows Brawl, so it is never listed.
const DAWN: [&str; 8] = [
    "Archery",
    "Awareness",
    "Brawl",
    "Dodge",
    "Melee",
    "Resistance",
    "Thrown",
    "War",
];
const ZENITH: [&str; 8] = [
    "Athletics",
    "Integrity",
    "Lore",
    "Performance",
    "Presence",
    "Resistance",
    "Survival",
    "War",
];
const TWILIGHT: [&str; 8] = [
    "Bureaucracy",
    "Craft",
    "Integrity",
    "Investigation",
    "Linguistics",
    "Lore",
    "Medicine",
    "Occult",
];
const NIGHT: [&str; 8] = [
    "Athletics",
    "Awareness",
    "Dodge",
    "Investigation",
    "Larceny",
    "Ride",
    "Socialize",
    "Stealth",
];
const ECLIPSE: [&str; 8] = [
    "Bureaucracy",
    "Larceny",
    "Linguistics",
    "Occult",
    "Presence",
    "Ride",
    "Sail",
    "Socialize",
];

const fn ability_caste(name: &'static str, abilities: &'static [&'static str]) -> SubCasteDef {
    SubCasteDef {
        name,
        caste_attributes: &[],
        caste_abilities: abilities,
    }
}

const fn attribute_caste(name: &'static str, attributes: &'static [&'static str]) -> SubCasteDef {
    SubCasteDef {
        name,
        caste_attributes: attributes,
        caste_abilities: &[],
    }
}

const SOLAR_CASTES: [SubCasteDef; 5] = [
    ability_caste("Dawn", &DAWN),
    ability_caste("Zenith", &ZENITH),
    ability_caste("Twilight", &TWILIGHT),
    ability_caste("Night", &NIGHT),
    ability_caste("Eclipse", &ECLIPSE),
];

const ABYSSAL_CASTES: [SubCasteDef; 5] = [
    ability_caste("Dusk", &DAWN),
    ability_caste("Midnight", &ZENITH),
    ability_caste("Daybreak", &TWILIGHT),
    ability_caste("Day", &NIGHT),
    ability_caste("Moonshadow", &ECLIPSE),
];

const LUNAR_CASTES: [SubCasteDef; 4] = [
    attribute_caste("Full Moon", &PHYSICAL_ATTRIBUTES),
    attribute_caste("Changing Moon", &SOCIAL_ATTRIBUTES),
    attribute_caste("No Moon", &MENTAL_ATTRIBUTES),
    attribute_caste("Casteless", &ATTRIBUTES),
];

const DRAGON_BLOODED_ASPECTS: [SubCasteDef; 5] = [
    ability_caste("Air", &["Linguistics", "Lore", "Occult", "Stealth", "Thrown"]),
    ability_caste("Earth", &["Awareness", "Craft", "Integrity", "Resistance", "War"]),
    ability_caste("Fire", &["Athletics", "Dodge", "Melee", "Presence", "Socialize"]),
    ability_caste("Water", &["Brawl", "Bureaucracy", "Investigation", "Larceny", "Sail"]),
    ability_caste("Wood", &["Archery", "Medicine", "Performance", "Ride", "Survival"]),
];

const SIDEREAL_CASTES: [SubCasteDef; 5] = [
    ability_caste("Journeys", &["Resistance", "Ride", "Sail", "Survival", "Thrown"]),
    ability_caste("Serenity", &["Craft", "Dodge", "Linguistics", "Performance", "Socialize"]),
    ability_caste("Battles", &["Archery", "Brawl", "Melee", "Presence", "War"]),
    ability_caste("Secrets", &["Investigation", "Larceny", "Lore", "Occult", "Stealth"]),
    ability_caste("Endings", &["Athletics", "Awareness", "Bureaucracy", "Integrity", "Medicine"]),
];

const GREAT_HOUSES: [&str; 12] = [
    "Cathak", "Cynis", "Iselsi", "Ledaal", "Mnemon", "Nellens", "Peleps", "Ragara", "Sesus",
    "Tepet", "V'neef", "Outcaste",
];

const SIDEREAL_FACTIONS: [&str; 3] = ["Bronze", "Gold", "Unaligned"];

/// Every kind the registry knows, in the order players see them.
pub static KINDS: [KindDef; 6] = [
    KindDef {
        name: "Mortal",
        sub_name: "Caste",
        supernal_name: "Supernal",
        sub_castes: &[],
        attributes: FlagBudget::NONE,
        abilities: FlagBudget::NONE,
        caste_locked: false,
        start_advantages: &MORTAL_ADVANTAGES,
        extra_fields: &[ExtraField::optional("Profession")],
        native_charm_category: None,
        starting_charms: 0,
        personal_pool: None,
        peripheral_pool: None,
    },
    KindDef {
        name: "Solar",
        sub_name: "Caste",
        supernal_name: "Supernal",
        sub_castes: &SOLAR_CASTES,
        attributes: FlagBudget::NONE,
        abilities: FlagBudget::new(5, 5, 1),
        caste_locked: false,
        start_advantages: &EXALTED_ADVANTAGES,
        extra_fields: &[
            ExtraField::required("Limit Trigger"),
            ExtraField::optional("Anima"),
        ],
        native_charm_category: Some("Solar"),
        starting_charms: 15,
        personal_pool: Some(PoolFormula::new(3, 10)),
        peripheral_pool: Some(PoolFormula::new(7, 26)),
    },
    KindDef {
        name: "Abyssal",
        sub_name: "Caste",
        supernal_name: "Supernal",
        sub_castes: &ABYSSAL_CASTES,
        attributes: FlagBudget::NONE,
        abilities: FlagBudget::new(5, 5, 1),
        caste_locked: false,
        start_advantages: &EXALTED_ADVANTAGES,
        extra_fields: &[
            ExtraField::required("Limit Trigger"),
            ExtraField::optional("Anima"),
        ],
        native_charm_category: Some("Abyssal"),
        starting_charms: 15,
        personal_pool: Some(PoolFormula::new(3, 10)),
        peripheral_pool: Some(PoolFormula::new(7, 26)),
    },
    KindDef {
        name: "Lunar",
        sub_name: "Caste",
        supernal_name: "Supernal",
        sub_castes: &LUNAR_CASTES,
        attributes: FlagBudget::new(2, 2, 1),
        abilities: FlagBudget::NONE,
        caste_locked: false,
        start_advantages: &EXALTED_ADVANTAGES,
        extra_fields: &[
            ExtraField::required("Spirit Shape"),
            ExtraField::required("Tell"),
        ],
        native_charm_category: Some("Lunar"),
        starting_charms: 15,
        personal_pool: Some(PoolFormula::new(1, 15)),
        peripheral_pool: Some(PoolFormula::new(4, 34)),
    },
    KindDef {
        name: "Dragon-Blooded",
        sub_name: "Aspect",
        supernal_name: "Supernal",
        sub_castes: &DRAGON_BLOODED_ASPECTS,
        attributes: FlagBudget::NONE,
        abilities: FlagBudget::new(5, 5, 0),
        caste_locked: true,
        start_advantages: &EXALTED_ADVANTAGES,
        extra_fields: &[
            ExtraField::choice("House", &GREAT_HOUSES),
            ExtraField::optional("Anima"),
        ],
        native_charm_category: Some("Dragon-Blooded"),
        starting_charms: 15,
        personal_pool: Some(PoolFormula::new(1, 11)),
        peripheral_pool: Some(PoolFormula::new(4, 23)),
    },
    KindDef {
        name: "Sidereal",
        sub_name: "Caste",
        supernal_name: "Supernal",
        sub_castes: &SIDEREAL_CASTES,
        attributes: FlagBudget::NONE,
        abilities: FlagBudget::new(5, 5, 1),
        caste_locked: false,
        start_advantages: &EXALTED_ADVANTAGES,
        extra_fields: &[
            ExtraField::required("Limit Trigger"),
            ExtraField::choice("Faction", &SIDEREAL_FACTIONS),
        ],
        native_charm_category: Some("Sidereal"),
        starting_charms: 15,
        personal_pool: Some(PoolFormula::new(2, 9)),
        peripheral_pool: Some(PoolFormula::new(6, 25)),
    },
];
