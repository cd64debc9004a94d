//! Fixed option sets. These are game data, not configuration.

pub const ATTRIBUTES: [&str; 9] = [
    "Strength",
    "Dexterity",
    "Stamina",
    "Charisma",
    "Manipulation",
    "Appearance",
    "Perception",
    "Intelligence",
    "Wits",
];

/// Physical / Social / Mental groupings used by Lunar castes.
pub const PHYSICAL_ATTRIBUTES: [&str; 3] = ["Strength", "Dexterity", "Stamina"];
pub const SOCIAL_ATTRIBUTES: [&str; 3] = ["Charisma", "Manipulation", "Appearance"];
pub const MENTAL_ATTRIBUTES: [&str; 3] = ["Perception", "Intelligence", "Wits"];

pub const ABILITIES: [&str; 26] = [
    "Archery",
    "Athletics",
    "Awareness",
    "Brawl",
    "Bureaucracy",
    "Craft",
    "Dodge",
    "Integrity",
    "Investigation",
    "Larceny",
    "Linguistics",
    "Lore",
    "Martial Arts",
    "Medicine",
    "Melee",
    "Occult",
    "Performance",
    "Presence",
    "Resistance",
    "Ride",
    "Sail",
    "Socialize",
    "Stealth",
    "Survival",
    "Thrown",
    "War",
];

/// Ability whose rating is the highest purchased Craft.
pub const CRAFT: &str = "Craft";
/// Ability whose rating is the highest purchased Style and whose marks follow Brawl.
pub const MARTIAL_ARTS: &str = "Martial Arts";
pub const BRAWL: &str = "Brawl";

pub const STYLES: [&str; 23] = [
    "Air Dragon Style",
    "Black Claw Style",
    "Centipede Style",
    "Crane Style",
    "Dreaming Pearl Courtesan Style",
    "Earth Dragon Style",
    "Ebon Shadow Style",
    "Falcon Style",
    "Fire Dragon Style",
    "Golden Janissary Style",
    "Laughing Monster Style",
    "Mantis Style",
    "Righteous Devil Style",
    "Silver-Voiced Nightingale Style",
    "Single Point Shining Into the Void Style",
    "Snake Style",
    "Steel Devil Style",
    "Swaying Grass Dance Style",
    "Tiger Style",
    "Water Dragon Style",
    "White Reaper Style",
    "White Veil Style",
    "Wood Dragon Style",
];

pub const ESSENCE: &str = "Essence";
pub const WILLPOWER: &str = "Willpower";
pub const ADVANTAGES: [&str; 2] = [ESSENCE, WILLPOWER];

pub const MERIT_CATEGORIES: [&str; 7] = [
    "General",
    "Artifact",
    "Language",
    "Shaping Ritual",
    "Mutation",
    "Familiar",
    "Social",
];
