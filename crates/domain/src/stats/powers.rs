//! Category rules for the repurchasable power families.
//!
//! Charms, Spells, and Evocations share one handler; they differ only in how
//! the main category and sub-category of a purchase are resolved.

use super::family::StatFamily;
use super::names::{ABILITIES, ATTRIBUTES, STYLES};
use crate::common::{good_name, partial_match, MAX_NAME_LENGTH};
use crate::error::StoryError;

const UNIVERSAL: &str = "Universal";

const SPIRIT_CHARMS: [&str; 13] = [
    "Universal",
    "Blessings",
    "Divinations",
    "Sendings",
    "Divine Works",
    "Eidola",
    "Relocations",
    "Enchantments",
    "Inhabitings",
    "Tantra",
    "Aegis",
    "Curses",
    "Edges",
];

const DREAM_SOULED_CHARMS: [&str; 5] = [
    "Illusion and Transformation",
    "Offensive",
    "Defensive",
    "Social",
    "Mobility and Travel",
];

const HEARTEATER_CHARMS: [&str; 6] = [
    "Pawn",
    "Offensive",
    "Defensive",
    "Social",
    "Mobility and Travel",
    "Mysticism",
];

const UMBRAL_CHARMS: [&str; 6] = [
    "Penumbra",
    "Darkness",
    "Offensive",
    "Defensive",
    "Social",
    "Mobility and Travel",
];

/// Main Charm categories, in display order.
pub const CHARM_CATEGORIES: [&str; 14] = [
    "Solar",
    "Abyssal",
    "Lunar",
    "Dragon-Blooded",
    "Martial Arts",
    "Sidereal",
    "Liminal",
    "Getimian",
    "Celestial Exigent",
    "Terrestrial Exigent",
    "Spirit",
    "Dream-Souled",
    "Hearteater",
    "Umbral",
];

pub const SPELL_CATEGORIES: [&str; 2] = ["Sorcery", "Necromancy"];

const SORCERY_CIRCLES: [&str; 3] = ["Terrestrial", "Celestial", "Solar"];
const NECROMANCY_CIRCLES: [&str; 3] = ["Ivory", "Shadow", "Void"];

/// Sub-categories allowed under a Charm main category.
pub fn charm_sub_categories(main: &str) -> Vec<&'static str> {
    match main {
        "Solar" | "Abyssal" | "Dragon-Blooded" | "Sidereal" => ABILITIES.to_vec(),
        "Lunar" => ATTRIBUTES.iter().copied().chain([UNIVERSAL]).collect(),
        "Liminal" | "Getimian" => ATTRIBUTES.to_vec(),
        "Martial Arts" => STYLES.to_vec(),
        "Celestial Exigent" | "Terrestrial Exigent" => ATTRIBUTES
            .iter()
            .chain(ABILITIES.iter())
            .copied()
            .chain([super::names::ESSENCE])
            .collect(),
        "Spirit" => SPIRIT_CHARMS.to_vec(),
        "Dream-Souled" => DREAM_SOULED_CHARMS.to_vec(),
        "Hearteater" => HEARTEATER_CHARMS.to_vec(),
        "Umbral" => UMBRAL_CHARMS.to_vec(),
        _ => Vec::new(),
    }
}

/// Sub-categories (circles) allowed under a Spell main category.
pub fn spell_sub_categories(main: &str) -> Vec<&'static str> {
    match main {
        "Sorcery" => SORCERY_CIRCLES.to_vec(),
        "Necromancy" => NECROMANCY_CIRCLES.to_vec(),
        _ => Vec::new(),
    }
}

/// Where the main category comes from when the caller omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    /// The character template's native Charm category
    TemplateNative,
    Named(&'static str),
}

/// How a power family resolves main category and sub-category.
#[derive(Debug, Clone, Copy)]
pub enum CategoryRule {
    /// Caller-supplied main category validated against `categories`,
    /// sub-category validated against that category's allow-list
    Listed {
        categories: &'static [&'static str],
        sub_categories: fn(&str) -> Vec<&'static str>,
        default: DefaultCategory,
    },
    /// Fixed main category; the sub-category is free text
    FreeText { main: &'static str },
}

/// A power family: its stat family tag plus its category rule.
#[derive(Debug, Clone, Copy)]
pub struct PowerFamily {
    pub family: StatFamily,
    pub rule: CategoryRule,
}

pub const CHARMS: PowerFamily = PowerFamily {
    family: StatFamily::Charms,
    rule: CategoryRule::Listed {
        categories: &CHARM_CATEGORIES,
        sub_categories: charm_sub_categories,
        default: DefaultCategory::TemplateNative,
    },
};

pub const SPELLS: PowerFamily = PowerFamily {
    family: StatFamily::Spells,
    rule: CategoryRule::Listed {
        categories: &SPELL_CATEGORIES,
        sub_categories: spell_sub_categories,
        default: DefaultCategory::Named("Sorcery"),
    },
};

pub const EVOCATIONS: PowerFamily = PowerFamily {
    family: StatFamily::Evocations,
    rule: CategoryRule::FreeText { main: "Evocations" },
};

impl PowerFamily {
    pub fn what(&self) -> &'static str {
        self.family.singular()
    }

    /// Resolve the main category from caller text or the family default.
    ///
    /// `native` is the character template's native Charm category, if any.
    pub fn main_category(
        &self,
        input: Option<&str>,
        native: Option<&'static str>,
    ) -> Result<&'static str, StoryError> {
        match self.rule {
            CategoryRule::FreeText { main } => Ok(main),
            CategoryRule::Listed {
                categories,
                default,
                ..
            } => match input {
                Some(text) => {
                    partial_match(&format!("{} Category", self.what()), text, categories.iter().copied())
                }
                None => match default {
                    DefaultCategory::Named(name) => Ok(name),
                    DefaultCategory::TemplateNative => native.ok_or_else(|| {
                        StoryError::not_eligible(format!(
                            "No native {} category for this template; name one explicitly.",
                            self.what()
                        ))
                    }),
                },
            },
        }
    }

    /// Resolve the sub-category under an already-resolved main category.
    pub fn sub_category(&self, main: &str, input: &str) -> Result<String, StoryError> {
        match self.rule {
            CategoryRule::FreeText { .. } => good_name(input, self.what(), MAX_NAME_LENGTH),
            CategoryRule::Listed { sub_categories, .. } => {
                let allowed = sub_categories(main);
                if allowed.is_empty() {
                    return Err(StoryError::not_eligible(format!(
                        "No {} Categories available for {main}.",
                        self.what()
                    )));
                }
                partial_match(&format!("{main} {} Category", self.what()), input, allowed)
                    .map(str::to_string)
            }
        }
    }
}
