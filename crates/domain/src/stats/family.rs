//! Stat families and the per-stat descriptor table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::names::{
    ABILITIES, ADVANTAGES, ATTRIBUTES, BRAWL, CRAFT, MARTIAL_ARTS, STYLES,
};
use crate::error::StoryError;
use crate::value_objects::{FlagKind, StatPath};

/// Every family of stat a character sheet tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatFamily {
    Attributes,
    Abilities,
    Styles,
    Crafts,
    Advantages,
    Charms,
    Spells,
    Evocations,
    Merits,
}

impl StatFamily {
    /// First catalog path segment for this family.
    pub fn root(&self) -> &'static str {
        match self {
            Self::Attributes => "Attributes",
            Self::Abilities => "Abilities",
            Self::Styles => "Styles",
            Self::Crafts => "Crafts",
            Self::Advantages => "Advantages",
            Self::Charms => "Charms",
            Self::Spells => "Spells",
            Self::Evocations => "Evocations",
            Self::Merits => "Merits",
        }
    }

    /// Singular noun used in player messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Attributes => "Attribute",
            Self::Abilities => "Ability",
            Self::Styles => "Style",
            Self::Crafts => "Craft",
            Self::Advantages => "Advantage",
            Self::Charms => "Charm",
            Self::Spells => "Spell",
            Self::Evocations => "Evocation",
            Self::Merits => "Merit",
        }
    }

    /// Fixed option set, empty for open (player-coined) families.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Attributes => &ATTRIBUTES,
            Self::Abilities => &ABILITIES,
            Self::Styles => &STYLES,
            Self::Advantages => &ADVANTAGES,
            Self::Crafts | Self::Charms | Self::Spells | Self::Evocations | Self::Merits => &[],
        }
    }

    /// Single-segment path naming the whole family.
    pub fn root_path(&self) -> StatPath {
        StatPath::from_normalized(vec![self.root().to_string()])
    }

    pub fn path(&self, name: &str) -> Result<StatPath, StoryError> {
        StatPath::new([self.root(), name])
    }

    /// Descriptor for one fixed-catalog stat of this family.
    pub fn descriptor(&self, name: &str) -> Option<StatDescriptor> {
        let name = *self.options().iter().find(|n| **n == name)?;
        Some(StatDescriptor::for_stat(*self, name))
    }

    pub fn descriptors(&self) -> Vec<StatDescriptor> {
        self.options()
            .iter()
            .map(|name| StatDescriptor::for_stat(*self, name))
            .collect()
    }
}

impl fmt::Display for StatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root())
    }
}

/// Capabilities of one fixed-catalog stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDescriptor {
    pub family: StatFamily,
    pub name: &'static str,
    pub can_favor: bool,
    pub can_caste: bool,
    pub can_supernal: bool,
    pub can_specialize: bool,
    /// Rating is the maximum over this family's rows rather than stored
    pub derived_from: Option<StatFamily>,
    /// Partner sharing Favored/Caste status (Brawl <-> Martial Arts)
    pub linked: Option<&'static str>,
    /// Marks are read from `linked` instead of this stat's own row
    pub inherits_marks: bool,
    pub min_value: u32,
}

impl StatDescriptor {
    fn for_stat(family: StatFamily, name: &'static str) -> Self {
        let base = Self {
            family,
            name,
            can_favor: false,
            can_caste: false,
            can_supernal: false,
            can_specialize: false,
            derived_from: None,
            linked: None,
            inherits_marks: false,
            min_value: 0,
        };
        match family {
            StatFamily::Attributes => Self {
                can_favor: true,
                can_caste: true,
                can_supernal: true,
                min_value: 1,
                ..base
            },
            StatFamily::Abilities => match name {
                MARTIAL_ARTS => Self {
                    can_specialize: true,
                    derived_from: Some(StatFamily::Styles),
                    linked: Some(BRAWL),
                    inherits_marks: true,
                    ..base
                },
                CRAFT => Self {
                    can_favor: true,
                    can_caste: true,
                    can_supernal: true,
                    can_specialize: true,
                    derived_from: Some(StatFamily::Crafts),
                    ..base
                },
                BRAWL => Self {
                    can_favor: true,
                    can_caste: true,
                    can_supernal: true,
                    can_specialize: true,
                    linked: Some(MARTIAL_ARTS),
                    ..base
                },
                _ => Self {
                    can_favor: true,
                    can_caste: true,
                    can_supernal: true,
                    can_specialize: true,
                    ..base
                },
            },
            StatFamily::Advantages => Self {
                min_value: 1,
                ..base
            },
            _ => base,
        }
    }

    pub fn can(&self, flag: FlagKind) -> bool {
        match flag {
            FlagKind::Favored => self.can_favor,
            FlagKind::Caste => self.can_caste,
            FlagKind::Supernal => self.can_supernal,
        }
    }
}

/// Parses a rating typed by a player.
pub fn parse_rating(name: &str, text: &str) -> Result<u32, StoryError> {
    text.trim().parse::<u32>().map_err(|_| {
        StoryError::invalid_value(format!(
            "Value for {name} must be a whole number 0 or greater!"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_family_sizes() {
        assert_eq!(StatFamily::Attributes.options().len(), 9);
        assert_eq!(StatFamily::Abilities.options().len(), 26);
        assert_eq!(StatFamily::Styles.options().len(), 23);
        assert!(StatFamily::Crafts.options().is_empty());
    }

    #[test]
    fn derived_abilities() {
        let craft = StatFamily::Abilities.descriptor("Craft").unwrap();
        assert_eq!(craft.derived_from, Some(StatFamily::Crafts));
        assert!(craft.can_favor);

        let ma = StatFamily::Abilities.descriptor("Martial Arts").unwrap();
        assert_eq!(ma.derived_from, Some(StatFamily::Styles));
        assert!(ma.inherits_marks);
        assert!(!ma.can_favor && !ma.can_caste && !ma.can_supernal);

        let brawl = StatFamily::Abilities.descriptor("Brawl").unwrap();
        assert_eq!(brawl.linked, Some("Martial Arts"));
    }

    #[test]
    fn attribute_floor() {
        let strength = StatFamily::Attributes.descriptor("Strength").unwrap();
        assert_eq!(strength.min_value, 1);
        assert!(!strength.can_specialize);
    }

    #[test]
    fn unknown_name_has_no_descriptor() {
        assert!(StatFamily::Abilities.descriptor("Sorcery").is_none());
        assert!(StatFamily::Crafts.descriptor("Blacksmithing").is_none());
    }

    #[test]
    fn parse_rating_rejects_negatives_and_text() {
        assert_eq!(parse_rating("Wits", " 3 ").unwrap(), 3);
        assert!(parse_rating("Wits", "-1").is_err());
        assert!(parse_rating("Wits", "three").is_err());
    }
}
