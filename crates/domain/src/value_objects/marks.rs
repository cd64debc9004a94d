//! Favored / Caste / Supernal marks stored in a ledger row's flags.
//!
//! `flag_1` holds the [`Mark`]; `flag_2` holds Supernal (1 or 0) and is only
//! ever non-zero while the mark is Caste.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mark stored in `flag_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Unset,
    Favored,
    Caste,
}

impl Mark {
    pub fn from_flag(value: i32) -> Self {
        match value {
            1 => Self::Favored,
            2 => Self::Caste,
            _ => Self::Unset,
        }
    }

    pub fn to_flag(self) -> i32 {
        match self {
            Self::Unset => 0,
            Self::Favored => 1,
            Self::Caste => 2,
        }
    }
}

/// Which of the three escalating tiers an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKind {
    Favored,
    Caste,
    Supernal,
}

impl FlagKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Favored => "Favored",
            Self::Caste => "Caste",
            Self::Supernal => "Supernal",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Requested change to a flag: an explicit state or a flip of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagChange {
    On,
    Off,
    Toggle,
}

impl FlagChange {
    /// Resolve to the target state given the current one.
    pub fn target(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_flag_encoding() {
        for mark in [Mark::Unset, Mark::Favored, Mark::Caste] {
            assert_eq!(Mark::from_flag(mark.to_flag()), mark);
        }
        assert_eq!(Mark::from_flag(7), Mark::Unset);
    }

    #[test]
    fn flag_change_targets() {
        assert!(FlagChange::On.target(true));
        assert!(!FlagChange::Off.target(true));
        assert!(FlagChange::Toggle.target(false));
        assert!(!FlagChange::Toggle.target(true));
    }
}
