//! Unified error type for sheet operations.
//!
//! Every variant is a deterministic rejection of player input. The Display
//! text is shown to the player verbatim by the command layer, so messages
//! are written for players rather than for logs.

use thiserror::Error;

/// Error type for stat, power, and template operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// Name fragment matched nothing
    #[error("No {what} matches '{input}'. Choices are: {}", .choices.join(", "))]
    NotFound {
        what: String,
        input: String,
        choices: Vec<String>,
    },

    /// Name fragment matched several options with no exact winner
    #[error("'{input}' is ambiguous for {what}. Could be: {}", .candidates.join(", "))]
    Ambiguous {
        what: String,
        input: String,
        candidates: Vec<String>,
    },

    /// Value is not a whole number or breaks a family minimum
    #[error("{0}")]
    InvalidValue(String),

    /// Catalog path is empty or deeper than the catalog allows
    #[error("Invalid stat path: {0}")]
    InvalidPath(String),

    /// Stat is excluded from this action by family or template rule
    #[error("{0}")]
    NotEligible(String),

    /// Stat is derived and cannot be written directly
    #[error("{0}")]
    NotSettable(String),

    /// Flag toggle would exceed the template's slot count
    #[error("You may only have {limit} {flag} {family}.")]
    BudgetExceeded {
        flag: String,
        family: String,
        limit: u32,
    },

    #[error("{0}")]
    AlreadyInState(String),

    #[error("{0}")]
    NotInState(String),

    /// Favored and Caste marks are mutually exclusive
    #[error("{0}")]
    ConflictingFlag(String),
}

impl StoryError {
    /// Create a not found error listing the valid choices.
    pub fn not_found<I, S>(what: impl Into<String>, input: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NotFound {
            what: what.into(),
            input: input.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an ambiguity error listing the candidates that matched.
    pub fn ambiguous<I, S>(what: impl Into<String>, input: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ambiguous {
            what: what.into(),
            input: input.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invalid value error.
    ///
    /// Use this when a value fails to parse or violates a family minimum:
    /// - Non-numeric ratings
    /// - Attributes below 1
    /// - Empty or over-long names
    ///
    /// # Example
    /// ```ignore
    /// if value < 1 {
    ///     return Err(StoryError::invalid_value("Attributes cannot be below 1!"));
    /// }
    /// ```
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    pub fn not_eligible(msg: impl Into<String>) -> Self {
        Self::NotEligible(msg.into())
    }

    pub fn not_settable(msg: impl Into<String>) -> Self {
        Self::NotSettable(msg.into())
    }

    /// Create a budget error for a flag type within a family.
    pub fn budget_exceeded(flag: impl Into<String>, family: impl Into<String>, limit: u32) -> Self {
        Self::BudgetExceeded {
            flag: flag.into(),
            family: family.into(),
            limit,
        }
    }

    pub fn already_in_state(msg: impl Into<String>) -> Self {
        Self::AlreadyInState(msg.into())
    }

    pub fn not_in_state(msg: impl Into<String>) -> Self {
        Self::NotInState(msg.into())
    }

    pub fn conflicting_flag(msg: impl Into<String>) -> Self {
        Self::ConflictingFlag(msg.into())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
