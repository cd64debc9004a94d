//! Errors returned by sheet handlers.

use storyteller_domain::{CharacterId, StoryError};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during sheet operations.
///
/// `Story` is a rejection of player input and is shown verbatim. The other
/// variants are infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("{0}")]
    Story(#[from] StoryError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
}

impl SheetError {
    /// The player-facing rejection, if this is one.
    pub fn story(&self) -> Option<&StoryError> {
        match self {
            Self::Story(err) => Some(err),
            _ => None,
        }
    }
}
