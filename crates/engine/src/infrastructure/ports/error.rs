//! Failures reported by the store behind the ports.

/// Why a catalog, ledger, or character row could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A row referenced by id is absent from the store.
    #[error("no {entity_type} row with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Reading or replacing the snapshot file failed.
    #[error("snapshot file {operation} failed: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Snapshot text is not a valid snapshot.
    #[error("snapshot is malformed: {0}")]
    Serialization(String),

    /// A write would break a store invariant (orphan entry, duplicate specialty).
    #[error("store invariant violated: {0}")]
    ConstraintViolation(String),
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }
}
