//! Value objects - Immutable objects defined by their attributes

mod marks;
mod stat_path;

pub use marks::{FlagChange, FlagKind, Mark};
pub use stat_path::{StatPath, MAX_PATH_DEPTH};
