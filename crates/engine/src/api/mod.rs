//! Command layer - the line-oriented sheet editor.

mod command;
mod editor;
mod render;

pub use command::Command;
pub use editor::{Editor, EditorMode};
