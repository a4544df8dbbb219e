pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod resolve;
pub mod splice;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::*;
pub use io::{FsNoteStore, IoError, NoteFile};
pub use models::*;
pub use parsing::{
    LinkOccurrence, Span, TemplateVariable, extract_variables, parse_links, scan_variables,
    substitute,
};
pub use resolve::*;
pub use splice::{Segment, render_segments, splice};
