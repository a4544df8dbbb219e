//! Text edits driven by wiki-links: link autocomplete while typing and
//! rewriting links when a note is renamed.

pub mod complete;
pub mod rename;

pub use complete::{LinkQuery, accept_suggestion, pending_link_query, suggest_titles};
pub use rename::rename_links;
