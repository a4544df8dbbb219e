//! # Parsing
//!
//! Cursor-based scanners for the two inline constructs notes use:
//! wiki-links (`[[Target]]`, `[[Target|Alias]]`) and template placeholders
//! (`{{name}}`).
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte range into the source text
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`kinds`**: Types that own the delimiters (`WikiLink`, `TemplateVar`)
//! - **`token`**: `try_scan_delimited()` and `scan_delimited()`, the shared
//!   open/close pairing rule
//! - **`links`**: `parse_links()` producing `LinkOccurrence`s
//! - **`template`**: `extract_variables()` and `substitute()`
//!
//! ## Pairing Rule
//!
//! An opener always pairs with the next closer after it. Unclosed openers are
//! literal text. Offsets are byte offsets into the scanned `&str`.

pub mod cursor;
pub mod kinds;
pub mod links;
pub mod span;
pub mod template;
pub mod token;

pub use links::{LinkOccurrence, parse_links};
pub use span::Span;
pub use template::{TemplateVariable, extract_variables, scan_variables, substitute};
