//! # Delimiter Kinds
//!
//! Types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`WikiLink`**: `OPEN = b"[["`, `CLOSE = b"]]"`, `ALIAS = '|'`
//! - **`TemplateVar`**: `OPEN = b"{{"`, `CLOSE = b"}}"`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.
//! Scanners call these constants; they never hardcode `[[` or `{{`.

pub mod template_var;
pub mod wikilink;

pub use template_var::TemplateVar;
pub use wikilink::WikiLink;
