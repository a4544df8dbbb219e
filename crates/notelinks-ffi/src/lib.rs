//! UniFFI bindings for the notelinks mobile apps
//!
//! Exposes link parsing, splicing, templates, autocomplete and an in-memory
//! note index to Kotlin and Swift. Byte offsets cross the boundary as `u64`.

use notelinks_engine::{self as engine, LinkStatus, NoteIndex, Segment, UserId};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Lookup failed: {reason}")]
    LookupFailed { reason: String },
}

impl From<engine::LookupError> for FfiError {
    fn from(e: engine::LookupError) -> Self {
        FfiError::LookupFailed {
            reason: e.to_string(),
        }
    }
}

// ============ DTOs ============

/// One `[[Target|Alias]]` occurrence.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct LinkOccurrenceDto {
    pub target_title: String,
    pub display_text: String,
    /// Byte offset of the opening `[[`
    pub start: u64,
    /// Byte offset one past the closing `]]`
    pub end: u64,
}

impl LinkOccurrenceDto {
    fn from_engine(occ: engine::LinkOccurrence) -> Self {
        Self {
            start: occ.start() as u64,
            end: occ.end() as u64,
            target_title: occ.target_title,
            display_text: occ.display_text,
        }
    }
}

/// A renderable piece of note text.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum SegmentDto {
    Plain {
        text: String,
    },
    Link {
        display_text: String,
        target_title: String,
        /// False when no note with this title exists (or it was not checked)
        resolved: bool,
    },
}

impl SegmentDto {
    fn from_engine(segment: Segment, resolution: &engine::Resolution) -> Self {
        match segment {
            Segment::Plain(text) => Self::Plain { text },
            Segment::Link {
                display_text,
                target_title,
            } => Self::Link {
                resolved: resolution.is_resolved(&target_title),
                display_text,
                target_title,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct LinkQueryDto {
    /// Byte offset of the unclosed `[[`
    pub start: u64,
    pub query: String,
}

/// Text after an edit plus where the caret should go.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct TextEditDto {
    pub text: String,
    pub caret: u64,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct RenameResultDto {
    pub text: String,
    pub changed: u32,
}

// ============ Note Index Handle ============

/// A per-user index of note titles held on the Rust side.
///
/// The app keeps it in sync with its storage and uses it to colour links and
/// drive autocomplete.
#[derive(uniffi::Object)]
pub struct NoteIndexHandle {
    inner: Mutex<NoteIndex>,
}

impl NoteIndexHandle {
    fn index(&self) -> std::sync::MutexGuard<'_, NoteIndex> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl NoteIndexHandle {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(NoteIndex::new()),
        }
    }

    /// Returns false if the note was already indexed.
    pub fn add_note(&self, user_id: String, title: String) -> bool {
        self.index().add_note(&UserId::new(user_id), title)
    }

    pub fn add_notes(&self, user_id: String, titles: Vec<String>) {
        self.index().add_notes(&UserId::new(user_id), titles);
    }

    /// Returns true if the note existed.
    pub fn remove_note(&self, user_id: String, title: String) -> bool {
        self.index().remove_note(&UserId::new(user_id), &title)
    }

    pub fn rename_note(&self, user_id: String, old_title: String, new_title: String) -> bool {
        self.index()
            .rename_note(&UserId::new(user_id), &old_title, &new_title)
    }

    /// Maps every requested title to whether it exists for the user.
    pub fn resolve(
        &self,
        user_id: String,
        titles: Vec<String>,
    ) -> Result<HashMap<String, bool>, FfiError> {
        let titles: BTreeSet<String> = titles.into_iter().collect();
        let index = self.index();
        let resolution = engine::resolve_existence(&titles, &UserId::new(user_id), &*index)?;
        Ok(resolution.into_map().into_iter().collect())
    }

    /// Parses `text` and returns its segments with link existence filled in.
    pub fn render(&self, user_id: String, text: String) -> Result<Vec<SegmentDto>, FfiError> {
        let links = engine::parse_links(&text);
        let titles = engine::unique_titles(&links);
        let index = self.index();
        let resolution = engine::resolve_existence(&titles, &UserId::new(user_id), &*index)?;

        Ok(engine::splice(&text, &links)
            .into_iter()
            .map(|s| SegmentDto::from_engine(s, &resolution))
            .collect())
    }

    /// Titles of links in `text` that point at no existing note.
    pub fn broken_links(&self, user_id: String, text: String) -> Result<Vec<String>, FfiError> {
        let links = engine::parse_links(&text);
        let titles = engine::unique_titles(&links);
        let index = self.index();
        let resolution = engine::resolve_existence(&titles, &UserId::new(user_id), &*index)?;

        Ok(engine::classify(&links, &resolution)
            .into_iter()
            .filter(|c| c.status == LinkStatus::Broken)
            .map(|c| c.occurrence.target_title)
            .collect())
    }

    pub fn suggest(&self, user_id: String, query: String, limit: u32) -> Vec<String> {
        self.index()
            .suggest(&UserId::new(user_id), &query, limit as usize)
    }
}

impl Default for NoteIndexHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn parse_links(text: String) -> Vec<LinkOccurrenceDto> {
    engine::parse_links(&text)
        .into_iter()
        .map(LinkOccurrenceDto::from_engine)
        .collect()
}

/// Segments for rendering without existence checks; every link is reported
/// as unresolved.
#[uniffi::export]
pub fn splice(text: String) -> Vec<SegmentDto> {
    let unresolved = engine::Resolution::default();
    engine::render_segments(&text)
        .into_iter()
        .map(|s| SegmentDto::from_engine(s, &unresolved))
        .collect()
}

#[uniffi::export]
pub fn extract_variables(text: String) -> Vec<String> {
    engine::extract_variables(&text)
}

#[uniffi::export]
pub fn substitute_variables(text: String, values: HashMap<String, String>) -> String {
    engine::substitute(&text, &values)
}

#[uniffi::export]
pub fn pending_link_query(text: String, caret: u64) -> Option<LinkQueryDto> {
    let caret = usize::try_from(caret).ok()?;
    engine::pending_link_query(&text, caret).map(|q| LinkQueryDto {
        start: q.start as u64,
        query: q.query,
    })
}

/// Completes the pending `[[query` at `caret` with `title`. Returns the text
/// unchanged if there is no pending query.
#[uniffi::export]
pub fn accept_link_suggestion(text: String, caret: u64, title: String) -> TextEditDto {
    let pending = usize::try_from(caret)
        .ok()
        .and_then(|c| engine::pending_link_query(&text, c).map(|q| (c, q)));

    match pending {
        Some((c, query)) => {
            let (text, caret) = engine::accept_suggestion(&text, &query, c, &title);
            TextEditDto {
                text,
                caret: caret as u64,
            }
        }
        None => TextEditDto { text, caret },
    }
}

#[uniffi::export]
pub fn rename_note_links(text: String, old_title: String, new_title: String) -> RenameResultDto {
    let (text, changed) = engine::rename_links(&text, &old_title, &new_title);
    RenameResultDto {
        text,
        changed: changed as u32,
    }
}
