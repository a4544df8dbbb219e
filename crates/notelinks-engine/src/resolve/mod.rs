//! # Reference Resolution
//!
//! Reconciles parsed link targets against a note store to tell resolved links
//! from broken ones.
//!
//! The store is injected: anything implementing [`NoteStore`] (including a
//! plain closure) answers one batch existence query per resolution pass.
//! Absence is closed-world: a title the store does not report as existing is
//! broken. Store failures are returned to the caller untouched.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use log::{debug, warn};

use crate::parsing::LinkOccurrence;

/// Identifies the acting user for store lookups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Note store unreachable: {reason}")]
    Unreachable { reason: String },
    #[error("User is not authenticated: {user}")]
    Unauthenticated { user: UserId },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Batch title-existence check backed by some note storage.
pub trait NoteStore {
    /// Reports which of `titles` exist for `user`.
    ///
    /// The returned map may omit titles or contain extra keys; callers
    /// normalise it with [`resolve_existence`].
    fn exists(
        &self,
        user: &UserId,
        titles: &BTreeSet<String>,
    ) -> Result<HashMap<String, bool>, LookupError>;
}

impl<F> NoteStore for F
where
    F: Fn(&UserId, &BTreeSet<String>) -> Result<HashMap<String, bool>, LookupError>,
{
    fn exists(
        &self,
        user: &UserId,
        titles: &BTreeSet<String>,
    ) -> Result<HashMap<String, bool>, LookupError> {
        self(user, titles)
    }
}

/// Existence of every title referenced by one or more documents.
///
/// Always built whole by [`resolve_existence`]; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    exists: BTreeMap<String, bool>,
}

impl Resolution {
    /// Returns `Some(true)` for resolved titles, `Some(false)` for broken ones
    /// and `None` for titles that were not part of the lookup.
    pub fn get(&self, title: &str) -> Option<bool> {
        self.exists.get(title).copied()
    }

    pub fn is_resolved(&self, title: &str) -> bool {
        self.get(title).unwrap_or(false)
    }

    /// Titles with no corresponding note, sorted.
    pub fn broken(&self) -> impl Iterator<Item = &str> {
        self.exists
            .iter()
            .filter(|(_, exists)| !**exists)
            .map(|(title, _)| title.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.exists.iter().map(|(t, e)| (t.as_str(), *e))
    }

    pub fn len(&self) -> usize {
        self.exists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exists.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, bool> {
        self.exists
    }
}

/// Collects the distinct target titles of any number of parsed documents.
pub fn unique_titles<'a>(
    occurrences: impl IntoIterator<Item = &'a LinkOccurrence>,
) -> BTreeSet<String> {
    occurrences
        .into_iter()
        .map(|occ| occ.target_title.clone())
        .collect()
}

/// Looks up every title in one store call and returns a total mapping.
///
/// An empty title set resolves to an empty mapping without touching the store.
pub fn resolve_existence<S>(
    titles: &BTreeSet<String>,
    user: &UserId,
    store: &S,
) -> Result<Resolution, LookupError>
where
    S: NoteStore + ?Sized,
{
    if titles.is_empty() {
        return Ok(Resolution::default());
    }

    let found = store.exists(user, titles).inspect_err(|e| {
        warn!("Link lookup for {} titles failed: {e}", titles.len());
    })?;

    let exists: BTreeMap<String, bool> = titles
        .iter()
        .map(|title| {
            let exists = found.get(title).copied().unwrap_or(false);
            (title.clone(), exists)
        })
        .collect();

    let broken = exists.values().filter(|e| !**e).count();
    debug!("Resolved {} link titles, {broken} broken", exists.len());

    Ok(Resolution { exists })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Resolved,
    Broken,
}

/// A link occurrence paired with whether its target exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLink {
    pub occurrence: LinkOccurrence,
    pub status: LinkStatus,
}

/// Tags each occurrence as resolved or broken. Titles missing from
/// `resolution` count as broken.
pub fn classify(occurrences: &[LinkOccurrence], resolution: &Resolution) -> Vec<ClassifiedLink> {
    occurrences
        .iter()
        .map(|occ| ClassifiedLink {
            occurrence: occ.clone(),
            status: if resolution.is_resolved(&occ.target_title) {
                LinkStatus::Resolved
            } else {
                LinkStatus::Broken
            },
        })
        .collect()
}
