use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::editing::suggest_titles;
use crate::resolve::{LookupError, NoteStore, UserId};

/// In-memory index of note titles per user.
///
/// Uses BTreeMap/BTreeSet so titles come back sorted.
#[derive(Debug, Default, Clone)]
pub struct NoteIndex {
    notes: BTreeMap<UserId, BTreeSet<String>>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single note title. Returns false if it was already present.
    pub fn add_note(&mut self, user: &UserId, title: impl Into<String>) -> bool {
        self.notes.entry(user.clone()).or_default().insert(title.into())
    }

    /// Add multiple notes in a batch
    pub fn add_notes<I, T>(&mut self, user: &UserId, titles: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let set = self.notes.entry(user.clone()).or_default();
        set.extend(titles.into_iter().map(Into::into));
    }

    /// Remove a single note. Returns true if it existed.
    pub fn remove_note(&mut self, user: &UserId, title: &str) -> bool {
        let Some(set) = self.notes.get_mut(user) else {
            return false;
        };
        let removed = set.remove(title);
        if set.is_empty() {
            self.notes.remove(user);
        }
        removed
    }

    /// Rename a note. Returns false if `old` did not exist or `new` already does.
    pub fn rename_note(&mut self, user: &UserId, old: &str, new: &str) -> bool {
        if !self.contains(user, old) || self.contains(user, new) {
            return false;
        }
        self.remove_note(user, old);
        self.add_note(user, new)
    }

    pub fn contains(&self, user: &UserId, title: &str) -> bool {
        self.notes.get(user).is_some_and(|set| set.contains(title))
    }

    /// Get all titles for a user, sorted
    pub fn titles(&self, user: &UserId) -> impl Iterator<Item = &str> {
        self.notes
            .get(user)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of notes a user has
    pub fn len(&self, user: &UserId) -> usize {
        self.notes.get(user).map_or(0, BTreeSet::len)
    }

    /// Check if no user has any notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Autocomplete note titles for a partially typed link.
    pub fn suggest(&self, user: &UserId, query: &str, limit: usize) -> Vec<String> {
        suggest_titles(query, self.titles(user), limit)
    }

    /// Remove all notes for all users
    pub fn clear(&mut self) {
        self.notes.clear();
    }
}

impl NoteStore for NoteIndex {
    fn exists(
        &self,
        user: &UserId,
        titles: &BTreeSet<String>,
    ) -> Result<HashMap<String, bool>, LookupError> {
        Ok(titles
            .iter()
            .map(|t| (t.clone(), self.contains(user, t)))
            .collect())
    }
}
