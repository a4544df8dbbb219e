use crate::parsing::{LinkOccurrence, parse_links};

/// A piece of note text ready for rendering.
///
/// Wiki-links are rendered by their display text, so joining segments does
/// not reproduce the source: `[[Target|Alias]]` becomes `Alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text between links. May be empty.
    Plain(String),
    /// A wiki-link to a note.
    Link {
        display_text: String,
        target_title: String,
    },
}

impl Segment {
    /// The text shown to the user for this segment.
    pub fn display(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::Link { display_text, .. } => display_text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

/// Interleaves plain text and link segments.
///
/// `occurrences` must be the document-ordered output of
/// [`parse_links`] for the same `text`. A plain segment is emitted before
/// every link and after the last one even when empty, so the result always
/// has `2 * occurrences.len() + 1` entries alternating plain and link.
pub fn splice(text: &str, occurrences: &[LinkOccurrence]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(occurrences.len() * 2 + 1);
    let mut last = 0;

    for occ in occurrences {
        let gap = text.get(last..occ.start()).unwrap_or_default();
        out.push(Segment::Plain(gap.to_string()));
        out.push(Segment::Link {
            display_text: occ.display_text.clone(),
            target_title: occ.target_title.clone(),
        });
        last = last.max(occ.end());
    }

    let tail = text.get(last..).unwrap_or_default();
    out.push(Segment::Plain(tail.to_string()));
    out
}

/// Parses and splices `text` in one step.
pub fn render_segments(text: &str) -> Vec<Segment> {
    splice(text, &parse_links(text))
}
