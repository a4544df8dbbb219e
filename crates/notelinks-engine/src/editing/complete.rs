use crate::parsing::kinds::WikiLink;

/// A partially typed wiki-link target immediately before the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkQuery {
    /// Byte offset of the unclosed `[[`.
    pub start: usize,
    /// What has been typed after the `[[`, leading whitespace removed.
    pub query: String,
}

/// Detects an in-progress `[[...` before `caret`.
///
/// Returns `None` when the nearest `[[` is already closed, when a line break
/// or alias pipe separates it from the caret, or when `caret` is not a valid
/// character boundary of `text`.
pub fn pending_link_query(text: &str, caret: usize) -> Option<LinkQuery> {
    let before = text.get(..caret)?;

    let start = before.rfind(WikiLink::OPEN_STR)?;
    let typed = &before[start + WikiLink::OPEN_STR.len()..];

    if typed.contains(WikiLink::CLOSE_STR)
        || typed.contains('\n')
        || typed.contains(WikiLink::ALIAS)
    {
        return None;
    }

    Some(LinkQuery {
        start,
        query: typed.trim_start().to_string(),
    })
}

/// Ranks note titles for a link query.
///
/// Case-insensitive. Prefix matches come before substring matches; each group
/// is alphabetical. At most `limit` titles are returned.
pub fn suggest_titles<'a>(
    query: &str,
    titles: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = query.trim().to_lowercase();

    let mut prefix = vec![];
    let mut contains = vec![];
    for title in titles {
        let lower = title.to_lowercase();
        if lower.starts_with(&needle) {
            prefix.push((lower, title));
        } else if lower.contains(&needle) {
            contains.push((lower, title));
        }
    }
    prefix.sort();
    contains.sort();

    prefix
        .into_iter()
        .chain(contains)
        .map(|(_, title)| title.to_string())
        .take(limit)
        .collect()
}

/// Replaces the pending query with a finished `[[title]]` link.
///
/// A `]]` already sitting at the caret (auto-closed by the editor) is
/// consumed. Returns the new text and the caret position just past the link.
pub fn accept_suggestion(
    text: &str,
    query: &LinkQuery,
    caret: usize,
    title: &str,
) -> (String, usize) {
    let Some(tail) = text.get(caret..) else {
        return (text.to_string(), caret);
    };
    let tail = tail.strip_prefix(WikiLink::CLOSE_STR).unwrap_or(tail);

    let head = text.get(..query.start).unwrap_or_default();
    let link = WikiLink::render(title, None);

    let mut out = String::with_capacity(head.len() + link.len() + tail.len());
    out.push_str(head);
    out.push_str(&link);
    let new_caret = out.len();
    out.push_str(tail);

    (out, new_caret)
}
