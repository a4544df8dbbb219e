use super::{cursor::Cursor, span::Span};

/// An `OPEN ... CLOSE` token found by [`try_scan_delimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    /// Full span including both delimiters.
    pub full: Span,
    /// Span of the content between the delimiters.
    pub inner: Span,
}

/// Outcome of [`try_scan_delimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The cursor is not at the opening delimiter.
    NotAtOpen,
    /// An opening delimiter with no closing delimiter anywhere after it.
    Unclosed,
    /// A complete token.
    Token(Delimited),
}

/// Attempts to scan a delimited token starting at the current position.
///
/// The opening delimiter always pairs with the *next* closing delimiter after
/// it, regardless of any further opening delimiters in between.
///
/// On [`Scan::NotAtOpen`] or [`Scan::Unclosed`] the cursor is left where it
/// was; on success it sits just past `close`.
pub fn try_scan_delimited(cur: &mut Cursor<'_>, open: &[u8], close: &[u8]) -> Scan {
    if !cur.starts_with(open) {
        return Scan::NotAtOpen;
    }

    let start = cur.pos();
    let inner_start = start + open.len();
    let Some(inner_end) = cur.find_from(inner_start, close) else {
        return Scan::Unclosed;
    };
    let end = inner_end + close.len();
    cur.seek(end);

    Scan::Token(Delimited {
        full: Span::new(start, end),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Iterates over every `open ... close` token in `text`, in document order.
///
/// Scanning stops at the first unclosed opener: a closer after any later
/// opener would also have closed that one, so nothing further can match.
pub fn scan_delimited<'a>(
    text: &'a str,
    open: &'a [u8],
    close: &'a [u8],
) -> impl Iterator<Item = Delimited> + 'a {
    let mut cur = Cursor::new(text);

    std::iter::from_fn(move || {
        while !cur.eof() {
            match try_scan_delimited(&mut cur, open, close) {
                Scan::Token(tok) => return Some(tok),
                Scan::Unclosed => {
                    cur.seek(text.len());
                    return None;
                }
                Scan::NotAtOpen => {
                    cur.bump();
                }
            }
        }
        None
    })
}
