use super::{
    kinds::WikiLink,
    span::Span,
    token::{Delimited, scan_delimited},
};

/// One parsed `[[Target]]` or `[[Target|Alias]]` token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkOccurrence {
    /// The referenced note title, trimmed. Never empty.
    pub target_title: String,
    /// The alias if present (trimmed, possibly empty), else the target title.
    pub display_text: String,
    /// Full span of the token including `[[` and `]]`.
    pub span: Span,
}

impl LinkOccurrence {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// True if the link renders as something other than its target title.
    pub fn has_alias(&self) -> bool {
        self.display_text != self.target_title
    }
}

/// Parses every wiki-link in `text`, in document order.
///
/// Malformed markup is never an error:
/// - an unclosed `[[` is literal text, as is everything after it, since no
///   later `[[` can have a closing `]]` either
/// - a link whose trimmed target is empty (`[[ ]]`, `[[|alias]]`) is skipped
///   and scanning resumes after its `]]`
///
/// The first `[[` always pairs with the next `]]`, so `[[A[[B]]` is a single
/// link to `A[[B`. The body is split on the first `|` only.
pub fn parse_links(text: &str) -> Vec<LinkOccurrence> {
    scan_delimited(text, WikiLink::OPEN, WikiLink::CLOSE)
        .filter_map(|tok| occurrence_from_token(text, tok))
        .collect()
}

fn occurrence_from_token(text: &str, tok: Delimited) -> Option<LinkOccurrence> {
    let body = tok.inner.slice(text)?;

    let (target, display) = match body.split_once(WikiLink::ALIAS) {
        Some((target, alias)) => (target.trim(), alias.trim()),
        None => (body.trim(), body.trim()),
    };

    if target.is_empty() {
        return None;
    }

    Some(LinkOccurrence {
        target_title: target.to_string(),
        display_text: display.to_string(),
        span: tok.full,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn link(target: &str, display: &str, start: usize, end: usize) -> LinkOccurrence {
        LinkOccurrence {
            target_title: target.to_string(),
            display_text: display.to_string(),
            span: Span::new(start, end),
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::plain("no links here")]
    #[case::unclosed("[[Unclosed")]
    #[case::blank_target("[[ ]]")]
    #[case::empty_body("[[]]")]
    #[case::alias_without_target("[[|Alias]]")]
    #[case::only_openers("[[[[[[")]
    #[case::single_brackets("[not] a [link]")]
    #[case::close_before_open("]] then [[")]
    fn yields_no_links(#[case] text: &str) {
        assert!(parse_links(text).is_empty());
    }

    #[test]
    fn simple_link_spans_whole_token() {
        let text = "See [[Project Plan]] now";
        let links = parse_links(text);
        assert_eq!(links, vec![link("Project Plan", "Project Plan", 4, 20)]);
        assert_eq!(links[0].span.slice(text), Some("[[Project Plan]]"));
    }

    #[test]
    fn aliased_links_in_document_order() {
        let links = parse_links("[[A|Alpha]] and [[B|Beta]]");
        assert_eq!(
            links,
            vec![link("A", "Alpha", 0, 11), link("B", "Beta", 16, 26)]
        );
        assert!(links.iter().all(LinkOccurrence::has_alias));
    }

    #[test]
    fn target_and_alias_are_trimmed() {
        let links = parse_links("[[  Daily Log  |  today  ]]");
        assert_eq!(links, vec![link("Daily Log", "today", 0, 27)]);
    }

    #[test]
    fn empty_alias_is_preserved() {
        let links = parse_links("[[Title|]]");
        assert_eq!(links, vec![link("Title", "", 0, 10)]);
    }

    #[test]
    fn only_first_pipe_splits() {
        let links = parse_links("[[a|b|c]]");
        assert_eq!(links, vec![link("a", "b|c", 0, 9)]);
    }

    #[test]
    fn inner_opener_belongs_to_first_link() {
        let links = parse_links("[[A[[B]]");
        assert_eq!(links, vec![link("A[[B", "A[[B", 0, 8)]);
    }

    #[test]
    fn unclosed_opener_before_valid_link() {
        // The first `[[` pairs with the only `]]`, swallowing the second opener
        let links = parse_links("[[x [[y]]");
        assert_eq!(links, vec![link("x [[y", "x [[y", 0, 9)]);
    }

    #[test]
    fn scanning_resumes_after_skipped_link() {
        let links = parse_links("[[ ]][[Real]]");
        assert_eq!(links, vec![link("Real", "Real", 5, 13)]);
    }

    #[test]
    fn triple_bracket_pairs_leftmost_opener() {
        let links = parse_links("[[[a]]]");
        assert_eq!(links, vec![link("[a", "[a", 0, 6)]);
    }

    #[test]
    fn adjacent_links() {
        let links = parse_links("[[a]][[b]]");
        assert_eq!(links, vec![link("a", "a", 0, 5), link("b", "b", 5, 10)]);
    }

    #[test]
    fn unicode_offsets_are_bytes() {
        let text = "café [[Über uns]] ✓";
        let links = parse_links(text);
        assert_eq!(links.len(), 1);
        // "café " is 6 bytes
        assert_eq!(links[0].start(), 6);
        assert_eq!(links[0].span.slice(text), Some("[[Über uns]]"));
        assert_eq!(links[0].target_title, "Über uns");
    }

    #[test]
    fn multiline_body_is_allowed() {
        let links = parse_links("[[line one\nline two]]");
        assert_eq!(links[0].target_title, "line one\nline two");
    }

    #[test]
    fn text_after_unclosed_opener_is_literal() {
        let links = parse_links("[[a]] [[open [b] [[ c ]");
        assert_eq!(links, vec![link("a", "a", 0, 5)]);
    }

    #[rstest]
    #[case::brackets("[")]
    #[case::openers_and_text("[[x ")]
    fn large_unclosed_input_is_linear(#[case] unit: &str) {
        let text = unit.repeat(100_000);
        let started = std::time::Instant::now();

        assert!(parse_links(&text).is_empty());
        assert!(
            started.elapsed() < std::time::Duration::from_secs(1),
            "parse took {:?}",
            started.elapsed()
        );
    }

    #[rstest]
    #[case("[[a]] [[b|c]] [[ ]] [[d")]
    #[case("x[[a]]y[[b]]z[[c]]")]
    #[case("[[A[[B]] [[C]]]] [[D|E|F]]")]
    #[case("]]]][[[[x]]]]")]
    fn occurrences_are_ordered_and_disjoint(#[case] text: &str) {
        let links = parse_links(text);
        for pair in links.windows(2) {
            assert!(pair[0].end() <= pair[1].start());
        }
        for l in &links {
            assert!(l.start() < l.end());
            assert!(l.end() <= text.len());
        }
    }
}
