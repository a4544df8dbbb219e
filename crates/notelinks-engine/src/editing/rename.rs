use log::debug;

use crate::parsing::{kinds::WikiLink, parse_links};

/// Points every link to `old_title` at `new_title` instead.
///
/// Links written with an alias keep it (`[[Old|shown]]` becomes
/// `[[New|shown]]`); bare links become `[[New]]`. Text outside the rewritten
/// links is untouched. Returns the new text and how many links changed.
pub fn rename_links(text: &str, old_title: &str, new_title: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut changed = 0;

    for occ in parse_links(text) {
        if occ.target_title != old_title {
            continue;
        }
        let Some(token) = occ.span.slice(text) else {
            continue;
        };

        let alias = token
            .contains(WikiLink::ALIAS)
            .then_some(occ.display_text.as_str());

        out.push_str(&text[last..occ.start()]);
        out.push_str(&WikiLink::render(new_title, alias));
        last = occ.end();
        changed += 1;
    }

    out.push_str(&text[last..]);
    if changed > 0 {
        debug!("Renamed {changed} links from {old_title:?} to {new_title:?}");
    }
    (out, changed)
}
