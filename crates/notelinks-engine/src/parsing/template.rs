use std::collections::{HashMap, HashSet};

use super::{kinds::TemplateVar, span::Span, token::scan_delimited};

/// A `{{name}}` placeholder found in template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    /// Trimmed variable name. Never empty.
    pub name: String,
    /// Full span including `{{` and `}}`.
    pub span: Span,
}

/// Scans `text` for `{{name}}` placeholders in document order.
///
/// Uses the same pairing rules as wiki-links: an unclosed `{{` is literal
/// text and a blank name is skipped.
pub fn scan_variables(text: &str) -> Vec<TemplateVariable> {
    scan_delimited(text, TemplateVar::OPEN, TemplateVar::CLOSE)
        .filter_map(|tok| {
            let name = tok.inner.slice(text)?.trim();
            (!name.is_empty()).then(|| TemplateVariable {
                name: name.to_string(),
                span: tok.full,
            })
        })
        .collect()
}

/// Returns the distinct variable names in `text`, in order of first use.
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    scan_variables(text)
        .into_iter()
        .filter(|v| seen.insert(v.name.clone()))
        .map(|v| v.name)
        .collect()
}

/// Replaces every `{{name}}` whose name has a value; unknown placeholders are
/// left exactly as written so the caller can prompt for them later.
pub fn substitute(text: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for var in scan_variables(text) {
        let Some(value) = values.get(&var.name) else {
            continue;
        };
        out.push_str(&text[last..var.span.start]);
        out.push_str(value);
        last = var.span.end;
    }

    out.push_str(&text[last..]);
    out
}
