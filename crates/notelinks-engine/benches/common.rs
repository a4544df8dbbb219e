// Shared by several bench binaries; each uses a subset.
#![allow(dead_code)]

/// Generate note text with `links` wiki-links mixed into prose.
pub fn generate_note_content(links: usize) -> String {
    let mut content = String::from("# Daily note\n\n");
    for i in 0..links {
        match i % 4 {
            0 => content.push_str(&format!("Met about [[Note {i}]] today. ")),
            1 => content.push_str(&format!("- follow up on [[Note {i}|item {i}]]\n")),
            2 => content.push_str("An unfinished [[thought and some more prose. "),
            _ => content.push_str(&format!("See [[ Note {i} ]] and [[ ]] later.\n")),
        }
    }
    content
}

/// Generate template text with `vars` distinct placeholders.
pub fn generate_template(vars: usize) -> String {
    (0..vars)
        .map(|i| format!("Field {i}: {{{{var{i}}}}}\n"))
        .collect()
}
