use anyhow::Result;
use notelinks_config::{Config, DEFAULT_USER_ID};
use notelinks_engine::{
    ClassifiedLink, FsNoteStore, LinkStatus, NoteFile, UserId, classify, io, parse_links,
    resolve_existence, unique_titles,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

/// Links of one note, classified against the vault.
struct NoteReport {
    note: NoteFile,
    links: Vec<ClassifiedLink>,
}

struct Report {
    notes: Vec<NoteReport>,
    /// Notes that could not be read, with the reason.
    unreadable: Vec<(NoteFile, String)>,
}

impl Report {
    /// Parse every note under `notes_path` and resolve all links in one pass.
    fn build(notes_path: &Path, user: &UserId) -> Result<Self> {
        let files = io::list_notes(notes_path)?;

        let mut parsed = Vec::with_capacity(files.len());
        let mut unreadable = Vec::new();
        for note in files {
            match io::read_file(&note.relative_path, notes_path) {
                Ok(content) => {
                    let links = parse_links(&content);
                    parsed.push((note, links));
                }
                Err(e) => {
                    log::warn!("Skipping unreadable note {}: {e}", note.relative_path);
                    unreadable.push((note, e.to_string()));
                }
            }
        }

        let titles = unique_titles(parsed.iter().flat_map(|(_, links)| links));
        let store = FsNoteStore::new(notes_path);
        let resolution = resolve_existence(&titles, user, &store)?;

        let notes = parsed
            .into_iter()
            .map(|(note, links)| NoteReport {
                links: classify(&links, &resolution),
                note,
            })
            .collect();

        Ok(Self { notes, unreadable })
    }

    fn link_count(&self) -> usize {
        self.notes.iter().map(|n| n.links.len()).sum()
    }

    fn broken_count(&self) -> usize {
        self.notes
            .iter()
            .flat_map(|n| &n.links)
            .filter(|l| l.status == LinkStatus::Broken)
            .count()
    }

    fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for report in self.notes.iter().filter(|n| !n.links.is_empty()) {
            lines.push(report.note.relative_path.to_string());
            for link in &report.links {
                let marker = match link.status {
                    LinkStatus::Resolved => "ok    ",
                    LinkStatus::Broken => "BROKEN",
                };
                let occ = &link.occurrence;
                if occ.has_alias() {
                    lines.push(format!(
                        "  {marker} {} (shown as {:?})",
                        occ.target_title, occ.display_text
                    ));
                } else {
                    lines.push(format!("  {marker} {}", occ.target_title));
                }
            }
        }

        for (note, reason) in &self.unreadable {
            lines.push(format!("UNREADABLE {}: {reason}", note.relative_path));
        }

        let mut summary = format!(
            "{} notes, {} links, {} broken",
            self.notes.len(),
            self.link_count(),
            self.broken_count()
        );
        if !self.unreadable.is_empty() {
            summary.push_str(&format!(", {} unreadable", self.unreadable.len()));
        }
        lines.push(summary);
        lines
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Determine notes path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
    };

    let notes_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        notes_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match &config {
            Some(config) => {
                notes_path = config.notes_path.clone();
                from_config = true;
            }
            None => {
                eprintln!("Error: No notes path provided and no usable config file found");
                eprintln!("Usage: {} <notes-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [notes-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let user = UserId::new(
        config
            .as_ref()
            .map_or(DEFAULT_USER_ID, |c| c.user_id())
            .to_string(),
    );
    log::info!("Checking links in {} as {user}", notes_path.display());

    let report = Report::build(&notes_path, &user)?;
    for line in report.render() {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn report_lists_links_and_summary() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Home.md"), "[[Inbox]] [[Later|someday]]").unwrap();
        std::fs::write(dir.path().join("Inbox.md"), "nothing linked").unwrap();

        let report = Report::build(dir.path(), &UserId::new("me")).unwrap();

        assert_eq!(
            report.render(),
            vec![
                "Home.md".to_string(),
                "  ok     Inbox".to_string(),
                "  BROKEN Later (shown as \"someday\")".to_string(),
                "2 notes, 2 links, 1 broken".to_string(),
            ]
        );
    }

    #[test]
    fn empty_vault_reports_zero() {
        let dir = TempDir::new().unwrap();
        let report = Report::build(dir.path(), &UserId::new("me")).unwrap();
        assert_eq!(report.render(), vec!["0 notes, 0 links, 0 broken".to_string()]);
    }

    #[test]
    fn unreadable_note_does_not_stop_the_report() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Home.md"), "[[Missing]]").unwrap();
        std::fs::write(dir.path().join("Bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let report = Report::build(dir.path(), &UserId::new("me")).unwrap();
        let lines = report.render();

        assert_eq!(lines[0], "Home.md");
        assert_eq!(lines[1], "  BROKEN Missing");
        assert!(lines[2].starts_with("UNREADABLE Bad.md: "), "{lines:?}");
        assert_eq!(lines[3], "1 notes, 1 links, 1 broken, 1 unreadable");
        assert_eq!(lines.len(), 4);
    }
}
