use crate::resolve::{LookupError, NoteStore, UserId};
use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// A markdown note discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    /// Path relative to the notes root.
    pub relative_path: RelativePathBuf,
    /// Note title: the file name without its `.md` extension.
    pub title: String,
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List every note under `notes_root` with its title, sorted by path.
pub fn list_notes(notes_root: &Path) -> Result<Vec<NoteFile>, IoError> {
    let notes: Vec<NoteFile> = scan_markdown_files(notes_root)?
        .iter()
        .filter_map(|path| {
            let title = path.file_stem()?.to_str()?.to_string();
            let relative = path.strip_prefix(notes_root).ok()?;
            let relative_path = RelativePathBuf::from_path(relative).ok()?;
            Some(NoteFile {
                relative_path,
                title,
            })
        })
        .collect();

    debug!("Found {} notes under {}", notes.len(), notes_root.display());
    Ok(notes)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Note store backed by a directory of markdown files.
///
/// Each `*.md` file anywhere below the root is a note titled by its file
/// stem. The directory belongs to one person, so the user is not consulted.
#[derive(Debug, Clone)]
pub struct FsNoteStore {
    root: PathBuf,
}

impl FsNoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl NoteStore for FsNoteStore {
    fn exists(
        &self,
        _user: &UserId,
        titles: &BTreeSet<String>,
    ) -> Result<HashMap<String, bool>, LookupError> {
        let notes = list_notes(&self.root).map_err(|e| match e {
            IoError::Io(source) => LookupError::Io(source),
            other => LookupError::Unreachable {
                reason: other.to_string(),
            },
        })?;

        let on_disk: BTreeSet<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        Ok(titles
            .iter()
            .map(|t| (t.clone(), on_disk.contains(t.as_str())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_existence;
    use crate::tests::{create_test_file, create_test_notes_dir};

    #[test]
    fn test_scan_and_load_files() {
        // Given a notes directory with markdown files
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "test1.md", "See [[test2]]");
        create_test_file(&notes_dir, "test2.md", "Back to [[test1]]");

        // When scanning for files
        let files = scan_markdown_files(notes_dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test1.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test2.md"));
    }

    #[test]
    fn test_handle_invalid_notes_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("notes directory"));
    }

    #[test]
    fn test_list_notes_nested_with_titles() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "Inbox.md", "");
        create_test_file(&notes_dir, "image.png", "fake image data");
        let sub_dir = notes_dir.path().join("projects");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("Project Plan.md"), "# Plan").unwrap();

        let notes = list_notes(notes_dir.path()).unwrap();

        assert_eq!(
            notes,
            vec![
                NoteFile {
                    relative_path: RelativePathBuf::from("Inbox.md"),
                    title: "Inbox".to_string(),
                },
                NoteFile {
                    relative_path: RelativePathBuf::from("projects/Project Plan.md"),
                    title: "Project Plan".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_validate_notes_dir() {
        let notes_dir = create_test_notes_dir();
        assert!(validate_notes_dir(notes_dir.path()).is_ok());

        let result = validate_notes_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidNotesDir(_))));
    }

    #[test]
    fn test_read_file() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "test.md", "# Test Content\n\n[[Link]]");

        let content = read_file(RelativePath::new("test.md"), notes_dir.path()).unwrap();
        assert_eq!(content, "# Test Content\n\n[[Link]]");

        let missing = read_file(RelativePath::new("nonexistent.md"), notes_dir.path());
        assert!(matches!(missing, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_fs_store_resolves_by_file_stem() {
        let notes_dir = create_test_notes_dir();
        create_test_file(&notes_dir, "Groceries.md", "- milk");

        let store = FsNoteStore::new(notes_dir.path());
        let titles: BTreeSet<String> = ["Groceries", "Gym"].map(String::from).into();
        let resolution = resolve_existence(&titles, &UserId::new("me"), &store).unwrap();

        assert_eq!(resolution.get("Groceries"), Some(true));
        assert_eq!(resolution.get("Gym"), Some(false));
    }

    #[test]
    fn test_fs_store_missing_root_is_unreachable() {
        let store = FsNoteStore::new("/this/path/does/not/exist");
        let titles: BTreeSet<String> = ["Any".to_string()].into();

        let result = resolve_existence(&titles, &UserId::new("me"), &store);
        assert!(matches!(result, Err(LookupError::Unreachable { .. })));
    }
}
