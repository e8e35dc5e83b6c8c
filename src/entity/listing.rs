use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Entry, EntryKind};

/// Name of the listing file written into every indexed directory.
pub const INDEX_FILE_NAME: &str = "index.json";

/// The direct children of one directory, sub-directories first.
///
/// Serializes as a bare JSON array of entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryListing {
    entries: Vec<Entry>,
}

impl DirectoryListing {
    /// Assemble a listing from children already split by kind. Each group
    /// keeps the order it was read in; a file named [`INDEX_FILE_NAME`] is
    /// dropped so a previous run's output never lists itself.
    pub fn from_children<P, D, F>(dir: P, dirs: D, files: F) -> Self
    where
        P: AsRef<Path>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let dir = dir.as_ref();
        let mut entries: Vec<Entry> = dirs
            .into_iter()
            .map(|name| Entry::new(dir, name.as_ref(), EntryKind::Dir))
            .collect();
        entries.extend(
            files
                .into_iter()
                .filter(|name| name.as_ref() != INDEX_FILE_NAME)
                .map(|name| Entry::new(dir, name.as_ref(), EntryKind::File)),
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dir_count(&self) -> usize {
        self.entries().iter().filter(|e| e.is_dir()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NONE: [&str; 0] = [];

    #[test]
    fn directories_come_before_files() {
        let listing =
            DirectoryListing::from_children("extensions", ["b", "a"], ["z.js", "readme.md"]);
        let names: Vec<_> = listing.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "z.js", "readme.md"]);
        assert_eq!(listing.dir_count(), 2);
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn index_file_is_not_listed() {
        let listing = DirectoryListing::from_children(
            "extensions/Lily",
            NONE,
            ["index.json", "Cast.js"],
        );
        assert_eq!(
            listing.entries(),
            &[Entry::new("extensions/Lily", "Cast.js", EntryKind::File)]
        );
    }

    #[test]
    fn directory_named_index_json_is_still_listed() {
        let listing = DirectoryListing::from_children("extensions", ["index.json"], NONE);
        assert_eq!(listing.len(), 1);
        assert!(listing.entries()[0].is_dir());
    }

    #[test]
    fn serializes_as_pretty_array() {
        let listing = DirectoryListing::from_children("extensions", ["a"], ["readme.md"]);
        let expected = r#"[
  {
    "name": "a",
    "type": "dir",
    "path": "extensions/a"
  },
  {
    "name": "readme.md",
    "type": "file",
    "path": "extensions/readme.md"
  }
]"#;
        assert_eq!(serde_json::to_string_pretty(&listing).unwrap(), expected);
    }

    #[test]
    fn empty_listing_is_empty_array() {
        let listing = DirectoryListing::from_children("extensions/a", NONE, NONE);
        assert!(listing.is_empty());
        assert_eq!(serde_json::to_string_pretty(&listing).unwrap(), "[]");
    }
}
