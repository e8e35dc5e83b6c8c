use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::normalize_separators;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub r#type: EntryKind,
    pub path: String,
}

impl Entry {
    /// Build the entry for `name` inside `parent`. The path is the join of the
    /// two with `/` separators.
    pub fn new<P: AsRef<Path>>(parent: P, name: &str, kind: EntryKind) -> Self {
        Self {
            name: name.to_owned(),
            r#type: kind,
            path: normalize_separators(parent.as_ref().join(name)),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.r#type == EntryKind::Dir
    }
}
