//! File type filtering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Type code the site uses for stickers.
pub const STICKER_TYPE: u32 = 100;

/// Set of file type codes that are never downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileTypeFilter {
    ignored: BTreeSet<u32>,
}

impl FileTypeFilter {
    /// A filter that lets every file through.
    pub fn none() -> Self {
        Self {
            ignored: BTreeSet::new(),
        }
    }

    pub fn is_ignored(&self, type_code: u32) -> bool {
        self.ignored.contains(&type_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ignored.iter().copied()
    }
}

impl Default for FileTypeFilter {
    fn default() -> Self {
        [STICKER_TYPE].into_iter().collect()
    }
}

impl FromIterator<u32> for FileTypeFilter {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ignored: iter.into_iter().collect(),
        }
    }
}
