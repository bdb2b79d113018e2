//! Ordered, duplicate-free file set.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, WidgetError};
use crate::record::FileRecord;

/// Field a [`FileCollection`] is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    LastModified,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::LastModified];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::LastModified => "lastModified",
        }
    }

    /// Plain field comparison on this key.
    pub fn compare<H>(self, a: &FileRecord<H>, b: &FileRecord<H>) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Size => a.size().cmp(&b.size()),
            Self::LastModified => a.last_modified().cmp(&b.last_modified()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FileCollection
// =============================================================================

/// Files owned by one widget.
///
/// Items are kept sorted by `(sort_key, ascending)` after every mutation and
/// never contain two records describing the same file.
#[derive(Clone, Debug)]
pub struct FileCollection<H = ()> {
    items: Vec<FileRecord<H>>,
    sort_key: SortKey,
    ascending: bool,
}

impl<H> FileCollection<H> {
    /// Creates an empty collection sorted by name, ascending.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sort_key: SortKey::default(),
            ascending: true,
        }
    }

    /// Inserts `record` unless an equal one is present, then re-sorts.
    pub fn try_add(&mut self, record: FileRecord<H>) -> Result<()> {
        if self.contains(&record) {
            return Err(WidgetError::DuplicateFile {
                name: record.name().to_string(),
            });
        }
        self.items.push(record);
        self.resort();
        Ok(())
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> Result<FileRecord<H>> {
        if index >= self.items.len() {
            return Err(WidgetError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Changes the ordering and re-sorts in place.
    ///
    /// The sort is stable: records with equal keys keep their current
    /// relative order, in either direction.
    pub fn set_sort(&mut self, key: SortKey, ascending: bool) {
        self.sort_key = key;
        self.ascending = ascending;
        self.resort();
    }

    fn resort(&mut self) {
        let key = self.sort_key;
        if self.ascending {
            self.items.sort_by(|a, b| key.compare(a, b));
        } else {
            self.items.sort_by(|a, b| key.compare(b, a));
        }
    }

    /// Current records in display order.
    pub fn snapshot(&self) -> &[FileRecord<H>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&FileRecord<H>> {
        self.items.get(index)
    }

    /// Position of the record describing the same file, if any.
    pub fn position<G>(&self, record: &FileRecord<G>) -> Option<usize> {
        self.items.iter().position(|item| item.same_file(record))
    }

    pub fn contains<G>(&self, record: &FileRecord<G>) -> bool {
        self.position(record).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }
}

impl<H> Default for FileCollection<H> {
    fn default() -> Self {
        Self::new()
    }
}
