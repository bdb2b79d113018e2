use serde::{Deserialize, Serialize};

// =============================================================================
// FileRecord
// =============================================================================

/// One selected file.
///
/// Two records are the same file when name, size and modification time all
/// match. The content handle never takes part in comparisons, so a file picked
/// twice from disk is still a duplicate even though the platform hands out two
/// different handles.
#[derive(Clone, Debug)]
pub struct FileRecord<H = ()> {
    name: String,
    size: u64,
    last_modified: i64,
    handle: H,
}

impl<H> FileRecord<H> {
    pub fn new(name: impl Into<String>, size: u64, last_modified: i64, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last modification time in milliseconds since the Unix epoch.
    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    /// Opaque platform handle to the file content.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Check whether both records describe the same file.
    pub fn same_file<G>(&self, other: &FileRecord<G>) -> bool {
        self.name == other.name
            && self.size == other.size
            && self.last_modified == other.last_modified
    }

    /// Handle-free description used for JSON export.
    pub fn info(&self) -> FileInfo {
        FileInfo {
            name: self.name.clone(),
            size: self.size,
            last_modified: self.last_modified,
        }
    }
}

impl FileRecord {
    /// Create a record without a content handle.
    pub fn detached(name: impl Into<String>, size: u64, last_modified: i64) -> Self {
        Self::new(name, size, last_modified, ())
    }
}

impl<H> PartialEq for FileRecord<H> {
    fn eq(&self, other: &Self) -> bool {
        self.same_file(other)
    }
}

impl<H> Eq for FileRecord<H> {}

// =============================================================================
// FileInfo
// =============================================================================

/// Serializable shape of a [`FileRecord`] without its content handle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub last_modified: i64,
}

impl From<FileInfo> for FileRecord {
    fn from(info: FileInfo) -> Self {
        FileRecord::detached(info.name, info.size, info.last_modified)
    }
}
