//! Display model for rendered rows.

use crate::format::{format_modified, format_size};
use crate::record::FileRecord;

/// One row of a file table, ready for display.
///
/// Rows carry only strings and the row position, so a view layer can hold
/// them without knowing the content handle type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    /// Position in the collection; echoed back on drag start.
    pub index: usize,
    pub name: String,
    pub size: String,
    pub modified: String,
    /// Stable identity for keyed list rendering.
    pub key: String,
}

impl FileRow {
    pub fn from_record<H>(index: usize, record: &FileRecord<H>) -> Self {
        Self {
            index,
            name: record.name().to_string(),
            size: format_size(record.size()),
            modified: format_modified(record.last_modified()),
            key: format!(
                "{}:{}:{}",
                record.name(),
                record.size(),
                record.last_modified()
            ),
        }
    }

    /// Rows for a whole collection snapshot, in order.
    pub fn from_records<H>(records: &[FileRecord<H>]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(index, record))
            .collect()
    }
}
