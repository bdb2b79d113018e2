//! Renderer backing a file table with Leptos signals.
//!
//! The core widget asks for `clear` + `render`; this renderer turns records
//! into [`FileRow`] view models held in a signal, which the `FileTable`
//! component displays, and mirrors the list as JSON onto the container.

use leptos::prelude::*;
use web_sys::{File, HtmlElement};
use wtable_core::{FileInfo, FileRecord, FileRow, Renderer};

use crate::config::FILES_ATTRIBUTE;

pub struct SignalRenderer {
    rows: RwSignal<Vec<FileRow>>,
    container: HtmlElement,
}

impl SignalRenderer {
    pub fn new(rows: RwSignal<Vec<FileRow>>, container: HtmlElement) -> Self {
        Self { rows, container }
    }
}

impl Renderer<File> for SignalRenderer {
    fn render(&mut self, records: &[FileRecord<File>]) {
        self.rows.set(FileRow::from_records(records));
        match files_json(records) {
            Ok(json) => {
                let _ = self.container.set_attribute(FILES_ATTRIBUTE, &json);
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("file table: export failed: {err}").into());
            }
        }
    }

    fn clear(&mut self) {
        self.rows.set(Vec::new());
    }
}

/// JSON array of `{name, size, lastModified}` for the given records.
pub fn files_json<H>(records: &[FileRecord<H>]) -> serde_json::Result<String> {
    let infos: Vec<FileInfo> = records.iter().map(FileRecord::info).collect();
    serde_json::to_string(&infos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_json() {
        let records = vec![
            FileRecord::detached("a.txt", 10, 100),
            FileRecord::detached("b.txt", 20, 200),
        ];
        assert_eq!(
            files_json(&records).unwrap(),
            r#"[{"name":"a.txt","size":10,"lastModified":100},{"name":"b.txt","size":20,"lastModified":200}]"#
        );
    }

    #[test]
    fn test_files_json_empty() {
        let records: Vec<FileRecord> = Vec::new();
        assert_eq!(files_json(&records).unwrap(), "[]");
    }
}
