//! DOM and Web API utility functions.
//!
//! Provides safe access to browser APIs; lookups that can fail return
//! `Option` or an empty collection instead of panicking.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlElement, Window};
use wtable_core::{DropData, FileRecord};

use crate::config::drag_keys;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// All elements carrying `class`, in document order.
pub fn elements_by_class(class: &str) -> Vec<HtmlElement> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Random token distinguishing this page's drag labels from other pages'.
pub fn random_nonce() -> String {
    format!("{:x}", (js_sys::Math::random() * 4_294_967_296.0) as u64)
}

// =============================================================================
// Files and Drag Data
// =============================================================================

/// Wrap a platform file as a file record.
pub fn file_record(file: File) -> FileRecord<File> {
    let name = file.name();
    let size = file.size().max(0.0) as u64;
    let last_modified = file.last_modified() as i64;
    FileRecord::new(name, size, last_modified, file)
}

/// Write the drag data for a row picked up from widget `label`.
pub fn write_drag_data(event: &DragEvent, label: &str, effect: &str) {
    let Some(transfer) = event.data_transfer() else {
        return;
    };
    let _ = transfer.set_data(drag_keys::FILE, "true");
    let _ = transfer.set_data(drag_keys::LABEL, label);
    transfer.set_effect_allowed(effect);
}

/// Read what a drop event carries.
pub fn read_drop_data(event: &DragEvent) -> DropData<File> {
    let Some(transfer) = event.data_transfer() else {
        return DropData {
            label: None,
            carries_record: false,
            external: None,
        };
    };

    let label = transfer
        .get_data(drag_keys::LABEL)
        .ok()
        .filter(|l| !l.is_empty());
    let carries_record = transfer
        .get_data(drag_keys::FILE)
        .is_ok_and(|flag| !flag.is_empty());
    let external = transfer
        .files()
        .and_then(|files| files.get(0))
        .map(file_record);

    DropData {
        label,
        carries_record,
        external,
    }
}
