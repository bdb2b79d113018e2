//! Page bootstrap.
//!
//! Finds every file table container on the page, builds one core widget per
//! container inside a shared [`WidgetScope`], and mounts a [`FileTable`] into
//! each. Widgets live for the lifetime of the page.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{File, HtmlElement};
use wtable_core::{FileRecord, FileRow, WidgetInstance, WidgetScope};

use crate::components::FileTable;
use crate::config::{CONTAINER_CLASS, SEED_ATTRIBUTE};
use crate::render::SignalRenderer;
use crate::utils::dom;

/// Core widget as used on the page.
pub type Widget = WidgetInstance<File, SignalRenderer>;

/// Widget handle shared by the component event handlers.
///
/// Stored in local (non-`Send`) storage: widgets hold DOM handles and only
/// ever run on the browser's main thread.
pub type WidgetCell = StoredValue<Widget, LocalStorage>;

/// Mounts a file table into every container with [`CONTAINER_CLASS`].
pub fn mount_widgets() {
    let containers = dom::elements_by_class(CONTAINER_CLASS);
    let scope = WidgetScope::with_nonce(dom::random_nonce());
    let mut widgets: Vec<WidgetCell> = Vec::with_capacity(containers.len());

    for container in containers {
        let seed = seed_for(&container, &widgets);
        let rows = RwSignal::new(Vec::<FileRow>::new());
        let renderer = SignalRenderer::new(rows, container.clone());
        let widget = StoredValue::new_local(WidgetInstance::new(
            Rc::clone(&scope),
            renderer,
            seed,
        ));
        widgets.push(widget);

        mount_to(container, move || view! { <FileTable widget=widget rows=rows /> }).forget();
    }

    web_sys::console::log_1(&format!("file table: {} widget(s) mounted", widgets.len()).into());
}

/// Files to pre-populate `container` with.
///
/// Only widgets mounted earlier on the page can be named as a seed source.
fn seed_for(container: &HtmlElement, widgets: &[WidgetCell]) -> Vec<FileRecord<File>> {
    let Some(value) = container.get_attribute(SEED_ATTRIBUTE) else {
        return Vec::new();
    };
    match seed_index(&value, widgets.len()) {
        Some(index) => widgets[index].with_value(|w| w.serialize()),
        None => {
            web_sys::console::warn_1(
                &format!("file table: ignoring {SEED_ATTRIBUTE}=\"{value}\"").into(),
            );
            Vec::new()
        }
    }
}

/// Parse a seed attribute value into the index of an already mounted widget.
fn seed_index(value: &str, mounted: usize) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&index| index < mounted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_index() {
        assert_eq!(seed_index("0", 1), Some(0));
        assert_eq!(seed_index(" 1 ", 2), Some(1));
        assert_eq!(seed_index("1", 1), None);
        assert_eq!(seed_index("-1", 3), None);
        assert_eq!(seed_index("first", 3), None);
        assert_eq!(seed_index("", 3), None);
    }
}
