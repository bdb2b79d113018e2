//! File table component.
//!
//! Header with sort buttons, the file rows, and the file picker. Every
//! interaction is forwarded to the core widget; the rows come back through
//! the renderer's signal.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, MouseEvent};
use wtable_core::{DragOutcome, FileRow, SortKey};

use super::FileRowItem;
use crate::app::WidgetCell;
use crate::components::icons as ic;
use crate::config::{ADD_LABEL, columns};
use crate::utils::{dom, notify};

stylance::import_crate_style!(css, "src/components/file_table.module.css");

/// One file table mounted into a page container.
#[component]
pub fn FileTable(widget: WidgetCell, rows: RwSignal<Vec<FileRow>>) -> impl IntoView {
    // Active ordering, for the header indicators
    let sort = RwSignal::new(widget.with_value(|w| {
        let files = w.collection();
        (files.sort_key(), files.ascending())
    }));

    let on_dragover = move |ev: DragEvent| {
        // Required for the element to accept drops
        ev.prevent_default();
        widget.update_value(|w| w.drag_over());
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        widget.update_value(|w| w.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let data = dom::read_drop_data(&ev);
        notify::report_result(widget.try_update_value(|w| w.receive_drop(data)));
    };

    // Fires on the row that started the drag, wherever it was dropped
    let on_dragend = move |ev: DragEvent| {
        ev.prevent_default();
        let outcome = notify::report_result(widget.try_update_value(|w| w.drag_end()));
        if let Some(DragOutcome::Discarded(record)) = outcome {
            web_sys::console::log_1(&format!("file table: removed {}", record.name()).into());
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let record = dom::file_record(file);
            notify::report_result(widget.try_update_value(|w| w.add_file(record)));
        }
        // Reset so that picking the same file again fires `change`
        input.set_value("");
    };

    view! {
        <div
            class=css::table
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <div class=css::header role="row">
                <span class=css::headerIcon></span>
                <SortButton key=SortKey::Name label=columns::NAME widget=widget sort=sort />
                <SortButton key=SortKey::Size label=columns::SIZE widget=widget sort=sort />
                <SortButton
                    key=SortKey::LastModified
                    label=columns::MODIFIED
                    widget=widget
                    sort=sort
                />
            </div>

            <div class=css::files role="rowgroup">
                <For
                    each=move || rows.get()
                    key=|row| (row.index, row.key.clone())
                    children=move |row| {
                        view! { <FileRowItem row=row widget=widget /> }
                    }
                />
            </div>

            <label class=css::add>
                <span class=css::addIcon><Icon icon=ic::PLUS /></span>
                <span>{ADD_LABEL}</span>
                <input class=css::input type="file" on:change=on_pick />
            </label>
        </div>
    }
}

/// Column header that sorts the table by `key`.
#[component]
fn SortButton(
    key: SortKey,
    label: &'static str,
    widget: WidgetCell,
    sort: RwSignal<(SortKey, bool)>,
) -> impl IntoView {
    let on_click = move |_: MouseEvent| {
        if let Some(ascending) = widget.try_update_value(|w| w.sort_by(key)) {
            sort.set((key, ascending));
        }
    };

    let icon = move || match sort.get() {
        (active, _) if active != key => ic::SORTABLE,
        (_, true) => ic::SORT_UP,
        (_, false) => ic::SORT_DOWN,
    };

    let class = move || {
        if sort.get().0 == key {
            format!("{} {}", css::sortButton, css::sortButtonActive)
        } else {
            css::sortButton.to_string()
        }
    };

    view! {
        <button type="button" class=class data-sort=key.as_str() on:click=on_click>
            <span>{label}</span>
            <span class=css::sortIcon aria-hidden="true">
                {move || view! { <Icon icon=icon() /> }}
            </span>
        </button>
    }
}
