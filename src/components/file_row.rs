//! A single draggable file row.

use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::DragEvent;
use wtable_core::FileRow;

use crate::app::WidgetCell;
use crate::components::icons as ic;
use crate::config::DRAG_EFFECT;
use crate::utils::{dom, notify};

stylance::import_crate_style!(css, "src/components/file_table.module.css");

#[component]
pub fn FileRowItem(row: FileRow, widget: WidgetCell) -> impl IntoView {
    let index = row.index;

    let on_dragstart = move |ev: DragEvent| {
        match notify::report_result(widget.try_update_value(|w| w.drag_start(index))) {
            Some(label) => dom::write_drag_data(&ev, &label, DRAG_EFFECT),
            // Another transfer is still unresolved
            None => ev.prevent_default(),
        }
    };

    let aria_label = format!("File: {}", row.name);

    view! {
        <div
            class=css::file
            role="row"
            draggable="true"
            aria-label=aria_label
            on:dragstart=on_dragstart
        >
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <span class=css::name>{row.name}</span>
            <span class=css::size>{row.size}</span>
            <span class=css::modified>{row.modified}</span>
        </div>
    }
}
