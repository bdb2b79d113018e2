//! UI components built with Leptos.
//!
//! - [`FileTable`] - Sortable file list with picker and drag-and-drop
//! - [`FileRowItem`] - A single draggable row
//! - [`icons`] - Centralized icon definitions (change theme here)

mod file_row;
mod file_table;
pub mod icons;

pub use file_row::FileRowItem;
pub use file_table::FileTable;
