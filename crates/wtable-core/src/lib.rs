//! Core of the file table widget.
//!
//! This crate holds everything that does not touch the DOM:
//! - [`FileRecord`], [`FileCollection`] - the sorted, duplicate-free file set
//! - [`TransferCoordinator`], [`WidgetScope`] - drag-and-drop moves between widgets
//! - [`WidgetInstance`], [`Renderer`] - event reactions for one widget
//! - [`FileRow`] - display model handed to the view layer

mod collection;
pub mod error;
pub mod format;
mod record;
mod scope;
mod transfer;
mod view;
mod widget;

pub use collection::{FileCollection, SortKey};
pub use error::{Result, WidgetError};
pub use record::{FileInfo, FileRecord};
pub use scope::WidgetScope;
pub use transfer::{DragOutcome, TransferCoordinator, TransferState, WidgetId};
pub use view::FileRow;
pub use widget::{DropData, DropOutcome, Renderer, WidgetInstance};
