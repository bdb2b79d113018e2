//! A single file table: its collection plus the event reactions that drive
//! the shared transfer coordinator and the renderer.

use std::mem;
use std::rc::Rc;

use crate::collection::{FileCollection, SortKey};
use crate::error::{Result, WidgetError};
use crate::record::FileRecord;
use crate::scope::WidgetScope;
use crate::transfer::{DragOutcome, WidgetId};

/// Draws a widget's rows.
///
/// The widget calls `clear` followed by `render` after every change.
pub trait Renderer<H> {
    /// Draws `records` in order.
    fn render(&mut self, records: &[FileRecord<H>]);

    /// Removes every drawn row.
    fn clear(&mut self);
}

/// Data carried by a drop event.
#[derive(Clone, Debug)]
pub struct DropData<H> {
    /// Label written by the widget that started the drag, if any.
    pub label: Option<String>,
    /// Whether the drag was started by a file table row.
    pub carries_record: bool,
    /// File dragged in from outside the page.
    pub external: Option<FileRecord<H>>,
}

impl<H> DropData<H> {
    /// Drop of a row dragged from the widget labelled `label`.
    pub fn from_widget(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            carries_record: true,
            external: None,
        }
    }

    /// Drop of a native file.
    pub fn external(record: FileRecord<H>) -> Self {
        Self {
            label: None,
            carries_record: false,
            external: Some(record),
        }
    }
}

/// How a widget handled a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The row was dropped back onto the widget it came from.
    SelfDrop,
    /// A native file was added.
    Added,
    /// The in-flight record was claimed from another widget.
    Claimed,
    /// Nothing droppable was carried.
    Ignored,
}

/// Direction toggling for header clicks.
///
/// Selecting a key other than the last clicked one sorts ascending; clicking
/// the same key again flips the direction.
#[derive(Clone, Copy, Debug, Default)]
struct SortToggle {
    last: Option<SortKey>,
    ascending: bool,
}

impl SortToggle {
    fn click(&mut self, key: SortKey) -> bool {
        if self.last == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.last = Some(key);
            self.ascending = true;
        }
        self.ascending
    }
}

// =============================================================================
// WidgetInstance
// =============================================================================

pub struct WidgetInstance<H, R> {
    id: WidgetId,
    label: String,
    scope: Rc<WidgetScope<H>>,
    collection: FileCollection<H>,
    renderer: R,
    toggle: SortToggle,
    /// Set when the pointer left this widget during a drag.
    pending_remove: bool,
}

impl<H: Clone, R: Renderer<H>> WidgetInstance<H, R> {
    /// Creates a widget in `scope`, pre-populated with `seed`.
    ///
    /// Seed records go through the usual duplicate check, so a seed that
    /// repeats a file yields a single row. The initial rows are rendered
    /// before returning.
    pub fn new(
        scope: Rc<WidgetScope<H>>,
        renderer: R,
        seed: impl IntoIterator<Item = FileRecord<H>>,
    ) -> Self {
        let id = scope.allocate_id();
        let label = scope.label_for(id);
        let mut collection = FileCollection::new();
        for record in seed {
            let _ = collection.try_add(record);
        }

        let mut widget = Self {
            id,
            label,
            scope,
            collection,
            renderer,
            toggle: SortToggle::default(),
            pending_remove: false,
        };
        widget.renderer.render(widget.collection.snapshot());
        widget
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Label this widget writes into drag data.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn collection(&self) -> &FileCollection<H> {
        &self.collection
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Whether the pointer was last seen outside this widget.
    pub fn pending_remove(&self) -> bool {
        self.pending_remove
    }

    fn redraw(&mut self) {
        self.renderer.clear();
        self.renderer.render(self.collection.snapshot());
    }

    /// Adds a picked file.
    pub fn add_file(&mut self, record: FileRecord<H>) -> Result<()> {
        self.collection.try_add(record)?;
        self.redraw();
        Ok(())
    }

    /// Handles a click on the header for `key`; returns the new direction.
    pub fn sort_by(&mut self, key: SortKey) -> bool {
        let ascending = self.toggle.click(key);
        self.collection.set_sort(key, ascending);
        self.redraw();
        ascending
    }

    /// Ordered copy of the current files, for seeding another widget.
    pub fn serialize(&self) -> Vec<FileRecord<H>> {
        self.collection.snapshot().to_vec()
    }

    // -------------------------------------------------------------------------
    // Drag and drop
    // -------------------------------------------------------------------------

    /// Picks up the row at `row`; returns the label to put in the drag data.
    pub fn drag_start(&mut self, row: usize) -> Result<String> {
        let record = self
            .collection
            .get(row)
            .cloned()
            .ok_or(WidgetError::IndexOutOfRange {
                index: row,
                len: self.collection.len(),
            })?;
        self.scope.coordinator().begin_drag(self.id, record)?;
        self.pending_remove = false;
        Ok(self.label.clone())
    }

    /// The pointer is over this widget.
    pub fn drag_over(&mut self) {
        self.pending_remove = false;
    }

    /// The pointer left this widget.
    pub fn drag_leave(&mut self) {
        self.pending_remove = true;
    }

    /// Something was dropped on this widget.
    pub fn receive_drop(&mut self, data: DropData<H>) -> Result<DropOutcome> {
        if data.label.as_deref() == Some(self.label.as_str()) {
            // Dropping a row back onto its own list never moves it.
            let _ = self.scope.coordinator().decline();
            return Ok(DropOutcome::SelfDrop);
        }

        if let Some(record) = data.external {
            self.add_file(record)?;
            return Ok(DropOutcome::Added);
        }

        if !data.carries_record {
            return Ok(DropOutcome::Ignored);
        }

        self.scope
            .coordinator()
            .attempt_claim(self.id, &mut self.collection)?;
        self.redraw();
        Ok(DropOutcome::Claimed)
    }

    /// The drag this widget started has ended, wherever it landed.
    pub fn drag_end(&mut self) -> Result<DragOutcome<H>> {
        let pointer_left = mem::take(&mut self.pending_remove);
        let outcome =
            self.scope
                .coordinator()
                .end_drag(self.id, &mut self.collection, pointer_left)?;
        if !matches!(outcome, DragOutcome::Kept) {
            self.redraw();
        }
        Ok(outcome)
    }
}
