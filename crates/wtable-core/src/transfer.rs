//! Cross-widget drag-and-drop transfer state machine.
//!
//! A transfer moves exactly one record from a source widget to at most one
//! target widget. The coordinator enforces the order
//! `begin_drag` → at most one successful `attempt_claim` → `end_drag`;
//! any call arriving out of that order is rejected without touching state.

use std::fmt;
use std::mem;

use crate::collection::FileCollection;
use crate::error::{Result, WidgetError};
use crate::record::FileRecord;

/// Identifier of a widget within its scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u32);

impl WidgetId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observable phase of the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferState {
    /// No transfer in flight.
    Idle,
    /// A source picked up a record; no target has taken it yet.
    Holding,
    /// A target inserted the held record into its own collection.
    Claimed,
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Holding => write!(f, "holding"),
            Self::Claimed => write!(f, "claimed"),
        }
    }
}

/// What happened to the source's record when the drag ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome<H> {
    /// A target claimed the record; it left the source.
    Moved(FileRecord<H>),
    /// The record was released outside every widget and removed.
    Discarded(FileRecord<H>),
    /// The source keeps the record.
    Kept,
}

#[derive(Clone, Debug)]
enum Payload<H> {
    Empty,
    Holding {
        record: FileRecord<H>,
        /// A widget saw the drop and refused it (duplicate or self-drop).
        declined: bool,
    },
    Claimed {
        record: FileRecord<H>,
    },
}

// =============================================================================
// TransferCoordinator
// =============================================================================

/// Shared drag buffer for every widget in a scope.
#[derive(Clone, Debug)]
pub struct TransferCoordinator<H = ()> {
    source: Option<WidgetId>,
    payload: Payload<H>,
}

impl<H: Clone> TransferCoordinator<H> {
    pub fn new() -> Self {
        Self {
            source: None,
            payload: Payload::Empty,
        }
    }

    pub fn state(&self) -> TransferState {
        match self.payload {
            Payload::Empty => TransferState::Idle,
            Payload::Holding { .. } => TransferState::Holding,
            Payload::Claimed { .. } => TransferState::Claimed,
        }
    }

    /// Widget that started the in-flight transfer.
    pub fn source(&self) -> Option<WidgetId> {
        self.source
    }

    /// Record being moved, while a transfer is in flight.
    pub fn record(&self) -> Option<&FileRecord<H>> {
        match &self.payload {
            Payload::Empty => None,
            Payload::Holding { record, .. } | Payload::Claimed { record } => Some(record),
        }
    }

    fn reject(&self, operation: &'static str) -> WidgetError {
        WidgetError::InvalidTransferState {
            operation,
            state: self.state(),
        }
    }

    /// Picks up `record` on behalf of `source`.
    ///
    /// Only one transfer can be in flight; a second call before `end_drag`
    /// is rejected and leaves the current transfer alone.
    pub fn begin_drag(&mut self, source: WidgetId, record: FileRecord<H>) -> Result<()> {
        if self.state() != TransferState::Idle {
            return Err(self.reject("begin_drag"));
        }
        self.source = Some(source);
        self.payload = Payload::Holding {
            record,
            declined: false,
        };
        Ok(())
    }

    /// Offers the held record to `target`'s collection.
    ///
    /// On success the transfer becomes claimed and the inserted record is
    /// returned. A duplicate leaves the transfer holding but marks it
    /// declined, so the source keeps its copy when the drag ends.
    pub fn attempt_claim(
        &mut self,
        target: WidgetId,
        collection: &mut FileCollection<H>,
    ) -> Result<FileRecord<H>> {
        if self.source == Some(target) {
            return Err(self.reject("attempt_claim"));
        }
        let Payload::Holding { record, declined } = &mut self.payload else {
            return Err(self.reject("attempt_claim"));
        };

        if let Err(err) = collection.try_add(record.clone()) {
            *declined = true;
            return Err(err);
        }

        let record = record.clone();
        self.payload = Payload::Claimed {
            record: record.clone(),
        };
        Ok(record)
    }

    /// Marks the held record as refused by a widget that received the drop.
    pub fn decline(&mut self) -> Result<()> {
        match &mut self.payload {
            Payload::Holding { declined, .. } => {
                *declined = true;
                Ok(())
            }
            _ => Err(self.reject("decline")),
        }
    }

    /// Settles the transfer from the source side and resets to idle.
    ///
    /// `pointer_left` is the source widget's view of whether the pointer was
    /// last seen outside it. It only matters when nobody claimed or refused
    /// the record: in that case the record was released outside every widget
    /// and is removed from the source.
    pub fn end_drag(
        &mut self,
        source: WidgetId,
        collection: &mut FileCollection<H>,
        pointer_left: bool,
    ) -> Result<DragOutcome<H>> {
        if self.state() == TransferState::Idle || self.source != Some(source) {
            return Err(self.reject("end_drag"));
        }

        self.source = None;
        let outcome = match mem::replace(&mut self.payload, Payload::Empty) {
            Payload::Claimed { record } => match collection.position(&record) {
                Some(index) => DragOutcome::Moved(collection.remove(index)?),
                None => DragOutcome::Kept,
            },
            Payload::Holding {
                record,
                declined: false,
            } if pointer_left => match collection.position(&record) {
                Some(index) => DragOutcome::Discarded(collection.remove(index)?),
                None => DragOutcome::Kept,
            },
            Payload::Holding { .. } | Payload::Empty => DragOutcome::Kept,
        };
        Ok(outcome)
    }
}

impl<H: Clone> Default for TransferCoordinator<H> {
    fn default() -> Self {
        Self::new()
    }
}
