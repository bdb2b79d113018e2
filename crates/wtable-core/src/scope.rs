use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;

use crate::transfer::{TransferCoordinator, WidgetId};

/// State shared by every widget that can exchange files.
///
/// A page normally has a single scope; tests create as many as they like and
/// widgets in different scopes never see each other's transfers.
#[derive(Debug)]
pub struct WidgetScope<H = ()> {
    coordinator: RefCell<TransferCoordinator<H>>,
    next_id: Cell<u32>,
    nonce: String,
}

impl<H: Clone> WidgetScope<H> {
    /// Creates a shared scope.
    pub fn new() -> Rc<Self> {
        Self::with_nonce("")
    }

    /// Creates a shared scope whose drag labels carry `nonce`.
    ///
    /// Labels travel through the platform drag data, so a nonce keeps two
    /// pages (or two scopes) from mistaking each other's widgets for their
    /// own.
    pub fn with_nonce(nonce: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            coordinator: RefCell::new(TransferCoordinator::new()),
            next_id: Cell::new(0),
            nonce: nonce.into(),
        })
    }

    pub(crate) fn allocate_id(&self) -> WidgetId {
        let raw = self.next_id.get();
        self.next_id.set(raw + 1);
        WidgetId::new(raw)
    }

    /// Drag label identifying widget `id` within this scope.
    pub fn label_for(&self, id: WidgetId) -> String {
        if self.nonce.is_empty() {
            format!("w-table-{id}")
        } else {
            format!("w-table-{}-{id}", self.nonce)
        }
    }

    /// Borrows the coordinator for one step of a transfer.
    ///
    /// # Panics
    ///
    /// Panics if the coordinator is already borrowed, which only happens if
    /// a handler re-enters the scope while another handler is running.
    pub fn coordinator(&self) -> RefMut<'_, TransferCoordinator<H>> {
        self.coordinator.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::TransferState;

    #[test]
    fn test_ids_are_unique() {
        let scope: Rc<WidgetScope> = WidgetScope::new();
        let a = scope.allocate_id();
        let b = scope.allocate_id();
        assert_ne!(a, b);
        assert_eq!(b.get(), a.get() + 1);
    }

    #[test]
    fn test_labels() {
        let plain: Rc<WidgetScope> = WidgetScope::new();
        let id = plain.allocate_id();
        assert_eq!(plain.label_for(id), "w-table-0");

        let salted: Rc<WidgetScope> = WidgetScope::with_nonce("x7");
        assert_eq!(salted.label_for(id), "w-table-x7-0");
    }

    #[test]
    fn test_scopes_are_independent() {
        let first: Rc<WidgetScope> = WidgetScope::new();
        let second: Rc<WidgetScope> = WidgetScope::new();
        let id = first.allocate_id();

        first
            .coordinator()
            .begin_drag(id, crate::FileRecord::detached("f", 1, 1))
            .unwrap();
        assert_eq!(first.coordinator().state(), TransferState::Holding);
        assert_eq!(second.coordinator().state(), TransferState::Idle);
    }
}
