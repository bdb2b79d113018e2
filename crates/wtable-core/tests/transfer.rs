//! End-to-end drag scenarios across several widgets sharing one scope.

use std::cell::RefCell;
use std::rc::Rc;

use wtable_core::{
    DragOutcome, DropData, DropOutcome, FileRecord, Renderer, SortKey, TransferState,
    WidgetError, WidgetInstance, WidgetScope,
};

/// Renderer that mirrors the drawn rows into a shared buffer.
#[derive(Clone, Default)]
struct Screen(Rc<RefCell<Vec<String>>>);

impl Screen {
    fn rows(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Renderer<()> for Screen {
    fn render(&mut self, records: &[FileRecord]) {
        self.0
            .borrow_mut()
            .extend(records.iter().map(|r| r.name().to_string()));
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }
}

type Widget = WidgetInstance<(), Screen>;

fn widget(scope: &Rc<WidgetScope>, seed: Vec<FileRecord>) -> (Widget, Screen) {
    let screen = Screen::default();
    let widget = WidgetInstance::new(Rc::clone(scope), screen.clone(), seed);
    (widget, screen)
}

fn f(name: &str) -> FileRecord {
    FileRecord::detached(name, name.len() as u64, 100)
}

fn total(widgets: &[&Widget]) -> usize {
    widgets.iter().map(|w| w.collection().len()).sum()
}

#[test]
fn test_move_to_empty_widget() {
    let scope = WidgetScope::new();
    let (mut a, screen_a) = widget(&scope, vec![f("f1")]);
    let (mut b, screen_b) = widget(&scope, Vec::new());

    let label = a.drag_start(0).unwrap();
    a.drag_leave();
    b.drag_over();
    assert_eq!(
        b.receive_drop(DropData::from_widget(label)).unwrap(),
        DropOutcome::Claimed
    );
    assert_eq!(a.drag_end().unwrap(), DragOutcome::Moved(f("f1")));

    assert!(a.collection().is_empty());
    assert_eq!(b.collection().snapshot(), &[f("f1")]);
    assert!(screen_a.rows().is_empty());
    assert_eq!(screen_b.rows(), vec!["f1"]);
    assert_eq!(scope.coordinator().state(), TransferState::Idle);
}

#[test]
fn test_move_conserves_total() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("one"), f("two"), f("three")]);
    let (mut b, _) = widget(&scope, vec![f("four")]);
    let before = total(&[&a, &b]);

    let label = a.drag_start(1).unwrap();
    a.drag_leave();
    b.receive_drop(DropData::from_widget(label)).unwrap();
    a.drag_end().unwrap();

    assert_eq!(total(&[&a, &b]), before);
    assert_eq!(a.collection().len(), 2);
    assert_eq!(b.collection().len(), 2);
}

#[test]
fn test_claimed_record_lands_in_target_sort_order() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("mmmm")]);
    let (mut b, screen_b) = widget(&scope, vec![f("zz"), f("aaaaaa")]);
    b.sort_by(SortKey::Size);
    assert_eq!(screen_b.rows(), vec!["zz", "aaaaaa"]);

    let label = a.drag_start(0).unwrap();
    b.receive_drop(DropData::from_widget(label)).unwrap();
    a.drag_end().unwrap();

    assert_eq!(screen_b.rows(), vec!["zz", "mmmm", "aaaaaa"]);
}

#[test]
fn test_duplicate_in_target_keeps_both() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("same")]);
    let (mut b, _) = widget(&scope, vec![f("same")]);

    let label = a.drag_start(0).unwrap();
    a.drag_leave();
    let err = b.receive_drop(DropData::from_widget(label)).unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(a.drag_end().unwrap(), DragOutcome::Kept);

    assert_eq!(a.collection().len(), 1);
    assert_eq!(b.collection().len(), 1);
    assert_eq!(scope.coordinator().state(), TransferState::Idle);
}

#[test]
fn test_self_drop_never_changes_size() {
    let scope = WidgetScope::new();
    let (mut a, screen_a) = widget(&scope, vec![f("x"), f("y")]);

    let label = a.drag_start(0).unwrap();
    // Moving across child rows fires leave/over pairs.
    a.drag_leave();
    a.drag_over();
    a.drag_leave();
    assert_eq!(
        a.receive_drop(DropData::from_widget(label)).unwrap(),
        DropOutcome::SelfDrop
    );
    assert_eq!(a.drag_end().unwrap(), DragOutcome::Kept);

    assert_eq!(a.collection().len(), 2);
    assert_eq!(screen_a.rows(), vec!["x", "y"]);
}

#[test]
fn test_release_outside_every_widget_discards() {
    let scope = WidgetScope::new();
    let (mut a, screen_a) = widget(&scope, vec![f("gone"), f("kept")]);

    a.drag_start(0).unwrap();
    a.drag_leave();
    assert_eq!(a.drag_end().unwrap(), DragOutcome::Discarded(f("gone")));
    assert_eq!(screen_a.rows(), vec!["kept"]);
}

#[test]
fn test_cancelled_inside_source_keeps_record() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("stay")]);

    a.drag_start(0).unwrap();
    a.drag_leave();
    a.drag_over();
    assert_eq!(a.drag_end().unwrap(), DragOutcome::Kept);
    assert_eq!(a.collection().len(), 1);
}

#[test]
fn test_second_drag_is_rejected_while_in_flight() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("first")]);
    let (mut b, _) = widget(&scope, vec![f("second")]);
    let (mut c, _) = widget(&scope, Vec::new());

    let label = a.drag_start(0).unwrap();
    assert!(matches!(
        b.drag_start(0),
        Err(WidgetError::InvalidTransferState { .. })
    ));
    assert_eq!(scope.coordinator().source(), Some(a.id()));

    c.receive_drop(DropData::from_widget(label)).unwrap();
    assert!(matches!(
        b.drag_start(0),
        Err(WidgetError::InvalidTransferState { .. })
    ));

    a.drag_end().unwrap();
    assert_eq!(c.collection().snapshot(), &[f("first")]);
    assert_eq!(b.collection().snapshot(), &[f("second")]);
}

#[test]
fn test_only_one_target_wins() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("prize")]);
    let (mut b, _) = widget(&scope, Vec::new());
    let (mut c, _) = widget(&scope, Vec::new());

    let label = a.drag_start(0).unwrap();
    b.receive_drop(DropData::from_widget(label.clone())).unwrap();
    assert!(c.receive_drop(DropData::from_widget(label)).is_err());
    a.drag_end().unwrap();

    assert_eq!(total(&[&a, &b, &c]), 1);
    assert_eq!(b.collection().len(), 1);
}

#[test]
fn test_stray_drag_end_is_noop() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("x")]);
    a.drag_leave();
    assert!(matches!(
        a.drag_end(),
        Err(WidgetError::InvalidTransferState { .. })
    ));
    assert_eq!(a.collection().len(), 1);
}

#[test]
fn test_seed_from_serialize() {
    let scope = WidgetScope::new();
    let (mut a, _) = widget(&scope, vec![f("b"), f("a")]);
    a.sort_by(SortKey::Name);
    a.sort_by(SortKey::Name);

    let (b, screen_b) = widget(&scope, a.serialize());
    assert_eq!(b.collection().len(), 2);
    assert_ne!(a.id(), b.id());
    assert_ne!(a.label(), b.label());
    // The seeded widget applies its own default ordering.
    assert_eq!(screen_b.rows(), vec!["a", "b"]);
}

#[test]
fn test_widgets_in_other_scopes_cannot_claim() {
    let first = WidgetScope::new();
    let second = WidgetScope::with_nonce("other");
    let (mut a, _) = widget(&first, vec![f("x")]);
    let (mut b, _) = widget(&second, Vec::new());

    let label = a.drag_start(0).unwrap();
    assert!(b.receive_drop(DropData::from_widget(label)).is_err());
    assert!(b.collection().is_empty());
    a.drag_end().unwrap();
    assert_eq!(a.collection().len(), 1);
}
