use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wordswap_types::WindowKind;

use crate::window::{AuxiliaryWindow, CloseSignal, SlotState, WindowSlot};

/// Counts hides and drops so tests can see when the instance dies
struct CountingWindow {
    hidden: Arc<AtomicUsize>,
    dropped: Arc<AtomicUsize>,
    close_on_pump: bool,
}

impl AuxiliaryWindow for CountingWindow {
    fn kind(&self) -> WindowKind {
        WindowKind::Editor
    }

    fn hide(&mut self) {
        self.hidden.fetch_add(1, Ordering::SeqCst);
    }

    fn pump(&mut self, close: &CloseSignal) {
        if self.close_on_pump {
            self.on_close(close);
        }
    }
}

impl Drop for CountingWindow {
    fn drop(&mut self) {
        self.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting_window(close_on_pump: bool) -> (Box<CountingWindow>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let hidden = Arc::new(AtomicUsize::new(0));
    let dropped = Arc::new(AtomicUsize::new(0));
    let window = Box::new(CountingWindow {
        hidden: hidden.clone(),
        dropped: dropped.clone(),
        close_on_pump,
    });
    (window, hidden, dropped)
}

#[test]
fn test_close_is_deferred_until_drain() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    assert_eq!(slot.state(), SlotState::Absent);

    let (window, hidden, dropped) = counting_window(false);
    slot.open(window);
    assert_eq!(slot.state(), SlotState::Open);

    slot.close();
    assert_eq!(slot.state(), SlotState::CloseRequested);
    assert_eq!(hidden.load(Ordering::SeqCst), 1);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);

    assert!(slot.drain());
    assert_eq!(slot.state(), SlotState::Absent);
    assert_eq!(dropped.load(Ordering::SeqCst), 1);
}

#[test]
fn test_instance_alive_inside_its_close_callback() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    let (window, _, dropped) = counting_window(false);
    slot.open(window);

    slot.dispatch(|window, close| {
        window.on_close(close);
        // Still running on the instance, so it must not be gone
        assert_eq!(dropped.load(Ordering::SeqCst), 0);
    });

    assert_eq!(dropped.load(Ordering::SeqCst), 0);
    assert!(slot.drain());
    assert_eq!(dropped.load(Ordering::SeqCst), 1);
}

#[test]
fn test_close_from_pump() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    let (window, _, dropped) = counting_window(true);
    slot.open(window);

    slot.pump();
    assert_eq!(slot.state(), SlotState::CloseRequested);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);

    assert!(slot.drain());
    assert_eq!(dropped.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drain_without_close_is_a_no_op() {
    let mut slot = WindowSlot::new(WindowKind::Info);
    assert!(!slot.drain());

    let (window, _, dropped) = counting_window(false);
    slot.open(window);
    assert!(!slot.drain());
    assert_eq!(slot.state(), SlotState::Open);
    assert_eq!(dropped.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reopen_replaces_instance() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    let (first, first_hidden, first_dropped) = counting_window(false);
    let (second, _, second_dropped) = counting_window(false);

    slot.open(first);
    slot.open(second);

    assert_eq!(first_hidden.load(Ordering::SeqCst), 1);
    assert_eq!(first_dropped.load(Ordering::SeqCst), 1);
    assert_eq!(second_dropped.load(Ordering::SeqCst), 0);
    assert_eq!(slot.state(), SlotState::Open);
    assert!(!slot.drain());
}

#[test]
fn test_pending_close_survives_reopen() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    let (first, _, _) = counting_window(false);
    let (second, _, second_dropped) = counting_window(false);

    slot.open(first);
    slot.close();
    slot.open(second);

    // The new instance is open, but the earlier close still reports on drain
    assert_eq!(slot.state(), SlotState::Open);
    assert!(slot.drain());
    assert_eq!(slot.state(), SlotState::Open);
    assert_eq!(second_dropped.load(Ordering::SeqCst), 0);
}

/// Turns every close down, like an editor with unsaved work
struct BusyWindow;

impl AuxiliaryWindow for BusyWindow {
    fn kind(&self) -> WindowKind {
        WindowKind::Editor
    }

    fn hide(&mut self) {}

    fn on_close(&mut self, _close: &CloseSignal) {}
}

#[test]
fn test_refused_close_keeps_window_open() {
    let mut slot = WindowSlot::new(WindowKind::Editor);
    slot.open(Box::new(BusyWindow));

    slot.close();
    assert_eq!(slot.state(), SlotState::Open);
    assert!(!slot.drain());
    assert_eq!(slot.state(), SlotState::Open);
}
