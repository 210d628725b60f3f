use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wordswap_types::WindowKind;

/// Pending-close flag handed to a window's callbacks.
///
/// Setting it never destroys anything; the owning slot does that on its next drain.
#[derive(Debug, Clone, Default)]
pub struct CloseSignal(Arc<AtomicBool>);

impl CloseSignal {
    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Secondary window (editor, info) driven by the main event loop
pub trait AuxiliaryWindow: Send + Sync {
    fn kind(&self) -> WindowKind;

    /// Hide at the platform level without releasing the instance
    fn hide(&mut self);

    /// Process pending window events, called once per event-loop tick
    fn pump(&mut self, _close: &CloseSignal) {}

    /// Close callback: hide, then ask the owner for teardown
    fn on_close(&mut self, close: &CloseSignal) {
        self.hide();
        close.request();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    Open,
    CloseRequested,
}

/// Owner of at most one auxiliary window.
///
/// Callbacks run against the live instance through [`WindowSlot::dispatch`];
/// a close they request is only acted on by [`WindowSlot::drain`].
pub struct WindowSlot {
    kind: WindowKind,
    window: Option<Box<dyn AuxiliaryWindow>>,
    close: CloseSignal,
    // Close that was pending on an instance displaced by `open`
    carried_close: bool,
}

impl WindowSlot {
    pub fn new(kind: WindowKind) -> Self {
        Self {
            kind,
            window: None,
            close: CloseSignal::default(),
            carried_close: false,
        }
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn state(&self) -> SlotState {
        match &self.window {
            None => SlotState::Absent,
            Some(_) if self.close.is_requested() => SlotState::CloseRequested,
            Some(_) => SlotState::Open,
        }
    }

    /// Install `window`, destroying any instance already in the slot
    pub fn open(&mut self, window: Box<dyn AuxiliaryWindow>) {
        if let Some(mut previous) = self.window.take() {
            tracing::debug!("Replacing open {} window", self.kind);
            if self.close.is_requested() {
                self.carried_close = true;
            } else {
                previous.hide();
            }
        }

        // Fresh flag so a stale handle cannot close the new instance
        self.close = CloseSignal::default();
        self.window = Some(window);
    }

    /// Run `callback` on the live window, if any
    pub fn dispatch<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut dyn AuxiliaryWindow, &CloseSignal),
    {
        if let Some(window) = self.window.as_deref_mut() {
            callback(window, &self.close);
        }
    }

    /// Deliver a close request through the window's own callback
    pub fn close(&mut self) {
        self.dispatch(|window, close| window.on_close(close));
    }

    pub fn pump(&mut self) {
        if self.state() == SlotState::Open {
            self.dispatch(|window, close| window.pump(close));
        }
    }

    /// Destroy the instance if its close was requested.
    ///
    /// Returns `true` when a close completed and its follow-up should run now.
    /// Must not be called from inside a callback on the window.
    pub fn drain(&mut self) -> bool {
        let mut closed = std::mem::take(&mut self.carried_close);

        if self.state() == SlotState::CloseRequested {
            self.window = None;
            self.close = CloseSignal::default();
            tracing::debug!("Destroyed {} window", self.kind);
            closed = true;
        }

        closed
    }
}
