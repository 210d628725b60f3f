use std::path::Path;
use std::process::{Child, Command};

use anyhow::Context;
use wordswap_core::{AuxiliaryWindow, CloseSignal, WindowSlot};
use wordswap_types::WindowKind;

/// Dictionary file opened in an external editor process.
///
/// The window closes itself once the process exits. Until then a close request
/// is refused, since only the editor can save the user's changes.
pub struct EditorWindow {
    child: Child,
    exited: bool,
}

impl EditorWindow {
    pub fn spawn(command: &str, path: &Path) -> anyhow::Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().context("editor command is empty")?;

        tracing::info!("Opening {} with {}", path.display(), command);
        let child = Command::new(program)
            .args(parts)
            .arg(path)
            .spawn()
            .with_context(|| format!("failed to launch editor `{command}`"))?;

        Ok(Self {
            child,
            exited: false,
        })
    }

    fn poll_exit(&mut self) -> bool {
        if !self.exited {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    tracing::debug!("Editor exited with {}", status);
                    self.exited = true;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Lost track of editor process: {}", e);
                    self.exited = true;
                }
            }
        }
        self.exited
    }
}

impl AuxiliaryWindow for EditorWindow {
    fn kind(&self) -> WindowKind {
        WindowKind::Editor
    }

    fn hide(&mut self) {
        tracing::debug!("Editor window hidden");
    }

    fn pump(&mut self, close: &CloseSignal) {
        if self.poll_exit() {
            self.on_close(close);
        }
    }

    fn on_close(&mut self, close: &CloseSignal) {
        if !self.poll_exit() {
            tracing::warn!("Editor still running, quit it to close the window");
            return;
        }
        self.hide();
        close.request();
    }
}

impl Drop for EditorWindow {
    fn drop(&mut self) {
        // Left running on shutdown; whatever it saves is loaded on the next start
        if !self.poll_exit() {
            tracing::info!("Detaching editor process {}", self.child.id());
        }
    }
}

/// Help overlay, closed by the user
pub struct InfoWindow;

impl AuxiliaryWindow for InfoWindow {
    fn kind(&self) -> WindowKind {
        WindowKind::Info
    }

    fn hide(&mut self) {
        tracing::debug!("Info window hidden");
    }
}

pub struct Windows {
    editor: WindowSlot,
    info: WindowSlot,
}

impl Windows {
    pub fn new() -> Self {
        Self {
            editor: WindowSlot::new(WindowKind::Editor),
            info: WindowSlot::new(WindowKind::Info),
        }
    }

    pub fn slot_mut(&mut self, kind: WindowKind) -> &mut WindowSlot {
        match kind {
            WindowKind::Editor => &mut self.editor,
            WindowKind::Info => &mut self.info,
        }
    }

    pub fn open(&mut self, window: Box<dyn AuxiliaryWindow>) {
        self.slot_mut(window.kind()).open(window);
    }

    pub fn pump(&mut self) {
        self.editor.pump();
        self.info.pump();
    }

    /// Windows whose close completed during this drain
    pub fn drain(&mut self) -> Vec<WindowKind> {
        [&mut self.editor, &mut self.info]
            .into_iter()
            .filter_map(|slot| slot.drain().then(|| slot.kind()))
            .collect()
    }
}

impl Default for Windows {
    fn default() -> Self {
        Self::new()
    }
}
