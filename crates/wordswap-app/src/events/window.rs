use kanal::AsyncSender;
use wordswap_core::SlotState;
use wordswap_types::{AppEvent, WindowKind};

use crate::session::Session;
use crate::state::AppState;
use crate::ui::HELP;
use crate::windows::{EditorWindow, InfoWindow};

pub async fn handle_editor_open(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if session.windows.slot_mut(WindowKind::Editor).state() == SlotState::Open {
        app_to_ui_tx
            .send(AppEvent::Error("the editor is already open".to_string()))
            .await?;
        return Ok(());
    }

    let path = session.dictionaries.active_path();

    match EditorWindow::spawn(&session.editor_command, path) {
        Ok(editor) => session.windows.open(Box::new(editor)),
        Err(e) => {
            tracing::error!("{:#}", e);
            app_to_ui_tx.send(AppEvent::Error(format!("{e:#}"))).await?;
        }
    }

    Ok(())
}

pub async fn handle_info_open(
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.windows.open(Box::new(InfoWindow));
    app_to_ui_tx
        .send(AppEvent::ShowInfo(HELP.to_string()))
        .await?;

    Ok(())
}

pub async fn handle_close_request(
    session: &mut Session,
    kind: WindowKind,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Close requested for {} window", kind);
    let slot = session.windows.slot_mut(kind);
    slot.close();

    // The window turned the request down, e.g. an editor with unsaved work
    if slot.state() == SlotState::Open {
        app_to_ui_tx
            .send(AppEvent::Error(format!(
                "the {kind} window is still in use and stays open"
            )))
            .await?;
    }

    Ok(())
}

/// Follow-up for a window destroyed by the drain
pub async fn handle_window_closed(
    state: &AppState,
    session: &mut Session,
    kind: WindowKind,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if kind == WindowKind::Editor {
        match session.dictionaries.reload() {
            Ok(()) => {
                let path = session.dictionaries.active_path().to_path_buf();
                state.config.write().await.dictionary.file = path.clone();
                app_to_ui_tx.send(AppEvent::DictionaryLoaded(path)).await?;
            }
            Err(e) => {
                tracing::error!("Failed to reload edited dictionary: {}", e);
                app_to_ui_tx.send(AppEvent::Error(e.to_string())).await?;
            }
        }
    }

    app_to_ui_tx.send(AppEvent::WindowClosed(kind)).await?;
    Ok(())
}
