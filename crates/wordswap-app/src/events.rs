use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordswap_types::AppEvent;

use crate::session::Session;
use crate::state::AppState;

pub mod dictionary;
pub mod translate;
pub mod window;

use dictionary::{handle_dictionary_load, handle_new_dictionary};
use translate::{handle_file_translation, handle_translation};
use window::{handle_close_request, handle_editor_open, handle_info_open, handle_window_closed};

/// App's main loop
///
/// Window teardown requested during one iteration happens at the top of the next,
/// outside any window callback.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (mut session, delta_time, known_dictionaries) = {
        let config = state.config.read().await;
        (
            Session::new(&config),
            Duration::from_millis(config.delta_time.max(1)),
            config.dictionary.dictionaries.clone(),
        )
    };

    if let Err(e) = session.dictionaries.reload() {
        tracing::warn!("Starting with an empty dictionary: {}", e);
    }

    for path in known_dictionaries {
        app_to_ui_tx.send(AppEvent::DictionaryAdded(path)).await?;
    }

    let mut interval = tokio::time::interval(delta_time);

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        for kind in session.windows.drain() {
            handle_window_closed(&state, &mut session, kind, &app_to_ui_tx).await?;
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            _ = interval.tick() => {
                session.windows.pump();
            }
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!(
                    "[EVENT_LOOP] EVENT RECEIVED: {:?}",
                    std::mem::discriminant(&event)
                );
                if handle_events(&state, &mut session, &app_to_ui_tx, event)
                    .await?
                    .is_break()
                {
                    break;
                }
            }
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    state: &AppState,
    session: &mut Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::Translate(text) => {
            handle_translation(session, &text, app_to_ui_tx).await?;
        }
        AppEvent::TranslateFile { source, dest } => {
            handle_file_translation(session, &source, &dest, app_to_ui_tx).await?;
        }
        AppEvent::LoadDictionary(path) => {
            handle_dictionary_load(state, session, path, app_to_ui_tx).await?;
        }
        AppEvent::OpenNewDictionary(path) => {
            handle_new_dictionary(state, session, path, app_to_ui_tx).await?;
        }
        AppEvent::OpenEditor => {
            handle_editor_open(session, app_to_ui_tx).await?;
        }
        AppEvent::OpenInfo => {
            handle_info_open(session, app_to_ui_tx).await?;
        }
        AppEvent::CloseWindow(kind) => {
            handle_close_request(session, kind, app_to_ui_tx).await?;
        }
        AppEvent::QueryActivePath => {
            let path = session.dictionaries.active_path().to_path_buf();
            app_to_ui_tx.send(AppEvent::ActivePath(path)).await?;
        }
        AppEvent::Shutdown => {
            tracing::info!("Shutdown requested by UI");
            return Ok(ControlFlow::Break(()));
        }
        AppEvent::ShowTranslation(_)
        | AppEvent::FileTranslated { .. }
        | AppEvent::DictionaryAdded(_)
        | AppEvent::DictionaryLoaded(_)
        | AppEvent::ActivePath(_)
        | AppEvent::ShowInfo(_)
        | AppEvent::WindowClosed(_)
        | AppEvent::Error(_) => {
            // UI-only event, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
