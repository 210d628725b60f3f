use std::path::{Path, PathBuf};

use kanal::AsyncSender;
use wordswap_types::AppEvent;

use crate::session::Session;
use crate::state::AppState;

/// Load `path` and make it the configured dictionary.
///
/// Returns whether the load succeeded; failures are reported to the UI.
async fn load(
    state: &AppState,
    session: &mut Session,
    path: &Path,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<bool> {
    if let Err(e) = session.dictionaries.load_from(path) {
        tracing::error!("Failed to load dictionary: {}", e);
        app_to_ui_tx.send(AppEvent::Error(e.to_string())).await?;
        return Ok(false);
    }

    state.config.write().await.dictionary.file = path.to_path_buf();
    app_to_ui_tx
        .send(AppEvent::DictionaryLoaded(path.to_path_buf()))
        .await?;

    Ok(true)
}

pub async fn handle_dictionary_load(
    state: &AppState,
    session: &mut Session,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    load(state, session, &path, app_to_ui_tx).await?;
    Ok(())
}

/// Load a dictionary picked by the user and remember it for the next run
pub async fn handle_new_dictionary(
    state: &AppState,
    session: &mut Session,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !load(state, session, &path, app_to_ui_tx).await? {
        return Ok(());
    }

    let added = state.config.write().await.dictionary.remember(&path);
    if added {
        tracing::info!("Remembering dictionary {}", path.display());
        app_to_ui_tx.send(AppEvent::DictionaryAdded(path)).await?;
    }

    Ok(())
}
