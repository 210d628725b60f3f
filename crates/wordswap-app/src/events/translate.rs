use std::path::Path;

use kanal::AsyncSender;
use wordswap_types::AppEvent;

use crate::session::Session;

pub async fn handle_translation(
    session: &Session,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Translating {} chars", text.chars().count());

    let translation = session.translator.translate_sentence(text);
    app_to_ui_tx
        .send(AppEvent::ShowTranslation(translation.into()))
        .await?;

    Ok(())
}

pub async fn handle_file_translation(
    session: &Session,
    source: &Path,
    dest: &Path,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.translator.translate_file(source, dest) {
        Ok(lines) => {
            tracing::debug!("File translation wrote {} lines", lines);
            app_to_ui_tx
                .send(AppEvent::FileTranslated {
                    dest: dest.to_path_buf(),
                })
                .await?;
        }
        Err(e) => {
            tracing::error!("File translation failed: {}", e);
            app_to_ui_tx.send(AppEvent::Error(e.to_string())).await?;
        }
    }

    Ok(())
}
