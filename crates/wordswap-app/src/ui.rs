use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use kanal::{AsyncReceiver, AsyncSender, Sender};
use tokio_util::sync::CancellationToken;
use wordswap_types::{AppEvent, WindowKind};

pub const HELP: &str = "\
Type text to translate it. Commands:
  :load <path>          switch to a listed dictionary
  :open <path>          open a new dictionary and remember it
  :file <source> <dest> translate a text file line by line
  :edit                 edit the active dictionary
  :path                 show the active dictionary path
  :info                 show this help
  :close [editor|info]  close a window (info by default)
  :quit                 save the config and exit
Start a line with `::` to translate text beginning with `:`.";

/// Turn one input line into a command for the backend.
///
/// `None` means the line was empty or not understood.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(escaped) = line.strip_prefix("::") {
        return Some(AppEvent::Translate(format!(":{escaped}")));
    }

    let Some(command) = line.strip_prefix(':') else {
        if line.is_empty() {
            return None;
        }
        return Some(AppEvent::Translate(line.to_string()));
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));

    match (name, rest) {
        ("q" | "quit", "") => Some(AppEvent::Shutdown),
        ("edit", "") => Some(AppEvent::OpenEditor),
        ("info", "") => Some(AppEvent::OpenInfo),
        ("path", "") => Some(AppEvent::QueryActivePath),
        ("close", "" | "info") => Some(AppEvent::CloseWindow(WindowKind::Info)),
        ("close", "editor") => Some(AppEvent::CloseWindow(WindowKind::Editor)),
        ("load", path) if !path.is_empty() => Some(AppEvent::LoadDictionary(PathBuf::from(path))),
        ("open", path) if !path.is_empty() => {
            Some(AppEvent::OpenNewDictionary(PathBuf::from(path)))
        }
        ("file", paths) => {
            let mut parts = paths.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(source), Some(dest), None) => Some(AppEvent::TranslateFile {
                    source: PathBuf::from(source),
                    dest: PathBuf::from(dest),
                }),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Terminal front-end: commands from stdin, results to stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // Blocking stdin reads stay off the runtime
    let input_tx = ui_to_app_tx.clone_sync();
    std::thread::spawn(move || read_commands(input_tx));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("UI loop stopping");
                break;
            }
            event = app_to_ui_rx.recv() => {
                render(event?)?;
            }
        }
    }

    Ok(())
}

fn read_commands(tx: Sender<AppEvent>) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Some(event) => {
                let stop = matches!(event, AppEvent::Shutdown);
                if tx.send(event).is_err() || stop {
                    return;
                }
            }
            None if line.trim().is_empty() => {}
            None => eprintln!("Unrecognised command, :info for help"),
        }
    }

    // End of input closes the app like the window's close button
    let _ = tx.send(AppEvent::Shutdown);
}

fn render(event: AppEvent) -> io::Result<()> {
    let mut out = io::stdout().lock();

    match event {
        AppEvent::ShowTranslation(translation) => {
            writeln!(out, "{}", translation.text)?;
            writeln!(out, "[{} chars]", translation.counter)?;
        }
        AppEvent::FileTranslated { dest } => {
            writeln!(out, "Wrote {}", dest.display())?;
        }
        AppEvent::DictionaryAdded(path) => {
            writeln!(out, "Dictionary available: {}", path.display())?;
        }
        AppEvent::DictionaryLoaded(path) => {
            writeln!(out, "Using dictionary {}", path.display())?;
        }
        AppEvent::ActivePath(path) => {
            writeln!(out, "{}", path.display())?;
        }
        AppEvent::ShowInfo(text) => {
            writeln!(out, "{text}")?;
        }
        AppEvent::WindowClosed(kind) => {
            tracing::debug!("[UI] {} window closed", kind);
        }
        AppEvent::Error(message) => {
            writeln!(out, "error: {message}")?;
        }
        _ => {}
    }

    out.flush()
}
