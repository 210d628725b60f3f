use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordswap_types::AppEvent;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Commands typed at the terminal
const COMMAND_CAPACITY: usize = 64;
/// Replies, including the `DictionaryAdded` burst at startup
const RESPONSE_CAPACITY: usize = 256;

/// Both directions between the terminal and the backend
struct Channels {
    commands: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    responses: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

/// Owns the channels and the shutdown token shared by the two app tasks
pub struct AppController {
    channels: Channels,
    state: Arc<AppState>,
    cancel: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: Channels {
                commands: kanal::bounded_async(COMMAND_CAPACITY),
                responses: kanal::bounded_async(RESPONSE_CAPACITY),
            },
            state,
            cancel: CancellationToken::new(),
        }
    }

    /// Start the backend and the terminal front-end.
    ///
    /// Each task gets a child token, so `shutdown` stops both while either can
    /// still end on its own (`:quit`, closed stdin).
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let Channels {
            commands: (command_tx, command_rx),
            responses: (response_tx, response_rx),
        } = &self.channels;

        let mut tasks = JoinSet::new();
        tasks.spawn(event_loop(
            self.state.clone(),
            command_rx.clone(),
            response_tx.clone(),
            self.cancel.child_token(),
        ));
        tasks.spawn(ui_loop(
            response_rx.clone(),
            command_tx.clone(),
            self.cancel.child_token(),
        ));

        tracing::debug!("Spawned event and UI tasks");
        tasks
    }

    pub fn shutdown(&self) {
        tracing::debug!("Cancelling app tasks");
        self.cancel.cancel();
    }
}
