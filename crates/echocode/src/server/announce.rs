use std::{panic::AssertUnwindSafe, sync::Arc, time::Duration};

use dashmap::DashMap;
use futures::FutureExt;
use tower_lsp::{
    Client,
    lsp_types::{MessageType, Url},
};
use tracing::{debug, warn};

use crate::server::settings::AnnouncementSettings;

/// Sends command messages to the client as `window/showMessage`, which
/// screen readers pick up.
///
/// Rapid repeats on the same document (holding down "next function") are
/// debounced: each announcement bumps a per-document generation and only the
/// one still current after the delay is delivered.
#[derive(Clone)]
pub(crate) struct Announcer {
    client: Client,
    generations: Arc<DashMap<Url, u64>>,
}

impl Announcer {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            generations: Arc::new(DashMap::new()),
        }
    }

    pub(crate) fn announce(
        &self,
        uri: &Url,
        message: String,
        settings: &AnnouncementSettings,
    ) {
        if !settings.enable {
            return;
        }

        let generation = {
            let mut current = self.generations.entry(uri.clone()).or_insert(0);
            *current += 1;
            *current
        };

        let client = self.client.clone();
        let generations = self.generations.clone();
        let uri = uri.clone();
        let delay = Duration::from_millis(settings.debounce_ms);

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let still_latest = generations.get(&uri).is_some_and(|current| *current == generation);
            if !still_latest {
                debug!("[announce] dropped superseded message for {uri}");
                return;
            }

            let result = AssertUnwindSafe(client.show_message(MessageType::INFO, message)).catch_unwind().await;
            if result.is_err() {
                warn!("show_message panicked (client may have disconnected)");
            }
        });
    }

    /// Drop pending announcements for a closed document.
    ///
    /// The counter is bumped rather than removed, so a task spawned before
    /// the close never matches a generation issued after a reopen.
    pub(crate) fn cancel_pending(
        &self,
        uri: &Url,
    ) {
        *self.generations.entry(uri.clone()).or_insert(0) += 1;
    }
}
