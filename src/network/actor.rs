//! Network actor - runs user fetches in the Tokio async runtime

use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{fetch_users, FetchSettings};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    settings: FetchSettings,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<u64>,
    cancel_handles: HashMap<u64, oneshot::Sender<()>>,
}

impl NetworkActor {
    pub fn new(
        client: reqwest::Client,
        settings: FetchSettings,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client,
            settings,
            response_tx,
            active_fetches: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id, count }) => self.spawn_fetch(id, count),

                        Some(NetworkCommand::CancelFetch(id)) => {
                            if let Some(cancel_tx) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling fetch");
                                let _ = cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            for (id, cancel_tx) in self.cancel_handles.drain() {
                                tracing::debug!(id, "Cancelling fetch on shutdown");
                                let _ = cancel_tx.send(());
                            }
                            break;
                        }
                    }
                }

                Some(joined) = self.active_fetches.join_next() => {
                    if let Ok(id) = joined {
                        self.cancel_handles.remove(&id);
                    }
                }
            }
        }

        // Let cancelled tasks observe their signal before the actor goes away
        while self.active_fetches.join_next().await.is_some() {}
    }

    fn spawn_fetch(&mut self, id: u64, count: usize) {
        let (cancel_tx, mut cancel_rx) = oneshot::channel();
        self.cancel_handles.insert(id, cancel_tx);

        let response_tx = self.response_tx.clone();
        let client = self.client.clone();
        let settings = self.settings.clone();

        self.active_fetches.spawn(async move {
            tracing::info!(id, count, url = %settings.api_url, "Fetching users");
            let start = Instant::now();

            let response = tokio::select! {
                biased;

                _ = &mut cancel_rx => NetworkResponse::Cancelled { id },
                result = fetch_users(&client, &settings, count) => {
                    let time_ms = start.elapsed().as_millis() as u64;
                    match result {
                        Ok(users) => {
                            tracing::info!(id, received = users.len(), time_ms, "Fetch completed");
                            NetworkResponse::Users { id, users, time_ms }
                        }
                        Err(e) => {
                            tracing::warn!(id, error = %e, time_ms, "Fetch failed");
                            NetworkResponse::Failed { id, message: format!("{:#}", anyhow::Error::new(e)), time_ms }
                        }
                    }
                }
            };

            let _ = response_tx.send(response);
            id
        });
    }
}
