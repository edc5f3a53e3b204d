use super::models::DayPreparation;
use super::source::DayPreparationSource;
use super::state::{RequestToken, ViewState};
use crate::error::{component_error, BrodyResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::{Id, JoinSet};
use tracing::{debug, error, info};

/// The day preparation actor; sole owner of the view state
pub struct DayPreparationActor {
    source: Arc<dyn DayPreparationSource>,
    command_rx: mpsc::Receiver<DayPreparationCommand>,
    state_tx: watch::Sender<ViewState>,
    fetches: JoinSet<BrodyResult<DayPreparation>>,
    in_flight: HashMap<Id, RequestToken>,
}

/// Commands that can be sent to the day preparation actor
pub enum DayPreparationCommand {
    /// Start a request unconditionally
    Prepare(mpsc::Sender<RequestToken>),
    /// Start a request unless one is already loading
    Click(mpsc::Sender<Option<RequestToken>>),
    Shutdown,
}

/// Handle for communicating with the day preparation actor
#[derive(Clone)]
pub struct DayPreparationActorHandle {
    command_tx: mpsc::Sender<DayPreparationCommand>,
    state_rx: watch::Receiver<ViewState>,
}

impl DayPreparationActorHandle {
    /// Start a new request and return its token
    pub async fn prepare(&self) -> BrodyResult<RequestToken> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(DayPreparationCommand::Prepare(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))
    }

    /// Press the prepare button; ignored while a request is loading
    pub async fn click(&self) -> BrodyResult<Option<RequestToken>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(DayPreparationCommand::Click(response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))
    }

    /// Current view state
    pub fn state(&self) -> ViewState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that observes every state replacement
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_rx.clone()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BrodyResult<()> {
        let _ = self.command_tx.send(DayPreparationCommand::Shutdown).await;
        Ok(())
    }
}

impl DayPreparationActor {
    /// Create a new actor and return its handle
    pub fn new(source: Arc<dyn DayPreparationSource>) -> (Self, DayPreparationActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(ViewState::new());

        let actor = Self {
            source,
            command_rx,
            state_tx,
            fetches: JoinSet::new(),
            in_flight: HashMap::new(),
        };

        let handle = DayPreparationActorHandle {
            command_tx,
            state_rx,
        };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Day preparation actor started");

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(DayPreparationCommand::Prepare(response_tx)) => {
                            let token = self.begin_request();
                            let _ = response_tx.send(token).await;
                        }
                        Some(DayPreparationCommand::Click(response_tx)) => {
                            let token = if self.state_tx.borrow().is_loading() {
                                debug!("Prepare button is disabled, ignoring click");
                                None
                            } else {
                                Some(self.begin_request())
                            };
                            let _ = response_tx.send(token).await;
                        }
                        Some(DayPreparationCommand::Shutdown) | None => {
                            info!("Day preparation actor shutting down");
                            break;
                        }
                    }
                }
                Some(joined) = self.fetches.join_next_with_id(), if !self.fetches.is_empty() => {
                    let (id, result) = match joined {
                        Ok((id, result)) => (id, result),
                        Err(e) => {
                            let message = format!("Fetch task failed: {}", e);
                            (e.id(), Err(component_error(&message)))
                        }
                    };

                    // Panicked fetches settle like failed ones so loading always ends
                    match self.in_flight.remove(&id) {
                        Some(token) => self.finish_request(token, result),
                        None => error!("Finished fetch task {} has no request token", id),
                    }
                }
            }
        }

        // Pending fetches are dropped with the actor
        self.fetches.abort_all();
        self.in_flight.clear();
        info!("Day preparation actor shut down");
    }

    /// Stamp a new request, publish the loading state and spawn the fetch
    fn begin_request(&mut self) -> RequestToken {
        let (next, token) = self.state_tx.borrow().begin();
        self.state_tx.send_replace(next);

        debug!("Preparing day, generation {}", token.generation());

        let source = Arc::clone(&self.source);
        let abort_handle = self.fetches.spawn(async move { source.fetch().await });
        self.in_flight.insert(abort_handle.id(), token);

        token
    }

    /// Resolve a finished fetch into a payload and apply it if still current
    fn finish_request(&mut self, token: RequestToken, result: BrodyResult<DayPreparation>) {
        let outcome = match result {
            Ok(prep) => prep,
            Err(e) => {
                error!("Error fetching day preparation: {}", e);
                DayPreparation::fallback()
            }
        };

        let next = self.state_tx.borrow().settle(token, outcome);
        match next {
            Some(state) => {
                debug!("Applied day preparation for generation {}", token.generation());
                self.state_tx.send_replace(state);
            }
            None => {
                debug!(
                    "Discarding stale day preparation for generation {}",
                    token.generation()
                );
            }
        }
    }
}
