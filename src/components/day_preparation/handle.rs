use super::actor::{DayPreparationActor, DayPreparationActorHandle};
use super::source::{DayPreparationSource, HttpDayPreparationSource};
use super::state::{RequestToken, ViewState};
use crate::config::Config;
use crate::error::{component_error, BrodyResult};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

/// Handle for interacting with the day preparation view
#[derive(Clone)]
pub struct DayPreparationHandle {
    actor_handle: DayPreparationActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl DayPreparationHandle {
    /// Create a handle that talks to the configured planning endpoint
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self::with_source(Arc::new(HttpDayPreparationSource::new(config)))
    }

    /// Create a handle over any day preparation source and spawn the actor
    pub fn with_source(source: Arc<dyn DayPreparationSource>) -> Self {
        let (mut actor, handle) = DayPreparationActor::new(source);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Press the prepare button; returns `None` when the button is disabled
    pub async fn click(&self) -> BrodyResult<Option<RequestToken>> {
        self.actor_handle.click().await
    }

    /// Start a new request even if one is pending; only the newest is applied
    pub async fn prepare(&self) -> BrodyResult<RequestToken> {
        self.actor_handle.prepare().await
    }

    /// Start a new request and wait until the view is idle again
    pub async fn prepare_and_wait(&self) -> BrodyResult<ViewState> {
        let token = self.prepare().await?;
        self.wait_until_settled(token).await
    }

    /// Wait until the request stamped with `token` is settled or superseded
    pub async fn wait_until_settled(&self, token: RequestToken) -> BrodyResult<ViewState> {
        let mut state_rx = self.subscribe();
        let state = state_rx
            .wait_for(|state| state.is_settled_for(token))
            .await
            .map_err(|_| component_error("Day preparation actor stopped"))?
            .clone();
        Ok(state)
    }

    /// Current view state
    pub fn state(&self) -> ViewState {
        self.actor_handle.state()
    }

    /// Receiver that observes every state replacement
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.actor_handle.subscribe()
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BrodyResult<()> {
        self.actor_handle.shutdown().await
    }
}
