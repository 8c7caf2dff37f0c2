use std::sync::Arc;

use shared::protocol::MiningResult;
use tokio::sync::broadcast;
use tracing::info;

use crate::{api::LedgerApi, error::LedgerError, ActionHandle, PanelEvent};

pub struct MiningControl {
    api: Arc<dyn LedgerApi>,
    events: broadcast::Sender<PanelEvent>,
}

impl MiningControl {
    pub fn new(api: Arc<dyn LedgerApi>, events: broadcast::Sender<PanelEvent>) -> Self {
        Self { api, events }
    }

    /// Requests one block and notifies with the raw result. Every call is its own request.
    pub fn mine(&self) -> ActionHandle<MiningResult> {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.mine().await?;
            let rendered = result.render();
            info!(bytes = rendered.len(), "mine completed");
            let _ = events.send(PanelEvent::MiningCompleted { rendered });
            Ok::<_, LedgerError>(result)
        })
    }
}
