use std::sync::Arc;

use shared::protocol::ChainSnapshot;
use tokio::sync::{broadcast, RwLock};
use tracing::info;

use crate::{api::LedgerApi, error::LedgerError, ActionHandle, PanelEvent};

pub struct ChainViewer {
    api: Arc<dyn LedgerApi>,
    events: broadcast::Sender<PanelEvent>,
    displayed: Arc<RwLock<ChainSnapshot>>,
}

impl ChainViewer {
    pub fn new(api: Arc<dyn LedgerApi>, events: broadcast::Sender<PanelEvent>) -> Self {
        Self {
            api,
            events,
            displayed: Arc::new(RwLock::new(ChainSnapshot::default())),
        }
    }

    pub async fn displayed(&self) -> String {
        self.displayed.read().await.as_str().to_string()
    }

    /// Fetches the chain and replaces the displayed text once the whole response is in.
    /// Whichever load resolves last is what stays on screen.
    pub fn load_chain(&self) -> ActionHandle<String> {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        let displayed = Arc::clone(&self.displayed);
        tokio::spawn(async move {
            let document = api.chain().await?;
            let snapshot = ChainSnapshot::from_document(&document)?;
            let text = snapshot.as_str().to_string();
            // Broadcast under the write lock so event order matches replacement order.
            let mut current = displayed.write().await;
            *current = snapshot;
            info!(bytes = text.len(), "chain snapshot replaced");
            let _ = events.send(PanelEvent::ChainLoaded { text: text.clone() });
            drop(current);
            Ok::<_, LedgerError>(text)
        })
    }
}
