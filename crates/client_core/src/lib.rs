use std::sync::Arc;

use shared::{domain::Counterparty, protocol::TransferRequest};
use tokio::{sync::broadcast, task::JoinHandle};

pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod mining;
pub mod pending;
pub mod transfer;

pub use api::{HttpLedgerClient, LedgerApi};
pub use chain::ChainViewer;
pub use config::{load_settings, normalize_service_url, PanelSettings};
pub use error::LedgerError;
pub use mining::MiningControl;
pub use pending::PendingAmounts;
pub use transfer::TransferPanel;

/// One user action in flight. No cancellation: the task runs to completion.
pub type ActionHandle<T> = JoinHandle<Result<T, LedgerError>>;

/// What the user gets to see once an action's response has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    MiningCompleted {
        rendered: String,
    },
    TransferAcknowledged {
        request: TransferRequest,
        message: String,
    },
    ChainLoaded {
        text: String,
    },
}

impl PanelEvent {
    /// Text for a one-shot notification, if this event raises one.
    pub fn notification(&self) -> Option<&str> {
        match self {
            PanelEvent::MiningCompleted { rendered } => Some(rendered),
            PanelEvent::TransferAcknowledged { message, .. } => Some(message),
            PanelEvent::ChainLoaded { .. } => None,
        }
    }
}

/// Waits for an action and flattens a panicked or aborted task into [`LedgerError::Task`].
pub async fn settle<T>(
    operation: &'static str,
    handle: ActionHandle<T>,
) -> Result<T, LedgerError> {
    handle
        .await
        .map_err(|source| LedgerError::Task { operation, source })?
}

/// The three presentation units over one service client and one notification stream.
pub struct ControlPanel {
    pub mining: MiningControl,
    pub transfers: TransferPanel,
    pub chain: ChainViewer,
    events: broadcast::Sender<PanelEvent>,
}

impl ControlPanel {
    pub fn new(api: Arc<dyn LedgerApi>, roster: Vec<Counterparty>) -> Self {
        let (events, _) = broadcast::channel(256);
        Self {
            mining: MiningControl::new(Arc::clone(&api), events.clone()),
            transfers: TransferPanel::new(Arc::clone(&api), events.clone(), roster),
            chain: ChainViewer::new(api, events.clone()),
            events,
        }
    }

    pub fn from_settings(settings: &PanelSettings) -> Result<Self, LedgerError> {
        let service_url = normalize_service_url(&settings.service_url)?;
        tracing::info!(%service_url, roster = settings.counterparties.len(), "control panel ready");
        Ok(Self::new(
            Arc::new(HttpLedgerClient::new(service_url)),
            settings.counterparties.clone(),
        ))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PanelEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
