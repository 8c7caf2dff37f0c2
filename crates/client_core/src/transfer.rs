use std::sync::Arc;

use shared::{
    domain::{Counterparty, CounterpartyId},
    protocol::{TransferReceipt, TransferRequest},
};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::{
    api::LedgerApi, error::LedgerError, pending::PendingAmounts, ActionHandle, PanelEvent,
};

pub struct TransferPanel {
    api: Arc<dyn LedgerApi>,
    events: broadcast::Sender<PanelEvent>,
    roster: Arc<[Counterparty]>,
    pending: PendingAmounts,
}

impl TransferPanel {
    pub fn new(
        api: Arc<dyn LedgerApi>,
        events: broadcast::Sender<PanelEvent>,
        roster: impl Into<Arc<[Counterparty]>>,
    ) -> Self {
        Self {
            api,
            events,
            roster: roster.into(),
            pending: PendingAmounts::new(),
        }
    }

    pub fn roster(&self) -> &[Counterparty] {
        &self.roster
    }

    pub fn counterparty(&self, id: CounterpartyId) -> Option<&Counterparty> {
        self.roster.iter().find(|entry| entry.id == id)
    }

    pub fn pending_amounts(&self) -> &PendingAmounts {
        &self.pending
    }

    pub fn pending_amount(&self, id: CounterpartyId) -> Option<&str> {
        self.pending.get(id)
    }

    /// Stores `raw` as given, including the empty string. Other rows keep their values.
    pub fn set_pending_amount(&mut self, id: CounterpartyId, raw: impl Into<String>) {
        let raw = raw.into();
        debug!(counterparty = id.0, len = raw.len(), "pending amount updated");
        self.pending = self.pending.with_amount(id, raw);
    }

    /// The amount is taken from the sender's pending entry.
    pub fn transfer_request(
        &self,
        sender: CounterpartyId,
        recipient: CounterpartyId,
    ) -> TransferRequest {
        TransferRequest {
            sender,
            recipient,
            amount: self.pending.get(sender).map(str::to_string),
        }
    }

    /// Sends the transfer as it stands right now; later edits do not affect the request.
    /// The pending entry is left in place after the response arrives.
    pub fn submit_transfer(
        &self,
        sender: CounterpartyId,
        recipient: CounterpartyId,
    ) -> ActionHandle<TransferReceipt> {
        let request = self.transfer_request(sender, recipient);
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let receipt = api.new_transaction(&request).await?;
            info!(
                sender = request.sender.0,
                recipient = request.recipient.0,
                "transfer acknowledged"
            );
            let _ = events.send(PanelEvent::TransferAcknowledged {
                request,
                message: receipt.message.clone(),
            });
            Ok::<_, LedgerError>(receipt)
        })
    }
}
