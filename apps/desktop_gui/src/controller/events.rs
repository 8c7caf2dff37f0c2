//! Backend-to-UI events and the notification queue.

use std::collections::VecDeque;

use client_core::PanelEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Info(String),
    Notification(String),
    ChainLoaded(String),
}

impl From<PanelEvent> for UiEvent {
    fn from(event: PanelEvent) -> Self {
        match event {
            PanelEvent::MiningCompleted { rendered } => UiEvent::Notification(rendered),
            PanelEvent::TransferAcknowledged { message, .. } => UiEvent::Notification(message),
            PanelEvent::ChainLoaded { text } => UiEvent::ChainLoaded(text),
        }
    }
}

/// Notifications are shown one at a time, oldest first, until acknowledged.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<String>,
}

impl NotificationQueue {
    pub fn push(&mut self, message: String) {
        self.pending.push_back(message);
    }

    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    pub fn acknowledge(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use client_core::PanelEvent;
    use serde_json::json;
    use shared::{domain::CounterpartyId, protocol::TransferRequest};

    use super::*;

    #[test]
    fn mining_and_transfer_events_become_notifications() {
        let mined = UiEvent::from(PanelEvent::MiningCompleted {
            rendered: json!({"index": 2}).to_string(),
        });
        assert_eq!(mined, UiEvent::Notification(r#"{"index":2}"#.to_string()));

        let acknowledged = UiEvent::from(PanelEvent::TransferAcknowledged {
            request: TransferRequest {
                sender: CounterpartyId(1),
                recipient: CounterpartyId(0),
                amount: Some("10".to_string()),
            },
            message: "Transaction will be added to Block 2".to_string(),
        });
        assert_eq!(
            acknowledged,
            UiEvent::Notification("Transaction will be added to Block 2".to_string())
        );
    }

    #[test]
    fn chain_event_replaces_display_without_notification() {
        let event = UiEvent::from(PanelEvent::ChainLoaded {
            text: "{}".to_string(),
        });
        assert_eq!(event, UiEvent::ChainLoaded("{}".to_string()));
    }

    #[test]
    fn notifications_are_acknowledged_in_arrival_order() {
        let mut queue = NotificationQueue::default();
        queue.push("first".to_string());
        queue.push("second".to_string());

        assert_eq!(queue.current(), Some("first"));
        assert_eq!(queue.acknowledge().as_deref(), Some("first"));
        assert_eq!(queue.current(), Some("second"));
        assert_eq!(queue.len(), 1);
    }
}
