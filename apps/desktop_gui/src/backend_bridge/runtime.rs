//! Runtime bridge between panel actions and backend event intake.

use anyhow::{Context, Result};
use client_core::{settle, ActionHandle, PanelEvent};
use crossbeam_channel::{Sender, TrySendError};
use tokio::{
    runtime::{EnterGuard, Runtime},
    sync::broadcast::{self, error::RecvError},
};

use crate::controller::events::UiEvent;

pub struct BackendRuntime {
    runtime: Runtime,
}

impl BackendRuntime {
    pub fn launch() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ledger-backend")
            .enable_all()
            .build()
            .context("backend worker startup failure: failed to build runtime")?;
        Ok(Self { runtime })
    }

    /// Panel actions spawn onto the ambient runtime; hold this guard while issuing them.
    pub fn enter(&self) -> EnterGuard<'_> {
        self.runtime.enter()
    }

    pub fn forward_events(
        &self,
        mut events: broadcast::Receiver<PanelEvent>,
        ui_tx: Sender<UiEvent>,
    ) {
        self.runtime.spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if !deliver(&ui_tx, UiEvent::from(event)).await {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "ui forwarder lagged behind panel events")
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    /// Failures are only reported to the log; nothing reaches the user.
    pub fn watch<T: Send + 'static>(&self, operation: &'static str, handle: ActionHandle<T>) {
        self.runtime.spawn(async move {
            match settle(operation, handle).await {
                Ok(_) => tracing::debug!(operation, "panel action settled"),
                Err(err) => tracing::error!(operation, "unhandled panel action failure: {err}"),
            }
        });
    }
}

/// Hands one event to the UI queue. Notifications wait for room instead of being dropped.
/// Returns `false` once the UI side is gone.
async fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(UiEvent::Notification(message))) => {
            let ui_tx = ui_tx.clone();
            matches!(
                tokio::task::spawn_blocking(move || ui_tx.send(UiEvent::Notification(message)))
                    .await,
                Ok(Ok(()))
            )
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!("ui event queue is full; dropping panel event");
            true
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn notification_waits_for_room_in_full_queue() {
        let backend = BackendRuntime::launch().expect("runtime");
        let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
        ui_tx
            .try_send(UiEvent::Info("busy".to_string()))
            .expect("fill queue");

        let drain = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            let first = ui_rx.recv().expect("first");
            let second = ui_rx.recv().expect("second");
            (first, second)
        });

        let delivered = backend.runtime.block_on(deliver(
            &ui_tx,
            UiEvent::Notification("Transaction will be added to Block 2".to_string()),
        ));
        assert!(delivered);

        let (first, second) = drain.join().expect("drain thread");
        assert_eq!(first, UiEvent::Info("busy".to_string()));
        assert_eq!(
            second,
            UiEvent::Notification("Transaction will be added to Block 2".to_string())
        );
    }

    #[test]
    fn full_queue_drops_chain_text_but_keeps_forwarding() {
        let backend = BackendRuntime::launch().expect("runtime");
        let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
        ui_tx
            .try_send(UiEvent::Info("busy".to_string()))
            .expect("fill queue");

        let delivered =
            backend.runtime.block_on(deliver(&ui_tx, UiEvent::ChainLoaded("{}".to_string())));
        assert!(delivered);
        assert_eq!(ui_rx.len(), 1);

        drop(ui_rx);
        let delivered = backend
            .runtime
            .block_on(deliver(&ui_tx, UiEvent::Info("late".to_string())));
        assert!(!delivered);
    }
}
