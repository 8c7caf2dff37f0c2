//! Command orchestration from UI actions to panel tasks on the backend runtime.

use client_core::ControlPanel;

use crate::backend_bridge::{commands::PanelCommand, runtime::BackendRuntime};

pub fn dispatch_panel_command(panel: &ControlPanel, backend: &BackendRuntime, cmd: PanelCommand) {
    let operation = cmd.operation();
    let _runtime = backend.enter();
    match cmd {
        PanelCommand::Mine => backend.watch(operation, panel.mining.mine()),
        PanelCommand::LoadChain => backend.watch(operation, panel.chain.load_chain()),
        PanelCommand::SubmitTransfer { sender, recipient } => {
            backend.watch(operation, panel.transfers.submit_transfer(sender, recipient))
        }
    }
    tracing::debug!(command = operation, "spawned panel action");
}
