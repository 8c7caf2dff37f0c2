//! Panel actions raised by the UI and executed on the backend runtime.

use shared::domain::CounterpartyId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Mine,
    LoadChain,
    SubmitTransfer {
        sender: CounterpartyId,
        recipient: CounterpartyId,
    },
}

impl PanelCommand {
    pub fn operation(&self) -> &'static str {
        match self {
            PanelCommand::Mine => "mine",
            PanelCommand::LoadChain => "chain",
            PanelCommand::SubmitTransfer { .. } => "new_transaction",
        }
    }
}
