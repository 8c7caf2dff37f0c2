//! The mining, transfer and chain sections. Each pushes the actions the user fired this frame.

use client_core::TransferPanel;
use eframe::egui;
use shared::domain::{CounterpartyId, OperatorProfile};

use crate::backend_bridge::commands::PanelCommand;

pub fn mining_section(
    ui: &mut egui::Ui,
    operator: &OperatorProfile,
    commands: &mut Vec<PanelCommand>,
) {
    ui.heading("Mining");
    ui.horizontal(|ui| {
        let _ = ui
            .label(egui::RichText::new(operator.display_name.as_str()).strong())
            .on_hover_text(operator.avatar.as_str());
        ui.label(operator.balance_label.as_str());
        if ui.button("Mine").clicked() {
            commands.push(PanelCommand::Mine);
        }
    });
}

/// Every row sends from its own counterparty, with that row's amount, to the operator.
pub fn transfer_section(
    ui: &mut egui::Ui,
    transfers: &mut TransferPanel,
    operator_id: CounterpartyId,
    commands: &mut Vec<PanelCommand>,
) {
    ui.heading("Contacts");
    let roster = transfers.roster().to_vec();
    for entry in roster {
        ui.horizontal(|ui| {
            let _ = ui
                .label(entry.display_name.as_str())
                .on_hover_text(entry.avatar.as_str());
            let mut draft = transfers
                .pending_amount(entry.id)
                .unwrap_or_default()
                .to_string();
            let edit = egui::TextEdit::singleline(&mut draft)
                .id_salt(("pending_amount", entry.id.0))
                .hint_text("amount")
                .desired_width(120.0);
            if ui.add(edit).changed() {
                transfers.set_pending_amount(entry.id, draft);
            }
            if ui.button("Send").clicked() {
                commands.push(PanelCommand::SubmitTransfer {
                    sender: entry.id,
                    recipient: operator_id,
                });
            }
        });
    }
}

pub fn chain_section(ui: &mut egui::Ui, chain_text: &str, commands: &mut Vec<PanelCommand>) {
    ui.heading("Blockchain");
    if ui.button("View Full Chain").clicked() {
        commands.push(PanelCommand::LoadChain);
    }
    if !chain_text.is_empty() {
        egui::ScrollArea::vertical()
            .id_salt("chain_text")
            .max_height(360.0)
            .show(ui, |ui| {
                ui.monospace(chain_text);
            });
    }
}
