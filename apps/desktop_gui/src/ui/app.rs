use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{config::DEFAULT_SETTINGS_FILE, load_settings, ControlPanel, PanelSettings};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::OperatorProfile;

use crate::{
    backend_bridge::{commands::PanelCommand, runtime::BackendRuntime},
    controller::{
        events::{NotificationQueue, UiEvent},
        orchestration::dispatch_panel_command,
    },
    ui::panels,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "ledger-panel-gui")]
pub struct StartupConfig {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,
    #[arg(long)]
    pub service_url: Option<String>,
}

impl StartupConfig {
    pub fn settings(&self) -> PanelSettings {
        let mut settings = load_settings(&self.config);
        if let Some(url) = &self.service_url {
            settings.service_url = url.clone();
        }
        settings
    }
}

pub struct LedgerPanelApp {
    panel: ControlPanel,
    backend: BackendRuntime,
    ui_rx: Receiver<UiEvent>,
    operator: OperatorProfile,
    notifications: NotificationQueue,
    chain_text: String,
    status: String,
}

impl LedgerPanelApp {
    pub fn new(
        settings: &PanelSettings,
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
    ) -> Result<Self> {
        let backend = BackendRuntime::launch()?;
        let panel = ControlPanel::from_settings(settings)?;
        backend.forward_events(panel.subscribe_events(), ui_tx.clone());
        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Ledger service: {}",
            settings.service_url
        )));

        Ok(Self {
            panel,
            backend,
            ui_rx,
            operator: settings.operator.clone(),
            notifications: NotificationQueue::default(),
            chain_text: String::new(),
            status: String::new(),
        })
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::Notification(message) => self.notifications.push(message),
                UiEvent::ChainLoaded(text) => self.chain_text = text,
            }
        }
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notifications.current() else {
            return;
        };
        let waiting = self.notifications.len() - 1;
        let mut acknowledged = false;
        egui::Window::new("Notification")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if waiting > 0 {
                    ui.weak(format!("{waiting} more"));
                }
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        if acknowledged {
            self.notifications.acknowledge();
        }
    }
}

impl eframe::App for LedgerPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut commands: Vec<PanelCommand> = Vec::new();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::mining_section(ui, &self.operator, &mut commands);
                ui.separator();
                panels::transfer_section(
                    ui,
                    &mut self.panel.transfers,
                    self.operator.id,
                    &mut commands,
                );
                ui.separator();
                panels::chain_section(ui, &self.chain_text, &mut commands);
            });
        });
        self.show_notification(ctx);

        for cmd in commands {
            dispatch_panel_command(&self.panel, &self.backend, cmd);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub const WINDOW_TITLE: &str = "Ledger Control Panel";

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    }
}
