mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;

use crate::{
    controller::events::UiEvent,
    ui::{
        app::{native_options, WINDOW_TITLE},
        LedgerPanelApp, StartupConfig,
    },
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let startup = StartupConfig::parse();
    let settings = startup.settings();
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);

    let app = match LedgerPanelApp::new(&settings, ui_tx, ui_rx) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("failed to start control panel: {err:#}");
            std::process::exit(1);
        }
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
