use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    config::DEFAULT_SETTINGS_FILE, load_settings, settle, ControlPanel, PanelSettings,
};
use shared::domain::CounterpartyId;

#[derive(Parser, Debug)]
#[command(name = "ledger-panel", about = "Mine, transfer and inspect a ledger service")]
struct Args {
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Overrides the configured service url.
    #[arg(long)]
    service_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Forge a block and print the raw result.
    Mine,
    /// Print the full chain.
    Chain,
    /// Submit one transfer; the amount is forwarded as typed.
    Send {
        #[arg(long)]
        sender: i64,
        #[arg(long)]
        recipient: i64,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// List the operator and the configured counterparties.
    Roster,
}

fn resolve_settings(args: &Args) -> PanelSettings {
    let mut settings = load_settings(&args.config);
    if let Some(url) = &args.service_url {
        settings.service_url = url.clone();
    }
    settings
}

fn roster_lines(settings: &PanelSettings) -> Vec<String> {
    let operator = &settings.operator;
    let mut lines = vec![format!(
        "* {} {} ({}) {}",
        operator.id, operator.display_name, operator.balance_label, operator.avatar
    )];
    lines.extend(
        settings
            .counterparties
            .iter()
            .map(|entry| format!("  {} {} {}", entry.id, entry.display_name, entry.avatar)),
    );
    lines
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = resolve_settings(&args);

    if args.command == Command::Roster {
        for line in roster_lines(&settings) {
            println!("{line}");
        }
        return Ok(());
    }

    let mut panel = ControlPanel::from_settings(&settings)?;
    match args.command {
        Command::Mine => {
            let result = settle("mine", panel.mining.mine()).await?;
            println!("{}", result.render());
        }
        Command::Chain => {
            let text = settle("chain", panel.chain.load_chain()).await?;
            println!("{text}");
        }
        Command::Send {
            sender,
            recipient,
            amount,
        } => {
            let sender = CounterpartyId(sender);
            panel.transfers.set_pending_amount(sender, amount);
            let receipt = settle(
                "new_transaction",
                panel
                    .transfers
                    .submit_transfer(sender, CounterpartyId(recipient)),
            )
            .await?;
            println!("{}", receipt.message);
        }
        Command::Roster => {}
    }

    Ok(())
}
