use std::{fs, path::Path};

use serde::Deserialize;
use shared::domain::{Counterparty, CounterpartyId, OperatorProfile};
use tracing::warn;
use url::Url;

use crate::error::LedgerError;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SETTINGS_FILE: &str = "ledger_panel.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSettings {
    pub service_url: String,
    pub operator: OperatorProfile,
    pub counterparties: Vec<Counterparty>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.into(),
            operator: OperatorProfile {
                id: CounterpartyId(0),
                display_name: "Operator".into(),
                avatar: "https://avatars.example/operator.png".into(),
                balance_label: "50 coins".into(),
            },
            counterparties: vec![
                Counterparty::new(1, "Alice", "https://avatars.example/alice.png"),
                Counterparty::new(2, "Bob", "https://avatars.example/bob.png"),
            ],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    service_url: Option<String>,
    operator: Option<OperatorProfile>,
    counterparties: Option<Vec<Counterparty>>,
}

/// Defaults, then the TOML file at `path` if it exists, then environment overrides.
pub fn load_settings(path: impl AsRef<Path>) -> PanelSettings {
    let mut settings = PanelSettings::default();
    let path = path.as_ref();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<SettingsFile>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.service_url {
                    settings.service_url = v;
                }
                if let Some(v) = file_cfg.operator {
                    settings.operator = v;
                }
                if let Some(v) = file_cfg.counterparties {
                    settings.counterparties = v;
                }
            }
            Err(err) => warn!(path = %path.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Ok(v) = std::env::var("LEDGER_SERVICE_URL") {
        settings.service_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVICE_URL") {
        settings.service_url = v;
    }

    settings
}

pub fn normalize_service_url(raw: &str) -> Result<String, LedgerError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_SERVICE_URL.to_string());
    }

    let parsed = Url::parse(trimmed)
        .map_err(|err| LedgerError::Config(format!("service url '{trimmed}': {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(LedgerError::Config(format!(
            "service url '{trimmed}' must be an absolute http(s) url"
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
