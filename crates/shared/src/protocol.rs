use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::CounterpartyId;

pub const MINE_PATH: &str = "/mine";
pub const CHAIN_PATH: &str = "/chain";
pub const NEW_TRANSACTION_PATH: &str = "/transactions/new";

/// Body of `POST /transactions/new`.
///
/// `amount` is the raw pending text, forwarded without interpretation. A missing pending
/// entry is sent as `null` so the body always carries all three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender: CounterpartyId,
    pub recipient: CounterpartyId,
    pub amount: Option<String>,
}

/// Response of `POST /transactions/new`. Only `message` is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /mine`, kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiningResult(pub Value);

impl MiningResult {
    /// Compact serialization, shown verbatim to the user.
    pub fn render(&self) -> String {
        self.0.to_string()
    }
}

/// Display form of a `GET /chain` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSnapshot {
    text: String,
}

impl ChainSnapshot {
    pub fn from_document(document: &Value) -> serde_json::Result<Self> {
        Ok(Self {
            text: serde_json::to_string_pretty(document)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
