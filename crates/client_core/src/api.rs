//! HTTP seam to the remote ledger service.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::protocol::{
    MiningResult, TransferReceipt, TransferRequest, CHAIN_PATH, MINE_PATH, NEW_TRANSACTION_PATH,
};
use tracing::debug;

use crate::error::LedgerError;

#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn mine(&self) -> Result<MiningResult, LedgerError>;
    async fn chain(&self) -> Result<Value, LedgerError>;
    async fn new_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, LedgerError>;
}

/// Talks to the ledger service over plain HTTP.
///
/// Response status codes are not inspected: whatever body comes back is decoded and
/// handed to the caller.
pub struct HttpLedgerClient {
    http: Client,
    server_url: String,
}

impl HttpLedgerClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_url)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T, LedgerError> {
    debug!(operation, status = %response.status(), "ledger response received");
    response
        .json::<T>()
        .await
        .map_err(|source| LedgerError::Decode { operation, source })
}

#[async_trait]
impl LedgerApi for HttpLedgerClient {
    async fn mine(&self) -> Result<MiningResult, LedgerError> {
        let res = self
            .http
            .get(self.endpoint(MINE_PATH))
            .send()
            .await
            .map_err(|source| LedgerError::Transport {
                operation: "mine",
                source,
            })?;
        decode("mine", res).await
    }

    async fn chain(&self) -> Result<Value, LedgerError> {
        let res = self
            .http
            .get(self.endpoint(CHAIN_PATH))
            .send()
            .await
            .map_err(|source| LedgerError::Transport {
                operation: "chain",
                source,
            })?;
        decode("chain", res).await
    }

    async fn new_transaction(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, LedgerError> {
        let res = self
            .http
            .post(self.endpoint(NEW_TRANSACTION_PATH))
            .json(request)
            .send()
            .await
            .map_err(|source| LedgerError::Transport {
                operation: "new_transaction",
                source,
            })?;
        decode("new_transaction", res).await
    }
}
