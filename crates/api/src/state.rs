use std::sync::Arc;
use std::time::Duration;

use vhub_db::Storage;
use vhub_sheets::auth::ServiceAccountKey;
use vhub_sheets::{GoogleSheetsClient, MemorySheetsClient, SheetsClient, SheetsError};

use crate::config::{ServerConfig, StorageBackend};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Every entity store, over one spreadsheet client.
    pub storage: Arc<Storage>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the storage backend named by `config` and wrap it in state.
    ///
    /// Only constructs clients; nothing is fetched until the first request
    /// or an explicit worksheet bootstrap.
    pub fn from_config(config: ServerConfig) -> Result<Self, SheetsError> {
        let client: Arc<dyn SheetsClient> = match &config.backend {
            StorageBackend::Sheets(google) => {
                let key = ServiceAccountKey::new(
                    google.service_account_email.clone(),
                    &google.private_key,
                );
                Arc::new(GoogleSheetsClient::new(
                    google.spreadsheet_id.clone(),
                    key,
                    Duration::from_secs(google.http_timeout_secs),
                )?)
            }
            StorageBackend::Memory => Arc::new(MemorySheetsClient::default()),
        };

        Ok(Self {
            storage: Arc::new(Storage::new(client, config.decode)),
            config: Arc::new(config),
        })
    }
}
