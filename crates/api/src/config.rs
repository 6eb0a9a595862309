use vhub_db::codec::{DecodePolicy, TimestampFallback};

/// Where records are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// A Google spreadsheet, reached with a service account.
    Sheets(GoogleConfig),
    /// A process-local workbook. Data is lost on restart.
    Memory,
}

/// Service-account credentials and target spreadsheet.
#[derive(Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    pub spreadsheet_id: String,
    pub service_account_email: String,
    /// PEM private key, possibly with escaped newlines as found in `.env`.
    pub private_key: String,
    /// Timeout for each Sheets API call in seconds (default: `30`).
    pub http_timeout_secs: u64,
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("service_account_email", &self.service_account_email)
            .field("private_key", &"<redacted>")
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the Google credentials have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub backend: StorageBackend,
    pub decode: DecodePolicy,
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set for the sheets backend"))
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default  |
    /// |--------------------------------|----------|
    /// | `HOST`                         | `0.0.0.0`|
    /// | `PORT`                         | `3000`   |
    /// | `REQUEST_TIMEOUT_SECS`         | `30`     |
    /// | `STORAGE_BACKEND`              | `sheets` |
    /// | `GOOGLE_SPREADSHEET_ID`        | required |
    /// | `GOOGLE_SERVICE_ACCOUNT_EMAIL` | required |
    /// | `GOOGLE_PRIVATE_KEY`           | required |
    /// | `SHEETS_HTTP_TIMEOUT_SECS`     | `30`     |
    /// | `DECODE_STRICT`                | `false`  |
    /// | `DECODE_MISSING_TIMESTAMP`     | `now`    |
    ///
    /// Misconfiguration panics at startup.
    pub fn from_env() -> Self {
        let host = var_or("HOST", "0.0.0.0");

        let port: u16 = var_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = var_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend = match var_or("STORAGE_BACKEND", "sheets").trim() {
            "sheets" => StorageBackend::Sheets(GoogleConfig {
                spreadsheet_id: required("GOOGLE_SPREADSHEET_ID"),
                service_account_email: required("GOOGLE_SERVICE_ACCOUNT_EMAIL"),
                private_key: required("GOOGLE_PRIVATE_KEY"),
                http_timeout_secs: var_or("SHEETS_HTTP_TIMEOUT_SECS", "30")
                    .parse()
                    .expect("SHEETS_HTTP_TIMEOUT_SECS must be a valid u64"),
            }),
            "memory" => StorageBackend::Memory,
            other => panic!("STORAGE_BACKEND must be 'sheets' or 'memory', got '{other}'"),
        };

        let decode = DecodePolicy {
            strict: var_or("DECODE_STRICT", "false")
                .parse()
                .expect("DECODE_STRICT must be true or false"),
            missing_timestamp: var_or("DECODE_MISSING_TIMESTAMP", "now")
                .parse::<TimestampFallback>()
                .unwrap_or_else(|e| panic!("DECODE_MISSING_TIMESTAMP: {e}")),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            backend,
            decode,
        }
    }
}
