//! REST client for the Google Sheets v4 API.
//!
//! Wraps the handful of endpoints the storage adapter needs (spreadsheet
//! metadata, `batchUpdate`, `values.get/update/append`) using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{ServiceAccountKey, TokenSource};
use crate::client::{BatchRequest, Rows, SheetMeta, SheetsClient, SpreadsheetMeta};
use crate::error::SheetsError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// HTTP client bound to one spreadsheet.
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    tokens: TokenSource,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetResponse {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRangeResponse {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsClient {
    /// Create a client for `spreadsheet_id` authenticated as `key`.
    ///
    /// * `timeout` - per-request timeout applied to every API call.
    pub fn new(
        spreadsheet_id: String,
        key: ServiceAccountKey,
        timeout: Duration,
    ) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(
            http,
            DEFAULT_BASE_URL.to_string(),
            spreadsheet_id,
            TokenSource::new(key),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`] and token
    /// source, against an arbitrary API root.
    pub fn with_client(
        http: reqwest::Client,
        base_url: String,
        spreadsheet_id: String,
        tokens: TokenSource,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id,
            tokens,
        }
    }

    // ---- private helpers ----

    /// `{base}/spreadsheets/{id}` followed by `segments`, each percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, SheetsError> {
        let mut url = reqwest::Url::parse(&format!("{}/spreadsheets", self.base_url))
            .map_err(|e| SheetsError::InvalidRange(format!("bad base url: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SheetsError::InvalidRange("base url cannot be a base".into()))?;
            path.push(&self.spreadsheet_id);
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Same as [`Self::url`] but with the last segment suffixed by a
    /// custom method (`:batchUpdate`, `:append`).
    fn method_url(&self, segments: &[&str], method: &str) -> Result<reqwest::Url, SheetsError> {
        match segments.split_last() {
            Some((last, rest)) => {
                let suffixed = format!("{last}:{method}");
                let mut all: Vec<&str> = rest.to_vec();
                all.push(&suffixed);
                self.url(&all)
            }
            None => {
                let mut url = self.url(&[])?;
                let path = format!("{}:{method}", url.path());
                url.set_path(&path);
                Ok(url)
            }
        }
    }

    async fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, SheetsError> {
        let token = self.tokens.access_token(&self.http).await?;
        let response = builder.bearer_auth(token).send().await?;
        Self::ensure_success(response).await
    }

    /// Map non-2xx statuses onto [`SheetsError`]. 401/403 mean the
    /// spreadsheet is not shared with the service identity.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        match status.as_u16() {
            401 | 403 => Err(SheetsError::PermissionDenied(body)),
            code => Err(SheetsError::Api { status: code, body }),
        }
    }
}

/// Sheets returns numbers and booleans as JSON scalars when asked for
/// unformatted values; flatten everything to text.
fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn batch_request_json(request: &BatchRequest) -> Value {
    match request {
        BatchRequest::AddSheet { title } => json!({
            "addSheet": { "properties": { "title": title } }
        }),
        BatchRequest::DeleteRows {
            sheet_id,
            start_index,
            end_index,
        } => json!({
            "deleteDimension": {
                "range": {
                    "sheetId": sheet_id,
                    "dimension": "ROWS",
                    "startIndex": start_index,
                    "endIndex": end_index,
                }
            }
        }),
    }
}

#[async_trait]
impl SheetsClient for GoogleSheetsClient {
    fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    async fn spreadsheet(&self) -> Result<SpreadsheetMeta, SheetsError> {
        let url = self.url(&[])?;
        tracing::debug!(spreadsheet_id = %self.spreadsheet_id, "Fetching spreadsheet metadata");
        let response = self
            .authorized(self.http.get(url).query(&[("fields", "sheets.properties")]))
            .await?;
        let body: SpreadsheetResponse = response.json().await?;
        Ok(SpreadsheetMeta {
            sheets: body
                .sheets
                .into_iter()
                .map(|s| SheetMeta {
                    sheet_id: s.properties.sheet_id,
                    title: s.properties.title,
                })
                .collect(),
        })
    }

    async fn batch_update(&self, requests: Vec<BatchRequest>) -> Result<(), SheetsError> {
        if requests.is_empty() {
            return Ok(());
        }
        let url = self.method_url(&[], "batchUpdate")?;
        let body = json!({
            "requests": requests.iter().map(batch_request_json).collect::<Vec<_>>(),
        });
        tracing::debug!(count = requests.len(), "Sending batchUpdate");
        self.authorized(self.http.post(url).json(&body)).await?;
        Ok(())
    }

    async fn get_values(&self, range: &str) -> Result<Rows, SheetsError> {
        let url = self.url(&["values", range])?;
        tracing::debug!(%range, "values.get");
        let response = self.authorized(self.http.get(url)).await?;
        let body: ValueRangeResponse = response.json().await?;
        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    async fn update_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError> {
        let url = self.url(&["values", range])?;
        let body = json!({ "range": range, "majorDimension": "ROWS", "values": rows });
        tracing::debug!(%range, "values.update");
        self.authorized(
            self.http
                .put(url)
                .query(&[("valueInputOption", "RAW")])
                .json(&body),
        )
        .await?;
        Ok(())
    }

    async fn append_values(&self, range: &str, rows: Rows) -> Result<(), SheetsError> {
        let url = self.method_url(&["values", range], "append")?;
        tracing::debug!(%range, rows = rows.len(), "values.append");
        let body = json!({ "range": range, "majorDimension": "ROWS", "values": rows });
        self.authorized(
            self.http
                .post(url)
                .query(&[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")])
                .json(&body),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleSheetsClient {
        let key = ServiceAccountKey::new("bot@example.com", "unused");
        GoogleSheetsClient::with_client(
            reqwest::Client::new(),
            "https://sheets.example.test/v4/".to_string(),
            "sheet-123".to_string(),
            TokenSource::new(key),
        )
    }

    #[test]
    fn builds_values_urls_with_encoded_ranges() {
        let url = client().url(&["values", "'Drive Links'!A2:G"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.example.test/v4/spreadsheets/sheet-123/values/'Drive%20Links'!A2:G"
        );
    }

    #[test]
    fn builds_custom_method_urls() {
        let c = client();
        assert_eq!(
            c.method_url(&[], "batchUpdate").unwrap().as_str(),
            "https://sheets.example.test/v4/spreadsheets/sheet-123:batchUpdate"
        );
        assert_eq!(
            c.method_url(&["values", "Users!A:I"], "append").unwrap().as_str(),
            "https://sheets.example.test/v4/spreadsheets/sheet-123/values/Users!A:I:append"
        );
    }

    #[test]
    fn flattens_scalar_cells() {
        assert_eq!(cell_to_string(json!("abc")), "abc");
        assert_eq!(cell_to_string(json!(42)), "42");
        assert_eq!(cell_to_string(json!(true)), "true");
        assert_eq!(cell_to_string(Value::Null), "");
    }

    #[test]
    fn delete_rows_serializes_as_delete_dimension() {
        let request = BatchRequest::DeleteRows {
            sheet_id: 7,
            start_index: 4,
            end_index: 5,
        };
        let value = batch_request_json(&request);
        assert_eq!(value["deleteDimension"]["range"]["dimension"], "ROWS");
        assert_eq!(value["deleteDimension"]["range"]["startIndex"], 4);
    }
}
