//! Worksheet bootstrap: make sure every tab exists with its header row.

use std::sync::Arc;

use tokio::sync::OnceCell;
use vhub_sheets::{A1Range, BatchRequest, SheetsClient};

use crate::error::StoreError;
use crate::sheet::SheetLayout;

/// Create every tab in `layouts` that the spreadsheet is missing, then write
/// each new tab's header row. Returns the names of the tabs created.
///
/// Idempotent. Any failure is logged and reported as
/// [`StoreError::PermissionDenied`]: in practice it means the spreadsheet is
/// not shared with the service account, and retrying will not help.
pub async fn ensure_worksheets(
    client: &dyn SheetsClient,
    layouts: &[SheetLayout],
) -> Result<Vec<String>, StoreError> {
    let denied = |err: vhub_sheets::SheetsError| {
        tracing::error!(
            spreadsheet_id = client.spreadsheet_id(),
            error = %err,
            "Worksheet bootstrap failed; is the spreadsheet shared with the service account?"
        );
        StoreError::PermissionDenied {
            spreadsheet_id: client.spreadsheet_id().to_string(),
            reason: err.to_string(),
        }
    };

    let meta = client.spreadsheet().await.map_err(denied)?;
    let missing: Vec<&SheetLayout> = layouts
        .iter()
        .filter(|layout| meta.sheet(layout.name).is_none())
        .collect();

    if missing.is_empty() {
        return Ok(Vec::new());
    }

    let requests = missing
        .iter()
        .map(|layout| BatchRequest::AddSheet {
            title: layout.name.to_string(),
        })
        .collect();
    client.batch_update(requests).await.map_err(denied)?;

    for layout in &missing {
        let range = A1Range::row(layout.name, layout.header.len() as u32, 1);
        client
            .update_values(&range.to_string(), vec![layout.header.clone()])
            .await
            .map_err(denied)?;
        tracing::info!(sheet = layout.name, "Created worksheet");
    }

    Ok(missing.iter().map(|l| l.name.to_string()).collect())
}

/// Runs [`ensure_worksheets`] once per storage instance.
///
/// Stores call [`Bootstrap::ensure`] before touching their tab. A failed
/// attempt is not remembered, so the next call tries again.
pub struct Bootstrap {
    client: Arc<dyn SheetsClient>,
    layouts: Vec<SheetLayout>,
    ready: OnceCell<()>,
}

impl Bootstrap {
    pub fn new(client: Arc<dyn SheetsClient>, layouts: Vec<SheetLayout>) -> Self {
        Self {
            client,
            layouts,
            ready: OnceCell::new(),
        }
    }

    pub fn layouts(&self) -> &[SheetLayout] {
        &self.layouts
    }

    pub async fn ensure(&self) -> Result<(), StoreError> {
        self.ready
            .get_or_try_init(|| async {
                ensure_worksheets(self.client.as_ref(), &self.layouts)
                    .await
                    .map(|_| ())
            })
            .await
            .map(|_| ())
    }

    /// Run the check unconditionally and return the tabs it created.
    pub async fn run(&self) -> Result<Vec<String>, StoreError> {
        let created = ensure_worksheets(self.client.as_ref(), &self.layouts).await?;
        let _ = self.ready.set(());
        Ok(created)
    }
}
