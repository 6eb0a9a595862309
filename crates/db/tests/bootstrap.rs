//! Integration tests for worksheet bootstrap.

use std::sync::Arc;

use assert_matches::assert_matches;
use vhub_db::codec::DecodePolicy;
use vhub_db::models::drive_link::CreateDriveLink;
use vhub_db::{Storage, StoreError};
use vhub_sheets::MemorySheetsClient;

const ALL_TABS: [&str; 10] = [
    "Users",
    "Projects",
    "Messages",
    "WeeklyReports",
    "SandwichCollections",
    "MeetingMinutes",
    "DriveLinks",
    "ProjectTasks",
    "TaskCompletions",
    "ProjectComments",
];

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn test_creates_every_tab_with_header() {
    let client = Arc::new(MemorySheetsClient::default());
    let storage = Storage::new(client.clone(), DecodePolicy::default());

    let created = storage.ensure_worksheets().await.unwrap();

    assert_eq!(created, ALL_TABS);
    assert_eq!(
        client.sheet_rows("Projects").unwrap(),
        [row(&[
            "id",
            "title",
            "description",
            "status",
            "assigneeId",
            "assigneeName",
            "color",
            "deletedAt",
        ])]
    );
    for tab in ALL_TABS {
        let header = &client.sheet_rows(tab).unwrap()[0];
        assert_eq!(header[0], "id", "{tab} key column");
        assert_eq!(header.last().unwrap(), "deletedAt", "{tab} tombstone column");
    }
}

#[tokio::test]
async fn test_second_run_creates_nothing() {
    let client = Arc::new(MemorySheetsClient::default());
    let storage = Storage::new(client.clone(), DecodePolicy::default());

    storage.ensure_worksheets().await.unwrap();
    let again = storage.ensure_worksheets().await.unwrap();

    assert!(again.is_empty());
}

#[tokio::test]
async fn test_existing_tab_is_left_alone() {
    let client = Arc::new(
        MemorySheetsClient::default()
            .with_sheet("Projects", vec![row(&["id", "title"]), row(&["4", "Old"])]),
    );
    let storage = Storage::new(client.clone(), DecodePolicy::default());

    let created = storage.ensure_worksheets().await.unwrap();

    assert!(!created.contains(&"Projects".to_string()));
    assert_eq!(created.len(), ALL_TABS.len() - 1);
    assert_eq!(client.sheet_rows("Projects").unwrap()[1], row(&["4", "Old"]));
}

#[tokio::test]
async fn test_bootstrap_runs_once_per_storage() {
    let client = Arc::new(MemorySheetsClient::default());
    let storage = Storage::new(client.clone(), DecodePolicy::default());

    storage.projects().list().await.unwrap();
    storage.users().list().await.unwrap();
    storage.messages().list().await.unwrap();

    assert_eq!(client.metadata_fetches(), 1);
}

#[tokio::test]
async fn test_denied_access_is_permission_error() {
    let client = Arc::new(MemorySheetsClient::new("sheet-123"));
    client.set_deny_access(true);
    let storage = Storage::new(client.clone(), DecodePolicy::default());

    let err = storage.ensure_worksheets().await.unwrap_err();
    assert_matches!(
        err,
        StoreError::PermissionDenied { ref spreadsheet_id, .. } if spreadsheet_id == "sheet-123"
    );

    let err = storage.projects().list().await.unwrap_err();
    assert_matches!(err, StoreError::PermissionDenied { .. });
}

#[tokio::test]
async fn test_failed_bootstrap_is_retried() {
    let client = Arc::new(MemorySheetsClient::default());
    client.set_deny_access(true);
    let storage = Storage::new(client.clone(), DecodePolicy::default());
    assert!(storage.projects().list().await.is_err());

    client.set_deny_access(false);
    let link = storage
        .drive_links()
        .create(&CreateDriveLink {
            title: "Retry".to_string(),
            description: None,
            url: "https://drive.example/retry".to_string(),
            icon: None,
            icon_color: None,
        })
        .await
        .unwrap();

    assert_eq!(link.id, 1);
    assert_eq!(client.metadata_fetches(), 2);
}

#[tokio::test]
async fn test_health_check_reports_tabs() {
    let client = Arc::new(MemorySheetsClient::default());
    let storage = Storage::new(client.clone(), DecodePolicy::default());
    storage.ensure_worksheets().await.unwrap();

    let meta = storage.health_check().await.unwrap();
    assert_eq!(meta.sheets.len(), ALL_TABS.len());

    client.set_deny_access(true);
    assert_matches!(
        storage.health_check().await,
        Err(StoreError::PermissionDenied { .. })
    );
}
