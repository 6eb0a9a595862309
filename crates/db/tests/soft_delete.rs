//! Integration tests for delete and restore.
//!
//! Verifies that:
//! - Deleted records are hidden from `find_by_id` and list queries
//! - Deleting leaves the row in place, so the row count does not change
//! - Ids of deleted records are never handed out again
//! - Deleting twice, or deleting an unknown id, returns `false`
//! - Restoring makes a record visible again

use std::sync::Arc;

use vhub_db::codec::DecodePolicy;
use vhub_db::models::drive_link::CreateDriveLink;
use vhub_db::models::project::CreateProject;
use vhub_db::Storage;
use vhub_sheets::MemorySheetsClient;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn storage() -> (Arc<MemorySheetsClient>, Storage) {
    let client = Arc::new(MemorySheetsClient::default());
    let storage = Storage::new(client.clone(), DecodePolicy::default());
    (client, storage)
}

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: None,
        status: None,
        assignee_id: None,
        assignee_name: None,
        color: None,
    }
}

fn new_link(title: &str) -> CreateDriveLink {
    CreateDriveLink {
        title: title.to_string(),
        description: None,
        url: format!("https://drive.example/{title}"),
        icon: None,
        icon_color: None,
    }
}

// ---------------------------------------------------------------------------
// Test: delete hides the record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_hides_from_find_and_list() {
    let (_, storage) = storage();
    let keep = storage.projects().create(&new_project("Keep")).await.unwrap();
    let gone = storage.projects().create(&new_project("Gone")).await.unwrap();

    assert!(storage.projects().delete(gone.id).await.unwrap());

    assert!(storage.projects().find_by_id(gone.id).await.unwrap().is_none());
    let ids: Vec<i64> = storage
        .projects()
        .list()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, [keep.id]);
}

#[tokio::test]
async fn test_delete_keeps_row_count() {
    let (client, storage) = storage();
    for title in ["a", "b", "c"] {
        storage.drive_links().create(&new_link(title)).await.unwrap();
    }
    let before = client.row_count("DriveLinks");

    assert!(storage.drive_links().delete(2).await.unwrap());

    assert_eq!(client.row_count("DriveLinks"), before);
    let rows = client.sheet_rows("DriveLinks").unwrap();
    assert_eq!(rows[2][0], "2");
    assert!(!rows[2].last().unwrap().is_empty(), "tombstone should be set");
}

// ---------------------------------------------------------------------------
// Test: ids are never reused
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_deleting_newest_record_does_not_recycle_its_id() {
    let (_, storage) = storage();
    storage.projects().create(&new_project("One")).await.unwrap();
    let newest = storage.projects().create(&new_project("Two")).await.unwrap();

    storage.projects().delete(newest.id).await.unwrap();
    let next = storage.projects().create(&new_project("Three")).await.unwrap();

    assert_eq!(next.id, 3);
}

#[tokio::test]
async fn test_ids_stay_monotonic_across_mixed_operations() {
    let (_, storage) = storage();
    let mut seen = Vec::new();
    for round in 0..4 {
        let project = storage
            .projects()
            .create(&new_project(&format!("R{round}")))
            .await
            .unwrap();
        if round % 2 == 0 {
            storage.projects().delete(project.id).await.unwrap();
        }
        seen.push(project.id);
    }

    assert_eq!(seen, [1, 2, 3, 4]);
}

// ---------------------------------------------------------------------------
// Test: idempotence and unknown ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_, storage) = storage();
    let project = storage.projects().create(&new_project("Twice")).await.unwrap();

    assert!(storage.projects().delete(project.id).await.unwrap());
    assert!(!storage.projects().delete(project.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_unknown_id_returns_false() {
    let (_, storage) = storage();
    assert!(!storage.projects().delete(77).await.unwrap());
    assert!(!storage.users().delete(77).await.unwrap());
    assert!(!storage.messages().delete(77).await.unwrap());
}

#[tokio::test]
async fn test_update_after_delete_returns_none() {
    let (_, storage) = storage();
    let project = storage.projects().create(&new_project("Stale")).await.unwrap();
    storage.projects().delete(project.id).await.unwrap();

    let result = storage
        .projects()
        .update(project.id, &Default::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: restore
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_restore_makes_record_visible() {
    let (_, storage) = storage();
    let project = storage.projects().create(&new_project("Back")).await.unwrap();
    storage.projects().delete(project.id).await.unwrap();

    assert!(storage.projects().restore(project.id).await.unwrap());

    let found = storage.projects().find_by_id(project.id).await.unwrap();
    assert_eq!(found, Some(project));
}

#[tokio::test]
async fn test_restore_live_or_unknown_returns_false() {
    let (_, storage) = storage();
    let project = storage.projects().create(&new_project("Live")).await.unwrap();

    assert!(!storage.projects().restore(project.id).await.unwrap());
    assert!(!storage.projects().restore(500).await.unwrap());
}
