//! Contract tests for the in-memory store.

use survey_core::project::ProjectDraft;
use survey_core::status::ProjectStatus;
use survey_db::store::{LookupStore, MemoryStore, ProjectStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(company: &str, site: &str) -> ProjectDraft {
    ProjectDraft {
        status: ProjectStatus::Unquoted,
        company_name: company.to_string(),
        site_name: site.to_string(),
        equipment: "[]".to_string(),
        client_contact: None,
        photographer: None,
        shoot_period: None,
        start_date: None,
        end_date: None,
        drawing_model: None,
        remarks: None,
        site_address: None,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_ids_and_attribution() {
    let store = MemoryStore::new();
    let first = store.create(&draft("タクマ", "新江東"), "管理者").await.unwrap();
    let second = store.create(&draft("タクマ", "猪子石"), "管理者").await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.created_by, "管理者");
    assert_eq!(first.updated_by, "管理者");
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn list_orders_by_most_recent_update() {
    let store = MemoryStore::new();
    let older = store.create(&draft("A", "a"), "x").await.unwrap();
    let newer = store.create(&draft("B", "b"), "x").await.unwrap();

    let ids: Vec<_> = store.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    // Touching the older row moves it to the front.
    store
        .update(older.id, &draft("A", "a2"), "y")
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<_> = store.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_creator() {
    let store = MemoryStore::new();
    let mut initial = draft("タクマ", "新江東");
    initial.remarks = Some("pro3 ソリューション1台".to_string());
    let created = store.create(&initial, "管理者").await.unwrap();

    let mut replacement = draft("タクマ", "新江東");
    replacement.status = ProjectStatus::Completed;
    replacement.equipment = r#"["FARO"]"#.to_string();
    let updated = store
        .update(created.id, &replacement, "山根")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.equipment, r#"["FARO"]"#);
    assert_eq!(updated.remarks, None);
    assert_eq!(updated.created_by, "管理者");
    assert_eq!(updated.updated_by, "山根");
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn missing_rows_are_reported() {
    let store = MemoryStore::new();
    assert!(store.find_by_id(42).await.unwrap().is_none());
    assert!(store.update(42, &draft("A", "a"), "x").await.unwrap().is_none());
    assert!(!store.delete(42).await.unwrap());
}

#[tokio::test]
async fn delete_removes_row() {
    let store = MemoryStore::new();
    let created = store.create(&draft("A", "a"), "x").await.unwrap();
    assert!(store.delete(created.id).await.unwrap());
    assert!(store.find_by_id(created.id).await.unwrap().is_none());
    assert!(store.list().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Master data
// ---------------------------------------------------------------------------

#[tokio::test]
async fn master_data_is_seeded() {
    let store = MemoryStore::new();

    let equipment: Vec<_> = store
        .list_equipment()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(equipment, vec!["FARO", "L2pro", "Pro3", "RTC", "BLK", "Pro2"]);

    let statuses = store.list_statuses().await.unwrap();
    assert_eq!(statuses.len(), 5);
    assert_eq!(statuses[0].name, "未見積");
    assert_eq!(statuses[4].name, "ボツ");
    assert!(statuses.windows(2).all(|w| w[0].sort_order < w[1].sort_order));

    assert_eq!(store.list_users().await.unwrap()[0].name, "管理者");
}
