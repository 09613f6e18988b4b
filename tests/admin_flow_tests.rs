
use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use portfolio_admin::{
    errors::StoreError,
    repositories::{
        data_store::{DataStore, OrderBy},
        memory_store::MemoryStore,
    },
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

/// In-memory store whose listings take a while, like a slow backend.
struct SlowListStore {
    inner: Arc<MemoryStore>,
    delay: Duration,
}

impl SlowListStore {
    fn new(inner: Arc<MemoryStore>, delay: Duration) -> Self {
        SlowListStore { inner, delay }
    }
}

#[async_trait]
impl DataStore for SlowListStore {
    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Value>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list(collection, order).await
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        self.inner.get_by_id(collection, id).await
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<Value, StoreError> {
        self.inner.insert(collection, record).await
    }

    async fn update_by_id(&self, collection: &str, id: &str, patch: Value) -> Result<Value, StoreError> {
        self.inner.update_by_id(collection, id, patch).await
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.inner.delete_by_id(collection, id).await
    }

    async fn upsert(&self, collection: &str, record: Value) -> Result<(), StoreError> {
        self.inner.upsert(collection, record).await
    }
}

#[actix_rt::test]
async fn health_check_reports_healthy() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/admin/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn empty_store_lists_empty_tables() {
    let app = TestApp::spawn().await;

    let projects: Value = app.get("/api/v1/admin/projects").await.json().await.unwrap();
    assert_eq!(projects["table"], json!({ "state": "empty" }));
    assert_eq!(projects["session"], json!({ "mode": "idle" }));
    assert!(projects["notification"].is_null());

    let skills: Value = app.get("/api/v1/admin/skills").await.json().await.unwrap();
    assert_eq!(skills["table"], json!({ "state": "empty" }));

    let content: Value = app.get("/api/v1/admin/content").await.json().await.unwrap();
    assert_eq!(content["view"], json!({ "state": "empty" }));
    assert_eq!(content["form"]["hero_name"], Value::Null);
}

#[actix_rt::test]
async fn submit_without_session_adds_project() {
    let app = TestApp::spawn().await;

    let snapshot = app.submit_project("First").await;

    assert_eq!(notification_level(&snapshot), "success");
    assert_eq!(notification_message(&snapshot), "Project added!");
    assert_eq!(snapshot["session"], json!({ "mode": "idle" }));
    assert_eq!(snapshot["form"]["title"], "");
    assert_eq!(table_ids(&snapshot).len(), 1);
    assert_eq!(app.store.row_count("projects"), 1);
}

#[actix_rt::test]
async fn projects_are_listed_newest_first() {
    let app = TestApp::spawn().await;
    app.submit_project("Older").await;
    app.submit_project("Newer").await;

    let snapshot: Value = app.get("/api/v1/admin/projects").await.json().await.unwrap();

    let titles: Vec<&str> = snapshot["table"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[actix_rt::test]
async fn switching_edit_target_updates_only_the_last_one() {
    let app = TestApp::spawn().await;
    app.submit_project("A").await;
    let snapshot = app.submit_project("B").await;
    let ids = table_ids(&snapshot);
    let (id_b, id_a) = (ids[0].clone(), ids[1].clone());

    app.get(&format!("/api/v1/admin/projects/{}/edit", id_a)).await;
    let editing: Value = app
        .get(&format!("/api/v1/admin/projects/{}/edit", id_b))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(editing["session"], json!({ "mode": "editing", "id": id_b }));
    assert_eq!(editing["form"]["title"], "B");
    assert_eq!(notification_level(&editing), "info");

    let mut form = editing["form"].clone();
    form["title"] = json!("B renamed");
    let saved: Value = app
        .post_json("/api/v1/admin/projects", &form)
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&saved), "Project updated!");
    assert_eq!(saved["session"], json!({ "mode": "idle" }));
    assert_eq!(app.store.row_count("projects"), 2);

    let rows = saved["table"]["data"].as_array().unwrap();
    let title_of = |id: &str| {
        rows.iter()
            .find(|row| row["id"] == id)
            .map(|row| row["title"].as_str().unwrap().to_string())
    };
    assert_eq!(title_of(&id_a).as_deref(), Some("A"));
    assert_eq!(title_of(&id_b).as_deref(), Some("B renamed"));
}

#[actix_rt::test]
async fn editing_a_missing_project_keeps_the_session() {
    let app = TestApp::spawn().await;

    let snapshot: Value = app
        .get("/api/v1/admin/projects/404/edit")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_level(&snapshot), "error");
    assert_eq!(snapshot["session"], json!({ "mode": "idle" }));
}

#[actix_rt::test]
async fn cancel_returns_to_create_mode() {
    let app = TestApp::spawn().await;
    let snapshot = app.submit_project("A").await;
    let id = table_ids(&snapshot)[0].clone();
    app.get(&format!("/api/v1/admin/projects/{}/edit", id)).await;

    let cancelled: Value = app
        .post_empty("/api/v1/admin/projects/cancel")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(cancelled["session"], json!({ "mode": "idle" }));
    assert_eq!(cancelled["form"]["title"], "");

    app.submit_project("C").await;
    assert_eq!(app.store.row_count("projects"), 2);
}

#[actix_rt::test]
async fn begin_create_clears_form_and_session() {
    let app = TestApp::spawn().await;
    let snapshot = app.submit_project("A").await;
    let id = table_ids(&snapshot)[0].clone();
    app.get(&format!("/api/v1/admin/projects/{}/edit", id)).await;

    let fresh: Value = app
        .post_empty("/api/v1/admin/projects/new")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(fresh["session"], json!({ "mode": "idle" }));
    assert_eq!(fresh["form"]["description"], "");
}

#[actix_rt::test]
async fn delete_requires_confirmation() {
    let app = TestApp::spawn().await;
    let snapshot = app.submit_project("Keep").await;
    let id = table_ids(&snapshot)[0].clone();

    let response = app.delete(&format!("/api/v1/admin/projects/{}", id)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("confirm"));
    assert_eq!(app.store.row_count("projects"), 1);
}

#[actix_rt::test]
async fn deleting_the_edited_project_resets_the_session() {
    let app = TestApp::spawn().await;
    let snapshot = app.submit_project("Doomed").await;
    let id = table_ids(&snapshot)[0].clone();
    app.get(&format!("/api/v1/admin/projects/{}/edit", id)).await;

    let deleted: Value = app
        .delete(&format!("/api/v1/admin/projects/{}?confirm=true", id))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&deleted), "Project deleted successfully!");
    assert_eq!(deleted["session"], json!({ "mode": "idle" }));
    assert_eq!(deleted["table"], json!({ "state": "empty" }));
}

#[actix_rt::test]
async fn deleting_another_project_also_ends_the_edit() {
    let app = TestApp::spawn().await;
    app.submit_project("Kept").await;
    let snapshot = app.submit_project("Removed").await;
    let ids = table_ids(&snapshot);
    let (removed, kept) = (ids[0].clone(), ids[1].clone());
    app.get(&format!("/api/v1/admin/projects/{}/edit", kept)).await;

    let deleted: Value = app
        .delete(&format!("/api/v1/admin/projects/{}?confirm=true", removed))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_level(&deleted), "success");
    assert_eq!(deleted["session"], json!({ "mode": "idle" }));
    assert_eq!(deleted["form"]["title"], "");
    assert_eq!(table_ids(&deleted), vec![kept]);
}

#[actix_rt::test]
async fn deleting_a_missing_project_succeeds() {
    let app = TestApp::spawn().await;

    let response = app.delete("/api/v1/admin/projects/999?confirm=true").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(notification_level(&body), "success");
}

#[actix_rt::test]
async fn malformed_ids_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/admin/projects/1,2/edit").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn overlapping_submit_is_refused() {
    let app = TestApp::spawn().await;
    let editor = app.state.project_editors.editor("busy-admin");
    let _in_flight = editor.write().await.unwrap();

    let response = app
        .client
        .post(app.url("/api/v1/admin/projects"))
        .header("x-admin-session", "busy-admin")
        .json(&json!({ "title": "Twice" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(app.store.row_count("projects"), 0);
}

#[actix_rt::test]
async fn slow_listing_does_not_refuse_a_submit() {
    let app = TestApp::spawn_with(|memory| {
        Arc::new(SlowListStore::new(memory, Duration::from_millis(300))) as Arc<dyn DataStore>
    })
    .await;
    app.post_empty("/api/v1/admin/projects/new").await;

    let listing = app.get("/api/v1/admin/projects");
    let submitting = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.post_json("/api/v1/admin/projects", &json!({ "title": "During list" }))
            .await
    };
    let (listed, submitted) = tokio::join!(listing, submitting);

    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(submitted.status(), StatusCode::OK);
    let body: Value = submitted.json().await.unwrap();
    assert_eq!(notification_message(&body), "Project added!");
    assert_eq!(app.store.row_count("projects"), 1);
}

#[actix_rt::test]
async fn admins_in_separate_sessions_keep_their_own_edit_target() {
    let app = TestApp::spawn().await;
    let snapshot = app.submit_project("A").await;
    let id = table_ids(&snapshot)[0].clone();
    let editing: Value = app
        .get(&format!("/api/v1/admin/projects/{}/edit", id))
        .await
        .json()
        .await
        .unwrap();

    let other_admin = admin_client();
    let other: Value = other_admin
        .post(app.url("/api/v1/admin/projects/new"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(other["session"], json!({ "mode": "idle" }));

    let mut form = editing["form"].clone();
    form["title"] = json!("A-edited");
    let saved: Value = app
        .post_json("/api/v1/admin/projects", &form)
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&saved), "Project updated!");
    assert_eq!(app.store.row_count("projects"), 1);
    assert_eq!(saved["table"]["data"][0]["title"], "A-edited");
}

#[actix_rt::test]
async fn first_request_issues_a_session_cookie() {
    let app = TestApp::spawn().await;

    let response = reqwest::get(app.url("/api/v1/admin/projects")).await.unwrap();

    let cookie = response
        .cookies()
        .find(|c| c.name() == "admin_session")
        .expect("no session cookie");
    assert!(!cookie.value().is_empty());
}

#[actix_rt::test]
async fn invalid_json_body_returns_json_error() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/admin/projects"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn skills_are_added_in_id_order_and_deleted() {
    let app = TestApp::spawn().await;

    app.post_json(
        "/api/v1/admin/skills",
        &json!({ "name": "Rust", "icon_class": "devicon-rust-plain" }),
    )
    .await;
    let added: Value = app
        .post_json(
            "/api/v1/admin/skills",
            &json!({ "name": "Go", "icon_class": "devicon-go-plain", "description": "gophers" }),
        )
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&added), "Skill added!");
    let names: Vec<&str> = added["table"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Rust", "Go"]);

    let first = table_ids(&added)[0].clone();
    let deleted: Value = app
        .delete(&format!("/api/v1/admin/skills/{}?confirm=true", first))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&deleted), "Skill deleted");
    assert_eq!(table_ids(&deleted).len(), 1);
    assert_eq!(app.store.row_count("skills"), 1);
}

#[actix_rt::test]
async fn saving_content_twice_keeps_a_single_row() {
    let app = TestApp::spawn().await;

    app.put_json(
        "/api/v1/admin/content",
        &json!({ "hero_name": "Ada", "email": "ada@example.com" }),
    )
    .await;
    let saved: Value = app
        .put_json("/api/v1/admin/content", &json!({ "hero_name": "Grace" }))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(notification_message(&saved), "Profile content updated!");
    assert_eq!(app.store.row_count("site_content"), 1);

    let loaded: Value = app.get("/api/v1/admin/content").await.json().await.unwrap();
    assert_eq!(loaded["view"]["state"], "loaded");
    assert_eq!(loaded["view"]["data"]["id"], 1);
    assert_eq!(loaded["form"]["hero_name"], "Grace");
    assert_eq!(loaded["form"]["email"], Value::Null);
}

#[actix_rt::test]
async fn dashboard_counts_projects() {
    let app = TestApp::spawn().await;
    app.submit_project("One").await;
    app.submit_project("Two").await;

    let body: Value = app.get("/api/v1/admin/dashboard").await.json().await.unwrap();

    assert_eq!(body["total_projects"], 2);
    assert_eq!(body["last_updated_label"], "Today");
}

#[actix_rt::test]
async fn public_portfolio_reflects_admin_changes() {
    let app = TestApp::spawn().await;
    app.submit_project("Showcase").await;

    let cards: Value = app.get("/api/v1/portfolio/projects").await.json().await.unwrap();
    assert_eq!(cards[0]["title"], "Showcase");
    assert_eq!(cards[0]["tech_tags"], json!(["Rust", "Actix"]));

    let content = app.get("/api/v1/portfolio/content").await;
    assert_eq!(content.status(), StatusCode::OK);
}
