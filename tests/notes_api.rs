//! Note endpoints integration tests
//!
//! CRUD plus the hiding ownership policy: a note belonging to another user
//! is reported 404, never 403.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn listing_requires_authentication() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/notes", None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_with_defaults() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    let res = app
        .post("/api/notes", Some(&ann.token), json!({ "title": "groceries" }))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["title"], "groceries");
    assert_eq!(res.body["archived"], false);
    assert_eq!(res.body["pinned"], false);
    assert_eq!(res.body["color"], "default");
    assert_eq!(res.body["labelIds"], json!([]));
    assert_eq!(res.body["ticks"], json!([]));
    // The owner column never leaves the server.
    assert!(res.body.get("userId").is_none());
}

#[tokio::test]
async fn create_with_ticks_and_labels() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;
    let label_id = Uuid::new_v4().to_string();

    let res = app
        .post(
            "/api/notes",
            Some(&ann.token),
            json!({
                "title": "groceries",
                "pinned": true,
                "color": "yellow",
                "text": "for saturday",
                "labelIds": [label_id],
                "ticks": [{ "name": "milk", "ticked": true }, { "name": "eggs" }]
            }),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["pinned"], true);
    assert_eq!(res.body["color"], "yellow");
    assert_eq!(res.body["labelIds"][0], label_id);
    assert_eq!(res.body["ticks"][0], json!({ "name": "milk", "ticked": true }));
    assert_eq!(res.body["ticks"][1], json!({ "name": "eggs", "ticked": false }));
}

#[tokio::test]
async fn title_bounds_are_enforced() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    let empty = app
        .post("/api/notes", Some(&ann.token), json!({ "title": "" }))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let at_bound = app
        .post(
            "/api/notes",
            Some(&ann.token),
            json!({ "title": "a".repeat(255) }),
        )
        .await;
    assert_eq!(at_bound.status, StatusCode::OK);

    let over_bound = app
        .post(
            "/api/notes",
            Some(&ann.token),
            json!({ "title": "a".repeat(256) }),
        )
        .await;
    assert_eq!(over_bound.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_is_owner_scoped() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;
    let bob = app.seed_user("Bob", "bob@test.com", "secret").await;

    app.post("/api/notes", Some(&ann.token), json!({ "title": "ann's" }))
        .await;
    app.post("/api/notes", Some(&bob.token), json!({ "title": "bob's" }))
        .await;

    let res = app.get("/api/notes", Some(&ann.token)).await;
    let notes = res.body.as_array().unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "ann's");
}

#[tokio::test]
async fn foreign_note_is_reported_missing_not_forbidden() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;
    let bob = app.seed_user("Bob", "bob@test.com", "secret").await;

    let created = app
        .post("/api/notes", Some(&ann.token), json!({ "title": "secret" }))
        .await;
    let note_id = created.body["id"].as_str().unwrap().to_string();

    let fetch = app
        .get(&format!("/api/notes/{note_id}"), Some(&bob.token))
        .await;
    assert_eq!(fetch.status, StatusCode::NOT_FOUND);
    assert_eq!(fetch.error_message(), "Note not found.");

    let update = app
        .put(
            &format!("/api/notes/{note_id}"),
            Some(&bob.token),
            json!({ "title": "stolen" }),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .delete(&format!("/api/notes/{note_id}"), Some(&bob.token))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    // The owner still sees the untouched note.
    let own = app
        .get(&format!("/api/notes/{note_id}"), Some(&ann.token))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["title"], "secret");
}

#[tokio::test]
async fn fetch_handles_bad_and_missing_ids() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    let bad_shape = app.get("/api/notes/1", Some(&ann.token)).await;
    assert_eq!(bad_shape.status, StatusCode::NOT_FOUND);

    let missing = app
        .get(&format!("/api/notes/{}", Uuid::new_v4()), Some(&ann.token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_archives_and_keeps_absent_fields() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    let created = app
        .post(
            "/api/notes",
            Some(&ann.token),
            json!({ "title": "groceries", "color": "yellow" }),
        )
        .await;
    let note_id = created.body["id"].as_str().unwrap().to_string();

    let updated = app
        .put(
            &format!("/api/notes/{note_id}"),
            Some(&ann.token),
            json!({ "title": "errands", "archived": true }),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "errands");
    assert_eq!(updated.body["archived"], true);
    // Absent fields keep their stored values.
    assert_eq!(updated.body["color"], "yellow");
}

#[tokio::test]
async fn archive_listing_returns_only_archived_notes() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    app.post("/api/notes", Some(&ann.token), json!({ "title": "active" }))
        .await;
    let created = app
        .post("/api/notes", Some(&ann.token), json!({ "title": "done" }))
        .await;
    let note_id = created.body["id"].as_str().unwrap().to_string();
    app.put(
        &format!("/api/notes/{note_id}"),
        Some(&ann.token),
        json!({ "title": "done", "archived": true }),
    )
    .await;

    let res = app.get("/api/notes/archive", Some(&ann.token)).await;
    let notes = res.body.as_array().unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["title"], "done");

    // The main listing still carries both.
    let all = app.get("/api/notes", Some(&ann.token)).await;
    assert_eq!(all.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn delete_returns_the_note_once() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;

    let created = app
        .post("/api/notes", Some(&ann.token), json!({ "title": "groceries" }))
        .await;
    let note_id = created.body["id"].as_str().unwrap().to_string();

    let deleted = app
        .delete(&format!("/api/notes/{note_id}"), Some(&ann.token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["title"], "groceries");

    let again = app
        .delete(&format!("/api/notes/{note_id}"), Some(&ann.token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_all_reports_count_and_spares_other_owners() {
    let app = TestApp::spawn().await;
    let ann = app.seed_user("Ann", "ann@test.com", "secret").await;
    let bob = app.seed_user("Bob", "bob@test.com", "secret").await;

    app.post("/api/notes", Some(&ann.token), json!({ "title": "one" }))
        .await;
    app.post("/api/notes", Some(&ann.token), json!({ "title": "two" }))
        .await;
    app.post("/api/notes", Some(&bob.token), json!({ "title": "bob's" }))
        .await;

    let res = app.delete("/api/notes", Some(&ann.token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["deletedCount"], 2);

    // Nothing left to delete.
    let res = app.delete("/api/notes", Some(&ann.token)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    // Bob's note survived.
    let bobs = app.get("/api/notes", Some(&bob.token)).await;
    assert_eq!(bobs.body.as_array().unwrap().len(), 1);
}
