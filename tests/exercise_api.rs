//! API client contract tests: exercise CRUD passthroughs, the uniform
//! result envelope, and error-message extraction from failure bodies.

use std::net::TcpListener;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fitlink_core::{ApiClient, Exercise};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Some(server.uri())).expect("client should build")
}

fn exercise_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Goblet squat",
        "description": "Squat holding a dumbbell at chest height",
        "muscleGroup": "legs",
        "difficulty": "beginner",
        "videoUrl": null,
        "createdBy": "u-42",
        "createdAt": "2026-01-15T09:30:00Z"
    })
}

#[tokio::test]
async fn list_exercises_hits_catalog_endpoint() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercice/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            exercise_json("ex-1"),
            exercise_json("ex-2")
        ])))
        .mount(&server)
        .await;

    let result = client_for(&server).list_exercises().await;
    assert!(result.success);
    assert_eq!(result.status_code, Some(200));
    let exercises = result.data.ok_or("data missing")?;
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].id.as_deref(), Some("ex-1"));
    Ok(())
}

#[tokio::test]
async fn get_exercise_uses_id_in_path() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercice/get/ex-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercise_json("ex-7")))
        .mount(&server)
        .await;

    let result = client_for(&server).get_exercise("ex-7").await;
    assert!(result.success);
    assert_eq!(
        result.data.and_then(|e| e.id),
        Some("ex-7".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn create_and_update_round_trip() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/exercice/create"))
        .respond_with(ResponseTemplate::new(201).set_body_json(exercise_json("ex-9")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/exercice/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(exercise_json("ex-9")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let draft = Exercise {
        id: None,
        name: "Goblet squat".to_string(),
        description: None,
        muscle_group: Some("legs".to_string()),
        difficulty: Some("beginner".to_string()),
        video_url: None,
        created_by: None,
        created_at: None,
    };

    let created = client.create_exercise(&draft).await;
    assert!(created.success);
    assert_eq!(created.status_code, Some(201));
    let mut saved = created.data.ok_or("data missing")?;
    assert_eq!(saved.id.as_deref(), Some("ex-9"));

    saved.difficulty = Some("intermediate".to_string());
    let updated = client.update_exercise(&saved).await;
    assert!(updated.success);
    Ok(())
}

#[tokio::test]
async fn delete_accepts_plain_text_body() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/exercice/delete/ex-9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let result = client_for(&server).delete_exercise("ex-9").await;
    assert!(result.success);
    assert_eq!(
        result.data,
        Some(serde_json::Value::String("deleted".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn health_check_returns_raw_value() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health/db"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).health_check().await;
    assert!(result.success);
    assert_eq!(result.data.ok_or("data missing")?["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn error_field_is_extracted_when_message_is_absent() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercice/get/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "no such exercise"
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).get_exercise("missing").await;
    assert!(!result.success);
    assert_eq!(result.status_code, Some(404));
    assert!(result.error_message().contains("no such exercise"));
    Ok(())
}

#[tokio::test]
async fn plain_text_error_body_becomes_the_message() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/allUsers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is down"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_users().await;
    assert!(!result.success);
    assert_eq!(result.status_code, Some(500));
    assert!(result.error_message().contains("database is down"));
    Ok(())
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/allUsers"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).list_users().await;
    assert!(!result.success);
    assert_eq!(result.status_code, Some(503));
    assert!(result.error_message().contains("HTTP 503"));
    Ok(())
}

#[tokio::test]
async fn malformed_json_success_body_is_a_transport_failure() -> TestResult {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercice/all"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{truncated", "application/json"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_exercises().await;
    assert!(!result.success);
    assert!(result.status_code.is_none());
    assert!(result.error_message().contains("malformed JSON body"));
    Ok(())
}

#[tokio::test]
async fn missing_base_url_fails_naturally() -> TestResult {
    let client = ApiClient::new(None)?;
    assert_eq!(client.base_url(), "");

    let result = client.list_users().await;
    assert!(!result.success);
    assert!(result.status_code.is_none());
    assert!(!result.error_message().is_empty());
    Ok(())
}
