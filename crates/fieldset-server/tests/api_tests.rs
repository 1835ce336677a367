// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for the HTTP API.
//!
//! Tests cover:
//! - Health and registry endpoints
//! - Folder/document management and sandbox containment
//! - Field add/delete/update/view through the router
//! - Condition editing and the required/condition rule

use axum::{
	body::Body,
	http::{Method, Request, StatusCode},
	Router,
};
use fieldset_server::{create_router, AppState};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn setup_test_app() -> (Router, TempDir) {
	let dir = tempdir().unwrap();
	(create_router(AppState::new(dir.path())), dir)
}

/// Creates a test app with an empty `forms/user.json` document.
fn setup_with_document() -> (Router, TempDir) {
	let (app, dir) = setup_test_app();
	std::fs::create_dir(dir.path().join("forms")).unwrap();
	std::fs::write(dir.path().join("forms/user.json"), "[]").unwrap();
	(app, dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
	let builder = Request::builder().method(method).uri(uri);
	let request = match body {
		Some(body) => builder
			.header("content-type", "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
		None => builder.body(Body::empty()).unwrap(),
	};

	let response = app.clone().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let value = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap_or(Value::Null)
	};
	(status, value)
}

fn field(key: &str, field_type: &str) -> Value {
	json!({ "key": key, "description": "", "field_type": field_type })
}

// ============================================================================
// Health & registry
// ============================================================================

#[tokio::test]
async fn test_health_reports_assets_dir() {
	let (app, dir) = setup_test_app();
	let (status, body) = send(&app, Method::GET, "/health", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["assets_dir"], dir.path().display().to_string());
	assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_unhealthy_without_assets_dir() {
	let dir = tempdir().unwrap();
	let app = create_router(AppState::new(dir.path().join("missing")));
	let (status, body) = send(&app, Method::GET, "/health", None).await;
	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_types_registry() {
	let (app, _dir) = setup_test_app();
	let (status, body) = send(&app, Method::GET, "/api/types", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["field_types"].as_array().unwrap().len(), 7);

	let item_types: Vec<&str> = body["item_types"]
		.as_array()
		.unwrap()
		.iter()
		.map(|e| e["value"].as_str().unwrap())
		.collect();
	assert!(!item_types.contains(&"bool"));
	assert!(!item_types.contains(&"list"));

	let bool_ops = body["type_operators"]
		.as_array()
		.unwrap()
		.iter()
		.find(|t| t["field_type"] == "bool")
		.unwrap();
	assert_eq!(bool_ops["operators"].as_array().unwrap().len(), 2);
	assert_eq!(body["logicals"][1]["label"], "OR");
}

// ============================================================================
// Files
// ============================================================================

#[tokio::test]
async fn test_create_list_and_delete_entries() {
	let (app, dir) = setup_test_app();

	let (status, body) = send(
		&app,
		Method::POST,
		"/api/file?path=",
		Some(json!({ "name": "forms", "file_type": "folder" })),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["message"], "Created");

	let (status, _) = send(
		&app,
		Method::POST,
		"/api/file?path=forms",
		Some(json!({ "name": "user", "file_type": "file" })),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(
		std::fs::read_to_string(dir.path().join("forms/user.json")).unwrap(),
		"[]"
	);

	let (status, body) = send(
		&app,
		Method::POST,
		"/api/file?path=forms",
		Some(json!({ "name": "user.json", "file_type": "file" })),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], "conflict");

	std::fs::write(dir.path().join("Zeta.json"), "[]").unwrap();
	std::fs::write(dir.path().join("alpha.json"), "[]").unwrap();
	let (status, body) = send(&app, Method::GET, "/api/files?path=", None).await;
	assert_eq!(status, StatusCode::OK);
	let names: Vec<&str> = body
		.as_array()
		.unwrap()
		.iter()
		.map(|e| e["name"].as_str().unwrap())
		.collect();
	assert_eq!(names, vec!["forms", "alpha.json", "Zeta.json"]);
	assert_eq!(body[0]["file_type"], "folder");

	let (_, body) = send(&app, Method::GET, "/api/files?path=&show_type=file", None).await;
	assert_eq!(body.as_array().unwrap().len(), 2);

	let (status, body) = send(&app, Method::DELETE, "/api/file?path=forms", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["message"], "Deleted successfully");
	assert!(!dir.path().join("forms").exists());

	let (status, _) = send(&app, Method::DELETE, "/api/file?path=forms", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_entry_names_must_be_single_components() {
	let (app, _dir) = setup_test_app();
	for name in ["", "..", "a/b"] {
		let (status, _) = send(
			&app,
			Method::POST,
			"/api/file?path=",
			Some(json!({ "name": name, "file_type": "folder" })),
		)
		.await;
		assert_eq!(status, StatusCode::BAD_REQUEST, "name {name:?}");
	}
}

#[tokio::test]
async fn test_traversal_is_forbidden() {
	let (app, _dir) = setup_with_document();
	let uris = [
		"/api/files?path=..",
		"/api/fields?path=../outside.json",
		"/api/file?path=forms/../../x",
	];
	for uri in uris {
		let method = if uri.starts_with("/api/file?") {
			Method::DELETE
		} else {
			Method::GET
		};
		let (status, body) = send(&app, method, uri, None).await;
		assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
		assert_eq!(body["error"], "access_denied");
	}
}

#[tokio::test]
async fn test_create_checks_location_before_name() {
	let (app, dir) = setup_test_app();
	let (status, body) = send(
		&app,
		Method::POST,
		"/api/file?path=../../etc",
		Some(json!({ "name": "..", "file_type": "folder" })),
	)
	.await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert_eq!(body["error"], "access_denied");

	let (status, _) = send(
		&app,
		Method::POST,
		"/api/file?path=",
		Some(json!({ "name": "Upper.JSON", "file_type": "file" })),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	assert!(dir.path().join("Upper.JSON").exists());

	let (status, body) = send(&app, Method::GET, "/api/fields?path=Upper.JSON", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_root_cannot_be_deleted() {
	let (app, dir) = setup_with_document();
	let (status, _) = send(&app, Method::DELETE, "/api/file?path=", None).await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert!(dir.path().join("forms/user.json").exists());
}

// ============================================================================
// Fields
// ============================================================================

#[tokio::test]
async fn test_absent_document_reads_empty_but_rejects_writes() {
	let (app, _dir) = setup_with_document();

	let (status, body) = send(&app, Method::GET, "/api/fields?path=forms/new.json", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!([]));

	let (status, body) = send(
		&app,
		Method::POST,
		"/api/field?path=forms/new.json",
		Some(field("name", "string")),
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_non_json_document_rejected() {
	let (app, dir) = setup_with_document();
	std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
	let (status, body) = send(&app, Method::GET, "/api/fields?path=notes.txt", None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "invalid_extension");
}

#[tokio::test]
async fn test_malformed_document_is_parse_error() {
	let (app, dir) = setup_with_document();
	std::fs::write(dir.path().join("forms/user.json"), "{ not json").unwrap();
	let (status, body) = send(&app, Method::GET, "/api/fields?path=forms/user.json", None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "parse_error");
}

#[tokio::test]
async fn test_add_field_and_duplicate_key() {
	let (app, dir) = setup_with_document();
	let doc = dir.path().join("forms/user.json");

	let (status, body) = send(
		&app,
		Method::POST,
		"/api/field?path=forms/user.json&parent_path=",
		Some(field("name", "string")),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["key"], "name");
	assert_eq!(body["children"], json!([]));
	let before = std::fs::read(&doc).unwrap();

	let (status, body) = send(
		&app,
		Method::POST,
		"/api/field?path=forms/user.json",
		Some(field("name", "number")),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], "duplicate_key");
	assert_eq!(std::fs::read(&doc).unwrap(), before);
}

#[tokio::test]
async fn test_nested_fields_and_views() {
	let (app, _dir) = setup_with_document();
	let doc = "path=forms/user.json";

	send(
		&app,
		Method::POST,
		&format!("/api/field?{doc}"),
		Some(field("addr", "object")),
	)
	.await;
	let (status, _) = send(
		&app,
		Method::POST,
		&format!("/api/field?{doc}&parent_path=addr"),
		Some(field("city", "string")),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);

	let (status, body) = send(
		&app,
		Method::POST,
		&format!("/api/field?{doc}&parent_path=addr.city"),
		Some(field("x", "string")),
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "not_container");

	let (status, body) = send(
		&app,
		Method::GET,
		&format!("/api/field?{doc}&field_path=addr.city"),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["condition"], json!({ "logical": "and", "conditions": [] }));

	let (status, body) = send(
		&app,
		Method::GET,
		&format!("/api/field?{doc}&field_path=addr.zip"),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "path_not_found");

	let (_, body) = send(&app, Method::GET, &format!("/api/fields/parents?{doc}"), None).await;
	assert_eq!(body[0]["path"], "addr");

	let (_, body) = send(&app, Method::GET, &format!("/api/fields/targets?{doc}"), None).await;
	assert_eq!(body[0]["path"], "addr.city");
	assert_eq!(body[0]["operators"], json!(["eq", "ne", "not_empty", "empty"]));

	let (_, body) = send(&app, Method::GET, &format!("/api/fields/flat?{doc}"), None).await;
	assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_field_is_permissive() {
	let (app, _dir) = setup_with_document();
	let doc = "path=forms/user.json";
	send(
		&app,
		Method::POST,
		&format!("/api/field?{doc}"),
		Some(field("name", "string")),
	)
	.await;

	let (status, _) = send(
		&app,
		Method::DELETE,
		&format!("/api/field?{doc}&parent_path="),
		Some(json!({ "key": "missing" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);

	let (status, _) = send(
		&app,
		Method::DELETE,
		&format!("/api/field?{doc}"),
		Some(json!({ "key": "name" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);

	let (_, body) = send(&app, Method::GET, &format!("/api/fields?{doc}"), None).await;
	assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_field_patch() {
	let (app, _dir) = setup_with_document();
	let doc = "path=forms/user.json";
	send(
		&app,
		Method::POST,
		&format!("/api/field?{doc}"),
		Some(field("email", "string")),
	)
	.await;

	let (status, body) = send(
		&app,
		Method::PATCH,
		&format!("/api/field?{doc}&field_path=email"),
		Some(json!({ "field_type": "email", "regex": "^.+@.+$", "regex_enabled": true })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["field_type"], "email");
	assert_eq!(body["regex_enabled"], true);
	assert_eq!(body["description"], "");

	let (status, _) = send(
		&app,
		Method::PATCH,
		&format!("/api/field?{doc}&field_path=ghost"),
		Some(json!({ "required": true })),
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Conditions
// ============================================================================

#[tokio::test]
async fn test_condition_lifecycle() {
	let (app, _dir) = setup_with_document();
	let doc = "path=forms/user.json";
	send(&app, Method::POST, &format!("/api/field?{doc}"), Some(field("age", "number"))).await;
	send(&app, Method::POST, &format!("/api/field?{doc}"), Some(field("email", "email"))).await;
	let target = format!("{doc}&field_path=email");

	let (status, body) = send(
		&app,
		Method::POST,
		&format!("/api/field/condition?{target}"),
		Some(json!({ "key": "age", "operator": "gt", "value": "18" })),
	)
	.await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["condition"]["conditions"][0]["operator"], "gt");

	let (status, body) = send(
		&app,
		Method::PUT,
		&format!("/api/field/condition/logical?{target}"),
		Some(json!({ "logical": "OR" })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["condition"]["logical"], "or");

	let (status, body) = send(
		&app,
		Method::DELETE,
		&format!("/api/field/condition/5?{target}"),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "condition_not_found");

	let (status, body) = send(
		&app,
		Method::DELETE,
		&format!("/api/field/condition/0?{target}"),
		None,
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert!(body["condition"].is_null());
}

#[tokio::test]
async fn test_required_fields_reject_conditions() {
	let (app, _dir) = setup_with_document();
	let doc = "path=forms/user.json";
	send(&app, Method::POST, &format!("/api/field?{doc}"), Some(field("name", "string"))).await;
	let target = format!("{doc}&field_path=name");

	send(
		&app,
		Method::POST,
		&format!("/api/field/condition?{target}"),
		Some(json!({ "key": "other", "operator": "eq", "value": "x" })),
	)
	.await;

	let (status, body) = send(
		&app,
		Method::PATCH,
		&format!("/api/field?{target}"),
		Some(json!({ "required": true })),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert!(body["condition"].is_null());

	let (status, body) = send(
		&app,
		Method::POST,
		&format!("/api/field/condition?{target}"),
		Some(json!({ "key": "other", "operator": "eq", "value": "x" })),
	)
	.await;
	assert_eq!(status, StatusCode::CONFLICT);
	assert_eq!(body["error"], "required_field");
}
