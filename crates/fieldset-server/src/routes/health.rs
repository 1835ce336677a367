// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub version: String,
	pub timestamp: String,
	pub assets_dir: String,
}

/// GET /health - reports unhealthy when the assets root is missing.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let root = state.sandbox.root();
	let available = tokio::fs::metadata(root)
		.await
		.map(|m| m.is_dir())
		.unwrap_or(false);

	let status = if available {
		HealthStatus::Healthy
	} else {
		tracing::warn!(assets_dir = %root.display(), "assets directory unavailable");
		HealthStatus::Unhealthy
	};

	let response = HealthResponse {
		status,
		version: crate::version::VERSION.to_string(),
		timestamp: chrono::Utc::now().to_rfc3339(),
		assets_dir: root.display().to_string(),
	};

	let http_status = match status {
		HealthStatus::Healthy => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}
