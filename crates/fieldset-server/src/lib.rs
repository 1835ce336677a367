// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP server for browsing and editing fieldset schema documents.

pub mod api;
pub mod error;
pub mod routes;
pub mod version;

pub use api::{create_router, AppState};
pub use error::{ErrorResponse, ServerError};
