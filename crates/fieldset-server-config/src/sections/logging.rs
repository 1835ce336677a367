// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_LEVEL: &str = "info,tower_http::trace=debug";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
	pub json: Option<bool>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.json.is_some() {
			self.json = other.json;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			json: self.json.unwrap_or(false),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
	pub level: String,
	/// Emit one JSON object per event instead of human-readable lines.
	pub json: bool,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: DEFAULT_LOG_LEVEL.to_string(),
			json: false,
		}
	}
}
