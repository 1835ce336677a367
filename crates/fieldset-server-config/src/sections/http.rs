// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP listener configuration section.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HttpConfigLayer {
	pub host: Option<String>,
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		HttpConfig {
			host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
			port: self.port.unwrap_or(DEFAULT_PORT),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: DEFAULT_HOST.to_string(),
			port: DEFAULT_PORT,
		}
	}
}
