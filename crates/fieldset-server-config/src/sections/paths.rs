// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem locations: the assets root holding schema documents and the
//! optional directory of static editor files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSETS_DIR: &str = "./assets";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfigLayer {
	pub assets_dir: Option<String>,
	pub web_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.assets_dir.is_some() {
			self.assets_dir = other.assets_dir;
		}
		if other.web_dir.is_some() {
			self.web_dir = other.web_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			assets_dir: PathBuf::from(
				self.assets_dir
					.unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
			),
			web_dir: self.web_dir.map(PathBuf::from),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
	pub assets_dir: PathBuf,
	pub web_dir: Option<PathBuf>,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
			web_dir: None,
		}
	}
}
