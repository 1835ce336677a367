// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file and the environment.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, LoggingConfigLayer, PathsConfigLayer};

pub const SYSTEM_CONFIG_PATH: &str = "/etc/fieldset/server.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source. Defaults themselves are applied at finalize time.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file source. A missing file contributes nothing.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: FIELDSET_SERVER_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			paths: Some(load_paths_from_env()),
			logging: Some(load_logging_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_bool(name: &str) -> Result<Option<bool>, ConfigError> {
	match env_var(name).as_deref() {
		Some("1" | "true" | "yes") => Ok(Some(true)),
		Some("0" | "false" | "no") => Ok(Some(false)),
		Some(v) => Err(ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid boolean value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("FIELDSET_SERVER_HOST"),
		port: env_u16("FIELDSET_SERVER_PORT")?,
	})
}

fn load_paths_from_env() -> PathsConfigLayer {
	PathsConfigLayer {
		assets_dir: env_var("FIELDSET_SERVER_ASSETS_DIR"),
		web_dir: env_var("FIELDSET_SERVER_WEB_DIR"),
	}
}

fn load_logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	Ok(LoggingConfigLayer {
		level: env_var("FIELDSET_SERVER_LOG_LEVEL"),
		json: env_bool("FIELDSET_SERVER_LOG_JSON")?,
	})
}
