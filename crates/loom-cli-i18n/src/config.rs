// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the `loom-i18n` tool.
//!
//! Precedence, lowest to highest: built-in defaults, TOML file, environment,
//! command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const ENV_LOCALES_DIR: &str = "LOOM_I18N_LOCALES_DIR";
pub const ENV_OUTPUT_DIR: &str = "LOOM_I18N_OUTPUT_DIR";
pub const ENV_DEFAULT_LOCALE: &str = "LOOM_I18N_DEFAULT_LOCALE";
pub const ENV_LOG: &str = "LOOM_I18N_LOG";

/// Effective configuration after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	/// Directory holding one subdirectory per locale
	pub locales_dir: PathBuf,
	/// Where `scaffold` writes templates
	pub output_dir: PathBuf,
	/// Locale the `default` package is stored under
	pub default_locale: Option<String>,
	/// Fallback log filter when `RUST_LOG` is unset
	pub log_level: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			locales_dir: PathBuf::from("locales"),
			output_dir: PathBuf::from("locales"),
			default_locale: None,
			log_level: "info".to_string(),
		}
	}
}

/// One partial source of configuration. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	pub locales_dir: Option<PathBuf>,
	pub output_dir: Option<PathBuf>,
	pub default_locale: Option<String>,
	pub log_level: Option<String>,
}

impl ConfigLayer {
	/// Overlay `other` on top of `self`.
	pub fn merge(&mut self, other: ConfigLayer) {
		if other.locales_dir.is_some() {
			self.locales_dir = other.locales_dir;
		}
		if other.output_dir.is_some() {
			self.output_dir = other.output_dir;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.log_level.is_some() {
			self.log_level = other.log_level;
		}
	}

	/// Read a layer from environment lookups.
	pub fn from_env_with(var: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			locales_dir: var(ENV_LOCALES_DIR).map(PathBuf::from),
			output_dir: var(ENV_OUTPUT_DIR).map(PathBuf::from),
			default_locale: var(ENV_DEFAULT_LOCALE),
			log_level: var(ENV_LOG),
		}
	}

	pub fn from_env() -> Self {
		Self::from_env_with(|name| std::env::var(name).ok())
	}

	/// Read a TOML layer. A missing file is an empty layer unless `required`.
	pub fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
		if !path.exists() {
			if required {
				return Err(ConfigError::NotFound(path.to_path_buf()));
			}
			tracing::debug!(path = %path.display(), "no config file, using defaults");
			return Ok(Self::default());
		}

		let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		toml::from_str(&contents).map_err(|source| ConfigError::TomlParse {
			path: path.to_path_buf(),
			source,
		})
	}
}

impl I18nConfig {
	/// Resolve a merged layer against the defaults and validate it.
	pub fn from_layer(layer: ConfigLayer) -> Result<Self, ConfigError> {
		let defaults = Self::default();

		let default_locale = match layer.default_locale {
			Some(locale) if locale.trim().is_empty() => {
				return Err(ConfigError::invalid_value(
					"default_locale",
					"must not be empty",
				));
			}
			other => other,
		};

		let log_level = layer.log_level.unwrap_or(defaults.log_level);
		if log_level.trim().is_empty() {
			return Err(ConfigError::invalid_value("log_level", "must not be empty"));
		}

		let locales_dir = layer.locales_dir.unwrap_or(defaults.locales_dir);
		let output_dir = layer.output_dir.unwrap_or_else(|| locales_dir.clone());

		Ok(Self {
			locales_dir,
			output_dir,
			default_locale,
			log_level,
		})
	}
}

/// `$XDG_CONFIG_HOME/loom/i18n.toml`
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("loom").join("i18n.toml"))
}

/// Load configuration from every layer.
///
/// `explicit` replaces the default config file and must exist.
pub fn load_config(explicit: Option<&Path>, cli: ConfigLayer) -> Result<I18nConfig, ConfigError> {
	let mut layer = ConfigLayer::default();

	match explicit {
		Some(path) => layer.merge(ConfigLayer::from_file(path, true)?),
		None => {
			if let Some(path) = default_config_path() {
				layer.merge(ConfigLayer::from_file(&path, false)?);
			}
		}
	}

	layer.merge(ConfigLayer::from_env());
	layer.merge(cli);

	I18nConfig::from_layer(layer)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use std::collections::HashMap;
	use tempfile::TempDir;

	#[test]
	fn test_defaults() {
		let config = I18nConfig::from_layer(ConfigLayer::default()).unwrap();
		assert_eq!(config, I18nConfig::default());
	}

	#[test]
	fn test_output_dir_follows_locales_dir() {
		let config = I18nConfig::from_layer(ConfigLayer {
			locales_dir: Some(PathBuf::from("i18n")),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.output_dir, PathBuf::from("i18n"));
	}

	#[test]
	fn test_empty_default_locale_is_rejected() {
		let result = I18nConfig::from_layer(ConfigLayer {
			default_locale: Some("  ".to_string()),
			..Default::default()
		});
		assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_env_layer() {
		let vars: HashMap<&str, &str> = [(ENV_LOCALES_DIR, "/srv/locales"), (ENV_LOG, "debug")].into();
		let layer = ConfigLayer::from_env_with(|name| vars.get(name).map(|v| v.to_string()));

		assert_eq!(layer.locales_dir, Some(PathBuf::from("/srv/locales")));
		assert_eq!(layer.log_level.as_deref(), Some("debug"));
		assert_eq!(layer.default_locale, None);
	}

	#[test]
	fn test_file_layer() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("i18n.toml");
		std::fs::write(&path, "locales_dir = \"bot/locales\"\ndefault_locale = \"en-US\"\n").unwrap();

		let layer = ConfigLayer::from_file(&path, true).unwrap();
		assert_eq!(layer.locales_dir, Some(PathBuf::from("bot/locales")));
		assert_eq!(layer.default_locale.as_deref(), Some("en-US"));
	}

	#[test]
	fn test_missing_file() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("absent.toml");

		assert_eq!(ConfigLayer::from_file(&path, false).unwrap(), ConfigLayer::default());
		assert!(matches!(
			ConfigLayer::from_file(&path, true),
			Err(ConfigError::NotFound(_))
		));
	}

	#[test]
	fn test_bad_toml_reports_path() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("i18n.toml");
		std::fs::write(&path, "locales_dir = [").unwrap();

		let err = ConfigLayer::from_file(&path, true).unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains("i18n.toml"));
	}

	#[test]
	fn test_unknown_keys_are_rejected() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("i18n.toml");
		std::fs::write(&path, "locale_dir = \"typo\"\n").unwrap();

		assert!(ConfigLayer::from_file(&path, true).is_err());
	}

	proptest! {
		/// A higher layer always wins for fields it sets.
		#[test]
		fn higher_layer_wins(low in "[a-z]{1,8}", high in "[a-z]{1,8}") {
			let mut layer = ConfigLayer {
				default_locale: Some(low.clone()),
				log_level: Some(low),
				..Default::default()
			};
			layer.merge(ConfigLayer {
				default_locale: Some(high.clone()),
				..Default::default()
			});

			prop_assert_eq!(layer.default_locale, Some(high));
			prop_assert!(layer.log_level.is_some());
		}
	}
}
