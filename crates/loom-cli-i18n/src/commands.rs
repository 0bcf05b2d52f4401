// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use anyhow::{Context, Result};
use loom_command_i18n::{ApplicationCommand, Locale, Registry};
use tracing::info;

use crate::config::I18nConfig;

/// Build a registry from the configured locales directory.
///
/// With `required` unset a missing directory yields an empty registry, which
/// is what `scaffold` wants for the very first locale.
fn load_registry(config: &I18nConfig, required: bool) -> Result<Registry> {
	let mut registry = match &config.default_locale {
		Some(locale) => Registry::with_default_locale(locale.as_str()),
		None => Registry::new(),
	};

	if !required && !config.locales_dir.exists() {
		info!(
				locales_dir = %config.locales_dir.display(),
				"locales directory does not exist yet"
		);
		return Ok(registry);
	}

	registry
		.load(&config.locales_dir)
		.with_context(|| format!("loading {}", config.locales_dir.display()))?;
	Ok(registry)
}

fn read_commands(path: &Path) -> Result<Vec<ApplicationCommand>> {
	let contents = std::fs::read_to_string(path)
		.with_context(|| format!("reading command definitions from {}", path.display()))?;
	serde_json::from_str(&contents)
		.with_context(|| format!("parsing command definitions in {}", path.display()))
}

pub fn inspect(config: &I18nConfig) -> Result<String> {
	let registry = load_registry(config, true)?;
	Ok(serde_json::to_string_pretty(&registry)?)
}

pub fn apply(config: &I18nConfig, commands_file: &Path) -> Result<String> {
	let registry = load_registry(config, true)?;
	let mut commands = read_commands(commands_file)?;
	registry.apply(&mut commands);
	Ok(serde_json::to_string_pretty(&commands)?)
}

pub fn scaffold(
	config: &I18nConfig,
	locale: &str,
	commands_file: &Path,
	output: &Path,
) -> Result<String> {
	let registry = load_registry(config, false)?;
	let commands = read_commands(commands_file)?;
	let dir = registry
		.generate(&Locale::from(locale), &commands, output)
		.with_context(|| format!("writing templates under {}", output.display()))?;
	Ok(format!("wrote templates to {}", dir.display()))
}
