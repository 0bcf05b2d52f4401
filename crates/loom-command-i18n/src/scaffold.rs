// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Empty translation templates for a new locale.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::command::{LocalizedChoice, LocalizedCommand, LocalizedOption};
use crate::document::{CommandEntry, CommandsDocument, CustomDocument, FileKind, OptionEntry};
use crate::error::ScaffoldError;
use crate::locale::Locale;
use crate::registry::Registry;

impl Registry {
	/// Write `<output_root>/<locale>/commands.json` (and `custom.json` when the
	/// custom catalogue is not empty) with an empty string for every field.
	///
	/// Existing files are overwritten. The templates decode back into the same
	/// node shape the commands have.
	///
	/// # Errors
	///
	/// Any filesystem or serialization failure is returned as is.
	pub fn generate<C: LocalizedCommand>(
		&self,
		locale: &Locale,
		commands: &[C],
		output_root: impl AsRef<Path>,
	) -> Result<PathBuf, ScaffoldError> {
		let dir = output_root.as_ref().join(locale.as_str());
		std::fs::create_dir_all(&dir)?;

		let mut document = CommandsDocument::new();
		for command in commands {
			info!(command = command.name(), "generating template");
			document.push(command.name(), command_template(command));
		}
		write_json(&dir.join(FileKind::Commands.file_name()), &document)?;

		let custom: CustomDocument = self
			.custom_keys()
			.map(|key| (key.to_string(), String::new()))
			.collect();
		if !custom.is_empty() {
			write_json(&dir.join(FileKind::Custom.file_name()), &custom)?;
		}

		info!(
				locale = %locale,
				dir = %dir.display(),
				commands = document.len(),
				custom = custom.len(),
				"wrote localization templates"
		);

		Ok(dir)
	}
}

/// Template for one command: every field present and empty.
pub fn command_template<C: LocalizedCommand>(command: &C) -> CommandEntry {
	CommandEntry {
		name: Some(String::new()),
		description: Some(String::new()),
		options: command
			.options()
			.iter()
			.map(|option| (template_key(option), option_template(option)))
			.collect(),
	}
}

fn option_template<O: LocalizedOption>(option: &O) -> OptionEntry {
	OptionEntry {
		name: Some(String::new()),
		description: Some(String::new()),
		options: option
			.options()
			.iter()
			.map(|child| (template_key(child), option_template(child)))
			.collect(),
		choices: option
			.choices()
			.iter()
			.map(|choice| (choice.name().to_string(), String::new()))
			.collect(),
	}
}

/// Options are keyed the way the applier looks them up.
fn template_key<O: LocalizedOption>(option: &O) -> String {
	option.localization_key().unwrap_or(option.name()).to_string()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ScaffoldError> {
	let json = serde_json::to_string_pretty(value)?;
	std::fs::write(path, json)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::command::{ApplicationCommand, CommandChoice, CommandOption};
	use crate::document::LocaleDocument;
	use serde_json::json;
	use tempfile::TempDir;

	fn sample_commands() -> Vec<ApplicationCommand> {
		vec![
			ApplicationCommand::new("ping", "Ping the bot"),
			ApplicationCommand::new("color", "Pick a color").option(
				CommandOption::new("value", "The color")
					.choice(CommandChoice::new("red", "r"))
					.choice(CommandChoice::new("blue", "b")),
			),
		]
	}

	#[test]
	fn test_command_template_shape() {
		let commands = sample_commands();
		let value = serde_json::to_value(command_template(&commands[1])).unwrap();

		assert_eq!(
			value,
			json!({
				"name": "",
				"description": "",
				"options": {
					"value": {
						"name": "",
						"description": "",
						"choices": {"red": "", "blue": ""}
					}
				}
			})
		);
	}

	#[test]
	fn test_generate_writes_commands_and_custom() {
		let tmp = TempDir::new().unwrap();
		let mut registry = Registry::new();
		registry.merge(
			&Locale::from("en-US"),
			LocaleDocument::custom_from_str(r#"{"welcome": "Hi", "bye": "Bye"}"#).unwrap(),
		);

		let dir = registry
			.generate(&Locale::from("ja"), &sample_commands(), tmp.path())
			.unwrap();
		assert_eq!(dir, tmp.path().join("ja"));

		let commands: serde_json::Value =
			serde_json::from_str(&std::fs::read_to_string(dir.join("commands.json")).unwrap())
				.unwrap();
		assert_eq!(commands["ping"], json!({"name": "", "description": ""}));

		let custom: serde_json::Value =
			serde_json::from_str(&std::fs::read_to_string(dir.join("custom.json")).unwrap())
				.unwrap();
		assert_eq!(custom, json!({"BYE": "", "WELCOME": ""}));
	}

	#[test]
	fn test_generate_without_custom_keys_skips_custom_file() {
		let tmp = TempDir::new().unwrap();
		let registry = Registry::new();

		let dir = registry
			.generate(&Locale::from("fr"), &sample_commands(), tmp.path())
			.unwrap();

		assert!(dir.join("commands.json").is_file());
		assert!(!dir.join("custom.json").exists());
	}

	#[test]
	fn test_generate_overwrites_existing_file() {
		let tmp = TempDir::new().unwrap();
		std::fs::create_dir_all(tmp.path().join("fr")).unwrap();
		std::fs::write(tmp.path().join("fr/commands.json"), r#"{"old": {}}"#).unwrap();

		Registry::new()
			.generate(&Locale::from("fr"), &sample_commands(), tmp.path())
			.unwrap();

		let contents = std::fs::read_to_string(tmp.path().join("fr/commands.json")).unwrap();
		assert!(!contents.contains("old"));
		assert!(contents.contains("ping"));
	}
}
