// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The command tree localizations are applied to.
//!
//! The registry never owns commands. Anything that exposes names and the
//! three localization slots can be localized by implementing these traits;
//! [`ApplicationCommand`] is a ready-made serde model of the platform payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::locale::LocaleMap;

pub trait LocalizedChoice {
	fn name(&self) -> &str;
	fn set_name_localizations(&mut self, localizations: LocaleMap);
}

pub trait LocalizedOption: Sized {
	type Choice: LocalizedChoice;

	fn name(&self) -> &str;

	/// Key to look the option up under instead of its name.
	fn localization_key(&self) -> Option<&str> {
		None
	}

	fn set_name_localizations(&mut self, localizations: LocaleMap);
	fn set_description_localizations(&mut self, localizations: LocaleMap);

	/// Nested options (subcommands, subcommand groups).
	fn options(&self) -> &[Self];
	fn options_mut(&mut self) -> &mut [Self];

	fn choices(&self) -> &[Self::Choice];
	fn choices_mut(&mut self) -> &mut [Self::Choice];
}

pub trait LocalizedCommand {
	type Opt: LocalizedOption;

	fn name(&self) -> &str;
	fn set_name_localizations(&mut self, localizations: LocaleMap);
	fn set_description_localizations(&mut self, localizations: LocaleMap);
	fn options(&self) -> &[Self::Opt];
	fn options_mut(&mut self) -> &mut [Self::Opt];
}

/// A top-level application command as sent to the platform.
///
/// Fields the localizer does not care about (`type`, permissions, ...) are
/// kept in `extra` and serialized back untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommand {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_localizations: Option<LocaleMap>,
	#[serde(default)]
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description_localizations: Option<LocaleMap>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<CommandOption>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_localizations: Option<LocaleMap>,
	#[serde(default)]
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description_localizations: Option<LocaleMap>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<CommandOption>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub choices: Vec<CommandChoice>,
	/// Local override for the lookup key; never sent to the platform.
	#[serde(default, skip_serializing)]
	pub localization_key: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandChoice {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_localizations: Option<LocaleMap>,
	#[serde(default)]
	pub value: Value,
}

impl ApplicationCommand {
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			..Self::default()
		}
	}

	pub fn option(mut self, option: CommandOption) -> Self {
		self.options.push(option);
		self
	}
}

impl CommandOption {
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			..Self::default()
		}
	}

	pub fn option(mut self, option: CommandOption) -> Self {
		self.options.push(option);
		self
	}

	pub fn choice(mut self, choice: CommandChoice) -> Self {
		self.choices.push(choice);
		self
	}

	pub fn with_localization_key(mut self, key: impl Into<String>) -> Self {
		self.localization_key = Some(key.into());
		self
	}
}

impl CommandChoice {
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			name_localizations: None,
			value: value.into(),
		}
	}
}

impl LocalizedCommand for ApplicationCommand {
	type Opt = CommandOption;

	fn name(&self) -> &str {
		&self.name
	}

	fn set_name_localizations(&mut self, localizations: LocaleMap) {
		self.name_localizations = Some(localizations);
	}

	fn set_description_localizations(&mut self, localizations: LocaleMap) {
		self.description_localizations = Some(localizations);
	}

	fn options(&self) -> &[CommandOption] {
		&self.options
	}

	fn options_mut(&mut self) -> &mut [CommandOption] {
		&mut self.options
	}
}

impl LocalizedOption for CommandOption {
	type Choice = CommandChoice;

	fn name(&self) -> &str {
		&self.name
	}

	fn localization_key(&self) -> Option<&str> {
		self.localization_key.as_deref()
	}

	fn set_name_localizations(&mut self, localizations: LocaleMap) {
		self.name_localizations = Some(localizations);
	}

	fn set_description_localizations(&mut self, localizations: LocaleMap) {
		self.description_localizations = Some(localizations);
	}

	fn options(&self) -> &[CommandOption] {
		&self.options
	}

	fn options_mut(&mut self) -> &mut [CommandOption] {
		&mut self.options
	}

	fn choices(&self) -> &[CommandChoice] {
		&self.choices
	}

	fn choices_mut(&mut self) -> &mut [CommandChoice] {
		&mut self.choices
	}
}

impl LocalizedChoice for CommandChoice {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_name_localizations(&mut self, localizations: LocaleMap) {
		self.name_localizations = Some(localizations);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_deserialize_keeps_unknown_fields() {
		let command: ApplicationCommand = serde_json::from_value(json!({
			"name": "ban",
			"type": 1,
			"description": "Ban a member",
			"dm_permission": false,
			"options": [{
				"name": "reason",
				"type": 3,
				"description": "Why",
				"required": true,
				"choices": [{"name": "spam", "value": "spam"}]
			}]
		}))
		.unwrap();

		assert_eq!(command.extra["type"], json!(1));
		assert_eq!(command.options[0].extra["required"], json!(true));
		assert_eq!(command.options[0].choices[0].value, json!("spam"));

		let round = serde_json::to_value(&command).unwrap();
		assert_eq!(round["dm_permission"], json!(false));
		assert_eq!(round["options"][0]["type"], json!(3));
		assert!(round.get("name_localizations").is_none());
	}

	#[test]
	fn test_localization_key_is_not_serialized() {
		let option = CommandOption::new("user", "Target").with_localization_key("TARGET_USER");
		assert_eq!(LocalizedOption::localization_key(&option), Some("TARGET_USER"));

		let value = serde_json::to_value(&option).unwrap();
		assert!(value.get("localization_key").is_none());
	}

	#[test]
	fn test_builders() {
		let command = ApplicationCommand::new("color", "Pick a color").option(
			CommandOption::new("value", "The color")
				.choice(CommandChoice::new("red", "r"))
				.choice(CommandChoice::new("blue", 2)),
		);

		assert_eq!(LocalizedCommand::name(&command), "color");
		assert_eq!(command.options[0].choices.len(), 2);
		assert_eq!(command.options[0].choices[1].value, json!(2));
	}
}
