// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Overlaying registry translations onto a command tree.
//!
//! Both trees are walked together, matched by name at every level. A name
//! missing on either side leaves that branch alone.

use std::collections::BTreeMap;

use tracing::debug;

use crate::command::{LocalizedChoice, LocalizedCommand, LocalizedOption};
use crate::model::OptionLocalization;
use crate::registry::Registry;

impl Registry {
	/// Write localized names, descriptions and choice names into `commands`.
	///
	/// Slots are only ever replaced by populated maps; a field the registry
	/// knows nothing about keeps whatever it held before.
	pub fn apply<C: LocalizedCommand>(&self, commands: &mut [C]) {
		apply_localizations(self, commands);
	}
}

/// Free-function form of [`Registry::apply`].
pub fn apply_localizations<C: LocalizedCommand>(registry: &Registry, commands: &mut [C]) {
	for command in commands.iter_mut() {
		let Some(localization) = registry.command(command.name()) else {
			debug!(command = command.name(), "no localization for command");
			continue;
		};

		if let Some(name) = &localization.name {
			command.set_name_localizations(name.clone());
		}
		if let Some(description) = &localization.description {
			command.set_description_localizations(description.clone());
		}

		if let Some(children) = &localization.options {
			apply_options(command.options_mut(), children);
		}
	}
}

fn apply_options<O: LocalizedOption>(
	options: &mut [O],
	localizations: &BTreeMap<String, OptionLocalization>,
) {
	for option in options.iter_mut() {
		let localization = option
			.localization_key()
			.and_then(|key| localizations.get(key))
			.or_else(|| localizations.get(option.name()));
		let Some(localization) = localization else {
			continue;
		};

		if let Some(name) = &localization.name {
			option.set_name_localizations(name.clone());
		}
		if let Some(description) = &localization.description {
			option.set_description_localizations(description.clone());
		}

		if let Some(choices) = &localization.choices {
			for choice in option.choices_mut() {
				if let Some(names) = choices.get(choice.name()) {
					choice.set_name_localizations(names.clone());
				}
			}
		}

		if let Some(children) = &localization.options {
			apply_options(option.options_mut(), children);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::command::{ApplicationCommand, CommandChoice, CommandOption};
	use crate::document::LocaleDocument;
	use crate::locale::{Locale, LocaleMap};

	fn registry(locale: &str, json: &str) -> Registry {
		let mut registry = Registry::new();
		registry.merge(
			&Locale::from(locale),
			LocaleDocument::commands_from_str(json).unwrap(),
		);
		registry
	}

	fn only(locale: &str, value: &str) -> LocaleMap {
		[(Locale::from(locale), value.to_string())].into()
	}

	#[test]
	fn test_apply_top_level_fields() {
		let registry = registry("fr", r#"{"ping": {"name": "ping", "description": "Pong !"}}"#);
		let mut commands = vec![ApplicationCommand::new("ping", "Pong!")];

		registry.apply(&mut commands);

		assert_eq!(commands[0].name_localizations, Some(only("fr", "ping")));
		assert_eq!(commands[0].description_localizations, Some(only("fr", "Pong !")));
	}

	#[test]
	fn test_apply_miss_leaves_slots_untouched() {
		let registry = registry("fr", r#"{"other": {"name": "autre"}}"#);
		let mut command = ApplicationCommand::new("foo", "Foo");
		command.name_localizations = Some(only("de", "fu"));
		let before = command.clone();

		let mut commands = vec![command];
		registry.apply(&mut commands);

		assert_eq!(commands[0], before);
	}

	#[test]
	fn test_absent_field_does_not_clear_existing() {
		let registry = registry("fr", r#"{"foo": {"description": "Truc"}}"#);
		let mut command = ApplicationCommand::new("foo", "Foo");
		command.name_localizations = Some(only("de", "fu"));

		let mut commands = vec![command];
		registry.apply(&mut commands);

		assert_eq!(commands[0].name_localizations, Some(only("de", "fu")));
		assert_eq!(commands[0].description_localizations, Some(only("fr", "Truc")));
	}

	#[test]
	fn test_apply_nested_options_and_choices() {
		let registry = registry(
			"fr",
			r#"{
				"config": {
					"options": {
						"set": {
							"name": "definir",
							"options": {
								"color": {
									"description": "La couleur",
									"choices": {"red": "rouge"}
								}
							}
						}
					}
				}
			}"#,
		);

		let mut commands = vec![ApplicationCommand::new("config", "Configure").option(
			CommandOption::new("set", "Set a value").option(
				CommandOption::new("color", "The color")
					.choice(CommandChoice::new("red", "r"))
					.choice(CommandChoice::new("green", "g")),
			),
		)];

		registry.apply(&mut commands);

		let command = &commands[0];
		assert!(command.name_localizations.is_none());
		let set = &command.options[0];
		assert_eq!(set.name_localizations, Some(only("fr", "definir")));
		assert!(set.description_localizations.is_none());

		let color = &set.options[0];
		assert_eq!(color.description_localizations, Some(only("fr", "La couleur")));
		assert_eq!(color.choices[0].name_localizations, Some(only("fr", "rouge")));
		assert!(color.choices[1].name_localizations.is_none());
	}

	#[test]
	fn test_option_missing_from_registry_is_skipped() {
		let registry = registry("fr", r#"{"ping": {"options": {"known": {"name": "connu"}}}}"#);
		let mut commands = vec![ApplicationCommand::new("ping", "Ping")
			.option(CommandOption::new("unknown", "?"))
			.option(CommandOption::new("known", "!"))];

		registry.apply(&mut commands);

		assert!(commands[0].options[0].name_localizations.is_none());
		assert_eq!(
			commands[0].options[1].name_localizations,
			Some(only("fr", "connu"))
		);
	}

	#[test]
	fn test_localization_key_overrides_name() {
		let registry = registry("fr", r#"{"kick": {"options": {"TARGET": {"name": "cible"}}}}"#);
		let mut commands = vec![ApplicationCommand::new("kick", "Kick")
			.option(CommandOption::new("member", "Who").with_localization_key("TARGET"))];

		apply_localizations(&registry, &mut commands);

		assert_eq!(
			commands[0].options[0].name_localizations,
			Some(only("fr", "cible"))
		);
	}

	#[test]
	fn test_localization_key_falls_back_to_name() {
		let registry = registry("fr", r#"{"kick": {"options": {"member": {"name": "membre"}}}}"#);
		let mut commands = vec![ApplicationCommand::new("kick", "Kick")
			.option(CommandOption::new("member", "Who").with_localization_key("TARGET"))];

		apply_localizations(&registry, &mut commands);

		assert_eq!(
			commands[0].options[0].name_localizations,
			Some(only("fr", "membre"))
		);
	}
}
