// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization nodes: the merged, multi-locale view of one command tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::{CommandEntry, Entries, OptionEntry};
use crate::locale::{union_into, Locale, LocaleMap};

/// Translations for a top-level command.
///
/// Every field stays `None` until some locale provides data for it, so the
/// applier can tell "nothing translated" apart from "translated".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CommandLocalization {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<LocaleMap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<LocaleMap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<BTreeMap<String, OptionLocalization>>,
}

/// Translations for an option or subcommand, including its choices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptionLocalization {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<LocaleMap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<LocaleMap>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<BTreeMap<String, OptionLocalization>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub choices: Option<BTreeMap<String, LocaleMap>>,
}

impl CommandLocalization {
	pub fn option(&self, key: &str) -> Option<&OptionLocalization> {
		self.options.as_ref()?.get(key)
	}

	/// Fold one locale's entry for this command into the node.
	pub fn merge(&mut self, locale: &Locale, entry: CommandEntry) {
		if let Some(name) = entry.name {
			union_into(&mut self.name, locale, name);
		}
		if let Some(description) = entry.description {
			union_into(&mut self.description, locale, description);
		}
		merge_options(&mut self.options, locale, entry.options);
	}
}

impl OptionLocalization {
	pub fn option(&self, key: &str) -> Option<&OptionLocalization> {
		self.options.as_ref()?.get(key)
	}

	pub fn choice(&self, key: &str) -> Option<&LocaleMap> {
		self.choices.as_ref()?.get(key)
	}

	/// Fold one locale's entry for this option into the node.
	pub fn merge(&mut self, locale: &Locale, entry: OptionEntry) {
		if let Some(name) = entry.name {
			union_into(&mut self.name, locale, name);
		}
		if let Some(description) = entry.description {
			union_into(&mut self.description, locale, description);
		}
		merge_options(&mut self.options, locale, entry.options);

		if entry.choices.is_empty() {
			return;
		}
		let choices = self.choices.get_or_insert_with(BTreeMap::new);
		for (choice, value) in entry.choices {
			choices
				.entry(choice)
				.or_default()
				.insert(locale.clone(), value);
		}
	}
}

fn merge_options(
	slot: &mut Option<BTreeMap<String, OptionLocalization>>,
	locale: &Locale,
	entries: Entries<OptionEntry>,
) {
	if entries.is_empty() {
		return;
	}
	let options = slot.get_or_insert_with(BTreeMap::new);
	for (key, entry) in entries {
		options.entry(key).or_default().merge(locale, entry);
	}
}
