// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The registry owns every merged localization node plus the custom catalogue.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::document::{CommandsDocument, CustomDocument, LocaleDocument};
use crate::locale::{Locale, LocaleMap};
use crate::model::CommandLocalization;
use crate::resolve::resolve_translation;

/// All localizations known to one running application.
///
/// Built once at startup through [`Registry::load`] or [`Registry::merge`],
/// then only read.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
	#[serde(skip_serializing_if = "Option::is_none")]
	default_locale: Option<Locale>,
	commands: BTreeMap<String, CommandLocalization>,
	custom: BTreeMap<String, LocaleMap>,
	#[serde(skip)]
	pub(crate) loaded: BTreeSet<String>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry whose `default` package is stored under `locale`.
	pub fn with_default_locale(locale: impl Into<Locale>) -> Self {
		Self {
			default_locale: Some(locale.into()),
			..Self::default()
		}
	}

	pub fn default_locale(&self) -> Option<&Locale> {
		self.default_locale.as_ref()
	}

	/// Locale a package directory's data is merged under.
	pub(crate) fn package_locale(&self, package: &str) -> Locale {
		if package == Locale::DEFAULT_KEY {
			if let Some(locale) = &self.default_locale {
				return locale.clone();
			}
		}
		Locale::new(package)
	}

	/// Merge one decoded locale file.
	///
	/// Values for `locale` replace earlier values for the same locale; values
	/// for other locales are kept.
	pub fn merge(&mut self, locale: &Locale, document: LocaleDocument) {
		match document {
			LocaleDocument::Commands(commands) => self.merge_commands(locale, commands),
			LocaleDocument::Custom(custom) => self.merge_custom(locale, custom),
		}
	}

	fn merge_commands(&mut self, locale: &Locale, commands: CommandsDocument) {
		for (name, entry) in commands {
			debug!(locale = %locale, command = %name, "merging command localization");
			self.commands.entry(name).or_default().merge(locale, entry);
		}
	}

	fn merge_custom(&mut self, locale: &Locale, custom: CustomDocument) {
		for (key, value) in custom {
			self
				.custom
				.entry(key.to_uppercase())
				.or_default()
				.insert(locale.clone(), value);
		}
	}

	pub fn command(&self, name: &str) -> Option<&CommandLocalization> {
		self.commands.get(name)
	}

	pub fn commands(&self) -> impl Iterator<Item = (&str, &CommandLocalization)> {
		self.commands.iter().map(|(name, node)| (name.as_str(), node))
	}

	/// Translations of a custom key. Keys are case-insensitive.
	pub fn get(&self, key: &str) -> Option<&LocaleMap> {
		self.custom.get(&key.to_uppercase())
	}

	/// A custom key's translation for exactly `locale`.
	pub fn translate(&self, locale: &Locale, key: &str) -> Option<&str> {
		self.get(key)?.get(locale).map(String::as_str)
	}

	/// A custom key's translation, falling back to the default locale and then
	/// the `"default"` entry.
	pub fn translate_or_default(&self, locale: &Locale, key: &str) -> Option<&str> {
		resolve_translation(self.get(key)?, locale, self.default_locale.as_ref())
	}

	/// Custom catalogue keys, uppercased, in sorted order.
	pub fn custom_keys(&self) -> impl Iterator<Item = &str> {
		self.custom.keys().map(String::as_str)
	}

	/// Package directory names already ingested by [`Registry::load`].
	pub fn loaded_packages(&self) -> impl Iterator<Item = &str> {
		self.loaded.iter().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty() && self.custom.is_empty()
	}
}
