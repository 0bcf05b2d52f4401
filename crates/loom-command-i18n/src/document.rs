// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed shapes of the per-locale `commands.json` and `custom.json` files.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON object kept as an ordered list of entries.
///
/// Keys may repeat. Merging walks the entries in file order, so a command
/// listed twice contributes both of its bodies and the later one wins per
/// field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entries<T>(Vec<(String, T)>);

impl<T> Entries<T> {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn push(&mut self, key: impl Into<String>, value: T) {
		self.0.push((key.into(), value));
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Last value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&T> {
		self
			.0
			.iter()
			.rev()
			.find(|(k, _)| k == key)
			.map(|(_, value)| value)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<T> Default for Entries<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> FromIterator<(String, T)> for Entries<T> {
	fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<T> IntoIterator for Entries<T> {
	type Item = (String, T);
	type IntoIter = std::vec::IntoIter<(String, T)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<T: Serialize> Serialize for Entries<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (key, value) in &self.0 {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(EntriesVisitor(PhantomData))
	}
}

struct EntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
	type Value = Entries<T>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a JSON object")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
		while let Some((key, value)) = access.next_entry::<String, T>()? {
			entries.push((key, value));
		}
		Ok(Entries(entries))
	}
}

/// `null` reads as an empty object.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Entries<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<Entries<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One command's translations for a single locale.
///
/// Unknown keys are ignored, as is `choices` at command depth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(
		default,
		deserialize_with = "null_as_empty",
		skip_serializing_if = "Entries::is_empty"
	)]
	pub options: Entries<OptionEntry>,
}

/// One option's (or subcommand's) translations for a single locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(
		default,
		deserialize_with = "null_as_empty",
		skip_serializing_if = "Entries::is_empty"
	)]
	pub options: Entries<OptionEntry>,
	#[serde(
		default,
		deserialize_with = "null_as_empty",
		skip_serializing_if = "Entries::is_empty"
	)]
	pub choices: Entries<String>,
}

/// Contents of `commands.json`: command name to its translations.
pub type CommandsDocument = Entries<CommandEntry>;

/// Contents of `custom.json`: free-form key to its translation.
pub type CustomDocument = Entries<String>;

/// The two files a locale package may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
	Commands,
	Custom,
}

impl FileKind {
	/// Recognize `commands.json` and `custom.json`; anything else is `None`.
	pub fn from_path(path: &Path) -> Option<Self> {
		if path.extension().and_then(|e| e.to_str()) != Some("json") {
			return None;
		}
		match path.file_stem().and_then(|s| s.to_str())? {
			"commands" => Some(Self::Commands),
			"custom" => Some(Self::Custom),
			_ => None,
		}
	}

	pub fn file_name(self) -> &'static str {
		match self {
			Self::Commands => "commands.json",
			Self::Custom => "custom.json",
		}
	}
}

impl fmt::Display for FileKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Commands => f.write_str("commands"),
			Self::Custom => f.write_str("custom"),
		}
	}
}

/// A decoded locale file, ready to be merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleDocument {
	Commands(CommandsDocument),
	Custom(CustomDocument),
}

impl LocaleDocument {
	pub fn decode(kind: FileKind, contents: &str) -> Result<Self, serde_json::Error> {
		match kind {
			FileKind::Commands => Self::commands_from_str(contents),
			FileKind::Custom => Self::custom_from_str(contents),
		}
	}

	pub fn commands_from_str(contents: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(contents).map(Self::Commands)
	}

	pub fn custom_from_str(contents: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(contents).map(Self::Custom)
	}

	pub fn kind(&self) -> FileKind {
		match self {
			Self::Commands(_) => FileKind::Commands,
			Self::Custom(_) => FileKind::Custom,
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Self::Commands(commands) => commands.is_empty(),
			Self::Custom(custom) => custom.is_empty(),
		}
	}
}
