// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale identifiers and per-locale string maps.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Translations of a single field, keyed by locale.
pub type LocaleMap = BTreeMap<Locale, String>;

/// An opaque locale identifier such as `en-US` or `fr`.
///
/// Tags are never validated; whatever the locale directory is called is what
/// ends up in the payload.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
	/// Sentinel key for translations that apply to no particular locale.
	pub const DEFAULT_KEY: &'static str = "default";

	pub fn new(tag: impl Into<String>) -> Self {
		Self(tag.into())
	}

	/// The `"default"` sentinel locale.
	pub fn default_key() -> Self {
		Self(Self::DEFAULT_KEY.to_string())
	}

	pub fn is_default_key(&self) -> bool {
		self.0 == Self::DEFAULT_KEY
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Locale {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s))
	}
}

impl From<&str> for Locale {
	fn from(tag: &str) -> Self {
		Self::new(tag)
	}
}

impl From<String> for Locale {
	fn from(tag: String) -> Self {
		Self(tag)
	}
}

/// Union one translation into an optional map, creating the map on first use.
///
/// An existing value for the same locale is overwritten; other locales are kept.
pub(crate) fn union_into(slot: &mut Option<LocaleMap>, locale: &Locale, value: String) {
	slot
		.get_or_insert_with(LocaleMap::new)
		.insert(locale.clone(), value);
}
