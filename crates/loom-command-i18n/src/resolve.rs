// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation resolution with fallbacks.

use crate::locale::{Locale, LocaleMap};

/// Pick the best translation from a field's locale map.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested locale
/// 2. The registry's default locale (if configured)
/// 3. The `"default"` sentinel entry
///
/// # Example
///
/// ```
/// use loom_command_i18n::{resolve_translation, Locale, LocaleMap};
///
/// let mut map = LocaleMap::new();
/// map.insert(Locale::from("en-US"), "Hello".to_string());
/// map.insert(Locale::from("fr"), "Bonjour".to_string());
///
/// let en = Locale::from("en-US");
/// assert_eq!(resolve_translation(&map, &Locale::from("fr"), Some(&en)), Some("Bonjour"));
/// assert_eq!(resolve_translation(&map, &Locale::from("de"), Some(&en)), Some("Hello"));
/// assert_eq!(resolve_translation(&map, &Locale::from("de"), None), None);
/// ```
pub fn resolve_translation<'a>(
	map: &'a LocaleMap,
	locale: &Locale,
	default_locale: Option<&Locale>,
) -> Option<&'a str> {
	if let Some(value) = map.get(locale) {
		return Some(value);
	}

	if let Some(value) = default_locale.and_then(|d| map.get(d)) {
		return Some(value);
	}

	map.get(&Locale::default_key()).map(String::as_str)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(pairs: &[(&str, &str)]) -> LocaleMap {
		pairs
			.iter()
			.map(|(l, v)| (Locale::from(*l), v.to_string()))
			.collect()
	}

	#[test]
	fn test_requested_locale_takes_priority() {
		let m = map(&[("en-US", "Hi"), ("es-ES", "Hola"), ("default", "Hey")]);
		let en = Locale::from("en-US");
		assert_eq!(
			resolve_translation(&m, &Locale::from("es-ES"), Some(&en)),
			Some("Hola")
		);
	}

	#[test]
	fn test_default_locale_when_requested_missing() {
		let m = map(&[("en-US", "Hi"), ("default", "Hey")]);
		let en = Locale::from("en-US");
		assert_eq!(
			resolve_translation(&m, &Locale::from("ja"), Some(&en)),
			Some("Hi")
		);
	}

	#[test]
	fn test_sentinel_when_default_locale_missing() {
		let m = map(&[("default", "Hey")]);
		let en = Locale::from("en-US");
		assert_eq!(
			resolve_translation(&m, &Locale::from("ja"), Some(&en)),
			Some("Hey")
		);
		assert_eq!(resolve_translation(&m, &Locale::from("ja"), None), Some("Hey"));
	}

	#[test]
	fn test_nothing_matches() {
		let m = map(&[("fr", "Salut")]);
		assert_eq!(resolve_translation(&m, &Locale::from("ja"), None), None);
		assert_eq!(
			resolve_translation(&LocaleMap::new(), &Locale::from("fr"), None),
			None
		);
	}
}
