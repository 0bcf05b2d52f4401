// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading locale packages from disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::document::{FileKind, LocaleDocument};
use crate::error::{ConfigurationError, DecodeError};
use crate::registry::Registry;

impl Registry {
	/// Load every locale package below `root`.
	///
	/// Each subdirectory of `root` is one package named after its locale
	/// (`default` is the sentinel package). Inside a package only
	/// `commands.json` and `custom.json` are read. A file that cannot be read
	/// or decoded is logged and skipped.
	///
	/// # Errors
	///
	/// Fails if `root` is not a directory, cannot be listed, or contains a
	/// package this registry has already loaded. Packages processed before the
	/// duplicate stay merged.
	pub fn load(&mut self, root: impl AsRef<Path>) -> Result<(), ConfigurationError> {
		let root = root.as_ref();
		if !root.is_dir() {
			return Err(ConfigurationError::NotADirectory(root.to_path_buf()));
		}

		for package_dir in sorted_entries(root)? {
			if !package_dir.is_dir() {
				debug!(path = %package_dir.display(), "skipping non-directory in localization root");
				continue;
			}

			let Some(package) = package_dir.file_name().and_then(|n| n.to_str()) else {
				warn!(path = %package_dir.display(), "skipping package with non UTF-8 name");
				continue;
			};

			if self.loaded.contains(package) {
				return Err(ConfigurationError::AlreadyLoaded(package.to_string()));
			}
			self.load_package(package, &package_dir)?;
		}

		Ok(())
	}

	/// Merge one package. It is recorded as loaded only once its directory
	/// was listed, so a failed attempt can be retried.
	fn load_package(&mut self, package: &str, dir: &Path) -> Result<(), ConfigurationError> {
		let locale = self.package_locale(package);
		let mut merged = 0usize;

		for path in sorted_entries(dir)? {
			let Some(kind) = FileKind::from_path(&path).filter(|_| path.is_file()) else {
				debug!(path = %path.display(), "ignoring unrecognized localization file");
				continue;
			};

			let document = match read_document(&path, kind) {
				Ok(document) => document,
				Err(e) => {
					warn!(
							locale = %locale,
							error = %e,
							"skipping localization file"
					);
					continue;
				}
			};

			if document.is_empty() {
				debug!(path = %path.display(), "localization file is empty");
				continue;
			}

			self.merge(&locale, document);
			merged += 1;
		}

		self.loaded.insert(package.to_string());
		info!(
				package = package,
				locale = %locale,
				files = merged,
				"loaded localization package"
		);

		Ok(())
	}
}

/// Read and decode one file; the handle is closed before returning.
fn read_document(path: &Path, kind: FileKind) -> Result<LocaleDocument, DecodeError> {
	let contents = std::fs::read_to_string(path).map_err(|source| DecodeError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	LocaleDocument::decode(kind, &contents).map_err(|source| DecodeError::Json {
		path: path.to_path_buf(),
		source,
	})
}

/// Directory entries sorted by path so packages merge in a stable order.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ConfigurationError> {
	let read_dir_error = |source: std::io::Error| ConfigurationError::ReadDir {
		path: dir.to_path_buf(),
		source,
	};

	let mut paths = std::fs::read_dir(dir)
		.map_err(read_dir_error)?
		.map(|entry| entry.map(|e| e.path()))
		.collect::<Result<Vec<_>, _>>()
		.map_err(read_dir_error)?;
	paths.sort();
	Ok(paths)
}
