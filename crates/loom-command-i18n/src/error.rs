// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for loading and scaffolding localizations.

use std::path::PathBuf;

use thiserror::Error;

/// Startup mistakes that abort [`Registry::load`](crate::Registry::load).
#[derive(Debug, Error)]
pub enum ConfigurationError {
	#[error("localization path is not a directory: {}", .0.display())]
	NotADirectory(PathBuf),

	#[error("localization package '{0}' is already loaded")]
	AlreadyLoaded(String),

	#[error("failed to read localization directory {}: {source}", .path.display())]
	ReadDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// A single locale file that could not be used.
///
/// The loader logs these and moves on to the next file.
#[derive(Debug, Error)]
pub enum DecodeError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid JSON in {}: {source}", .path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
