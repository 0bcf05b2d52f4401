// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization support for application command trees.
//!
//! Translators keep one directory per locale next to the bot:
//!
//! ```text
//! locales/
//!   en-US/commands.json
//!   en-US/custom.json
//!   fr/commands.json
//! ```
//!
//! [`Registry::load`] merges every locale package into a tree of
//! [`CommandLocalization`] nodes keyed by command, option and choice name.
//! [`Registry::apply`] overlays that tree onto the platform's command
//! definitions right before they are registered, and [`Registry::generate`]
//! writes empty templates for a new locale.
//!
//! # Example
//!
//! ```
//! use loom_command_i18n::{ApplicationCommand, Locale, LocaleDocument, Registry};
//!
//! let mut registry = Registry::new();
//! let document = LocaleDocument::commands_from_str(r#"{"ping": {"description": "Pong!"}}"#).unwrap();
//! registry.merge(&Locale::from("en-US"), document);
//!
//! let mut commands = vec![ApplicationCommand::new("ping", "Replies with pong")];
//! registry.apply(&mut commands);
//!
//! let localized = commands[0].description_localizations.as_ref().unwrap();
//! assert_eq!(localized[&Locale::from("en-US")], "Pong!");
//! ```

mod apply;
mod command;
mod document;
mod error;
mod loader;
mod locale;
mod model;
mod registry;
mod resolve;
mod scaffold;

pub use apply::apply_localizations;
pub use command::{
	ApplicationCommand, CommandChoice, CommandOption, LocalizedChoice, LocalizedCommand,
	LocalizedOption,
};
pub use document::{
	CommandEntry, CommandsDocument, CustomDocument, Entries, FileKind, LocaleDocument, OptionEntry,
};
pub use error::{ConfigurationError, DecodeError, ScaffoldError};
pub use locale::{Locale, LocaleMap};
pub use model::{CommandLocalization, OptionLocalization};
pub use registry::Registry;
pub use resolve::resolve_translation;
pub use scaffold::command_template;
