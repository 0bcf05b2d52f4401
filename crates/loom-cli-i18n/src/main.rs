// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `loom-i18n` - inspect, apply and scaffold command localizations.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ConfigLayer;

#[derive(Parser, Debug)]
#[command(
	name = "loom-i18n",
	about = "Inspect, apply and scaffold command localizations",
	version
)]
struct Args {
	/// Config file (defaults to ~/.config/loom/i18n.toml)
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	/// Directory with one subdirectory per locale
	#[arg(long, global = true)]
	locales_dir: Option<PathBuf>,

	/// Locale the `default` package is stored under
	#[arg(long, global = true)]
	default_locale: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the merged localization tree as JSON
	Inspect,
	/// Localize a JSON array of command definitions and print the payload
	Apply {
		/// JSON file with the command definitions
		#[arg(long)]
		commands: PathBuf,
	},
	/// Write empty translation templates for a locale
	Scaffold {
		/// Locale to generate templates for
		#[arg(long)]
		locale: String,
		/// JSON file with the command definitions
		#[arg(long)]
		commands: PathBuf,
		/// Output root (defaults to the configured output_dir)
		#[arg(long)]
		output: Option<PathBuf>,
	},
}

impl Args {
	fn overrides(&self) -> ConfigLayer {
		ConfigLayer {
			locales_dir: self.locales_dir.clone(),
			default_locale: self.default_locale.clone(),
			..Default::default()
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();
	let config = config::load_config(args.config.as_deref(), args.overrides())?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.log_level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let output = match args.command {
		Command::Inspect => commands::inspect(&config)?,
		Command::Apply { commands: file } => commands::apply(&config, &file)?,
		Command::Scaffold {
			locale,
			commands: file,
			output,
		} => {
			let output = output.unwrap_or_else(|| config.output_dir.clone());
			commands::scaffold(&config, &locale, &file, &output)?
		}
	};

	println!("{output}");
	Ok(())
}
