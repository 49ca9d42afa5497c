// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for gtkwrap
//!
//! Loads GtkBuilder UI files through the bindings and reports what they
//! contain, or whether they load at all.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use gtkwrap::capabilities::{Buildable, BuildableObject};
use gtkwrap::objects::Builder;
use log::{debug, info, LevelFilter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gtkwrap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Translation domain for translatable strings in the UI file
    #[arg(short, long, global = true)]
    domain: Option<String>,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the objects a UI file defines, with their types and ids
    Inspect {
        /// Path to a GtkBuilder .ui file
        ui_file: PathBuf,
    },

    /// Verify that a UI file loads (exits non-zero if it does not)
    Check {
        /// Path to a GtkBuilder .ui file
        ui_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    gtkwrap::init().context("GTK could not be initialised (is a display available?)")?;

    match cli.command {
        Commands::Inspect { ui_file } => inspect(&ui_file, cli.domain.as_deref())?,
        Commands::Check { ui_file } => check(&ui_file, cli.domain.as_deref())?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Creates a builder with the domain applied, then parses the file into it.
fn load(ui_file: &Path, domain: Option<&str>) -> gtkwrap::BindResult<Builder> {
    let builder = Builder::new()?;
    // Must be set before parsing, translatable strings are resolved on load.
    builder.set_translation_domain(domain)?;
    builder.add_from_file(ui_file)?;
    Ok(builder)
}

/// Print every object in the UI file
fn inspect(ui_file: &Path, domain: Option<&str>) -> anyhow::Result<()> {
    println!("{} Loading UI file: {}", "→".cyan(), ui_file.display());

    let builder = load(ui_file, domain).with_context(|| format!("Failed to load {}", ui_file.display()))?;

    let mut rows: Vec<(String, String)> = builder
        .objects()
        .iter()
        .map(|object| {
            let id = object
                .upgrade_as::<BuildableObject>()
                .ok()
                .and_then(|b| b.buildable_id().map(String::from))
                .unwrap_or_default();
            (id, object.type_name())
        })
        .collect();
    rows.sort();
    debug!("Builder holds {} objects", rows.len());

    println!("{} Found {} objects\n", "✓".green(), rows.len());

    let width = rows.iter().map(|(id, _)| id.len()).max().unwrap_or(0).max(2);
    for (id, type_name) in &rows {
        let id = if id.is_empty() {
            format!("{:<width$}", "-").dimmed()
        } else {
            format!("{:<width$}", id).cyan().bold()
        };
        println!("  {}  {}", id, type_name.magenta());
    }

    Ok(())
}

/// Load the UI file and report success or the parse error
fn check(ui_file: &Path, domain: Option<&str>) -> anyhow::Result<()> {
    match load(ui_file, domain) {
        Ok(builder) => {
            let count = builder.objects().len();
            info!("{} parsed into {} objects", ui_file.display(), count);
            println!(
                "{} {} ({} object{})",
                "✓".green().bold(),
                ui_file.display().to_string().bold(),
                count,
                if count == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), ui_file.display().to_string().bold());
            println!("  {}", e.to_string().red());
            std::process::exit(1);
        }
    }
}
