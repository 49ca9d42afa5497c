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

//! Resolve GTK type names the way a UI file would
//!
//! Usage: cargo run --bin ui_types -- GtkEntry GtkTreeView GtkNoSuchThing
//!
//! Prints the GType id for each name, or marks it unknown. Useful when a
//! `<object class="...">` in a UI file refuses to load.

use anyhow::Context;
use colored::*;
use glib::translate::IntoGlib;
use gtkwrap::objects::Builder;

fn main() -> anyhow::Result<()> {
    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("usage: ui_types <TypeName>...");
        std::process::exit(2);
    }

    gtkwrap::init().context("GTK could not be initialised (is a display available?)")?;
    let builder = Builder::new()?;

    println!("{}", "=== GType resolution ===".bold());
    for name in &names {
        let gtype = builder.type_from_name(name)?;
        if gtype == glib::Type::INVALID {
            println!("  {:<28} {}", name, "unknown".red());
        } else {
            println!("  {:<28} {} ({})", name, gtype.name().green(), gtype.into_glib());
        }
    }

    Ok(())
}
