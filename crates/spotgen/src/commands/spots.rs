//! Spots command - list the configured registry

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(config: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::load(config, verbose)?;
    let registry = ctx.registry()?;

    if json {
        return print_json(&registry);
    }

    if ctx.verbose {
        match &ctx.config_path {
            Some(path) => println!("{} Using config '{}'", "→".cyan(), path.display()),
            None => println!("{} No config found, using builtin spots", "→".cyan()),
        }
    }

    for spot in &registry {
        println!(
            "{}  {} | {} | {}",
            spot.output_id.bold(),
            spot.page_title,
            spot.location_label,
            spot.sub_location_name
        );
    }
    println!("\n{} {} spot(s)", "✓".green().bold(), registry.len());

    Ok(())
}
