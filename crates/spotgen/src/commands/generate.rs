//! Generate command - render one page per spot

use crate::cli::GenerateArgs;
use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use spotgen_core::generate::{FsWriter, GenerateOptions, generate_all};

/// Generate pages for every configured spot (or the `--only` subset)
///
/// Spots that fail are reported and skipped; the command exits with an
/// error once all spots have been attempted.
pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let ctx = Context::load(args.config, verbose)?
        .with_template(args.template)
        .with_out_dir(args.out_dir);

    let mut registry = ctx.registry()?;
    if !args.only.is_empty() {
        registry = registry.select(&args.only)?;
    }

    if ctx.verbose && !args.json {
        println!(
            "{} Loading template '{}'",
            "→".cyan(),
            ctx.config.template.path.display()
        );
    }
    let template = ctx.load_template()?;

    let out_dir = ctx.config.output_dir();
    if ctx.verbose && !args.json {
        println!(
            "{} Generating {} spot(s) into '{}'",
            "→".cyan(),
            registry.len(),
            out_dir.display()
        );
    }

    let mut writer = FsWriter::new(out_dir, &ctx.config.output.extension);
    let options = GenerateOptions {
        fail_fast: args.fail_fast || ctx.config.generate.fail_fast,
    };
    let report = generate_all(&ctx.engine(), &template, &registry, &mut writer, &options);

    if args.json {
        print_json(&report)?;
    } else {
        for page in &report.generated {
            println!(
                "{} Generated '{}' → {}",
                "✓".green().bold(),
                page.output_id,
                page.destination.display()
            );
            for warning in &page.warnings {
                println!("  {} {}", "!".yellow(), warning);
            }
        }
        for failure in &report.failures {
            match failure.stage {
                Some(stage) => println!(
                    "{} Failed '{}' at {}: {}",
                    "✗".red().bold(),
                    failure.output_id,
                    stage,
                    failure.message
                ),
                None => println!(
                    "{} Failed '{}': {}",
                    "✗".red().bold(),
                    failure.output_id,
                    failure.message
                ),
            }
        }
        for skipped in &report.skipped {
            println!("{} Skipped '{}'", "!".yellow(), skipped);
        }

        if report.is_success() {
            println!(
                "\n{} Generated {} page(s)",
                "✓".green().bold(),
                report.generated.len()
            );
        }
    }

    if !report.is_success() {
        bail!(
            "{} of {} spot(s) failed",
            report.failures.len(),
            registry.len()
        );
    }

    Ok(())
}
