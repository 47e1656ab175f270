//! Check command - locate every region without writing pages

use crate::cli::CheckArgs;
use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use serde::Serialize;
use spotgen_core::template::{RenderError, Span, Stage};

#[derive(Serialize)]
struct RegionStatus {
    stage: Stage,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl RegionStatus {
    fn from_result(stage: Stage, result: &Result<Span, RenderError>) -> Self {
        match result {
            Ok(span) => Self {
                stage,
                found: true,
                span: Some(*span),
                error: None,
            },
            Err(e) => Self {
                stage,
                found: false,
                span: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Serialize)]
struct CheckReport {
    template: String,
    renderable: bool,
    regions: Vec<RegionStatus>,
    sub_location_labels: usize,
}

/// Verify that the template's title, heading and anchor can be located
pub fn run(args: CheckArgs, verbose: bool) -> Result<()> {
    let ctx = Context::load(args.config, verbose)?.with_template(args.template);
    let template = ctx.load_template()?;

    if ctx.verbose && !args.json {
        println!(
            "{} Checking '{}'",
            "→".cyan(),
            ctx.config.template.path.display()
        );
    }

    let inspection = ctx.engine().inspect(template.as_str());
    let report = CheckReport {
        template: ctx.config.template.path.display().to_string(),
        renderable: inspection.is_renderable(),
        regions: vec![
            RegionStatus::from_result(Stage::Title, &inspection.title),
            RegionStatus::from_result(Stage::LocationHeading, &inspection.location_heading),
        ],
        sub_location_labels: inspection.sub_location_labels.len(),
    };

    if args.json {
        print_json(&report)?;
    } else {
        for region in &report.regions {
            match &region.error {
                None => println!("{} {}", "✓".green().bold(), region.stage),
                Some(e) => println!("{} {}: {}", "✗".red().bold(), region.stage, e),
            }
        }
        if report.sub_location_labels == 0 {
            println!(
                "{} {}: no label before '{}' (pages will keep the original text)",
                "!".yellow(),
                Stage::SubLocation,
                ctx.config.signatures().anchor.trim()
            );
        } else {
            println!(
                "{} {} ({} label(s))",
                "✓".green().bold(),
                Stage::SubLocation,
                report.sub_location_labels
            );
        }
    }

    if !report.renderable {
        bail!("Template '{}' cannot be rendered", report.template);
    }
    Ok(())
}
