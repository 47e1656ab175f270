//! Page generation - render every spot in a registry and hand it to a writer

mod writer;

pub use writer::{FsWriter, MemoryWriter, PageWriter};

use crate::registry::SpotRegistry;
use crate::template::{RenderWarning, Stage, Template, TemplateEngine};
use serde::Serialize;
use std::path::PathBuf;

/// Options controlling a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Stop after the first failed spot; remaining spots are reported as skipped
    pub fail_fast: bool,
}

/// A page that was rendered and written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPage {
    pub output_id: String,
    pub destination: PathBuf,
    pub warnings: Vec<RenderWarning>,
}

/// A spot that produced no output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotFailure {
    pub output_id: String,
    /// Render stage that failed; `None` when writing failed
    pub stage: Option<Stage>,
    pub message: String,
}

/// Outcome of a generation run, one entry per spot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedPage>,
    pub failures: Vec<SpotFailure>,
    pub skipped: Vec<String>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.generated.iter().map(|page| page.warnings.len()).sum()
    }
}

/// Generate a page for every spot in `registry`
///
/// Each spot renders against the same read-only template. A spot whose render
/// or write fails is recorded in the report and nothing is written for it;
/// processing continues with the next spot unless `fail_fast` is set.
///
/// # Arguments
/// * `engine` - Substitution engine
/// * `template` - Template shared by every spot
/// * `registry` - Spots to generate, in order
/// * `writer` - Destination for rendered pages
/// * `options` - Run options
pub fn generate_all<W: PageWriter + ?Sized>(
    engine: &TemplateEngine,
    template: &Template,
    registry: &SpotRegistry,
    writer: &mut W,
    options: &GenerateOptions,
) -> GenerationReport {
    let mut report = GenerationReport::default();
    let mut spots = registry.iter();

    for spot in spots.by_ref() {
        let failure = match engine.render_page(template, spot) {
            Ok(page) => match writer.write_page(&page.output_id, &page.text) {
                Ok(destination) => {
                    log::info!("Generated '{}' -> {}", page.output_id, destination.display());
                    report.generated.push(GeneratedPage {
                        output_id: page.output_id,
                        destination,
                        warnings: page.warnings,
                    });
                    continue;
                }
                Err(e) => SpotFailure {
                    output_id: spot.output_id.clone(),
                    stage: None,
                    message: e.to_string(),
                },
            },
            Err(e) => SpotFailure {
                output_id: spot.output_id.clone(),
                stage: Some(e.stage()),
                message: e.to_string(),
            },
        };

        log::error!("Failed to generate '{}': {}", failure.output_id, failure.message);
        report.failures.push(failure);

        if options.fail_fast {
            break;
        }
    }

    report.skipped = spots.map(|spot| spot.output_id.clone()).collect();
    report
}
