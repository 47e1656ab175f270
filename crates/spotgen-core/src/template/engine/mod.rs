//! Template engine implementation

mod locate;
mod splice;

use crate::registry::SpotRecord;
use crate::template::document::{RenderedPage, Template};
use crate::template::error::{RenderError, RenderWarning, Stage};
use crate::template::signature::{Signatures, TagRegion};

use locate::{TagMatch, locate_anchor_labels, locate_tag_region};
use splice::splice;

pub use locate::Span;

/// Locate a tag region's inner span, attributing failures to `stage`
fn tag_span(template: &str, region: &TagRegion, stage: Stage) -> Result<Span, RenderError> {
    match locate_tag_region(template, region) {
        TagMatch::Found(span) => Ok(span),
        TagMatch::Missing | TagMatch::Unterminated => Err(RenderError::RegionNotFound { stage }),
        TagMatch::Ambiguous(count) => Err(RenderError::AmbiguousRegion { stage, count }),
    }
}

/// Replace the inner content of a tag region
fn replace_tag_region(
    template: &str,
    region: &TagRegion,
    replacement: &str,
    stage: Stage,
) -> Result<String, RenderError> {
    let span = tag_span(template, region, stage)?;
    Ok(splice(template, &[span], replacement))
}

/// Where each region sits in a template, without rendering anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInspection {
    pub title: Result<Span, RenderError>,
    pub location_heading: Result<Span, RenderError>,
    pub sub_location_labels: Vec<Span>,
}

impl TemplateInspection {
    /// True when every strict region is located
    pub fn is_renderable(&self) -> bool {
        self.title.is_ok() && self.location_heading.is_ok()
    }
}

/// Substitution engine
///
/// Holds only the signatures; every operation borrows the template text and
/// returns a new string, so one engine can serve any number of renders.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    signatures: Signatures,
}

impl TemplateEngine {
    /// Create an engine with the default signatures
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signatures(signatures: Signatures) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &Signatures {
        &self.signatures
    }

    /// Replace the inner content of the title region with `page_title`
    ///
    /// # Errors
    ///
    /// - `RegionNotFound` if the opener is absent or never closed
    /// - `AmbiguousRegion` if the opener appears more than once
    pub fn render_title(&self, template: &str, page_title: &str) -> Result<String, RenderError> {
        replace_tag_region(template, &self.signatures.title, page_title, Stage::Title)
    }

    /// Replace the inner content of the location heading with `location_label`
    ///
    /// The opening and closing tags are preserved verbatim.
    ///
    /// # Errors
    ///
    /// Same as [`TemplateEngine::render_title`], attributed to the heading stage.
    pub fn render_location_heading(
        &self,
        template: &str,
        location_label: &str,
    ) -> Result<String, RenderError> {
        replace_tag_region(
            template,
            &self.signatures.location_heading,
            location_label,
            Stage::LocationHeading,
        )
    }

    /// Replace every label preceding the anchor phrase with `sub_location_name`
    ///
    /// Lenient: when no label is found the text is returned unchanged along
    /// with a `SubLocationNotMatched` warning.
    pub fn render_sub_location(
        &self,
        template: &str,
        sub_location_name: &str,
    ) -> (String, Option<RenderWarning>) {
        let spans = locate_anchor_labels(template, &self.signatures.anchor);
        if spans.is_empty() {
            let warning = RenderWarning::SubLocationNotMatched {
                anchor: self.signatures.anchor.clone(),
            };
            return (template.to_string(), Some(warning));
        }
        (splice(template, &spans, sub_location_name), None)
    }

    /// Render one page: title, then location heading, then sub-location
    ///
    /// The first failing stage aborts the render. Nothing partial is returned.
    pub fn render_page(
        &self,
        template: &Template,
        record: &SpotRecord,
    ) -> Result<RenderedPage, RenderError> {
        log::debug!("Rendering '{}': {}", record.output_id, Stage::Title);
        let text = self.render_title(template.as_str(), &record.page_title)?;

        log::debug!("Rendering '{}': {}", record.output_id, Stage::LocationHeading);
        let text = self.render_location_heading(&text, &record.location_label)?;

        log::debug!("Rendering '{}': {}", record.output_id, Stage::SubLocation);
        let (text, warning) = self.render_sub_location(&text, &record.sub_location_name);
        if let Some(warning) = &warning {
            log::warn!("Spot '{}': {}", record.output_id, warning);
        }

        Ok(RenderedPage {
            output_id: record.output_id.clone(),
            text,
            warnings: warning.into_iter().collect(),
        })
    }

    /// Locate every region without rendering
    pub fn inspect(&self, template: &str) -> TemplateInspection {
        TemplateInspection {
            title: tag_span(template, &self.signatures.title, Stage::Title),
            location_heading: tag_span(
                template,
                &self.signatures.location_heading,
                Stage::LocationHeading,
            ),
            sub_location_labels: locate_anchor_labels(template, &self.signatures.anchor),
        }
    }
}

/// Convenience function for title substitution with default signatures
pub fn render_title(template: &str, page_title: &str) -> Result<String, RenderError> {
    TemplateEngine::new().render_title(template, page_title)
}

/// Convenience function for heading substitution with default signatures
pub fn render_location_heading(
    template: &str,
    location_label: &str,
) -> Result<String, RenderError> {
    TemplateEngine::new().render_location_heading(template, location_label)
}

/// Convenience function for sub-location substitution with default signatures
pub fn render_sub_location(
    template: &str,
    sub_location_name: &str,
) -> (String, Option<RenderWarning>) {
    TemplateEngine::new().render_sub_location(template, sub_location_name)
}

#[cfg(test)]
mod tests;
