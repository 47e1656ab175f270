//! Whole-page rendering tests

use super::helpers::{biarritz, conditions, hossegor, placeholder_record};
use super::*;

#[test]
fn test_render_page_hossegor_scenario() {
    let engine = TemplateEngine::new();
    let page = engine.render_page(&conditions(), &hossegor()).unwrap();

    assert_eq!(page.output_id, "hossegor");
    assert!(page.warnings.is_empty());
    assert!(
        page.text
            .contains("<title>Ultra Forecast & Conditions | Hossegor</title>")
    );
    assert!(page.text.contains("items-center\">Hossegor, France</h2>"));
    assert!(page.text.contains("La Gravière • Last updated"));
}

#[test]
fn test_render_page_placeholder_round_trip() {
    let engine = TemplateEngine::new();
    let template = conditions();
    let page = engine.render_page(&template, &placeholder_record()).unwrap();
    assert_eq!(page.text, template.as_str());
    assert!(page.warnings.is_empty());
}

#[test]
fn test_render_page_order_independent() {
    let engine = TemplateEngine::new();
    let template = conditions();

    let _ = engine.render_page(&template, &hossegor()).unwrap();
    let after_hossegor = engine.render_page(&template, &biarritz()).unwrap();

    let fresh = engine.render_page(&template, &biarritz()).unwrap();
    let _ = engine.render_page(&template, &hossegor()).unwrap();

    assert_eq!(after_hossegor, fresh);
    assert!(!after_hossegor.text.contains("Hossegor"));
    assert_eq!(template, conditions());
}

#[test]
fn test_render_page_fails_at_first_broken_stage() {
    let engine = TemplateEngine::new();
    let template = Template::new("<html><title>Generic</title><body></body></html>");
    let result = engine.render_page(&template, &hossegor());
    assert_eq!(
        result,
        Err(RenderError::RegionNotFound {
            stage: Stage::LocationHeading
        })
    );
}

#[test]
fn test_render_page_title_checked_before_heading() {
    let engine = TemplateEngine::new();
    let template = Template::new("<html><body>nothing to see</body></html>");
    let err = engine.render_page(&template, &hossegor()).unwrap_err();
    assert_eq!(err.stage(), Stage::Title);
}

#[test]
fn test_render_page_missing_anchor_warns() {
    let engine = TemplateEngine::new();
    let text = conditions().as_str().replace(" • Last updated", " • Refreshed");
    let template = Template::new(text);

    let page = engine.render_page(&template, &hossegor()).unwrap();
    assert_eq!(page.warnings.len(), 1);
    assert_eq!(page.warnings[0].stage(), Stage::SubLocation);
    assert!(page.text.contains("Banzai Pipeline • Refreshed"));
    assert!(page.text.contains("<title>Ultra Forecast & Conditions | Hossegor</title>"));
}

#[test]
fn test_inspect_fixture() {
    let engine = TemplateEngine::new();
    let template = conditions();
    let inspection = engine.inspect(template.as_str());

    assert!(inspection.is_renderable());
    let title = inspection.title.unwrap();
    assert_eq!(
        title.slice(template.as_str()),
        "Ultra Forecast & Conditions | Generic"
    );
    let heading = inspection.location_heading.unwrap();
    assert_eq!(heading.slice(template.as_str()), "North Shore, Oahu");
    assert_eq!(inspection.sub_location_labels.len(), 1);
    assert_eq!(
        inspection.sub_location_labels[0].slice(template.as_str()),
        "Banzai Pipeline"
    );
}

#[test]
fn test_inspect_reports_every_broken_region() {
    let engine = TemplateEngine::new();
    let inspection = engine.inspect("<title>A</title><title>B</title>");
    assert!(!inspection.is_renderable());
    assert_eq!(
        inspection.title,
        Err(RenderError::AmbiguousRegion {
            stage: Stage::Title,
            count: 2
        })
    );
    assert_eq!(
        inspection.location_heading,
        Err(RenderError::RegionNotFound {
            stage: Stage::LocationHeading
        })
    );
    assert!(inspection.sub_location_labels.is_empty());
}
