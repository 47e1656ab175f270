//! Sub-location stage tests

use super::helpers::conditions;
use super::*;

#[test]
fn test_render_sub_location_replaces_label() {
    let template = conditions();
    let (result, warning) = render_sub_location(template.as_str(), "La Gravière");
    assert!(warning.is_none());
    assert!(result.contains("La Gravière • Last updated"));
    assert!(!result.contains("Banzai Pipeline"));
}

#[test]
fn test_render_sub_location_keeps_surrounding_whitespace() {
    let template = "<p class=\"meta\">\n        Banzai Pipeline • Last updated <span>06:00</span></p>";
    let (result, warning) = render_sub_location(template, "Les Estagnots");
    assert!(warning.is_none());
    assert_eq!(
        result,
        "<p class=\"meta\">\n        Les Estagnots • Last updated <span>06:00</span></p>"
    );
}

#[test]
fn test_render_sub_location_missing_anchor_is_lenient() {
    let template = "<p>\n  Banzai Pipeline • Updated hourly</p>";
    let (result, warning) = render_sub_location(template, "La Gravière");
    assert_eq!(result, template);
    assert_eq!(
        warning,
        Some(RenderWarning::SubLocationNotMatched {
            anchor: " • Last updated".to_string()
        })
    );
}

#[test]
fn test_render_sub_location_anchor_without_label() {
    // Markup directly before the anchor is not a label.
    let template = "<p><b>Pipeline</b> • Last updated</p>";
    let (result, warning) = render_sub_location(template, "La Gravière");
    assert_eq!(result, template);
    assert!(warning.is_some());
}

#[test]
fn test_render_sub_location_replaces_every_anchor() {
    let template = "<p>\n A • Last updated</p><p>\n B • Last updated</p>";
    let (result, warning) = render_sub_location(template, "Pointe de la Torche");
    assert!(warning.is_none());
    assert_eq!(
        result,
        "<p>\n Pointe de la Torche • Last updated</p><p>\n Pointe de la Torche • Last updated</p>"
    );
}

#[test]
fn test_render_sub_location_warning_display() {
    let warning = RenderWarning::SubLocationNotMatched {
        anchor: " • Last updated".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "no sub-location label found before '• Last updated'; text left unchanged"
    );
    assert_eq!(warning.stage(), Stage::SubLocation);
}
