//! Fixture templates
//!
//! `CONDITIONS_TEMPLATE` is a representative conditions page carrying one
//! title region, one location heading and one sub-location label.

use std::path::{Path, PathBuf};

/// Conditions page with generic placeholder values
pub const CONDITIONS_TEMPLATE: &str = include_str!("../fixtures/conditions.html");

/// Title text inside the fixture's `<title>` element
pub const PLACEHOLDER_TITLE: &str = "Ultra Forecast & Conditions | Generic";

/// Text inside the fixture's location heading
pub const PLACEHOLDER_LOCATION: &str = "North Shore, Oahu";

/// Label before the fixture's ` • Last updated` anchor
pub const PLACEHOLDER_SUB_LOCATION: &str = "Banzai Pipeline";

/// Write `contents` to `dir/name` and return the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture template");
    path
}

/// Write the conditions fixture to `dir/conditions.html`
pub fn write_conditions_template(dir: &Path) -> PathBuf {
    write_template(dir, "conditions.html", CONDITIONS_TEMPLATE)
}

/// Conditions fixture with the location heading's class list altered
///
/// The exact-signature match no longer applies, so rendering must fail at the
/// location heading stage.
pub fn conditions_without_heading() -> String {
    CONDITIONS_TEMPLATE.replace(
        "font-black tracking-tight flex items-center",
        "font-extrabold tracking-tight flex items-center",
    )
}

/// Conditions fixture without the ` • Last updated` anchor
pub fn conditions_without_anchor() -> String {
    CONDITIONS_TEMPLATE.replace(" • Last updated", " • Refreshed")
}
