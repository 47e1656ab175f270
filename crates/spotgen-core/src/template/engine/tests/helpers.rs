//! Shared test helpers for engine tests

use crate::registry::SpotRecord;
use crate::template::document::Template;
use spotgen_testkit::fixtures::{
    CONDITIONS_TEMPLATE, PLACEHOLDER_LOCATION, PLACEHOLDER_SUB_LOCATION, PLACEHOLDER_TITLE,
};

/// The fixture page with its generic placeholder values
pub(super) fn conditions() -> Template {
    Template::new(CONDITIONS_TEMPLATE)
}

pub(super) fn hossegor() -> SpotRecord {
    SpotRecord::new(
        "hossegor",
        "Ultra Forecast & Conditions | Hossegor",
        "Hossegor, France",
        "La Gravière",
    )
}

pub(super) fn biarritz() -> SpotRecord {
    SpotRecord::new(
        "biarritz",
        "Ultra Forecast & Conditions | Biarritz",
        "Biarritz, France",
        "Côte des Basques",
    )
}

/// A record whose fields equal the template's own values
pub(super) fn placeholder_record() -> SpotRecord {
    SpotRecord::new(
        "generic",
        PLACEHOLDER_TITLE,
        PLACEHOLDER_LOCATION,
        PLACEHOLDER_SUB_LOCATION,
    )
}
