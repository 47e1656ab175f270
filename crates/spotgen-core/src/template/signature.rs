//! Region signatures
//!
//! A signature is matched byte-for-byte. Any drift in the template's markup
//! (an added class, reordered attributes) breaks the match, which surfaces as
//! `RegionNotFound` rather than a silently unmodified page.

use crate::error::{Result, SpotgenError};
use serde::{Deserialize, Serialize};

/// Opening tag of the location heading, including its exact class list
pub const LOCATION_HEADING_OPEN: &str =
    r#"<h2 class="text-white text-3xl md:text-4xl font-black tracking-tight flex items-center">"#;

/// Anchor phrase that follows the sub-location label
pub const LAST_UPDATED_ANCHOR: &str = " • Last updated";

/// A region delimited by an exact opening marker and the nearest closing marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRegion {
    pub open: String,
    pub close: String,
}

impl TagRegion {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    fn validate(&self, field: &str) -> Result<()> {
        if self.open.is_empty() {
            return Err(SpotgenError::ConfigInvalidValue {
                field: format!("{}.open", field),
                reason: "opening marker must not be empty".to_string(),
            });
        }
        if self.close.is_empty() {
            return Err(SpotgenError::ConfigInvalidValue {
                field: format!("{}.close", field),
                reason: "closing marker must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The full set of signatures the engine locates regions with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signatures {
    pub anchor: String,
    pub title: TagRegion,
    pub location_heading: TagRegion,
}

impl Default for Signatures {
    fn default() -> Self {
        Self {
            anchor: LAST_UPDATED_ANCHOR.to_string(),
            title: TagRegion::new("<title>", "</title>"),
            location_heading: TagRegion::new(LOCATION_HEADING_OPEN, "</h2>"),
        }
    }
}

impl Signatures {
    /// Reject empty markers (an empty marker would match at every offset)
    pub fn validate(&self) -> Result<()> {
        self.title.validate("signatures.title")?;
        self.location_heading
            .validate("signatures.location_heading")?;
        if self.anchor.is_empty() {
            return Err(SpotgenError::ConfigInvalidValue {
                field: "signatures.anchor".to_string(),
                reason: "anchor phrase must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
