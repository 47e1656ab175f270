//! Template rendering errors and warnings

use serde::Serialize;
use std::fmt;

/// Rendering stage, in the fixed order the engine applies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Title,
    LocationHeading,
    SubLocation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Title => "title",
            Stage::LocationHeading => "location heading",
            Stage::SubLocation => "sub-location",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal rendering errors for a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Opening marker absent, or present without a closing marker
    RegionNotFound {
        /// Stage whose region could not be located
        stage: Stage,
    },

    /// Opening marker appears more than once
    AmbiguousRegion {
        /// Stage whose region could not be disambiguated
        stage: Stage,
        /// Number of opening markers found
        count: usize,
    },
}

impl RenderError {
    /// Stage the failure is attributed to
    pub fn stage(&self) -> Stage {
        match self {
            RenderError::RegionNotFound { stage } => *stage,
            RenderError::AmbiguousRegion { stage, .. } => *stage,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RegionNotFound { stage } => {
                write!(f, "{} region not found in template", stage)
            }
            RenderError::AmbiguousRegion { stage, count } => {
                write!(
                    f,
                    "{} region is ambiguous: opening marker appears {} times",
                    stage, count
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Non-fatal conditions observed while rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderWarning {
    /// No label was found before the anchor phrase; the text is unchanged
    SubLocationNotMatched { anchor: String },
}

impl RenderWarning {
    pub fn stage(&self) -> Stage {
        match self {
            RenderWarning::SubLocationNotMatched { .. } => Stage::SubLocation,
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::SubLocationNotMatched { anchor } => {
                write!(
                    f,
                    "no sub-location label found before '{}'; text left unchanged",
                    anchor.trim()
                )
            }
        }
    }
}
