//! Template document and rendered output

use crate::error::{Result, SpotgenError};
use crate::template::error::RenderWarning;
use std::path::Path;

/// Immutable template text
///
/// Loaded once and lent read-only to every render. Renders always produce a
/// new `String`; the template itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a UTF-8 template from disk
    ///
    /// The bytes are kept exactly as read (including a leading BOM, if any),
    /// so an unmodified render writes back an identical file.
    ///
    /// # Errors
    ///
    /// - `TemplateReadError` if the file cannot be read
    /// - `TemplateEncodingInvalid` if the content is not UTF-8
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SpotgenError::TemplateReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| SpotgenError::TemplateEncodingInvalid {
            path: path.to_path_buf(),
        })?;

        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Output of rendering one spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub output_id: String,
    pub text: String,
    pub warnings: Vec<RenderWarning>,
}
