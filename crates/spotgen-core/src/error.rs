use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotgenError {
    // Template errors
    #[error("TEMPLATE_READ_ERROR: failed to read template '{path}': {source}")]
    TemplateReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TEMPLATE_ENCODING_INVALID: template '{path}' is not valid UTF-8")]
    TemplateEncodingInvalid { path: PathBuf },

    // Registry errors
    #[error("REGISTRY_EMPTY: no spots configured")]
    RegistryEmpty,

    #[error("REGISTRY_DUPLICATE_ID: output id '{0}' appears more than once")]
    RegistryDuplicateId(String),

    #[error("REGISTRY_INVALID_FIELD: spot '{output_id}' field '{field}': {reason}")]
    RegistryInvalidField {
        output_id: String,
        field: &'static str,
        reason: String,
    },

    #[error("SPOT_NOT_FOUND: spot '{0}' not found in registry")]
    SpotNotFound(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Output errors
    #[error("WRITE_FAILED: could not write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<toml::de::Error> for SpotgenError {
    fn from(err: toml::de::Error) -> Self {
        SpotgenError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpotgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = SpotgenError::RegistryDuplicateId("biarritz".to_string());
        assert_eq!(
            err.to_string(),
            "REGISTRY_DUPLICATE_ID: output id 'biarritz' appears more than once"
        );
    }
}
